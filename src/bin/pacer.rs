// ABOUTME: Driver binary for the pacer fitness metrics engine
// ABOUTME: Processes the fixed sensor package list and prints one summary line each
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacer Fitness

//! Driver for the pacer fitness metrics engine.
//!
//! Dispatches each sensor package in the fixed input list to its workout
//! variant, computes the derived metrics, and prints one report line per
//! workout to stdout. An unrecognized session code aborts the remaining
//! run; the error propagates out of `main`.
//!
//! Usage:
//! ```bash
//! cargo run --bin pacer
//!
//! # With diagnostic logging
//! RUST_LOG=debug cargo run --bin pacer
//! ```

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pacer::formatters::format_message;
use pacer::workouts::build_workout;

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries only the report lines.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let packages: &[(&str, &[f64])] = &[
        ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        ("RUN", &[15_000.0, 1.0, 75.0]),
        ("WLK", &[9_000.0, 1.0, 75.0, 180.0]),
    ];

    info!(count = packages.len(), "processing sensor packages");

    for &(code, data) in packages {
        let workout = build_workout(code, data)?;
        let summary = workout.summary()?;
        println!("{}", format_message(&summary));
    }

    Ok(())
}
