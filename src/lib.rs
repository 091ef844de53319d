// ABOUTME: Main library entry point for the pacer fitness metrics engine
// ABOUTME: Exposes the workout model, session dispatch, and summary formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacer Fitness

#![deny(unsafe_code)]

//! # Pacer
//!
//! A fitness metrics engine that turns raw sensor packages into workout
//! summaries: distance, mean speed, and calories burned, rendered as a
//! fixed-template report line.
//!
//! ## Architecture
//!
//! The engine follows a modular architecture:
//! - **Workouts**: the base abstraction and its per-variant calorie models
//! - **Formatters**: text and JSON rendering of computed summaries
//! - **Core** (`pacer-core`): error system, workout-type model, summary
//!   record, and unit constants
//!
//! ## Example Usage
//!
//! ```rust
//! use pacer::formatters::format_message;
//! use pacer::workouts::{build_workout, Workout};
//!
//! # fn main() -> pacer::errors::AppResult<()> {
//! let workout = build_workout("RUN", &[15_000.0, 1.0, 75.0])?;
//! let summary = workout.summary()?;
//! println!("{}", format_message(&summary));
//! # Ok(())
//! # }
//! ```

pub use pacer_core::{constants, errors, models};

/// Text and JSON rendering of computed workout summaries
pub mod formatters;

/// Workout model: base abstraction, variants, and session dispatch
pub mod workouts;
