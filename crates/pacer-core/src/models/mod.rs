// ABOUTME: Core data models for the pacer fitness metrics engine
// ABOUTME: Re-exports WorkoutType and WorkoutSummary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacer Fitness

//! # Data Models
//!
//! Core data structures shared across the workspace.
//!
//! - `WorkoutType`: enumeration of the supported workout variants
//! - `WorkoutSummary`: the computed-metrics record handed to the formatter

// Domain modules
mod sport;
mod summary;

// Re-export all public types for convenience
pub use sport::WorkoutType;
pub use summary::WorkoutSummary;
