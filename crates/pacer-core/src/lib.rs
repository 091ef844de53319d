// ABOUTME: Core types and constants for the pacer fitness metrics engine
// ABOUTME: Foundation crate with error handling, workout models, and unit constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacer Fitness

#![deny(unsafe_code)]

//! # Pacer Core
//!
//! Foundation crate providing shared types and constants for the pacer
//! fitness metrics engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Shared unit-conversion constants
//! - **models**: Core data models (`WorkoutType`, `WorkoutSummary`)

/// Unified error handling system with standard error codes
pub mod errors;

/// Shared unit-conversion constants
pub mod constants;

/// Core data models (`WorkoutType`, `WorkoutSummary`)
pub mod models;
