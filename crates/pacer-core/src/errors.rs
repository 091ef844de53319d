// ABOUTME: Unified error handling for the pacer workspace
// ABOUTME: Defines standard error codes, the AppError type, and the AppResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacer Fitness

//! # Unified Error Handling
//!
//! This module provides the centralized error handling system for the pacer
//! workspace. It defines standard error codes and a single error type so
//! failures look the same whether they surface from session dispatch,
//! package construction, or summary formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Session code not present in the dispatch mapping
    #[serde(rename = "UNKNOWN_WORKOUT_TYPE")]
    UnknownWorkoutType,
    /// Sensor package does not bind to the variant's readings
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// Operation invoked on the base workout abstraction instead of a variant
    #[serde(rename = "UNIMPLEMENTED_OPERATION")]
    UnimplementedOperation,
    /// Summary serialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::UnknownWorkoutType => "The session code does not match any known workout type",
            Self::InvalidInput => "The provided input is invalid",
            Self::UnimplementedOperation => {
                "The operation is not implemented on the base workout abstraction"
            }
            Self::SerializationError => "Data serialization failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Unknown workout session code
    #[must_use]
    pub fn unknown_workout_type(code: impl Into<String>) -> Self {
        let code = code.into();
        Self::new(
            ErrorCode::UnknownWorkoutType,
            format!("session code '{code}' is not in the workout mapping"),
        )
    }

    /// Invalid input data
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Operation left unimplemented by the base abstraction
    #[must_use]
    pub fn unimplemented(operation: impl Into<String>) -> Self {
        let operation = operation.into();
        Self::new(
            ErrorCode::UnimplementedOperation,
            format!("'{operation}' must be overridden by a workout variant"),
        )
    }

    /// Serialization failure
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_code_description_and_message() {
        let error = AppError::unknown_workout_type("XYZ");
        let rendered = error.to_string();
        assert!(rendered.contains("known workout type"));
        assert!(rendered.contains("XYZ"));
    }

    #[test]
    fn constructors_set_expected_codes() {
        assert_eq!(
            AppError::invalid_input("bad package").code,
            ErrorCode::InvalidInput
        );
        assert_eq!(
            AppError::unimplemented("calories_kcal").code,
            ErrorCode::UnimplementedOperation
        );
    }
}
