// ABOUTME: Output formatting for computed workout summaries
// ABOUTME: Renders the fixed text template and an optional JSON serialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacer Fitness

//! Output Format Abstraction Layer
//!
//! Rendering of [`WorkoutSummary`] records. The driver prints the fixed
//! text template; JSON is available for machine consumers of the same
//! record.
//!
//! ## Supported Formats
//!
//! - **Text**: the fixed report template, one line per workout (default)
//! - **JSON**: `serde_json` rendering of the summary record

use std::fmt;

use pacer_core::errors::{AppError, AppResult};
use pacer_core::models::WorkoutSummary;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fixed-template report text (default)
    #[default]
    Text,
    /// JSON rendering of the summary record
    Json,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Text` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render the fixed-template report line for a workout summary.
///
/// Every numeric field is rendered to exactly three decimal places,
/// regardless of input precision.
#[must_use]
pub fn format_message(summary: &WorkoutSummary) -> String {
    format!(
        "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; Mean speed: {:.3} km/h; Calories burned: {:.3}.",
        summary.workout_type.display_name(),
        summary.duration_hours,
        summary.distance_km,
        summary.mean_speed_kmh,
        summary.calories_kcal,
    )
}

/// Format a workout summary to the selected output format.
///
/// # Errors
/// Returns `ErrorCode::SerializationError` when JSON serialization fails.
pub fn format_output(summary: &WorkoutSummary, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(format_message(summary)),
        OutputFormat::Json => serde_json::to_string(summary)
            .map_err(|e| AppError::serialization(e.to_string()).with_source(e)),
    }
}
