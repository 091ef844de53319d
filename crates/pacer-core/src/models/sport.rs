// ABOUTME: Workout type enumeration for sensor packages
// ABOUTME: Defines the supported workout variants with parsing and display implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacer Fitness

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{AppError, AppResult};

/// Enumeration of supported workout types
///
/// Covers the workout variants the sensor firmware reports. The session code
/// is the three-letter tag the firmware attaches to each package; codes are
/// matched exactly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    /// Running workout
    Running,
    /// Race-walking workout
    SportsWalking,
    /// Pool swimming workout
    Swimming,
}

impl WorkoutType {
    /// Resolve a `WorkoutType` from a sensor session code
    ///
    /// # Errors
    /// Returns `ErrorCode::UnknownWorkoutType` when the code is not one of
    /// `"SWM"`, `"RUN"`, `"WLK"`.
    pub fn from_session_code(code: &str) -> AppResult<Self> {
        match code {
            "SWM" => Ok(Self::Swimming),
            "RUN" => Ok(Self::Running),
            "WLK" => Ok(Self::SportsWalking),
            other => Err(AppError::unknown_workout_type(other)),
        }
    }

    /// Get the session code for this workout type
    #[must_use]
    pub const fn as_code(self) -> &'static str {
        match self {
            Self::Swimming => "SWM",
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
        }
    }

    /// Get the human-readable name for this workout type
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::SportsWalking => "sports walking",
            Self::Swimming => "swimming",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for WorkoutType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_session_code(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn session_codes_round_trip() {
        for code in ["SWM", "RUN", "WLK"] {
            let workout_type = WorkoutType::from_session_code(code).ok();
            assert_eq!(workout_type.map(WorkoutType::as_code), Some(code));
        }
    }

    #[test]
    fn codes_are_matched_exactly() {
        let result = WorkoutType::from_session_code("swm");
        assert!(matches!(result, Err(e) if e.code == ErrorCode::UnknownWorkoutType));
    }
}
