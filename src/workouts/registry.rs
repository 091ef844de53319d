// ABOUTME: Session-code dispatch from raw sensor packages to workout variants
// ABOUTME: Resolves the code, then binds the flat argument list positionally
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacer Fitness

use pacer_core::errors::AppResult;
use pacer_core::models::WorkoutType;
use tracing::debug;

use super::{Running, SportsWalking, Swimming, Workout};

/// Construct the workout variant for a sensor package.
///
/// Resolves `code` through the fixed session mapping (`"SWM"`, `"RUN"`,
/// `"WLK"`) and binds `data` positionally to the variant's readings.
///
/// # Errors
/// Returns `ErrorCode::UnknownWorkoutType` for an unmapped code and
/// `ErrorCode::InvalidInput` when the argument list does not bind.
pub fn build_workout(code: &str, data: &[f64]) -> AppResult<Box<dyn Workout>> {
    let workout_type = WorkoutType::from_session_code(code)?;
    debug!(code, readings = data.len(), "dispatching sensor package");
    Ok(match workout_type {
        WorkoutType::Swimming => Box::new(Swimming::from_args(data)?),
        WorkoutType::Running => Box::new(Running::from_args(data)?),
        WorkoutType::SportsWalking => Box::new(SportsWalking::from_args(data)?),
    })
}
