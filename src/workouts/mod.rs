// ABOUTME: Workout model with the base abstraction and per-variant implementations
// ABOUTME: Computes distance, mean speed, and calories from one raw sensor package
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacer Fitness

//! Workout model.
//!
//! A workout wraps one sensor package: an action count (steps or strokes),
//! the session duration in hours, the athlete's weight, and any
//! variant-specific readings. Distance and mean speed default to the
//! step-length model; every variant ships its own calorie formula.

mod registry;
mod running;
mod swimming;
mod walking;

pub use registry::build_workout;
pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use pacer_core::constants::units::METERS_PER_KILOMETER;
use pacer_core::errors::{AppError, AppResult};
use pacer_core::models::{WorkoutSummary, WorkoutType};

/// Step length assumed for one action of running or walking, in meters.
const DEFAULT_STEP_LENGTH_M: f64 = 0.65;

/// Trait for workout computations over one sensor package.
///
/// Implementations provide the raw readings; distance and mean speed carry
/// step-length defaults, while the calorie model must be overridden by every
/// variant.
pub trait Workout: std::fmt::Debug {
    /// Workout variant this computation belongs to.
    fn workout_type(&self) -> WorkoutType;

    /// Raw action count from the sensor (steps or strokes).
    fn action_count(&self) -> u32;

    /// Session duration in hours.
    fn duration_hours(&self) -> f64;

    /// Athlete weight in kilograms.
    fn weight_kg(&self) -> f64;

    /// Distance covered by one action, in meters.
    fn step_length_m(&self) -> f64 {
        DEFAULT_STEP_LENGTH_M
    }

    /// Covered distance in kilometers.
    fn distance_km(&self) -> f64 {
        f64::from(self.action_count()) * self.step_length_m() / METERS_PER_KILOMETER
    }

    /// Mean speed over the session in km/h.
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration_hours()
    }

    /// Energy burned over the session in kilocalories.
    ///
    /// # Errors
    /// The base abstraction has no calorie model; the default returns
    /// `ErrorCode::UnimplementedOperation`. Every shipped variant overrides
    /// this method.
    fn calories_kcal(&self) -> AppResult<f64> {
        Err(AppError::unimplemented("calories_kcal"))
    }

    /// Build the computed summary for handoff to the formatter.
    ///
    /// # Errors
    /// Propagates the calorie-model error from [`Workout::calories_kcal`].
    fn summary(&self) -> AppResult<WorkoutSummary> {
        Ok(WorkoutSummary {
            workout_type: self.workout_type(),
            duration_hours: self.duration_hours(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.calories_kcal()?,
        })
    }
}

/// Error for a package whose argument list does not match the variant arity.
fn arity_error(workout_type: WorkoutType, expected: usize, got: usize) -> AppError {
    AppError::invalid_input(format!(
        "{} package binds {expected} readings, got {got}",
        workout_type.display_name()
    ))
}

/// Bind the leading action-count reading of a package.
///
/// Packages arrive as flat `f64` lists; the action count is the one reading
/// that must be a whole non-negative number.
fn bind_action_count(raw: f64) -> AppResult<u32> {
    if raw < 0.0 || raw > f64::from(u32::MAX) || raw.fract().abs() > f64::EPSILON {
        return Err(AppError::invalid_input(format!(
            "action count {raw} is not a whole non-negative number"
        )));
    }
    Ok(raw as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pacer_core::errors::ErrorCode;

    #[test]
    fn action_count_binding_rejects_fractional_and_negative() {
        assert!(bind_action_count(720.0).is_ok());
        for raw in [-1.0, 0.5, 9_000.25] {
            let result = bind_action_count(raw);
            assert!(matches!(result, Err(e) if e.code == ErrorCode::InvalidInput));
        }
    }
}
