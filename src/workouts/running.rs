// ABOUTME: Running workout variant
// ABOUTME: Calorie model driven by mean speed and athlete weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacer Fitness

use pacer_core::constants::units::{METERS_PER_KILOMETER, MINUTES_PER_HOUR};
use pacer_core::errors::AppResult;
use pacer_core::models::WorkoutType;

use super::{arity_error, bind_action_count, Workout};

/// Running workout over one sensor package.
///
/// Calorie model: `(multiplier x mean_speed + shift) x weight / 1000 x minutes`.
#[derive(Debug, Clone)]
pub struct Running {
    action: u32,
    duration_hours: f64,
    weight_kg: f64,
}

impl Running {
    /// Mean-speed multiplier of the running calorie model
    const MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    /// Mean-speed shift of the running calorie model
    const MEAN_SPEED_SHIFT: f64 = 1.79;

    /// Readings a running package binds: action count, duration, weight.
    const ARG_COUNT: usize = 3;

    /// Create a running workout from raw readings.
    #[must_use]
    pub const fn new(action: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action,
            duration_hours,
            weight_kg,
        }
    }

    /// Bind a flat sensor argument list positionally.
    ///
    /// # Errors
    /// Returns `ErrorCode::InvalidInput` when the arity is wrong or the
    /// action count is not a whole non-negative number.
    pub fn from_args(data: &[f64]) -> AppResult<Self> {
        match *data {
            [action, duration_hours, weight_kg] => Ok(Self::new(
                bind_action_count(action)?,
                duration_hours,
                weight_kg,
            )),
            _ => Err(arity_error(
                WorkoutType::Running,
                Self::ARG_COUNT,
                data.len(),
            )),
        }
    }
}

impl Workout for Running {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Running
    }

    fn action_count(&self) -> u32 {
        self.action
    }

    fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn calories_kcal(&self) -> AppResult<f64> {
        let minutes = self.duration_hours * MINUTES_PER_HOUR;
        Ok(
            Self::MEAN_SPEED_MULTIPLIER.mul_add(self.mean_speed_kmh(), Self::MEAN_SPEED_SHIFT)
                * self.weight_kg
                / METERS_PER_KILOMETER
                * minutes,
        )
    }
}
