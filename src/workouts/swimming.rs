// ABOUTME: Swimming workout variant
// ABOUTME: Mean speed from pool geometry; calorie model from speed, weight, and duration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacer Fitness

use pacer_core::constants::units::METERS_PER_KILOMETER;
use pacer_core::errors::AppResult;
use pacer_core::models::WorkoutType;

use super::{arity_error, bind_action_count, Workout};

/// Swimming workout over one sensor package.
///
/// Carries the pool geometry: mean speed comes from pool length times lap
/// count, not from the stroke-length distance.
#[derive(Debug, Clone)]
pub struct Swimming {
    action: u32,
    duration_hours: f64,
    weight_kg: f64,
    pool_length_m: f64,
    lap_count: f64,
}

impl Swimming {
    /// Mean-speed shift of the swimming calorie model
    const MEAN_SPEED_SHIFT: f64 = 1.1;
    /// Weight multiplier of the swimming calorie model
    const WEIGHT_FACTOR: f64 = 2.0;
    /// Distance covered by one stroke, in meters
    const STROKE_LENGTH_M: f64 = 1.38;

    /// Readings a swimming package binds: action count, duration, weight,
    /// pool length, lap count.
    const ARG_COUNT: usize = 5;

    /// Create a swimming workout from raw readings.
    #[must_use]
    pub const fn new(
        action: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        lap_count: f64,
    ) -> Self {
        Self {
            action,
            duration_hours,
            weight_kg,
            pool_length_m,
            lap_count,
        }
    }

    /// Bind a flat sensor argument list positionally.
    ///
    /// # Errors
    /// Returns `ErrorCode::InvalidInput` when the arity is wrong or the
    /// action count is not a whole non-negative number.
    pub fn from_args(data: &[f64]) -> AppResult<Self> {
        match *data {
            [action, duration_hours, weight_kg, pool_length_m, lap_count] => Ok(Self::new(
                bind_action_count(action)?,
                duration_hours,
                weight_kg,
                pool_length_m,
                lap_count,
            )),
            _ => Err(arity_error(
                WorkoutType::Swimming,
                Self::ARG_COUNT,
                data.len(),
            )),
        }
    }
}

impl Workout for Swimming {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Swimming
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

    fn step_length_m(&self) -> f64 {
        Self::STROKE_LENGTH_M
    }

    // Pool geometry, not stroke distance: length x laps over the session.
    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * self.lap_count / METERS_PER_KILOMETER / self.duration_hours
    }

    fn calories_kcal(&self) -> AppResult<f64> {
        Ok((self.mean_speed_kmh() + Self::MEAN_SPEED_SHIFT)
            * Self::WEIGHT_FACTOR
            * self.weight_kg
            * self.duration_hours)
    }
}
