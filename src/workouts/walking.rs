// ABOUTME: Sports-walking workout variant
// ABOUTME: Calorie model combining a weight term with a speed-pressure-over-height term
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacer Fitness

use pacer_core::constants::units::{CENTIMETERS_PER_METER, KMH_TO_MS, MINUTES_PER_HOUR};
use pacer_core::errors::AppResult;
use pacer_core::models::WorkoutType;

use super::{arity_error, bind_action_count, Workout};

/// Sports-walking workout over one sensor package.
///
/// Carries the athlete's height: the calorie model scales a squared
/// mean-speed term by it.
#[derive(Debug, Clone)]
pub struct SportsWalking {
    action: u32,
    duration_hours: f64,
    weight_kg: f64,
    height_cm: f64,
}

impl SportsWalking {
    /// Coefficient of the weight term in the walking calorie model
    const WEIGHT_FACTOR: f64 = 0.035;
    /// Coefficient of the speed-over-height term in the walking calorie model
    const SPEED_FACTOR: f64 = 0.029;

    /// Readings a walking package binds: action count, duration, weight, height.
    const ARG_COUNT: usize = 4;

    /// Create a sports-walking workout from raw readings.
    #[must_use]
    pub const fn new(action: u32, duration_hours: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            action,
            duration_hours,
            weight_kg,
            height_cm,
        }
    }

    /// Bind a flat sensor argument list positionally.
    ///
    /// # Errors
    /// Returns `ErrorCode::InvalidInput` when the arity is wrong or the
    /// action count is not a whole non-negative number.
    pub fn from_args(data: &[f64]) -> AppResult<Self> {
        match *data {
            [action, duration_hours, weight_kg, height_cm] => Ok(Self::new(
                bind_action_count(action)?,
                duration_hours,
                weight_kg,
                height_cm,
            )),
            _ => Err(arity_error(
                WorkoutType::SportsWalking,
                Self::ARG_COUNT,
                data.len(),
            )),
        }
    }
}

impl Workout for SportsWalking {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::SportsWalking
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
        let mean_speed_ms = self.mean_speed_kmh() * KMH_TO_MS;
        let height_m = self.height_cm / CENTIMETERS_PER_METER;
        let minutes = self.duration_hours * MINUTES_PER_HOUR;
        let speed_term = mean_speed_ms.powi(2) / height_m * Self::SPEED_FACTOR * self.weight_kg;
        Ok(Self::WEIGHT_FACTOR.mul_add(self.weight_kg, speed_term) * minutes)
    }
}
