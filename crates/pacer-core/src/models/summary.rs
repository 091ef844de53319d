// ABOUTME: Computed-metrics record for one completed workout
// ABOUTME: The immutable handoff between the workout model and the formatter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacer Fitness

use serde::{Deserialize, Serialize};

use super::WorkoutType;

/// Computed summary of a completed workout
///
/// All values are derived deterministically from one sensor package plus the
/// variant's constants; nothing here is mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSummary {
    /// Workout variant the readings came from
    pub workout_type: WorkoutType,
    /// Session duration in hours
    pub duration_hours: f64,
    /// Covered distance in kilometers
    pub distance_km: f64,
    /// Mean speed over the session in km/h
    pub mean_speed_kmh: f64,
    /// Energy burned over the session in kilocalories
    pub calories_kcal: f64,
}
