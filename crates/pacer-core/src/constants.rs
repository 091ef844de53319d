// ABOUTME: Shared unit-conversion constants for the metric formulas
// ABOUTME: Pure data constants, grouped by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacer Fitness

//! Constants module
//!
//! Unit conversions used by the workout metric formulas. Per-variant calorie
//! coefficients live next to the variant that owns them; only conversions
//! shared across variants belong here.

/// Unit conversion and measurement constants
pub mod units {
    /// Meters per kilometer
    pub const METERS_PER_KILOMETER: f64 = 1000.0;
    /// Minutes per hour
    pub const MINUTES_PER_HOUR: f64 = 60.0;
    /// Conversion factor from km/h to m/s
    pub const KMH_TO_MS: f64 = 0.278;
    /// Centimeters per meter
    pub const CENTIMETERS_PER_METER: f64 = 100.0;
}
