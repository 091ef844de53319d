// ABOUTME: Integration tests for summary formatting
// ABOUTME: Verifies the fixed text template, 3-decimal rendering, and the JSON supplement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacer Fitness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pacer::formatters::{format_message, format_output, OutputFormat};
use pacer::models::WorkoutSummary;
use pacer::workouts::{build_workout, Running, Swimming, Workout};

#[test]
fn running_report_line_matches_template() {
    let summary = Running::new(15_000, 1.0, 75.0).summary().unwrap();
    assert_eq!(
        format_message(&summary),
        "Training type: running; Duration: 1.000 h; Distance: 9.750 km; \
         Mean speed: 9.750 km/h; Calories burned: 797.805."
    );
}

#[test]
fn swimming_report_line_matches_template() {
    let summary = Swimming::new(720, 1.0, 80.0, 25.0, 40.0).summary().unwrap();
    assert_eq!(
        format_message(&summary),
        "Training type: swimming; Duration: 1.000 h; Distance: 0.994 km; \
         Mean speed: 1.000 km/h; Calories burned: 336.000."
    );
}

#[test]
fn numbers_always_render_three_decimals() {
    // Whole-number inputs still render with a full fractional part.
    let summary = WorkoutSummary {
        workout_type: pacer::models::WorkoutType::Running,
        duration_hours: 1.0,
        distance_km: 2.0,
        mean_speed_kmh: 2.0,
        calories_kcal: 100.0,
    };
    let line = format_message(&summary);
    assert!(line.contains("Duration: 1.000 h"));
    assert!(line.contains("Distance: 2.000 km"));
    assert!(line.contains("Calories burned: 100.000."));

    // High-precision inputs are truncated to three decimals, not expanded.
    let summary = WorkoutSummary {
        duration_hours: 0.123_456,
        ..summary
    };
    assert!(format_message(&summary).contains("Duration: 0.123 h"));
}

#[test]
fn text_format_is_the_default_output() {
    let summary = Running::new(15_000, 1.0, 75.0).summary().unwrap();
    let text = format_output(&summary, OutputFormat::default()).unwrap();
    assert_eq!(text, format_message(&summary));
}

#[test]
fn json_output_carries_summary_fields() {
    let workout = build_workout("WLK", &[9_000.0, 1.0, 75.0, 180.0]).unwrap();
    let summary = workout.summary().unwrap();

    let rendered = format_output(&summary, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(value["workout_type"], "sports_walking");
    assert!((value["distance_km"].as_f64().unwrap() - 5.85).abs() < 1e-9);
    assert!((value["duration_hours"].as_f64().unwrap() - 1.0).abs() < 1e-9);
    assert!(value["calories_kcal"].as_f64().is_some());
}

#[test]
fn format_selector_parses_parameters() {
    assert_eq!(OutputFormat::from_str_param("json"), OutputFormat::Json);
    assert_eq!(OutputFormat::from_str_param("JSON"), OutputFormat::Json);
    assert_eq!(OutputFormat::from_str_param("text"), OutputFormat::Text);
    assert_eq!(OutputFormat::from_str_param("yaml"), OutputFormat::Text);
    assert_eq!(OutputFormat::Json.as_str(), "json");
}
