// ABOUTME: Integration tests for session-code dispatch and positional package binding
// ABOUTME: Covers the fixed code mapping, unknown codes, and malformed argument lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacer Fitness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pacer::errors::ErrorCode;
use pacer::models::WorkoutType;
use pacer::workouts::{build_workout, Workout};

#[test]
fn dispatch_resolves_all_session_codes() {
    let cases: &[(&str, &[f64], WorkoutType)] = &[
        ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0], WorkoutType::Swimming),
        ("RUN", &[15_000.0, 1.0, 75.0], WorkoutType::Running),
        (
            "WLK",
            &[9_000.0, 1.0, 75.0, 180.0],
            WorkoutType::SportsWalking,
        ),
    ];

    for (code, data, expected) in cases {
        let workout = build_workout(code, data).unwrap();
        assert_eq!(workout.workout_type(), *expected);
    }
}

#[test]
fn unknown_code_fails_dispatch() {
    let err = build_workout("XYZ", &[1.0, 1.0, 1.0]).unwrap_err();
    assert_eq!(err.code, ErrorCode::UnknownWorkoutType);
    assert!(err.message.contains("XYZ"));
}

#[test]
fn codes_are_case_sensitive() {
    let err = build_workout("run", &[15_000.0, 1.0, 75.0]).unwrap_err();
    assert_eq!(err.code, ErrorCode::UnknownWorkoutType);
}

#[test]
fn wrong_arity_fails_construction() {
    // One reading short for each variant.
    let cases: &[(&str, &[f64])] = &[
        ("SWM", &[720.0, 1.0, 80.0, 25.0]),
        ("RUN", &[15_000.0, 1.0]),
        ("WLK", &[9_000.0, 1.0, 75.0]),
    ];

    for (code, data) in cases {
        let err = build_workout(code, data).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput, "code {code}");
    }

    // Extra readings are rejected the same way.
    let err = build_workout("RUN", &[15_000.0, 1.0, 75.0, 42.0]).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn non_integral_action_count_fails_construction() {
    let err = build_workout("RUN", &[15_000.5, 1.0, 75.0]).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    let err = build_workout("WLK", &[-9_000.0, 1.0, 75.0, 180.0]).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn dispatched_workouts_compute_summaries() {
    let workout = build_workout("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    let summary = workout.summary().unwrap();
    assert_eq!(summary.workout_type, WorkoutType::Swimming);
    assert!((summary.calories_kcal - 336.0).abs() < 1e-9);
}
