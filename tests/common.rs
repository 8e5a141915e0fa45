// ABOUTME: Shared test utilities for FitTrack integration tests
// ABOUTME: Quiet logging setup and session fixtures reused across test files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors
#![allow(dead_code, clippy::missing_panics_doc, clippy::must_use_candidate)]
//! Shared test utilities for `fittrack`

use fittrack::models::{FoodEntry, WorkoutEntry};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// The food log from the reference scenario
pub fn sample_foods() -> Vec<FoodEntry> {
    vec![FoodEntry::new("Rice", 300), FoodEntry::new("Chicken", 250)]
}

/// The workout log from the reference scenario
pub fn sample_workouts() -> Vec<WorkoutEntry> {
    vec![WorkoutEntry::new("Bench", 3, 10, Some(200))]
}
