// ABOUTME: Workout log entry model
// ABOUTME: WorkoutEntry with sets, reps, and optional calories burned
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use serde::{Deserialize, Serialize};

/// A single logged exercise
///
/// Built only from validated form input, so `sets` and `reps` are always
/// positive and `calories_burned`, when present, is positive as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    /// Exercise name as entered
    pub name: String,
    /// Number of sets performed
    pub sets: u32,
    /// Repetitions per set
    pub reps: u32,
    /// Calories burned, when the user provided it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories_burned: Option<u32>,
}

impl WorkoutEntry {
    /// Create a new workout entry
    pub fn new(name: impl Into<String>, sets: u32, reps: u32, calories_burned: Option<u32>) -> Self {
        Self {
            name: name.into(),
            sets,
            reps,
            calories_burned,
        }
    }
}
