// ABOUTME: Derived metrics calculator for FitTrack screens
// ABOUTME: Calorie totals, net calorie balance, BMI with categories, and mood quote selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

#![deny(unsafe_code)]

//! # FitTrack Metrics
//!
//! Converts raw entries and profile input into display-ready values. Every
//! function here is a stateless, idempotent function of its arguments; missing
//! inputs yield `None` (or an explicit "not enough data" variant) rather than
//! an error.
//!
//! ```rust
//! use fittrack_core::models::{FoodEntry, WorkoutEntry};
//! use fittrack_metrics::calories::{calorie_summary, CalorieBalance};
//!
//! let foods = [FoodEntry::new("Rice", 300), FoodEntry::new("Chicken", 250)];
//! let workouts = [WorkoutEntry::new("Bench", 3, 10, Some(200))];
//! let summary = calorie_summary(&foods, &workouts);
//! assert_eq!(summary.net, 350);
//! assert_eq!(summary.balance, CalorieBalance::Surplus);
//! ```

/// Calorie aggregation and net balance
pub mod calories;

/// Body mass index and WHO categories
pub mod bmi;

/// Mood-keyed motivational quote tables
pub mod quotes;

pub use bmi::{bmi_category, body_mass_index, profile_bmi, BmiCategory};
pub use calories::{
    calorie_summary, net_calories, total_calories_in, total_calories_out, CalorieBalance,
    CalorieSummary,
};
pub use quotes::{pick_quote, QuoteTable};
