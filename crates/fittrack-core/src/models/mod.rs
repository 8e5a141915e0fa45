// ABOUTME: Core data models for the FitTrack session layer
// ABOUTME: Re-exports entries, profile input, unit types, goal and mood selections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! # Data Models
//!
//! Everything a user can submit or select during a session. Entries are
//! immutable once built; the form boundary in the application crate is the
//! only place that constructs them from raw text.
//!
//! ## Core Models
//!
//! - `WorkoutEntry`: one logged exercise (sets, reps, optional calories burned)
//! - `FoodEntry`: one logged food with its calories
//! - `ProfileInput`: name, age, height and weight as typed so far
//! - `GoalSelection` / `MoodSelection`: single-choice pickers

// Domain modules
mod goal;
mod mood;
mod nutrition;
mod profile;
mod units;
mod workout;

// Workout domain
pub use workout::WorkoutEntry;

// Nutrition domain
pub use nutrition::FoodEntry;

// Profile domain
pub use profile::ProfileInput;
pub use units::{Height, UnitSystem, Weight};

// Pickers
pub use goal::{FitnessGoal, GoalSelection};
pub use mood::{Mood, MoodSelection};
