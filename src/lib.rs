// ABOUTME: Main library entry point for the FitTrack session layer
// ABOUTME: Form validation, session reducer, display formatting, configuration, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

#![deny(unsafe_code)]

//! # FitTrack
//!
//! The logic behind a personal fitness tracker's screens: goals, workout log,
//! nutrition log, motivational quotes, and profile/BMI. Nothing is persisted;
//! a [`state::SessionState`] lives as long as the session that owns it.
//!
//! ## Architecture
//!
//! - **forms**: raw text fields in, validated entries out (or a disabled add button)
//! - **state**: the session as a value, updated by the pure [`state::reduce`]
//! - **display**: computed numbers or neutral placeholders, ready to render
//! - **config** / **logging**: environment-driven setup
//!
//! Calculations come from `fittrack-metrics`; the data model from
//! `fittrack-core`. Both are re-exported here.
//!
//! ## Example Usage
//!
//! ```rust
//! use fittrack::forms::FoodForm;
//! use fittrack::state::{reduce, Action, SessionState};
//!
//! let form = FoodForm::new("Rice", "300");
//! let mut state = SessionState::default();
//! if let Some(entry) = form.submit() {
//!     state = reduce(state, Action::AddFood(entry));
//! }
//! assert_eq!(state.metrics().calories.calories_in, 300);
//! ```

/// Environment-based configuration
pub mod config;

/// Display strings and placeholders for computed values
pub mod display;

/// Form boundary: parsing and validating user-entered text
pub mod forms;

/// Structured logging setup
pub mod logging;

/// Session state and the pure reducer that updates it
pub mod state;

pub use fittrack_core::{constants, errors, models};
pub use fittrack_metrics as metrics;
