// ABOUTME: Core types and constants for the FitTrack session layer
// ABOUTME: Foundation crate with error handling, the entry/profile data model, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

#![deny(unsafe_code)]

//! # FitTrack Core
//!
//! Foundation crate providing the shared data model for FitTrack. Everything a
//! screen can enter or select lives here; derived numbers live in
//! `fittrack-metrics`.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: BMI thresholds, unit conversion factors, display placeholders
//! - **models**: Workout/food entries, profile input, goal and mood selections

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (entries, profile, goal, mood, units)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
