// ABOUTME: Form boundary turning raw text fields into validated entries and profile input
// ABOUTME: Workout, food, and profile forms with positive-number parsing rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! # Form Boundary
//!
//! Text fields arrive exactly as typed. Entry forms either produce a fully
//! valid entry or refuse; an entry with a bad number never reaches the
//! session. The profile form is lenient instead: any field that does not
//! parse is simply absent.

use crate::errors::{AppError, AppResult};
use crate::models::{FoodEntry, Height, ProfileInput, UnitSystem, Weight, WorkoutEntry};
use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;
use tracing::debug;

/// Parse a strictly positive whole number, ignoring surrounding whitespace
///
/// Returns `None` for blank, non-numeric, zero, or negative input.
#[must_use]
pub fn parse_positive_int(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok().filter(|value| *value > 0)
}

/// Parse a strictly positive finite number, ignoring surrounding whitespace
#[must_use]
pub fn parse_positive_number(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
}

// Blank counts as zero; anything else must be a finite number >= 0.
fn parse_non_negative_or_zero(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}

fn require_name(input: &str, label: &str) -> AppResult<String> {
    let name = input.trim();
    if name.is_empty() {
        return Err(AppError::missing_field(label));
    }
    Ok(name.to_owned())
}

fn require_positive_int(input: &str, label: &str) -> AppResult<u32> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AppError::missing_field(label));
    }
    let value: i64 = match trimmed.parse() {
        Ok(value) => value,
        Err(e) => {
            return Err(match e.kind() {
                IntErrorKind::PosOverflow => {
                    AppError::out_of_range(format!("{label} is too large"))
                }
                IntErrorKind::NegOverflow => {
                    AppError::out_of_range(format!("{label} must be positive"))
                }
                _ => AppError::invalid_input(format!("{label} must be a whole number")),
            });
        }
    };
    if value <= 0 {
        return Err(AppError::out_of_range(format!("{label} must be positive")));
    }
    u32::try_from(value).map_err(|_| AppError::out_of_range(format!("{label} is too large")))
}

fn optional_positive_int(input: &str, label: &str) -> AppResult<Option<u32>> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    require_positive_int(input, label).map(Some)
}

/// Raw fields of the "add workout" form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutForm {
    /// Exercise name
    pub name: String,
    /// Sets, as typed
    pub sets: String,
    /// Reps, as typed
    pub reps: String,
    /// Calories burned, as typed; may be left blank
    pub calories_burned: String,
}

impl WorkoutForm {
    /// Build a form from already-typed fields
    pub fn new(
        name: impl Into<String>,
        sets: impl Into<String>,
        reps: impl Into<String>,
        calories_burned: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            sets: sets.into(),
            reps: reps.into(),
            calories_burned: calories_burned.into(),
        }
    }

    /// Validate every field and build the entry
    ///
    /// # Errors
    ///
    /// Returns an error naming the first field that is blank, non-numeric, or not positive
    pub fn validate(&self) -> AppResult<WorkoutEntry> {
        let name = require_name(&self.name, "Workout name")?;
        let sets = require_positive_int(&self.sets, "Sets")?;
        let reps = require_positive_int(&self.reps, "Reps")?;
        let calories_burned = optional_positive_int(&self.calories_burned, "Calories burned")?;
        Ok(WorkoutEntry::new(name, sets, reps, calories_burned))
    }

    /// The entry to append, or `None` while the add action is disabled
    #[must_use]
    pub fn submit(&self) -> Option<WorkoutEntry> {
        match self.validate() {
            Ok(entry) => {
                debug!(workout.name = %entry.name, workout.sets = entry.sets, workout.reps = entry.reps, "Workout form accepted");
                Some(entry)
            }
            Err(e) => {
                debug!(error = %e, "Workout form rejected");
                None
            }
        }
    }

    /// Whether the add action should be enabled
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Raw fields of the "add food" form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodForm {
    /// Food name
    pub name: String,
    /// Calories, as typed
    pub calories: String,
}

impl FoodForm {
    /// Build a form from already-typed fields
    pub fn new(name: impl Into<String>, calories: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            calories: calories.into(),
        }
    }

    /// Validate both fields and build the entry
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or calories is not a positive whole number
    pub fn validate(&self) -> AppResult<FoodEntry> {
        let name = require_name(&self.name, "Food name")?;
        let calories = require_positive_int(&self.calories, "Calories")?;
        Ok(FoodEntry::new(name, calories))
    }

    /// The entry to append, or `None` while the add action is disabled
    #[must_use]
    pub fn submit(&self) -> Option<FoodEntry> {
        match self.validate() {
            Ok(entry) => {
                debug!(food.name = %entry.name, food.calories = entry.calories, "Food form accepted");
                Some(entry)
            }
            Err(e) => {
                debug!(error = %e, "Food form rejected");
                None
            }
        }
    }

    /// Whether the add action should be enabled
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Raw fields of the profile screen
///
/// Only the height fields matching the active [`UnitSystem`] are read:
/// `height_cm` for metric, `height_feet` + `height_inches` for imperial.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileForm {
    /// Display name
    pub name: String,
    /// Age in years
    pub age: String,
    /// Height in centimeters (metric)
    pub height_cm: String,
    /// Feet part of height (imperial)
    pub height_feet: String,
    /// Inches part of height (imperial)
    pub height_inches: String,
    /// Weight in kg (metric) or lb (imperial)
    pub weight: String,
}

impl ProfileForm {
    /// Convert the typed fields into profile input
    ///
    /// Never fails: a field that does not parse as a positive number is
    /// recorded as absent.
    #[must_use]
    pub fn to_profile(&self, system: UnitSystem) -> ProfileInput {
        ProfileInput {
            name: self.name.trim().to_owned(),
            age: parse_positive_int(&self.age),
            height: self.height(system),
            weight: parse_positive_number(&self.weight).map(|value| match system {
                UnitSystem::Metric => Weight::Kilograms(value),
                UnitSystem::Imperial => Weight::Pounds(value),
            }),
        }
    }

    fn height(&self, system: UnitSystem) -> Option<Height> {
        match system {
            UnitSystem::Metric => parse_positive_number(&self.height_cm).map(Height::Centimeters),
            UnitSystem::Imperial => {
                if self.height_feet.trim().is_empty() && self.height_inches.trim().is_empty() {
                    return None;
                }
                let feet = parse_non_negative_or_zero(&self.height_feet)?;
                let inches = parse_non_negative_or_zero(&self.height_inches)?;
                let height = Height::FeetInches { feet, inches };
                (height.to_inches() > 0.0).then_some(height)
            }
        }
    }
}
