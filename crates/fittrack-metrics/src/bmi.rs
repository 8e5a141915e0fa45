// ABOUTME: Body mass index calculation for metric and imperial input
// ABOUTME: BMI formula selection by UnitSystem and half-open WHO category bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! Body Mass Index
//!
//! # Reference
//!
//! - World Health Organization (2000). Obesity: preventing and managing the
//!   global epidemic. *WHO Technical Report Series* 894.

use fittrack_core::constants::bmi::{IMPERIAL_FACTOR, NORMAL_MIN, OBESE_MIN, OVERWEIGHT_MIN};
use fittrack_core::constants::placeholders::NOT_ENOUGH_DATA;
use fittrack_core::models::{ProfileInput, UnitSystem};
use serde::{Deserialize, Serialize};
use std::fmt;

/// WHO adult BMI category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI in [18.5, 25)
    Normal,
    /// BMI in [25, 30)
    Overweight,
    /// BMI of 30 or more
    Obese,
    /// No BMI could be computed
    NotEnoughData,
}

impl BmiCategory {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
            Self::NotEnoughData => NOT_ENOUGH_DATA,
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Calculate Body Mass Index
///
/// Formula depends on `system`:
/// - Metric: BMI = `weight_kg` / `height_m`²
/// - Imperial: BMI = 703 x `weight_lb` / `height_in`²
///
/// Returns `None` ("insufficient data") when either input is absent, when
/// height is not strictly positive, or when weight is not strictly positive.
/// Non-finite inputs are treated the same way.
#[must_use]
pub fn body_mass_index(weight: Option<f64>, height: Option<f64>, system: UnitSystem) -> Option<f64> {
    let weight = weight.filter(|w| w.is_finite() && *w > 0.0)?;
    let height = height.filter(|h| h.is_finite() && *h > 0.0)?;

    let bmi = match system {
        UnitSystem::Metric => weight / (height * height),
        UnitSystem::Imperial => IMPERIAL_FACTOR * weight / (height * height),
    };

    bmi.is_finite().then_some(bmi)
}

/// Calculate BMI from profile input in the selected unit system
///
/// Height and weight are converted into the system's units first, so a
/// profile entered in centimeters still yields a BMI under the imperial
/// formula.
#[must_use]
pub fn profile_bmi(profile: &ProfileInput, system: UnitSystem) -> Option<f64> {
    body_mass_index(
        profile.weight.map(|w| w.in_system(system)),
        profile.height.map(|h| h.in_system(system)),
        system,
    )
}

/// Classify a BMI into its category
///
/// Bands are half-open, so a value sitting exactly on a threshold falls in
/// the higher band. `None` maps to [`BmiCategory::NotEnoughData`].
#[must_use]
pub fn bmi_category(bmi: Option<f64>) -> BmiCategory {
    match bmi {
        None => BmiCategory::NotEnoughData,
        Some(value) if value.is_nan() => BmiCategory::NotEnoughData,
        Some(value) if value < NORMAL_MIN => BmiCategory::Underweight,
        Some(value) if value < OVERWEIGHT_MIN => BmiCategory::Normal,
        Some(value) if value < OBESE_MIN => BmiCategory::Overweight,
        Some(_) => BmiCategory::Obese,
    }
}
