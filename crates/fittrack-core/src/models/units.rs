// ABOUTME: Measurement unit types for body metrics
// ABOUTME: UnitSystem selection plus Height and Weight with metric/imperial conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use crate::constants::units::{CM_PER_INCH, CM_PER_METER, INCHES_PER_FOOT, LB_PER_KG};
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Measurement convention used for profile input and the BMI formula
///
/// Metric reads height in centimeters and weight in kilograms; imperial reads
/// height in feet and inches and weight in pounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    /// Kilograms and meters
    #[default]
    Metric,
    /// Pounds and inches
    Imperial,
}

impl UnitSystem {
    /// Stable lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "si" => Ok(Self::Metric),
            "imperial" | "us" => Ok(Self::Imperial),
            other => Err(AppError::invalid_input(format!(
                "Unknown unit system '{other}' (expected 'metric' or 'imperial')"
            ))),
        }
    }
}

/// Body height as entered
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Height {
    /// Height in centimeters
    Centimeters(f64),
    /// Height split into feet and inches (e.g. 5 ft 9 in)
    FeetInches {
        /// Whole or fractional feet
        feet: f64,
        /// Additional inches
        inches: f64,
    },
}

impl Height {
    /// Height in meters
    #[must_use]
    pub fn to_meters(self) -> f64 {
        match self {
            Self::Centimeters(cm) => cm / CM_PER_METER,
            Self::FeetInches { .. } => self.to_inches() * CM_PER_INCH / CM_PER_METER,
        }
    }

    /// Height in inches
    #[must_use]
    pub fn to_inches(self) -> f64 {
        match self {
            Self::Centimeters(cm) => cm / CM_PER_INCH,
            Self::FeetInches { feet, inches } => feet.mul_add(INCHES_PER_FOOT, inches),
        }
    }

    /// Height expressed in the length unit the BMI formula expects
    #[must_use]
    pub fn in_system(self, system: UnitSystem) -> f64 {
        match system {
            UnitSystem::Metric => self.to_meters(),
            UnitSystem::Imperial => self.to_inches(),
        }
    }
}

/// Body weight as entered
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weight {
    /// Weight in kilograms
    Kilograms(f64),
    /// Weight in pounds
    Pounds(f64),
}

impl Weight {
    /// Weight in kilograms
    #[must_use]
    pub fn to_kilograms(self) -> f64 {
        match self {
            Self::Kilograms(kg) => kg,
            Self::Pounds(lb) => lb / LB_PER_KG,
        }
    }

    /// Weight in pounds
    #[must_use]
    pub fn to_pounds(self) -> f64 {
        match self {
            Self::Kilograms(kg) => kg * LB_PER_KG,
            Self::Pounds(lb) => lb,
        }
    }

    /// Weight expressed in the mass unit the BMI formula expects
    #[must_use]
    pub fn in_system(self, system: UnitSystem) -> f64 {
        match system {
            UnitSystem::Metric => self.to_kilograms(),
            UnitSystem::Imperial => self.to_pounds(),
        }
    }
}
