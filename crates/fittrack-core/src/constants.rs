// ABOUTME: Constants module with domain-separated organization
// ABOUTME: BMI thresholds, unit conversion factors, and display placeholder text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! Constants grouped by domain.

/// BMI category thresholds (WHO adult classification)
///
/// Bands are half-open: a value equal to a threshold belongs to the band above it.
pub mod bmi {
    /// Lower bound of the "normal" band
    pub const NORMAL_MIN: f64 = 18.5;
    /// Lower bound of the "overweight" band
    pub const OVERWEIGHT_MIN: f64 = 25.0;
    /// Lower bound of the "obese" band
    pub const OBESE_MIN: f64 = 30.0;
    /// Multiplier applied to `lb / in^2` to obtain `kg / m^2`
    pub const IMPERIAL_FACTOR: f64 = 703.0;
}

/// Unit conversion and measurement constants
pub mod units {
    /// Centimeters per meter
    pub const CM_PER_METER: f64 = 100.0;
    /// Inches per foot
    pub const INCHES_PER_FOOT: f64 = 12.0;
    /// Centimeters per inch
    pub const CM_PER_INCH: f64 = 2.54;
    /// Pounds per kilogram
    pub const LB_PER_KG: f64 = 2.204_622_621_8;
}

/// Text shown in place of values that cannot be computed or are empty
pub mod placeholders {
    /// Shown where a derived number is missing an input
    pub const INSUFFICIENT_DATA: &str = "Insufficient data";
    /// Category label when no BMI is available
    pub const NOT_ENOUGH_DATA: &str = "Not enough data";
    /// Empty workout log
    pub const NO_WORKOUTS: &str = "No workouts logged yet";
    /// Empty food log
    pub const NO_FOODS: &str = "No food logged yet";
    /// No quote for the selected mood
    pub const NO_QUOTE: &str = "No quote available";
    /// No goal picked yet
    pub const NO_GOAL: &str = "No goal selected";
}

/// Environment variable names read by the application
pub mod env_vars {
    /// `metric` or `imperial`
    pub const UNIT_SYSTEM: &str = "FITTRACK_UNIT_SYSTEM";
    /// Path to a JSON quote table
    pub const QUOTES_PATH: &str = "FITTRACK_QUOTES_PATH";
    /// Seed for deterministic quote selection
    pub const QUOTE_SEED: &str = "FITTRACK_QUOTE_SEED";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Name reported at startup
    pub const FITTRACK: &str = "fittrack";
}
