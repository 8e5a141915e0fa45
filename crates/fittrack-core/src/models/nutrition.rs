// ABOUTME: Nutrition log entry model
// ABOUTME: FoodEntry pairing a food name with its calories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use serde::{Deserialize, Serialize};

/// A single logged food item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodEntry {
    /// Food name as entered
    pub name: String,
    /// Calories consumed (always positive)
    pub calories: u32,
}

impl FoodEntry {
    /// Create a new food entry
    pub fn new(name: impl Into<String>, calories: u32) -> Self {
        Self {
            name: name.into(),
            calories,
        }
    }
}
