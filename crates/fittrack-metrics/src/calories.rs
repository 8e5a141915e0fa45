// ABOUTME: Calorie aggregation over the food and workout logs
// ABOUTME: Totals in and out, net calories, and the surplus/deficit/maintenance status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use fittrack_core::models::{FoodEntry, WorkoutEntry};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Direction of the day's energy balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalorieBalance {
    /// More calories consumed than burned
    Surplus,
    /// More calories burned than consumed
    Deficit,
    /// Consumed exactly matches burned
    Maintenance,
}

impl CalorieBalance {
    /// Classify a net calorie value by its sign
    #[must_use]
    pub fn from_net(net: i128) -> Self {
        match net.cmp(&0) {
            Ordering::Greater => Self::Surplus,
            Ordering::Less => Self::Deficit,
            Ordering::Equal => Self::Maintenance,
        }
    }

    /// Lowercase status label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Surplus => "surplus",
            Self::Deficit => "deficit",
            Self::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for CalorieBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Aggregated calorie figures for one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalorieSummary {
    /// Sum of food calories
    pub calories_in: u64,
    /// Sum of calories burned across workouts
    pub calories_out: u64,
    /// `calories_in - calories_out`
    pub net: i128,
    /// Sign of `net`
    pub balance: CalorieBalance,
}

/// Sum of calories over all food entries
///
/// Returns 0 for an empty log.
#[must_use]
pub fn total_calories_in(foods: &[FoodEntry]) -> u64 {
    foods.iter().map(|food| u64::from(food.calories)).sum()
}

/// Sum of calories burned over all workout entries
///
/// Entries without a calorie figure count as 0. Returns 0 for an empty log.
#[must_use]
pub fn total_calories_out(workouts: &[WorkoutEntry]) -> u64 {
    workouts
        .iter()
        .filter_map(|workout| workout.calories_burned)
        .map(u64::from)
        .sum()
}

/// Net calories: consumed minus burned
///
/// Computed in `i128`, which holds the exact difference of any two `i64` or
/// `u64` values, so the result never wraps or saturates.
#[must_use]
pub fn net_calories(calories_in: impl Into<i128>, calories_out: impl Into<i128>) -> i128 {
    calories_in.into() - calories_out.into()
}

/// Compute totals, net, and balance in one pass over both logs
#[must_use]
pub fn calorie_summary(foods: &[FoodEntry], workouts: &[WorkoutEntry]) -> CalorieSummary {
    let calories_in = total_calories_in(foods);
    let calories_out = total_calories_out(workouts);
    let net = net_calories(calories_in, calories_out);

    CalorieSummary {
        calories_in,
        calories_out,
        net,
        balance: CalorieBalance::from_net(net),
    }
}
