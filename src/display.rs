// ABOUTME: Display formatting for computed values with neutral placeholders
// ABOUTME: Renders calorie, BMI, log, goal, and quote lines from a session snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use crate::constants::placeholders::{
    INSUFFICIENT_DATA, NO_FOODS, NO_GOAL, NO_QUOTE, NO_WORKOUTS,
};
use crate::models::{FoodEntry, WorkoutEntry};
use crate::state::SessionState;
use serde::Serialize;
use std::fmt;

/// Format a BMI to one decimal, or the insufficient-data placeholder
#[must_use]
pub fn format_bmi(bmi: Option<f64>) -> String {
    bmi.map_or_else(|| INSUFFICIENT_DATA.to_owned(), |value| format!("{value:.1}"))
}

/// One line per workout
#[must_use]
pub fn format_workout(entry: &WorkoutEntry) -> String {
    match entry.calories_burned {
        Some(kcal) => format!("{}: {} x {}, {kcal} kcal", entry.name, entry.sets, entry.reps),
        None => format!("{}: {} x {}", entry.name, entry.sets, entry.reps),
    }
}

/// One line per food
#[must_use]
pub fn format_food(entry: &FoodEntry) -> String {
    format!("{}: {} kcal", entry.name, entry.calories)
}

/// Every string a screen needs, computed from one session state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    /// "Calories in" value
    pub calories_in: String,
    /// "Calories out" value
    pub calories_out: String,
    /// Net calories with balance label
    pub net_calories: String,
    /// BMI or placeholder
    pub bmi: String,
    /// BMI category label
    pub bmi_category: String,
    /// Workout log lines, or a single empty-state message
    pub workouts: Vec<String>,
    /// Food log lines, or a single empty-state message
    pub foods: Vec<String>,
    /// Goal label and notes
    pub goal: String,
    /// Shown quote or placeholder
    pub quote: String,
}

impl Dashboard {
    /// Render the current session
    #[must_use]
    pub fn from_state(state: &SessionState) -> Self {
        let metrics = state.metrics();
        let calories = metrics.calories;

        let workouts = if state.workouts.is_empty() {
            vec![NO_WORKOUTS.to_owned()]
        } else {
            state.workouts.iter().map(format_workout).collect()
        };
        let foods = if state.foods.is_empty() {
            vec![NO_FOODS.to_owned()]
        } else {
            state.foods.iter().map(format_food).collect()
        };

        let goal = match (state.goal.goal, state.goal.notes.trim()) {
            (None, _) => NO_GOAL.to_owned(),
            (Some(goal), "") => goal.label().to_owned(),
            (Some(goal), notes) => format!("{} ({notes})", goal.label()),
        };

        Self {
            calories_in: format!("{} kcal", calories.calories_in),
            calories_out: format!("{} kcal", calories.calories_out),
            net_calories: format!("{} kcal ({})", calories.net, calories.balance),
            bmi: format_bmi(metrics.bmi),
            bmi_category: metrics.bmi_category.label().to_owned(),
            workouts,
            foods,
            goal,
            quote: state
                .current_quote
                .clone()
                .unwrap_or_else(|| NO_QUOTE.to_owned()),
        }
    }
}

impl fmt::Display for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Goal:         {}", self.goal)?;
        writeln!(f, "Workouts:")?;
        for line in &self.workouts {
            writeln!(f, "  {line}")?;
        }
        writeln!(f, "Foods:")?;
        for line in &self.foods {
            writeln!(f, "  {line}")?;
        }
        writeln!(f, "Calories in:  {}", self.calories_in)?;
        writeln!(f, "Calories out: {}", self.calories_out)?;
        writeln!(f, "Net:          {}", self.net_calories)?;
        writeln!(f, "BMI:          {} ({})", self.bmi, self.bmi_category)?;
        write!(f, "Quote:        {}", self.quote)
    }
}
