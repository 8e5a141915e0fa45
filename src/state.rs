// ABOUTME: Session state for all screens and the pure reducer that updates it
// ABOUTME: Append-only entry logs, profile, goal, mood, current quote, and the active unit system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! # Session State
//!
//! One value holds everything the screens share. Screens receive it by
//! reference and describe changes as [`Action`]s; [`reduce`] turns the old
//! state and an action into the next state. Nothing here touches a clock, a
//! random source, or I/O, so the same inputs always give the same state.

use crate::metrics::{
    bmi_category, calorie_summary, pick_quote, profile_bmi, BmiCategory, CalorieSummary,
    QuoteTable,
};
use crate::models::{
    FitnessGoal, FoodEntry, GoalSelection, Mood, MoodSelection, ProfileInput, UnitSystem,
    WorkoutEntry,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything a session knows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Workout log, oldest first
    pub workouts: Vec<WorkoutEntry>,
    /// Food log, oldest first
    pub foods: Vec<FoodEntry>,
    /// Profile as currently entered
    pub profile: ProfileInput,
    /// Goal picker
    pub goal: GoalSelection,
    /// Mood picker
    pub mood: MoodSelection,
    /// Quote currently shown on the quote screen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_quote: Option<String>,
    /// Units used for profile input and BMI
    pub unit_system: UnitSystem,
}

/// A discrete user action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Action {
    /// Append a validated workout
    AddWorkout(WorkoutEntry),
    /// Append a validated food entry
    AddFood(FoodEntry),
    /// Replace the profile with freshly parsed input
    UpdateProfile(ProfileInput),
    /// Pick (or clear) the goal
    SelectGoal(Option<FitnessGoal>),
    /// Replace the goal notes
    SetGoalNotes(String),
    /// Pick (or clear) the mood
    SelectMood(Option<Mood>),
    /// Show a quote, or `None` for the empty state
    ShowQuote(Option<String>),
    /// Switch between metric and imperial
    SetUnitSystem(UnitSystem),
}

/// Derived numbers for the current state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Calorie totals and balance
    pub calories: CalorieSummary,
    /// BMI, `None` when the profile lacks height or weight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,
    /// BMI category (or "not enough data")
    pub bmi_category: BmiCategory,
    /// Units the BMI was computed in
    pub unit_system: UnitSystem,
    /// Number of workouts logged
    pub workout_count: usize,
    /// Number of foods logged
    pub food_count: usize,
}

impl SessionState {
    /// Empty session using the given units
    #[must_use]
    pub fn new(unit_system: UnitSystem) -> Self {
        Self {
            unit_system,
            ..Self::default()
        }
    }

    /// Compute every derived number for the current state
    #[must_use]
    pub fn metrics(&self) -> MetricsSnapshot {
        let bmi = profile_bmi(&self.profile, self.unit_system);
        MetricsSnapshot {
            calories: calorie_summary(&self.foods, &self.workouts),
            bmi,
            bmi_category: bmi_category(bmi),
            unit_system: self.unit_system,
            workout_count: self.workouts.len(),
            food_count: self.foods.len(),
        }
    }

    /// Draw a quote for the selected mood and wrap it as an action
    ///
    /// Randomness stays outside the reducer: the caller draws, then dispatches.
    pub fn draw_quote<R>(&self, table: &QuoteTable, rng: &mut R) -> Action
    where
        R: Rng + ?Sized,
    {
        let quote = self
            .mood
            .mood
            .and_then(|mood| pick_quote(mood, table, rng))
            .map(str::to_owned);
        Action::ShowQuote(quote)
    }
}

/// Apply an action to a state, producing the next state
///
/// Entry logs only ever grow. Picking a different mood clears the shown
/// quote so a stale quote from another mood is never displayed.
#[must_use]
pub fn reduce(mut state: SessionState, action: Action) -> SessionState {
    match action {
        Action::AddWorkout(entry) => {
            debug!(workout.name = %entry.name, total = state.workouts.len() + 1, "Workout added");
            state.workouts.push(entry);
        }
        Action::AddFood(entry) => {
            debug!(food.name = %entry.name, total = state.foods.len() + 1, "Food added");
            state.foods.push(entry);
        }
        Action::UpdateProfile(profile) => {
            state.profile = profile;
        }
        Action::SelectGoal(goal) => {
            debug!(goal = ?goal, "Goal selected");
            state.goal.goal = goal;
        }
        Action::SetGoalNotes(notes) => {
            state.goal.notes = notes;
        }
        Action::SelectMood(mood) => {
            if state.mood.mood != mood {
                state.current_quote = None;
            }
            state.mood.mood = mood;
        }
        Action::ShowQuote(quote) => {
            state.current_quote = quote;
        }
        Action::SetUnitSystem(unit_system) => {
            debug!(units = %unit_system, "Unit system changed");
            state.unit_system = unit_system;
        }
    }
    state
}

/// Fold a sequence of actions over a starting state
#[must_use]
pub fn reduce_all<I>(state: SessionState, actions: I) -> SessionState
where
    I: IntoIterator<Item = Action>,
{
    actions.into_iter().fold(state, reduce)
}
