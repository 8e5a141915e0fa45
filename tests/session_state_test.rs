// ABOUTME: Tests for the session reducer and the dashboard rendered from it
// ABOUTME: Covers append-only logs, mood/quote interaction, unit switching, and placeholders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fittrack::display::{format_bmi, Dashboard};
use fittrack::metrics::{BmiCategory, CalorieBalance, QuoteTable};
use fittrack::models::{
    FitnessGoal, FoodEntry, Height, Mood, ProfileInput, UnitSystem, Weight, WorkoutEntry,
};
use fittrack::state::{reduce, reduce_all, Action, SessionState};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

mod common;

fn reference_session() -> SessionState {
    let actions = common::sample_foods()
        .into_iter()
        .map(Action::AddFood)
        .chain(common::sample_workouts().into_iter().map(Action::AddWorkout));
    reduce_all(SessionState::default(), actions)
}

// ============================================================================
// REDUCER
// ============================================================================

#[test]
fn test_reference_session_metrics() {
    common::init_test_logging();
    let metrics = reference_session().metrics();

    assert_eq!(metrics.calories.calories_in, 550);
    assert_eq!(metrics.calories.calories_out, 200);
    assert_eq!(metrics.calories.net, 350);
    assert_eq!(metrics.calories.balance, CalorieBalance::Surplus);
    assert_eq!(metrics.food_count, 2);
    assert_eq!(metrics.workout_count, 1);
    assert_eq!(metrics.bmi, None);
    assert_eq!(metrics.bmi_category, BmiCategory::NotEnoughData);
}

#[test]
fn test_entries_append_in_order() {
    let state = reference_session();
    let state = reduce(state, Action::AddFood(FoodEntry::new("Apple", 95)));

    let names: Vec<&str> = state.foods.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["Rice", "Chicken", "Apple"]);
}

#[test]
fn test_reduce_leaves_previous_state_untouched() {
    let before = reference_session();
    let after = reduce(
        before.clone(),
        Action::AddWorkout(WorkoutEntry::new("Row", 4, 12, Some(150))),
    );

    assert_eq!(before.workouts.len(), 1);
    assert_eq!(after.workouts.len(), 2);
    assert_eq!(after.workouts[..1], before.workouts[..]);
}

#[test]
fn test_profile_update_drives_bmi() {
    let profile = ProfileInput {
        name: "Sam".into(),
        age: Some(30),
        height: Some(Height::Centimeters(175.0)),
        weight: Some(Weight::Kilograms(70.0)),
    };
    let state = reduce(SessionState::default(), Action::UpdateProfile(profile));
    let metrics = state.metrics();

    assert!((metrics.bmi.unwrap() - 22.857_142_857).abs() < 1e-6);
    assert_eq!(metrics.bmi_category, BmiCategory::Normal);
}

#[test]
fn test_switching_units_keeps_profile() {
    let profile = ProfileInput {
        height: Some(Height::FeetInches {
            feet: 5.0,
            inches: 9.0,
        }),
        weight: Some(Weight::Pounds(154.0)),
        ..ProfileInput::default()
    };
    let imperial = reduce(
        SessionState::new(UnitSystem::Imperial),
        Action::UpdateProfile(profile),
    );
    let metric = reduce(imperial.clone(), Action::SetUnitSystem(UnitSystem::Metric));

    assert_eq!(metric.profile, imperial.profile);
    assert_eq!(metric.unit_system, UnitSystem::Metric);
    let diff = metric.metrics().bmi.unwrap() - imperial.metrics().bmi.unwrap();
    assert!(diff.abs() < 0.05);
}

#[test]
fn test_goal_selection_and_notes() {
    let state = reduce_all(
        SessionState::default(),
        [
            Action::SelectGoal(Some(FitnessGoal::BuildMuscle)),
            Action::SetGoalNotes("Bench 100 kg by summer".into()),
        ],
    );
    assert_eq!(state.goal.goal, Some(FitnessGoal::BuildMuscle));
    assert_eq!(
        Dashboard::from_state(&state).goal,
        "Build Muscle (Bench 100 kg by summer)"
    );
}

// ============================================================================
// QUOTES
// ============================================================================

#[test]
fn test_draw_quote_without_mood_shows_nothing() {
    let state = SessionState::default();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let action = state.draw_quote(&QuoteTable::builtin(), &mut rng);
    assert_eq!(action, Action::ShowQuote(None));
}

#[test]
fn test_draw_quote_for_selected_mood() {
    let table = QuoteTable::builtin();
    let state = reduce(SessionState::default(), Action::SelectMood(Some(Mood::Tired)));
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let action = state.draw_quote(&table, &mut rng);
    let state = reduce(state, action);

    let quote = state.current_quote.clone().unwrap();
    assert!(table.quotes_for(Mood::Tired).unwrap().contains(&quote));
    assert_eq!(Dashboard::from_state(&state).quote, quote);
}

#[test]
fn test_changing_mood_clears_stale_quote() {
    let state = reduce_all(
        SessionState::default(),
        [
            Action::SelectMood(Some(Mood::Happy)),
            Action::ShowQuote(Some("Keep going".into())),
        ],
    );
    let same = reduce(state.clone(), Action::SelectMood(Some(Mood::Happy)));
    assert_eq!(same.current_quote.as_deref(), Some("Keep going"));

    let changed = reduce(state, Action::SelectMood(Some(Mood::Sad)));
    assert_eq!(changed.current_quote, None);
}

// ============================================================================
// DASHBOARD
// ============================================================================

#[test]
fn test_empty_session_renders_placeholders() {
    let dashboard = Dashboard::from_state(&SessionState::default());

    assert_eq!(dashboard.workouts, ["No workouts logged yet"]);
    assert_eq!(dashboard.foods, ["No food logged yet"]);
    assert_eq!(dashboard.calories_in, "0 kcal");
    assert_eq!(dashboard.net_calories, "0 kcal (maintenance)");
    assert_eq!(dashboard.bmi, "Insufficient data");
    assert_eq!(dashboard.bmi_category, "Not enough data");
    assert_eq!(dashboard.goal, "No goal selected");
    assert_eq!(dashboard.quote, "No quote available");
}

#[test]
fn test_reference_session_dashboard() {
    let dashboard = Dashboard::from_state(&reference_session());

    assert_eq!(dashboard.foods, ["Rice: 300 kcal", "Chicken: 250 kcal"]);
    assert_eq!(dashboard.workouts, ["Bench: 3 x 10, 200 kcal"]);
    assert_eq!(dashboard.net_calories, "350 kcal (surplus)");

    let rendered = dashboard.to_string();
    assert!(rendered.contains("Net:          350 kcal (surplus)"));
    assert!(rendered.contains("BMI:          Insufficient data (Not enough data)"));
}

#[test]
fn test_bmi_formatting() {
    assert_eq!(format_bmi(Some(22.857)), "22.9");
    assert_eq!(format_bmi(None), "Insufficient data");
}

#[test]
fn test_session_serializes_to_json() {
    let json = serde_json::to_value(reference_session()).unwrap();
    assert_eq!(json["foods"][0]["name"], "Rice");
    assert_eq!(json["workouts"][0]["calories_burned"], 200);
    assert_eq!(json["unit_system"], "metric");
}
