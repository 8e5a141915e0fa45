// ABOUTME: Tests for calorie totals, net calories, and balance status
// ABOUTME: Covers empty logs, missing calorie fields, and the reference scenario
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fittrack::metrics::{
    calorie_summary, net_calories, total_calories_in, total_calories_out, CalorieBalance,
};
use fittrack::models::{FoodEntry, WorkoutEntry};

mod common;

#[test]
fn test_reference_scenario_is_surplus() {
    let foods = common::sample_foods();
    let workouts = common::sample_workouts();

    assert_eq!(total_calories_in(&foods), 550);
    assert_eq!(total_calories_out(&workouts), 200);

    let summary = calorie_summary(&foods, &workouts);
    assert_eq!(summary.net, 350);
    assert_eq!(summary.balance, CalorieBalance::Surplus);
    assert_eq!(summary.balance.label(), "surplus");
}

#[test]
fn test_empty_collections_total_zero() {
    assert_eq!(total_calories_in(&[]), 0);
    assert_eq!(total_calories_out(&[]), 0);
}

#[test]
fn test_totals_match_arithmetic_sum() {
    let foods: Vec<FoodEntry> = (1..=20)
        .map(|i| FoodEntry::new(format!("food {i}"), i * 37))
        .collect();
    let expected: u64 = (1..=20u64).map(|i| i * 37).sum();
    assert_eq!(total_calories_in(&foods), expected);
}

#[test]
fn test_workouts_without_calories_count_as_zero() {
    let workouts = vec![
        WorkoutEntry::new("Squat", 5, 5, None),
        WorkoutEntry::new("Run", 1, 1, Some(320)),
        WorkoutEntry::new("Plank", 3, 1, None),
    ];
    assert_eq!(total_calories_out(&workouts), 320);
}

#[test]
fn test_totals_do_not_overflow_u32() {
    let foods = vec![
        FoodEntry::new("a", u32::MAX),
        FoodEntry::new("b", u32::MAX),
    ];
    assert_eq!(total_calories_in(&foods), 2 * u64::from(u32::MAX));
}

#[test]
fn test_net_calories_is_difference() {
    for (calories_in, calories_out) in [(0_i64, 0_i64), (550, 200), (100, 900), (-50, 25), (1234, 1234)] {
        assert_eq!(
            net_calories(calories_in, calories_out),
            i128::from(calories_in - calories_out)
        );
    }
}

#[test]
fn test_net_calories_never_overflows() {
    assert_eq!(net_calories(i64::MIN, 1_i64), -9_223_372_036_854_775_809_i128);
    assert_eq!(net_calories(i64::MAX, -1_i64), 9_223_372_036_854_775_808_i128);
    assert_eq!(
        net_calories(u64::MAX, 0_u64),
        18_446_744_073_709_551_615_i128
    );
}

#[test]
fn test_balance_tracks_sign_of_net() {
    let deficit = calorie_summary(
        &[FoodEntry::new("Salad", 150)],
        &[WorkoutEntry::new("Run", 1, 1, Some(400))],
    );
    assert_eq!(deficit.net, -250);
    assert_eq!(deficit.balance, CalorieBalance::Deficit);

    let maintenance = calorie_summary(
        &[FoodEntry::new("Oats", 400)],
        &[WorkoutEntry::new("Row", 4, 250, Some(400))],
    );
    assert_eq!(maintenance.net, 0);
    assert_eq!(maintenance.balance, CalorieBalance::Maintenance);
    assert_eq!(maintenance.balance.to_string(), "maintenance");
}
