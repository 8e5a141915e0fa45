// ABOUTME: Criterion benchmarks for derived metrics and the session reducer
// ABOUTME: Measures calorie aggregation over large logs and full dashboard rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! Criterion benchmarks for derived metrics.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fittrack::display::Dashboard;
use fittrack::metrics::{bmi_category, body_mass_index, calorie_summary};
use fittrack::models::{FoodEntry, UnitSystem, WorkoutEntry};
use fittrack::state::{reduce_all, Action, SessionState};

fn generate_log(count: u32) -> (Vec<FoodEntry>, Vec<WorkoutEntry>) {
    let foods = (0..count)
        .map(|i| FoodEntry::new(format!("food_{i}"), 50 + (i * 37) % 700))
        .collect();
    let workouts = (0..count)
        .map(|i| {
            let calories = (i % 3 != 0).then_some(100 + (i * 13) % 400);
            WorkoutEntry::new(format!("workout_{i}"), 1 + i % 5, 5 + i % 10, calories)
        })
        .collect();
    (foods, workouts)
}

fn bench_calorie_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("calories");

    for size in [10_u32, 100, 1000] {
        let (foods, workouts) = generate_log(size);
        group.throughput(Throughput::Elements(u64::from(size) * 2));
        group.bench_with_input(BenchmarkId::new("summary", size), &size, |b, _| {
            b.iter(|| calorie_summary(black_box(&foods), black_box(&workouts)));
        });
    }

    group.finish();
}

fn bench_bmi(c: &mut Criterion) {
    c.bench_function("bmi_with_category", |b| {
        b.iter(|| {
            let bmi = body_mass_index(black_box(Some(154.0)), black_box(Some(69.0)), UnitSystem::Imperial);
            bmi_category(bmi)
        });
    });
}

fn bench_session_dashboard(c: &mut Criterion) {
    let (foods, workouts) = generate_log(100);
    let actions: Vec<Action> = foods
        .into_iter()
        .map(Action::AddFood)
        .chain(workouts.into_iter().map(Action::AddWorkout))
        .collect();

    c.bench_function("reduce_and_render_200_actions", |b| {
        b.iter(|| {
            let state = reduce_all(SessionState::default(), black_box(actions.clone()));
            Dashboard::from_state(&state)
        });
    });
}

criterion_group!(benches, bench_calorie_summary, bench_bmi, bench_session_dashboard);
criterion_main!(benches);
