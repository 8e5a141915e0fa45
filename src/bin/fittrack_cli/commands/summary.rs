// ABOUTME: Summary subcommand for fittrack-cli
// ABOUTME: Feeds command-line entries through the form boundary and reducer, then prints the dashboard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use anyhow::Result;
use clap::Args;
use fittrack::config::AppConfig;
use fittrack::display::Dashboard;
use fittrack::forms::{FoodForm, ProfileForm, WorkoutForm};
use fittrack::models::{FitnessGoal, Mood};
use fittrack::state::{reduce, reduce_all, Action, SessionState};
use serde_json::json;
use tracing::warn;

#[derive(Args)]
pub struct SummaryArgs {
    /// Food entry as NAME:KCAL (repeatable)
    #[arg(long = "food", value_name = "NAME:KCAL")]
    foods: Vec<String>,

    /// Workout entry as NAME:SETS:REPS[:KCAL] (repeatable)
    #[arg(long = "workout", value_name = "NAME:SETS:REPS[:KCAL]")]
    workouts: Vec<String>,

    /// Profile name
    #[arg(long)]
    name: Option<String>,

    /// Age in years
    #[arg(long)]
    age: Option<String>,

    /// Weight (kg for metric, lb for imperial)
    #[arg(long)]
    weight: Option<String>,

    /// Height in centimeters (metric)
    #[arg(long)]
    height_cm: Option<String>,

    /// Height, feet part (imperial)
    #[arg(long)]
    height_ft: Option<String>,

    /// Height, inches part (imperial)
    #[arg(long)]
    height_in: Option<String>,

    /// Fitness goal (e.g. lose-weight, build-muscle)
    #[arg(long)]
    goal: Option<String>,

    /// Goal notes
    #[arg(long)]
    notes: Option<String>,

    /// Mood for a motivational quote
    #[arg(long)]
    mood: Option<String>,

    /// Print the session as JSON
    #[arg(long)]
    json: bool,
}

fn food_form(raw: &str) -> FoodForm {
    let (name, calories) = raw.rsplit_once(':').unwrap_or((raw, ""));
    FoodForm::new(name, calories)
}

fn workout_form(raw: &str) -> WorkoutForm {
    let mut parts = raw.splitn(4, ':');
    WorkoutForm::new(
        parts.next().unwrap_or_default(),
        parts.next().unwrap_or_default(),
        parts.next().unwrap_or_default(),
        parts.next().unwrap_or_default(),
    )
}

impl SummaryArgs {
    fn profile_form(&self) -> ProfileForm {
        ProfileForm {
            name: self.name.clone().unwrap_or_default(),
            age: self.age.clone().unwrap_or_default(),
            height_cm: self.height_cm.clone().unwrap_or_default(),
            height_feet: self.height_ft.clone().unwrap_or_default(),
            height_inches: self.height_in.clone().unwrap_or_default(),
            weight: self.weight.clone().unwrap_or_default(),
        }
    }

    fn actions(&self, config: &AppConfig) -> Vec<Action> {
        let mut actions = Vec::new();

        for raw in &self.foods {
            match food_form(raw).validate() {
                Ok(entry) => actions.push(Action::AddFood(entry)),
                Err(e) => {
                    warn!(entry = %raw, error = %e, "Food entry rejected");
                    eprintln!("Skipped food '{raw}': {}", e.message);
                }
            }
        }

        for raw in &self.workouts {
            match workout_form(raw).validate() {
                Ok(entry) => actions.push(Action::AddWorkout(entry)),
                Err(e) => {
                    warn!(entry = %raw, error = %e, "Workout entry rejected");
                    eprintln!("Skipped workout '{raw}': {}", e.message);
                }
            }
        }

        actions.push(Action::UpdateProfile(
            self.profile_form().to_profile(config.unit_system),
        ));

        if let Some(raw) = &self.goal {
            match FitnessGoal::from_str_lossy(raw) {
                Some(goal) => actions.push(Action::SelectGoal(Some(goal))),
                None => eprintln!(
                    "Ignored unknown goal '{raw}' (expected one of: {})",
                    FitnessGoal::ALL.map(FitnessGoal::label).join(", ")
                ),
            }
        }
        if let Some(notes) = &self.notes {
            actions.push(Action::SetGoalNotes(notes.clone()));
        }
        if let Some(raw) = &self.mood {
            match Mood::from_str_lossy(raw) {
                Some(mood) => actions.push(Action::SelectMood(Some(mood))),
                None => eprintln!(
                    "Ignored unknown mood '{raw}' (expected one of: {})",
                    Mood::ALL.map(Mood::key).join(", ")
                ),
            }
        }

        actions
    }
}

pub fn run(config: &AppConfig, args: &SummaryArgs) -> Result<()> {
    let mut state = reduce_all(SessionState::new(config.unit_system), args.actions(config));

    if state.mood.mood.is_some() {
        let table = config.load_quote_table()?;
        let mut rng = config.quote_rng();
        let action = state.draw_quote(&table, &mut rng);
        state = reduce(state, action);
    }

    let dashboard = Dashboard::from_state(&state);
    if args.json {
        let output = json!({
            "session": state,
            "metrics": state.metrics(),
            "display": dashboard,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{dashboard}");
    }
    Ok(())
}
