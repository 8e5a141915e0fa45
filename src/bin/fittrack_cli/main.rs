// ABOUTME: FitTrack CLI - drives a fitness tracking session from the command line
// ABOUTME: Summarizes logged food and workouts, computes BMI, and draws mood quotes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors
//!
//! Usage:
//! ```bash
//! # Summarize a session
//! fittrack-cli summary --food Rice:300 --food Chicken:250 --workout Bench:3:10:200
//!
//! # Same, with a profile in imperial units, as JSON
//! fittrack-cli summary --units imperial --weight 154 --height-ft 5 --height-in 9 --json
//!
//! # BMI from raw numbers (meters for metric, inches for imperial)
//! fittrack-cli bmi --weight 70 --height 1.75
//!
//! # Draw a quote reproducibly
//! fittrack-cli quote --mood tired --seed 7
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fittrack::config::{AppConfig, LogLevel};
use fittrack::logging::LoggingConfig;
use fittrack::models::UnitSystem;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "fittrack-cli",
    about = "FitTrack session calculator",
    long_about = "Log food and workouts, compute calorie balance and BMI, and draw motivational quotes."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Unit system override (metric or imperial)
    #[arg(long, global = true)]
    units: Option<UnitSystem>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Build a session from entries and print its dashboard
    Summary(commands::summary::SummaryArgs),

    /// Compute BMI and its category
    Bmi {
        /// Weight (kg for metric, lb for imperial)
        #[arg(long)]
        weight: Option<String>,

        /// Height (m for metric, in for imperial)
        #[arg(long)]
        height: Option<String>,
    },

    /// Draw a motivational quote for a mood
    Quote {
        /// Mood (happy, sad, stressed, tired, unmotivated)
        #[arg(long)]
        mood: String,

        /// Seed for reproducible selection
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level(LogLevel::Debug);
    }
    logging.init()?;

    let mut config = AppConfig::from_env()?;
    if let Some(units) = cli.units {
        config.unit_system = units;
    }
    debug!(units = %config.unit_system, "Running command");

    match cli.command {
        Command::Summary(args) => commands::summary::run(&config, &args)?,
        Command::Bmi { weight, height } => {
            commands::bmi::run(&config, weight.as_deref(), height.as_deref());
        }
        Command::Quote { mood, seed } => {
            if seed.is_some() {
                config.quote_seed = seed;
            }
            commands::quote::run(&config, &mood)?;
        }
    }

    Ok(())
}
