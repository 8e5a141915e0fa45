// ABOUTME: Quote subcommand for fittrack-cli
// ABOUTME: Draws a quote for a mood from the configured table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use anyhow::{bail, Result};
use fittrack::config::AppConfig;
use fittrack::constants::placeholders::NO_QUOTE;
use fittrack::metrics::pick_quote;
use fittrack::models::Mood;

pub fn run(config: &AppConfig, mood: &str) -> Result<()> {
    let Some(mood) = Mood::from_str_lossy(mood) else {
        bail!(
            "Unknown mood '{mood}' (expected one of: {})",
            Mood::ALL.map(Mood::key).join(", ")
        );
    };

    let table = config.load_quote_table()?;
    let mut rng = config.quote_rng();
    println!("{}", pick_quote(mood, &table, &mut rng).unwrap_or(NO_QUOTE));
    Ok(())
}
