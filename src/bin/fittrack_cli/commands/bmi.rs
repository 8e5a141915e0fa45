// ABOUTME: BMI subcommand for fittrack-cli
// ABOUTME: Parses raw weight/height text and prints BMI with its category
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use fittrack::config::AppConfig;
use fittrack::display::format_bmi;
use fittrack::forms::parse_positive_number;
use fittrack::metrics::{bmi_category, body_mass_index};

pub fn run(config: &AppConfig, weight: Option<&str>, height: Option<&str>) {
    // Unparsable text is treated as absent, same as the profile screen
    let weight = weight.and_then(parse_positive_number);
    let height = height.and_then(parse_positive_number);
    let bmi = body_mass_index(weight, height, config.unit_system);

    println!("BMI: {} ({})", format_bmi(bmi), bmi_category(bmi));
}
