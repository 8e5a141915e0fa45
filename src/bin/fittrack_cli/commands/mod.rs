// ABOUTME: Command modules for fittrack-cli
// ABOUTME: Summary, BMI, and quote subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

pub mod bmi;
pub mod quote;
pub mod summary;
