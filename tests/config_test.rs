// ABOUTME: Tests for environment-driven configuration
// ABOUTME: Unit system parsing, quote table source selection, and seeded quote RNGs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fittrack::config::{AppConfig, LogLevel};
use fittrack::errors::ErrorCode;
use fittrack::metrics::{pick_quote, QuoteTable};
use fittrack::models::{Mood, UnitSystem};
use serial_test::serial;
use std::env;
use std::fs;

const VARS: [&str; 3] = [
    "FITTRACK_UNIT_SYSTEM",
    "FITTRACK_QUOTES_PATH",
    "FITTRACK_QUOTE_SEED",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = AppConfig::from_env().unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.unit_system, UnitSystem::Metric);
    assert_eq!(config.load_quote_table().unwrap(), QuoteTable::builtin());
}

#[test]
#[serial]
fn test_imperial_from_environment() {
    clear_env();
    env::set_var("FITTRACK_UNIT_SYSTEM", "Imperial");
    let config = AppConfig::from_env().unwrap();
    clear_env();
    assert_eq!(config.unit_system, UnitSystem::Imperial);
}

#[test]
#[serial]
fn test_invalid_unit_system_is_config_error() {
    clear_env();
    env::set_var("FITTRACK_UNIT_SYSTEM", "cubits");
    let error = AppConfig::from_env().unwrap_err();
    clear_env();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("FITTRACK_UNIT_SYSTEM"));
}

#[test]
#[serial]
fn test_invalid_seed_is_config_error() {
    clear_env();
    env::set_var("FITTRACK_QUOTE_SEED", "-4");
    let error = AppConfig::from_env().unwrap_err();
    clear_env();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_quote_table_from_configured_file() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quotes.json");
    fs::write(&path, r#"{"stressed": ["Slow is smooth, smooth is fast."]}"#).unwrap();
    env::set_var("FITTRACK_QUOTES_PATH", &path);
    env::set_var("FITTRACK_QUOTE_SEED", "11");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    let table = config.load_quote_table().unwrap();
    let mut rng = config.quote_rng();
    assert_eq!(
        pick_quote(Mood::Stressed, &table, &mut rng),
        Some("Slow is smooth, smooth is fast.")
    );
    assert_eq!(pick_quote(Mood::Happy, &table, &mut rng), None);
}

#[test]
fn test_unreadable_quote_file_is_config_error() {
    let config = AppConfig {
        quotes_path: Some("/nonexistent/fittrack/quotes.json".into()),
        ..AppConfig::default()
    };
    let error = config.load_quote_table().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("FITTRACK_QUOTES_PATH"));
    assert!(error.message.contains("/nonexistent/fittrack/quotes.json"));
}

#[test]
fn test_seeded_rng_is_reproducible() {
    let config = AppConfig {
        quote_seed: Some(99),
        ..AppConfig::default()
    };
    let table = QuoteTable::builtin();
    let first: Vec<_> = {
        let mut rng = config.quote_rng();
        (0..5).map(|_| pick_quote(Mood::Happy, &table, &mut rng)).collect()
    };
    let second: Vec<_> = {
        let mut rng = config.quote_rng();
        (0..5).map(|_| pick_quote(Mood::Happy, &table, &mut rng)).collect()
    };
    assert_eq!(first, second);
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("DEBUG"), LogLevel::Debug);
    assert_eq!(LogLevel::from_str_or_default("nonsense"), LogLevel::Info);
    assert_eq!(LogLevel::Trace.to_string(), "trace");
}
