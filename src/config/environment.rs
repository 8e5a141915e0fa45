// ABOUTME: Environment configuration for unit system, quote table source, and quote seeding
// ABOUTME: Parses FITTRACK_* variables into a strongly typed AppConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! Environment-based configuration

use crate::constants::env_vars;
use crate::errors::{AppError, AppResult};
use crate::metrics::QuoteTable;
use crate::models::UnitSystem;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::{info, warn};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug detail
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback to `Info`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        f.write_str(name)
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Units for profile input and BMI
    pub unit_system: UnitSystem,
    /// JSON file replacing the built-in quote table
    pub quotes_path: Option<PathBuf>,
    /// Fixed seed for quote selection; entropy when absent
    pub quote_seed: Option<u64>,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error if a variable is set but cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        let unit_system = match env::var(env_vars::UNIT_SYSTEM) {
            Ok(raw) => raw.parse::<UnitSystem>().map_err(|e| {
                AppError::config(format!("{}: {}", env_vars::UNIT_SYSTEM, e.message))
            })?,
            Err(_) => UnitSystem::default(),
        };

        let quotes_path = env::var(env_vars::QUOTES_PATH)
            .ok()
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from);

        let quote_seed = match env::var(env_vars::QUOTE_SEED) {
            Ok(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                AppError::config(format!(
                    "{} must be an unsigned integer, got '{raw}'",
                    env_vars::QUOTE_SEED
                ))
                .with_source(e)
            })?),
            Err(_) => None,
        };

        let config = Self {
            unit_system,
            quotes_path,
            quote_seed,
        };
        info!(
            units = %config.unit_system,
            quotes_path = ?config.quotes_path,
            seeded = config.quote_seed.is_some(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// The quote table to use: the configured file, or the built-in one
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error if the configured file cannot be loaded
    pub fn load_quote_table(&self) -> AppResult<QuoteTable> {
        let Some(path) = &self.quotes_path else {
            return Ok(QuoteTable::builtin());
        };
        let table = QuoteTable::from_json_file(path).map_err(|e| {
            AppError::config(format!(
                "{} ({}): {}",
                env_vars::QUOTES_PATH,
                path.display(),
                e.message
            ))
            .with_source(e)
        })?;
        if table.is_empty() {
            warn!(path = %path.display(), "Quote table is empty; every mood will show the placeholder");
        }
        Ok(table)
    }

    /// Random source for quote selection
    ///
    /// Seeded from `quote_seed` when set so runs are reproducible.
    #[must_use]
    pub fn quote_rng(&self) -> ChaCha8Rng {
        self.quote_seed
            .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64)
    }
}
