// ABOUTME: Mood-keyed motivational quote tables and uniform random selection
// ABOUTME: Built-in default table, JSON loading, and pick_quote with an injected RNG
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use fittrack_core::errors::{AppError, AppResult};
use fittrack_core::models::Mood;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Quotes grouped by mood
///
/// A mood may be missing from the table or map to an empty list; both cases
/// make [`pick_quote`] return `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QuoteTable {
    quotes: BTreeMap<Mood, Vec<String>>,
}

impl QuoteTable {
    /// Empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Table shipped with the application
    #[must_use]
    pub fn builtin() -> Self {
        let mut table = Self::new();
        table.insert(
            Mood::Happy,
            [
                "Keep that energy going. Today is a great day to move.",
                "Happiness is a habit. So is exercise.",
                "Ride the good mood into a personal best.",
            ],
        );
        table.insert(
            Mood::Sad,
            [
                "A short walk is still a step forward.",
                "You don't have to feel great to start. Start, and you'll feel better.",
            ],
        );
        table.insert(
            Mood::Stressed,
            [
                "Breathe in, breathe out. One rep at a time.",
                "Sweat is stress leaving the body.",
            ],
        );
        table.insert(
            Mood::Tired,
            [
                "Rest is part of training. Listen to your body.",
                "Ten easy minutes beats zero minutes.",
            ],
        );
        table.insert(
            Mood::Unmotivated,
            [
                "Discipline carries you when motivation runs out.",
                "The hardest rep is walking out the door.",
                "Small steps every day add up to big results.",
            ],
        );
        table
    }

    /// Parse a table from JSON of the form `{"happy": ["...", "..."], ...}`
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or names an unknown mood
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(json)?;
        let mut table = Self::new();
        for (key, quotes) in raw {
            let mood = Mood::from_str_lossy(&key).ok_or_else(|| {
                AppError::invalid_input(format!("Unknown mood '{key}' in quote table"))
            })?;
            table.quotes.entry(mood).or_default().extend(quotes);
        }
        Ok(table)
    }

    /// Load a table from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse
    pub fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let table = Self::from_json_str(&contents)?;
        debug!(
            path = %path.display(),
            moods = table.quotes.len(),
            "Loaded quote table"
        );
        Ok(table)
    }

    /// Add quotes for a mood, appending to any already present
    pub fn insert<I, S>(&mut self, mood: Mood, quotes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.quotes
            .entry(mood)
            .or_default()
            .extend(quotes.into_iter().map(Into::into));
    }

    /// Quotes listed for a mood; `None` when the mood has no key
    #[must_use]
    pub fn quotes_for(&self, mood: Mood) -> Option<&[String]> {
        self.quotes.get(&mood).map(Vec::as_slice)
    }

    /// Number of moods with a key in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Whether the table has no moods at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

/// Pick one quote uniformly at random for a mood
///
/// The random source is injected so callers (and tests) control determinism.
/// Returns `None` when the mood is not in the table or its list is empty.
pub fn pick_quote<'a, R>(mood: Mood, table: &'a QuoteTable, rng: &mut R) -> Option<&'a str>
where
    R: Rng + ?Sized,
{
    table
        .quotes_for(mood)
        .and_then(|quotes| quotes.choose(rng))
        .map(String::as_str)
}
