// ABOUTME: Mood picker model driving motivational quote selection
// ABOUTME: Mood enumeration and the MoodSelection state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of moods offered by the quote screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    /// Feeling good
    Happy,
    /// Feeling down
    Sad,
    /// Under pressure
    Stressed,
    /// Low energy
    Tired,
    /// Lacking drive
    Unmotivated,
}

impl Mood {
    /// Every mood, in picker order
    pub const ALL: [Self; 5] = [
        Self::Happy,
        Self::Sad,
        Self::Stressed,
        Self::Tired,
        Self::Unmotivated,
    ];

    /// Stable lowercase key, also used in quote table JSON
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Stressed => "stressed",
            Self::Tired => "tired",
            Self::Unmotivated => "unmotivated",
        }
    }

    /// Parse a mood from text, ignoring case and surrounding whitespace
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        let lowered = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|mood| mood.key() == lowered)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Current mood picker state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodSelection {
    /// Picked mood, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
}
