// ABOUTME: Fitness goal picker model
// ABOUTME: FitnessGoal enumeration and the GoalSelection with free-text notes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of goals a user can pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// Reduce body weight
    LoseWeight,
    /// Gain muscle mass
    BuildMuscle,
    /// Improve cardiovascular endurance
    ImproveEndurance,
    /// Improve mobility and flexibility
    IncreaseFlexibility,
    /// Maintain a general activity habit
    StayActive,
}

impl FitnessGoal {
    /// Every goal, in picker order
    pub const ALL: [Self; 5] = [
        Self::LoseWeight,
        Self::BuildMuscle,
        Self::ImproveEndurance,
        Self::IncreaseFlexibility,
        Self::StayActive,
    ];

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LoseWeight => "Lose Weight",
            Self::BuildMuscle => "Build Muscle",
            Self::ImproveEndurance => "Improve Endurance",
            Self::IncreaseFlexibility => "Increase Flexibility",
            Self::StayActive => "Stay Active",
        }
    }

    /// Parse a goal from loosely formatted text
    ///
    /// Accepts snake case, kebab case, or the display label in any case.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "loseweight" | "weightloss" => Some(Self::LoseWeight),
            "buildmuscle" | "musclegain" => Some(Self::BuildMuscle),
            "improveendurance" | "endurance" => Some(Self::ImproveEndurance),
            "increaseflexibility" | "flexibility" => Some(Self::IncreaseFlexibility),
            "stayactive" => Some(Self::StayActive),
            _ => None,
        }
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Current goal picker state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalSelection {
    /// Picked goal, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<FitnessGoal>,
    /// Free-text notes
    pub notes: String,
}
