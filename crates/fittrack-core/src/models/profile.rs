// ABOUTME: Profile input model backing the BMI screen
// ABOUTME: ProfileInput holds whatever the user has typed so far, every numeric field optional
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use super::units::{Height, Weight};
use serde::{Deserialize, Serialize};

/// Profile fields as currently entered
///
/// Updated on every keystroke. A field that did not parse is `None`, never a
/// default, so downstream displays can tell "absent" from "zero".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileInput {
    /// Display name
    pub name: String,
    /// Age in years
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Body height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Height>,
    /// Body weight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
}
