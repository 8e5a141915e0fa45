// ABOUTME: Configuration management module for FitTrack runtime settings
// ABOUTME: Re-exports the environment-driven AppConfig and log level type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! Configuration module
//!
//! All configuration comes from environment variables with sensible
//! defaults; there is no config file.

/// Environment-driven application configuration
pub mod environment;

pub use environment::{AppConfig, LogLevel};
