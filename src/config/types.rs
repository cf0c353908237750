// envdump: Startup Environment Reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for envdump.
//!
//! # Config Structure
//!
//! ```text
//! Config: LoggingConfig, ProfilesConfig, ReportConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Logging options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Console log level (0-5).
    pub level: LogLevel,
    /// File log level (0-5), defaults to `level`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_level: Option<LogLevel>,
    /// Path to log file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Profile selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfilesConfig {
    /// Profiles switched on for this run.
    pub active: Vec<String>,
    /// Profiles assumed when none are active.
    pub default: Vec<String>,
}

impl Default for ProfilesConfig {
    fn default() -> Self {
        Self {
            active: Vec::new(),
            default: vec!["default".to_string()],
        }
    }
}

impl ProfilesConfig {
    /// Checks that every profile name can be used in a file name.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` for empty names or names
    /// containing path separators.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, names) in [("active", &self.active), ("default", &self.default)] {
            if let Some(bad) = names
                .iter()
                .find(|name| name.is_empty() || name.contains(['/', '\\']))
            {
                return Err(ConfigError::InvalidValue {
                    section: "profiles".to_string(),
                    key: key.to_string(),
                    message: format!("invalid profile name '{bad}'"),
                });
            }
        }
        Ok(())
    }
}

/// Report rendering options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Key globs whose values are printed as `[hidden]`.
    pub redact: Vec<String>,
}
