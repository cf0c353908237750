// envdump: Startup Environment Reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for envdump.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults                       (map)
//! 2. envdump.toml                   (properties-file, optional)
//! 3. envdump-<profile>.toml         (properties-file, optional, per profile)
//! 4. --config                       (properties-file, required)
//! 5. ENVDUMP_* env vars             (system-environment)
//! 6. --set / --profile              (command-line)
//! ```
//!
//! Every layer is kept so the report can show where values came from.
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ENVDUMP_LOGGING__LEVEL=4           → logging.level = 4
//! ENVDUMP_PROFILES__ACTIVE=dev,eu    → profiles.active = ["dev", "eu"]
//! ENVDUMP_REPORT__REDACT=*SECRET*    → report.redact = ["*SECRET*"]
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::report::redact::Redactor;

use loader::ConfigLoader;
use types::{LoggingConfig, ProfilesConfig, ReportConfig};

/// Built-in defaults, applied as the lowest-precedence layer.
pub const DEFAULTS_TOML: &str = r#"
[logging]
level = 3

[profiles]
active = []
default = ["default"]

[report]
redact = []
"#;

/// Prefix of environment variables read as configuration.
pub const ENV_PREFIX: &str = "ENVDUMP";

/// Keys whose values are lists; comma-separated when given as a string.
pub const LIST_KEYS: [&str; 3] = ["profiles.active", "profiles.default", "report.redact"];

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging options.
    pub logging: LoggingConfig,
    /// Active and default profiles.
    pub profiles: ProfilesConfig,
    /// Report rendering options.
    pub report: ReportConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use envdump::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file("config/default.toml")
    ///     .add_toml_file_optional("config/local.toml")
    ///     .with_env_prefix("ENVDUMP")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Compiles the redaction patterns.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` if a pattern is not a valid glob.
    pub fn redactor(&self) -> std::result::Result<Redactor, ConfigError> {
        Redactor::new(&self.report.redact)
    }

    /// Validate the merged configuration.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid profile names or redaction patterns.
    pub fn validate(&self) -> Result<()> {
        self.profiles.validate()?;
        self.redactor()?;
        Ok(())
    }

    /// File log level, falling back to the console level.
    #[must_use]
    pub fn file_log_level(&self) -> crate::logging::LogLevel {
        self.logging.file_level.unwrap_or(self.logging.level)
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_logging_options(&mut options);
        self.format_profiles_options(&mut options);
        self.format_report_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_logging_options(&self, options: &mut BTreeMap<String, String>) {
        let fmt = |p: &Option<PathBuf>| {
            p.as_ref()
                .map_or_else(String::new, |p| p.display().to_string())
        };

        options.insert(
            "logging.level".into(),
            self.logging.level.as_u8().to_string(),
        );
        options.insert(
            "logging.file_level".into(),
            self.file_log_level().as_u8().to_string(),
        );
        options.insert("logging.file".into(), fmt(&self.logging.file));
    }

    fn format_profiles_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("profiles.active".into(), self.profiles.active.join(", "));
        options.insert("profiles.default".into(), self.profiles.default.join(", "));
    }

    fn format_report_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("report.redact".into(), self.report.redact.join(", "));
    }
}
