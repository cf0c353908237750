// envdump: Startup Environment Reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE       ← Additional config files (can repeat)
//! --profile NAME      ← profiles.active override
//! --set KEY=VAL       ← Direct config override
//! --define KEY=VAL    ← Runtime property (not configuration)
//! --log-level N       ← Console verbosity (0-5)
//! --file-log-level N  ← File verbosity (defaults to --log-level)
//! --log-file FILE     ← logging.file override
//!
//! Precedence: CLI flags > --set > ENVDUMP_* > --config > envdump-<profile>.toml > envdump.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::loader::parse_assignment;
use crate::core::env::Snapshot;
use crate::error::ConfigError;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Active profile(s), comma-separated or repeated.
    #[arg(
        short = 'p',
        long = "profile",
        value_name = "NAME",
        value_delimiter = ',',
        env = "ENVDUMP_PROFILES_ACTIVE",
        action = clap::ArgAction::Append
    )]
    pub profiles: Vec<String>,

    /// Sets a configuration option, such as 'report.redact=*TOKEN*'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "OPTION", action = clap::ArgAction::Append)]
    pub options: Vec<String>,

    /// Defines a runtime property, such as 'region=eu'.
    /// Can be specified multiple times.
    #[arg(short = 'D', long = "define", value_name = "PROPERTY", action = clap::ArgAction::Append)]
    pub defines: Vec<String>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Disables auto loading of envdump.toml and profile files, only uses --config.
    #[arg(long = "no-default-config")]
    pub no_default_config: bool,
}

impl GlobalOptions {
    /// Converts command-line options to configuration overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<String> {
        let mut overrides = self.options.clone();

        if !self.profiles.is_empty() {
            overrides.push(format!("profiles.active={}", self.profiles.join(",")));
        }

        if let Some(level) = self.log_level {
            overrides.push(format!("logging.level={level}"));
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(format!("logging.file_level={level}"));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(format!("logging.file={}", path.display()));
        }

        overrides
    }

    /// Runtime properties given with `--define`.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidAssignment` for a definition without `=`.
    pub fn defines(&self) -> Result<Snapshot, ConfigError> {
        self.defines
            .iter()
            .map(|define| parse_assignment("--define", define))
            .collect()
    }
}
