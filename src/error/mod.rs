// envdump: Startup Environment Reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!          EnvdumpError (~16 bytes)
//!                  |
//!      +-----------+-----------+
//!      |           |           |
//!      v           v           v
//!   Config      Report        Io
//!    Box         Box          Box
//!
//! Sub-errors (unboxed internally):
//!   Config  ParseError, InvalidValue, InvalidAssignment, NotFound
//!   Report  MissingEnvironment, SearchPathTooDeep
//! ```
//!
//! Report errors are precondition violations only. Gaps in the host data
//! (empty maps, non-standard environments, opaque loaders) are rendered as
//! explanatory report lines and never surface here.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvdumpError`].
pub type EnvdumpResult<T> = std::result::Result<T, EnvdumpError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~16 bytes on the stack.
#[derive(Debug, Error)]
pub enum EnvdumpError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Report precondition violated.
    #[error("report error: {0}")]
    Report(#[from] Box<ReportError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for EnvdumpError {
                fn from(err: $error) -> Self {
                    EnvdumpError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    ReportError => Report,
    std::io::Error => Io,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration source.
    #[error("failed to parse config source '{source_name}': {message}")]
    ParseError {
        source_name: String,
        message: String,
    },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Malformed `KEY=VALUE` assignment given on the command line.
    #[error("invalid {option} assignment '{assignment}': expected KEY=VALUE")]
    InvalidAssignment { option: String, assignment: String },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}

// --- Report Errors ---

/// Precondition violations detected before a report is emitted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    /// The host did not provide an environment abstraction.
    #[error("no host environment available to report on")]
    MissingEnvironment,

    /// The search-path chain is longer than any acyclic ancestry should be.
    #[error("search-path chain exceeds {limit} nodes; the host ancestry is likely cyclic")]
    SearchPathTooDeep { limit: usize },
}

#[cfg(test)]
mod tests;
