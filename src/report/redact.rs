// envdump: Startup Environment Reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Value masking for sensitive keys.
//!
//! ```text
//! patterns: ["*PASSWORD*", "*token*"]   (wax globs, matched on the key)
//! DB_PASSWORD=hunter2      ->  DB_PASSWORD=[hidden]
//! db.password=hunter2      ->  db.password=[hidden]
//! svc/DB_PASSWORD=hunter2  ->  svc/DB_PASSWORD=[hidden]
//! ```
//!
//! Patterns are case-insensitive, since configuration layers lowercase
//! environment keys. A leading `(?-i)` turns that off for one pattern. Keys
//! are not paths: a key matches if the whole key or any of its
//! `/`-separated segments matches.

use wax::{Glob, Program as _};

use crate::error::ConfigError;

/// Replacement for masked values.
pub const HIDDEN: &str = "[hidden]";

/// Masks values whose key matches any configured glob.
#[derive(Debug, Clone, Default)]
pub struct Redactor {
    patterns: Vec<Glob<'static>>,
}

impl Redactor {
    /// A redactor that masks nothing.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Compiles key globs, case-insensitive unless the pattern starts with
    /// its own flag group.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` naming the first pattern that is
    /// not a valid glob.
    pub fn new<I, S>(patterns: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                let source = if pattern.starts_with("(?") {
                    pattern.to_string()
                } else {
                    format!("(?i){pattern}")
                };
                Glob::new(&source)
                    .map(Glob::into_owned)
                    .map_err(|e| ConfigError::InvalidValue {
                        section: "report".to_string(),
                        key: "redact".to_string(),
                        message: format!("invalid pattern '{pattern}': {e}"),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    #[must_use]
    pub fn is_redacted(&self, key: &str) -> bool {
        self.patterns.iter().any(|glob| {
            glob.is_match(key) || key.split('/').any(|segment| glob.is_match(segment))
        })
    }

    /// The value to print for `key`.
    #[must_use]
    pub fn value<'a>(&self, key: &str, value: &'a str) -> &'a str {
        if self.is_redacted(key) { HIDDEN } else { value }
    }
}
