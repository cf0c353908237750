// envdump: Startup Environment Reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Named configuration property sources.
//!
//! ```text
//! PropertySources (ordered, lowest precedence first)
//!   [0] defaults          kind=map                 source={...}
//!   [1] envdump.toml      kind=properties-file     source={...}
//!   [2] ENVDUMP_*         kind=system-environment  source={...}
//!   [3] commandLineArgs   kind=command-line        source=<not dumped>
//! ```
//!
//! The kind tag is a free-form string chosen by the host. Only kinds in
//! [`DUMPABLE_SOURCE_KINDS`] have their contents shown in a report.

use std::fmt;

use crate::core::env::Snapshot;

/// Well-known property source kind tags.
pub mod kind {
    /// In-memory map, e.g. built-in defaults.
    pub const MAP: &str = "map";
    /// A configuration file on disk or an inline configuration document.
    pub const PROPERTIES_FILE: &str = "properties-file";
    /// Variables taken from the OS environment.
    pub const SYSTEM_ENVIRONMENT: &str = "system-environment";
    /// Overrides given on the command line.
    pub const COMMAND_LINE: &str = "command-line";
}

/// Kinds whose nested contents are rendered in a report.
pub const DUMPABLE_SOURCE_KINDS: [&str; 3] =
    [kind::MAP, kind::PROPERTIES_FILE, kind::SYSTEM_ENVIRONMENT];

/// Returns true if sources of this kind have their contents dumped.
#[must_use]
pub fn is_dumpable_kind(kind: &str) -> bool {
    DUMPABLE_SOURCE_KINDS.contains(&kind)
}

/// One named origin of configuration values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySource {
    name: String,
    kind: String,
    source: Option<Snapshot>,
}

impl PropertySource {
    /// Creates a source with flattened contents.
    pub fn new(name: impl Into<String>, kind: impl Into<String>, source: Snapshot) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            source: Some(source),
        }
    }

    /// Creates a source that does not expose its contents.
    pub fn opaque(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            source: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Nested key-value contents, if the source exposes them.
    #[must_use]
    pub const fn source(&self) -> Option<&Snapshot> {
        self.source.as_ref()
    }

    #[must_use]
    pub fn is_dumpable(&self) -> bool {
        is_dumpable_kind(&self.kind)
    }
}

impl fmt::Display for PropertySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.kind)
    }
}

/// Ordered collection of property sources, lowest precedence first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySources {
    sources: Vec<PropertySource>,
}

impl PropertySources {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Adds a source with higher precedence than every source already present.
    pub fn push(&mut self, source: PropertySource) -> &mut Self {
        self.sources.push(source);
        self
    }

    /// Finds a source by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropertySource> {
        self.sources.iter().find(|s| s.name == name)
    }

    /// Iterates in precedence order, lowest first.
    pub fn iter(&self) -> std::slice::Iter<'_, PropertySource> {
        self.sources.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl FromIterator<PropertySource> for PropertySources {
    fn from_iter<I: IntoIterator<Item = PropertySource>>(iter: I) -> Self {
        Self {
            sources: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PropertySources {
    type Item = &'a PropertySource;
    type IntoIter = std::slice::Iter<'a, PropertySource>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Describes the collection as `[name [kind], ...]`.
impl fmt::Display for PropertySources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, source) in self.sources.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{source}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests;
