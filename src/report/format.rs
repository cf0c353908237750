// envdump: Startup Environment Reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Line formats of the environment report.
//!
//! Operators diff reports between deployments, so these strings are part of
//! the output contract.

use super::redact::Redactor;
use crate::core::env::Snapshot;

/// Width of top-level banners and rules.
pub const REPORT_WIDTH: usize = 100;

/// Width of the per-source delimiters.
pub const SOURCE_WIDTH: usize = 90;

/// Indentation used for details nested under a banner.
const INDENT: &str = "     ";

/// `-- title ------...` padded with dashes to `width`.
#[must_use]
pub fn banner(marker: &str, title: &str, width: usize) -> String {
    let head = format!("{marker} {title} ");
    let fill = width.saturating_sub(head.len());
    format!("{head}{}", "-".repeat(fill))
}

/// A line of dashes.
#[must_use]
pub fn rule(width: usize) -> String {
    "-".repeat(width)
}

#[must_use]
pub fn environment_type(type_name: &str) -> String {
    format!("environment is of type {type_name}")
}

/// `label: a, b`; an empty list leaves nothing after the colon.
#[must_use]
pub fn profiles(label: &str, names: &[String]) -> String {
    format!("{label} profiles: {}", names.join(", "))
}

#[must_use]
pub fn skipped_dump(type_name: &str) -> String {
    format!(
        "environment of type {type_name} does not expose raw variables and properties, skipping environment dump"
    )
}

#[must_use]
pub fn entry(key: &str, value: &str, redactor: &Redactor) -> String {
    format!("{key}={}", redactor.value(key, value))
}

#[must_use]
pub fn sources_description(description: &str) -> String {
    format!("{INDENT}found property sources: {description}")
}

#[must_use]
pub fn source_kind(kind: &str) -> String {
    format!("{INDENT}property source kind: {kind}")
}

#[must_use]
pub fn source_name(name: &str) -> String {
    format!("{INDENT}property source name: {name}")
}

/// Nested contents as `{k1=v1, k2=v2}`; a missing map renders as `{}`.
#[must_use]
pub fn source_contents(contents: Option<&Snapshot>, redactor: &Redactor) -> String {
    let rendered = contents
        .map(|map| {
            map.iter()
                .map(|(k, v)| format!("{k}={}", redactor.value(k, v)))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default();
    format!("{INDENT}property source contents: {{{rendered}}}")
}

#[must_use]
pub fn loader_entries(type_name: &str, entries: &[String]) -> String {
    format!("loader={type_name}, [{}]", entries.join(", "))
}

#[must_use]
pub fn loader_opaque(type_name: &str) -> String {
    format!("(cannot display entries of {type_name})")
}
