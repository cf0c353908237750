// envdump: Startup Environment Reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment and property snapshots.
//!
//! # Architecture
//!
//! ```text
//! Snapshot (shared, immutable BTreeMap<String, String>)
//! Sources: current_env(), Snapshot::from_map(), FromIterator
//! Ops: get/iter (sorted by key)/len
//! ```
//!
//! - **Ordinal order**: keys iterate in byte order, which is the order the
//!   report prints them in
//! - **Immutable**: clones share data, nothing mutates after capture
//! - **UTF-8 internal**: non-UTF-8 OS strings are converted lossily on capture

pub mod snapshot;

#[cfg(test)]
mod tests;

pub use snapshot::Snapshot;

/// Captures the current process environment.
///
/// Variables whose name or value is not valid UTF-8 are kept with the
/// invalid sequences replaced, so nothing silently disappears from a dump.
#[must_use]
pub fn current_env() -> Snapshot {
    std::env::vars_os()
        .map(|(key, value)| {
            (
                key.to_string_lossy().into_owned(),
                value.to_string_lossy().into_owned(),
            )
        })
        .collect()
}

/// Splits a `PATH`-style value into its entries.
///
/// Uses semicolon on Windows, colon on Unix. Empty entries are dropped.
#[must_use]
pub fn split_path_list(value: &str) -> Vec<String> {
    std::env::split_paths(value)
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| p.display().to_string())
        .collect()
}
