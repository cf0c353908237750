// envdump: Startup Environment Reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the environment module.

use super::{Snapshot, current_env, split_path_list};
use std::collections::{BTreeMap, HashMap};

#[test]
fn test_snapshot_iterates_sorted_by_key() {
    let mut unordered = HashMap::new();
    unordered.insert("ZETA", "3");
    unordered.insert("ALPHA", "1");
    unordered.insert("Mid", "2");
    unordered.insert("_under", "4");

    let snapshot: Snapshot = unordered.into_iter().collect();
    let keys: Vec<_> = snapshot.iter().map(|(k, _)| k).collect();

    // Ordinal order: uppercase before underscore before lowercase.
    assert_eq!(keys, ["ALPHA", "Mid", "ZETA", "_under"]);
}

#[test]
fn test_snapshot_get_is_exact() {
    let snapshot: Snapshot = [("PATH", "/usr/bin")].into_iter().collect();

    assert_eq!(snapshot.get("PATH"), Some("/usr/bin"));
    assert_eq!(snapshot.get("path"), None);
    assert_eq!(snapshot.len(), 1);
}

#[test]
fn test_snapshot_display() {
    let empty = Snapshot::new();
    let filled: Snapshot = [("b", "2"), ("a", "1")].into_iter().collect();

    insta::assert_snapshot!(empty.to_string(), @"{}");
    insta::assert_snapshot!(filled.to_string(), @"{a=1, b=2}");
}

#[test]
fn test_snapshot_clone_shares_data() {
    let mut map = BTreeMap::new();
    map.insert("KEY1".to_string(), "value1".to_string());
    let original = Snapshot::from_map(map);
    let copy = original.clone();

    assert_eq!(original, copy);
    assert_eq!(copy.to_map().len(), 1);
}

#[test]
fn test_snapshot_merged_with_overrides() {
    let base: Snapshot = [("os.name", "linux"), ("app.name", "envdump")]
        .into_iter()
        .collect();
    let defines: Snapshot = [("app.name", "custom"), ("extra", "yes")]
        .into_iter()
        .collect();

    let merged = base.merged_with(&defines);

    insta::assert_snapshot!(merged.to_string(), @"{app.name=custom, extra=yes, os.name=linux}");
    // Inputs are untouched.
    assert_eq!(base.get("app.name"), Some("envdump"));
}

#[test]
fn test_current_env() {
    // Behavioral test - PATH should exist
    let env = current_env();
    assert!(
        env.get("PATH").is_some() || env.get("Path").is_some(),
        "PATH should exist in current environment"
    );
}

#[test]
fn test_split_path_list_drops_empty_entries() {
    let separator = if cfg!(windows) { ";" } else { ":" };
    let value = format!("/usr/local/bin{separator}{separator}/usr/bin");

    assert_eq!(split_path_list(&value), ["/usr/local/bin", "/usr/bin"]);
    assert!(split_path_list("").is_empty());
}
