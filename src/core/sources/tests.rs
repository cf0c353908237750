// envdump: Startup Environment Reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{PropertySource, PropertySources, is_dumpable_kind, kind};
use crate::core::env::Snapshot;

#[test]
fn test_dumpable_kinds() {
    assert!(is_dumpable_kind(kind::MAP));
    assert!(is_dumpable_kind(kind::PROPERTIES_FILE));
    assert!(is_dumpable_kind(kind::SYSTEM_ENVIRONMENT));
    assert!(!is_dumpable_kind(kind::COMMAND_LINE));
    assert!(!is_dumpable_kind("custom-unlisted"));
    assert!(!is_dumpable_kind("MAP"), "kind tags are case-sensitive");
}

#[test]
fn test_sources_keep_insertion_order() {
    let mut sources = PropertySources::new();
    sources
        .push(PropertySource::new("zeta", kind::MAP, Snapshot::new()))
        .push(PropertySource::opaque("alpha", kind::COMMAND_LINE))
        .push(PropertySource::new("mid", kind::PROPERTIES_FILE, Snapshot::new()));

    let names: Vec<_> = sources.iter().map(PropertySource::name).collect();
    assert_eq!(names, ["zeta", "alpha", "mid"]);
}

#[test]
fn test_sources_display() {
    let sources: PropertySources = [
        PropertySource::new("defaults", kind::MAP, Snapshot::new()),
        PropertySource::opaque("commandLineArgs", kind::COMMAND_LINE),
    ]
    .into_iter()
    .collect();

    insta::assert_snapshot!(
        sources.to_string(),
        @"[defaults [map], commandLineArgs [command-line]]"
    );
    insta::assert_snapshot!(PropertySources::new().to_string(), @"[]");
}

#[test]
fn test_source_lookup_by_name() {
    let sources: PropertySources = [PropertySource::new(
        "defaults",
        kind::MAP,
        [("logging.level", "3")].into_iter().collect(),
    )]
    .into_iter()
    .collect();

    let defaults = sources.get("defaults").unwrap();
    assert!(defaults.is_dumpable());
    assert_eq!(
        defaults.source().and_then(|s| s.get("logging.level")),
        Some("3")
    );
    assert!(sources.get("missing").is_none());
}
