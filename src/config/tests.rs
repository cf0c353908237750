// envdump: Startup Environment Reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs;
use std::path::PathBuf;

use super::loader::{ConfigLoader, parse_assignment, split_list};
use super::{Config, LIST_KEYS};
use crate::core::sources::kind;
use crate::error::ConfigError;
use crate::logging::LogLevel;

#[test]
fn test_default_config_matches_builtin_defaults() {
    let loaded = ConfigLoader::new().build().unwrap();

    assert_eq!(loaded, Config::default());
    assert_eq!(loaded.logging.level, LogLevel::INFO);
    assert_eq!(loaded.profiles.default, ["default"]);
    assert!(loaded.profiles.active.is_empty());
    assert!(loaded.report.redact.is_empty());
}

#[test]
fn test_parse_toml() {
    let config = Config::parse(
        r#"
[logging]
level = 4
file = "envdump.log"

[profiles]
active = ["dev", "eu"]

[report]
redact = ["*SECRET*"]
"#,
    )
    .unwrap();

    assert_eq!(config.logging.level, LogLevel::DEBUG);
    assert_eq!(config.logging.file, Some(PathBuf::from("envdump.log")));
    assert_eq!(config.file_log_level(), LogLevel::DEBUG);
    assert_eq!(config.profiles.active, ["dev", "eu"]);
    assert_eq!(config.report.redact, ["*SECRET*"]);
}

#[test]
fn test_unknown_section_key_is_rejected() {
    let result = Config::parse("[logging]\ncolour = true\n");
    assert!(result.is_err());
}

#[test]
fn test_env_overrides_file() {
    let config = ConfigLoader::new()
        .add_toml_str("[logging]\nlevel = 2\n")
        .with_env_prefix("ENVDUMP")
        .with_env_source([
            ("ENVDUMP_LOGGING__LEVEL", "4"),
            ("ENVDUMP_PROFILES__ACTIVE", "dev,eu"),
            ("ENVDUMP_REPORT__REDACT", "*TOKEN*"),
            ("UNRELATED", "ignored"),
        ])
        .build()
        .unwrap();

    assert_eq!(config.logging.level, LogLevel::DEBUG);
    assert_eq!(config.profiles.active, ["dev", "eu"]);
    assert_eq!(config.report.redact, ["*TOKEN*"]);
}

#[test]
fn test_set_overrides_env() {
    let config = ConfigLoader::new()
        .with_env_prefix("ENVDUMP")
        .with_env_source([("ENVDUMP_LOGGING__LEVEL", "4")])
        .set("logging.level", "1")
        .set("report.redact", "*KEY*, *TOKEN*")
        .build()
        .unwrap();

    assert_eq!(config.logging.level, LogLevel::ERROR);
    assert_eq!(config.report.redact, ["*KEY*", "*TOKEN*"]);
}

#[test]
fn test_set_assignment() {
    let config = ConfigLoader::new()
        .set_assignment("logging.level=5")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.logging.level, LogLevel::TRACE);

    let err = ConfigLoader::new().set_assignment("logging.level").err().unwrap();
    assert!(err.to_string().contains("expected KEY=VALUE"));
}

#[test]
fn test_parse_assignment() {
    assert_eq!(
        parse_assignment("--set", " a.b =x=y").unwrap(),
        ("a.b".to_string(), "x=y".to_string())
    );
    assert_eq!(
        parse_assignment("--set", "empty=").unwrap(),
        ("empty".to_string(), String::new())
    );
    assert!(matches!(
        parse_assignment("-D", "=value"),
        Err(ConfigError::InvalidAssignment { option, .. }) if option == "-D"
    ));
}

#[test]
fn test_split_list() {
    assert_eq!(split_list(" a, b ,,c "), ["a", "b", "c"]);
    assert!(split_list("").is_empty());
    assert!(LIST_KEYS.contains(&"profiles.active"));
}

#[test]
fn test_missing_required_file() {
    let result = Config::from_file("/nonexistent/envdump-config.toml");
    assert!(result.is_err());
}

#[test]
fn test_optional_file_skipped_when_missing() {
    let loaded = ConfigLoader::new()
        .add_toml_file_optional("/nonexistent/envdump-config.toml")
        .load()
        .unwrap();

    assert_eq!(loaded.sources.len(), 1);
    assert!(loaded.config_dirs.is_empty());
}

#[test]
fn test_default_files_and_profile_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("envdump.toml"),
        "[profiles]\nactive = [\"dev\"]\n\n[logging]\nlevel = 2\n",
    )
    .unwrap();
    fs::write(dir.path().join("envdump-dev.toml"), "[logging]\nlevel = 5\n").unwrap();
    fs::write(dir.path().join("envdump-prod.toml"), "[logging]\nlevel = 1\n").unwrap();

    let loaded = ConfigLoader::new()
        .with_default_files(dir.path())
        .load()
        .unwrap();

    assert_eq!(loaded.config.profiles.active, ["dev"]);
    assert_eq!(loaded.config.logging.level, LogLevel::TRACE);
    assert_eq!(loaded.config_dirs, [dir.path().to_path_buf()]);

    let kinds: Vec<_> = loaded.sources.iter().map(|s| s.kind()).collect();
    assert_eq!(
        kinds,
        [kind::MAP, kind::PROPERTIES_FILE, kind::PROPERTIES_FILE]
    );
    assert!(loaded.sources.iter().nth(2).unwrap().name().ends_with("envdump-dev.toml"));
}

#[test]
fn test_profile_override_selects_other_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("envdump.toml"),
        "[profiles]\nactive = [\"dev\"]\n",
    )
    .unwrap();
    fs::write(dir.path().join("envdump-dev.toml"), "[logging]\nlevel = 5\n").unwrap();
    fs::write(dir.path().join("envdump-prod.toml"), "[logging]\nlevel = 1\n").unwrap();

    let config = ConfigLoader::new()
        .with_default_files(dir.path())
        .set("profiles.active", "prod")
        .build()
        .unwrap();

    assert_eq!(config.profiles.active, ["prod"]);
    assert_eq!(config.logging.level, LogLevel::ERROR);
}

#[test]
fn test_profile_file_cannot_activate_profiles() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("envdump-dev.toml"),
        "[profiles]\nactive = [\"dev\", \"extra\"]\n",
    )
    .unwrap();

    let config = ConfigLoader::new()
        .with_default_files(dir.path())
        .set("profiles.active", "dev")
        .build()
        .unwrap();

    assert_eq!(config.profiles.active, ["dev"]);
}

#[test]
fn test_invalid_profile_name() {
    let err = ConfigLoader::new()
        .set("profiles.active", "../etc")
        .build()
        .unwrap_err();

    assert!(err.to_string().contains("invalid profile name"));
}

#[test]
fn test_invalid_redact_pattern() {
    let err = Config::parse("[report]\nredact = [\"{unclosed\"]\n").unwrap_err();
    let config_err = err.downcast_ref::<ConfigError>().unwrap();

    assert!(matches!(
        config_err,
        ConfigError::InvalidValue { section, key, .. } if section == "report" && key == "redact"
    ));
}

#[test]
fn test_property_sources_in_precedence_order() {
    let loaded = ConfigLoader::new()
        .add_toml_str("[logging]\nlevel = 2\n")
        .with_env_prefix("ENVDUMP")
        .with_env_source([("ENVDUMP_LOGGING__LEVEL", "4")])
        .set("report.redact", "*KEY*")
        .load()
        .unwrap();

    insta::assert_snapshot!(loaded.format_sources().join("\n"), @r"
    1. [map] defaults
    2. [properties-file] <string #1>
    3. [system-environment] systemEnvironment
    4. [command-line] commandLineArgs
    ");

    let sources: Vec<_> = loaded.sources.iter().collect();
    let defaults = sources[0].source().unwrap();
    assert_eq!(defaults.get("logging.level"), Some("3"));
    assert_eq!(defaults.get("profiles.default[0]"), Some("default"));
    assert_eq!(defaults.get("profiles.active"), Some("[]"));
    assert_eq!(defaults.get("report.redact"), Some("[]"));
    assert_eq!(sources[1].source().unwrap().get("logging.level"), Some("2"));
    assert_eq!(sources[2].source().unwrap().get("logging.level"), Some("4"));
    assert!(sources[3].source().is_none());
}

#[test]
fn test_empty_collections_stay_visible_in_sources() {
    let loaded = ConfigLoader::new()
        .add_toml_str("[report]\n")
        .add_toml_str("[profiles]\nactive = []\n")
        .load()
        .unwrap();

    let sources: Vec<_> = loaded.sources.iter().collect();
    let empty_table = sources[1].source().unwrap();
    assert_eq!(empty_table.get("report"), Some("{}"));

    let empty_array = sources[2].source().unwrap();
    assert_eq!(empty_array.get("profiles.active"), Some("[]"));
}

#[test]
fn test_format_options() {
    let config = Config::parse(
        r#"
[logging]
level = 4
file = "envdump.log"

[profiles]
active = ["dev"]

[report]
redact = ["*TOKEN*"]
"#,
    )
    .unwrap();

    insta::assert_snapshot!(config.format_options().join("\n"), @r"
    logging.file       = envdump.log
    logging.file_level = 4
    logging.level      = 4
    profiles.active    = dev
    profiles.default   = default
    report.redact      = *TOKEN*
    ");
}
