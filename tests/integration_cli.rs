// envdump: Startup Environment Reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns and
//! the configuration they produce.

use std::fs;

use clap::Parser;
use envdump::cli::{Cli, Command};
use envdump::cmd::config::{config_loader, load_config};
use envdump::config::loader::COMMAND_LINE_SOURCE;
use envdump::error::ConfigError;
use envdump::logging::LogLevel;

// =============================================================================
// Version Command
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["envdump", "version"]).unwrap();
    assert_eq!(cli.command, Some(Command::Version));
}

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["envdump", "-v"]).unwrap();
    assert_eq!(cli.command, Some(Command::Version));
}

// =============================================================================
// Options to configuration
// =============================================================================

#[test]
fn cli_flags_override_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.toml");
    fs::write(&path, "[logging]\nlevel = 1\n\n[report]\nredact = [\"*KEY*\"]\n").unwrap();

    let path = path.to_string_lossy().into_owned();
    let cli = Cli::try_parse_from([
        "envdump",
        "--no-default-config",
        "--config",
        path.as_str(),
        "-l",
        "4",
        "-s",
        "report.redact=*TOKEN*,*SECRET*",
        "-p",
        "staging",
    ])
    .unwrap();

    let loaded = load_config(&cli.global).unwrap();

    assert_eq!(loaded.config.logging.level, LogLevel::DEBUG);
    assert_eq!(loaded.config.file_log_level(), LogLevel::DEBUG);
    assert_eq!(loaded.config.report.redact, ["*TOKEN*", "*SECRET*"]);
    assert_eq!(loaded.config.profiles.active, ["staging"]);

    let last = loaded.sources.iter().last().unwrap();
    assert_eq!(last.name(), COMMAND_LINE_SOURCE);
    assert!(!last.is_dumpable());
}

#[test]
fn cli_missing_config_file() {
    let cli = Cli::try_parse_from([
        "envdump",
        "--no-default-config",
        "--config",
        "/nonexistent/envdump.toml",
    ])
    .unwrap();

    let err = config_loader(&cli.global).err().unwrap();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::NotFound(path)) if path.ends_with("envdump.toml")
    ));
}

#[test]
fn cli_invalid_set_assignment() {
    let cli = Cli::try_parse_from(["envdump", "--no-default-config", "-s", "novalue"]).unwrap();

    let err = config_loader(&cli.global).err().unwrap();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::InvalidAssignment { option, .. }) if option == "--set"
    ));
}
