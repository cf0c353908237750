// envdump: Startup Environment Reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, EnvdumpError, EnvdumpResult, ReportError};

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        section: "logging".to_string(),
        key: "level".to_string(),
        message: "log level must be 0-5, got 9".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'level' in section '[logging]': log level must be 0-5, got 9"
    );
}

#[test]
fn test_invalid_assignment_display() {
    let err = ConfigError::InvalidAssignment {
        option: "--set".to_string(),
        assignment: "novalue".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid --set assignment 'novalue': expected KEY=VALUE"
    );
}

#[test]
fn test_report_error_wraps_into_top_level() {
    let err: EnvdumpError = ReportError::SearchPathTooDeep { limit: 256 }.into();
    insta::assert_snapshot!(
        err.to_string(),
        @"report error: search-path chain exceeds 256 nodes; the host ancestry is likely cyclic"
    );
}

#[test]
fn test_config_error_wraps_into_top_level() {
    let err: EnvdumpError = ConfigError::NotFound("envdump.toml".to_string()).into();
    assert_eq!(err.to_string(), "config error: config file not found: envdump.toml");
}

#[test]
fn test_io_error_wraps_into_top_level() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: EnvdumpResult<()> = Err(io.into());
    assert!(matches!(err, Err(EnvdumpError::Io(_))));
}

#[test]
fn test_envdump_error_size() {
    // Every variant is a thin Box: pointer + discriminant = 16 bytes
    let size = std::mem::size_of::<EnvdumpError>();
    assert!(size <= 16, "EnvdumpError is {size} bytes, expected <= 16");
}

#[test]
fn test_envdump_result_size() {
    let size = std::mem::size_of::<EnvdumpResult<()>>();
    assert!(size <= 16, "EnvdumpResult<()> is {size} bytes, expected <= 16");
}
