// envdump: Startup Environment Reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `report` command.
//!
//! ```text
//! LoadedConfig + --define
//!        |
//!        v
//! ProcessEnvironment::capture()
//!        |
//!        v
//! EnvironmentReporter::on_startup()  -> INFO lines under envdump::report
//! ```

use crate::cli::global::GlobalOptions;
use crate::config::loader::LoadedConfig;
use crate::core::host::HostEnvironment;
use crate::core::host::process::{CaptureOptions, ProcessEnvironment};
use crate::error::{EnvdumpError, Result};
use crate::report::{EnvironmentReporter, Report};

/// Captures the running process with the profiles and sources of `loaded`.
///
/// # Errors
///
/// Returns an error if a `--define` is not `KEY=VALUE`.
pub fn capture_environment(
    global: &GlobalOptions,
    loaded: &LoadedConfig,
) -> Result<ProcessEnvironment> {
    let options = CaptureOptions::builder()
        .with_active_profiles(loaded.config.profiles.active.clone())
        .with_default_profiles(loaded.config.profiles.default.clone())
        .with_property_sources(loaded.sources.clone())
        .with_config_dirs(loaded.config_dirs.clone())
        .with_defines(global.defines()?)
        .build();

    Ok(ProcessEnvironment::capture(options))
}

/// Run the report command.
///
/// # Errors
///
/// Returns an error if the environment cannot be captured, the redaction
/// patterns are invalid, or the report cannot be produced.
pub fn run_report_command(global: &GlobalOptions, loaded: &LoadedConfig) -> Result<Report> {
    let environment = capture_environment(global, loaded)?;
    let reporter = EnvironmentReporter::new().with_redactor(loaded.config.redactor()?);

    let host: &dyn HostEnvironment = &environment;
    let report = reporter
        .on_startup(Some(host))
        .map_err(EnvdumpError::from)?;
    tracing::debug!(lines = report.len(), "environment report written");

    Ok(report)
}
