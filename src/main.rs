// envdump: Startup Environment Reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Report | Sources | Options | Version
//! ```

use std::process::ExitCode;

use envdump::cli::{self, Command};
use envdump::cmd::config::{load_config, run_options_command, run_sources_command};
use envdump::cmd::report::run_report_command;
use envdump::config::Config;
use envdump::logging::{LogConfig, init_logging};
use envdump::report::REPORT_TARGET;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    if cli.command == Some(Command::Version) {
        handle_version_command();
        return ExitCode::SUCCESS;
    }

    let loaded = match load_config(&cli.global) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&loaded.config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command.unwrap_or(Command::Report) {
        Command::Report => run_report_command(&cli.global, &loaded).map(|_| ()),
        Command::Sources => {
            run_sources_command(&loaded);
            Ok(())
        }
        Command::Options => {
            run_options_command(&loaded.config);
            Ok(())
        }
        Command::Version => {
            handle_version_command();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.logging.level)
        .with_file_level(config.file_log_level())
        .with_plain_targets(vec![REPORT_TARGET.to_string()])
        .maybe_with_log_file(
            config
                .logging
                .file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .build()
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}
