// envdump: Startup Environment Reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for envdump using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envdump [global options] [command]
//! report    (default)
//! sources
//! options
//! version
//! ```

pub mod global;


use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Startup Environment Reporter
///
/// Logs the process environment, runtime properties, configuration sources
/// and search paths.
#[derive(Debug, Parser)]
#[command(
    name = "envdump",
    author,
    version,
    about = "Startup Environment Reporter",
    long_about = "envdump Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Logs a diagnostic dump of the environment the process starts in:\n\
                  environment variables, runtime properties, configuration property\n\
                  sources and the search-path chain.\n\n\
                  Invoking `envdump` with no command writes the report. See\n\
                  `envdump <command> --help` for more information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  By default, envdump reads `envdump.toml` from the current directory,\n\
                  then `envdump-<profile>.toml` for every active profile. Additional\n\
                  files can be given with --config, those are loaded after the default\n\
                  ones. ENVDUMP_* environment variables and --set override all files.\n\
                  Use --no-default-config to only use --config."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Writes the environment report to the log (default).
    Report,

    /// Lists the configuration property sources, lowest precedence first.
    Sources,

    /// Lists all options and their merged values.
    Options,

    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
