// envdump: Startup Environment Reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands for envdump.

use crate::cli::global::GlobalOptions;
use crate::config::loader::{ConfigLoader, LoadedConfig};
use crate::config::{Config, ENV_PREFIX};
use crate::error::{ConfigError, EnvdumpError, Result};

/// Builds the loader for the files, variables and overrides named by `global`.
///
/// # Errors
///
/// Returns an error if a `--config` file does not exist, a `--set` value is
/// not `KEY=VALUE`, or the current directory cannot be read.
pub fn config_loader(global: &GlobalOptions) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();

    if !global.no_default_config {
        let cwd = std::env::current_dir().map_err(EnvdumpError::from)?;
        loader = loader.with_default_files(cwd);
    }

    for path in &global.configs {
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }
        loader = loader.add_toml_file(path);
    }

    loader = loader.with_env_prefix(ENV_PREFIX);

    for assignment in global.to_config_overrides() {
        loader = loader.set_assignment(&assignment)?;
    }

    Ok(loader)
}

/// Loads the configuration and its sources.
///
/// # Errors
///
/// See [`config_loader`] and [`ConfigLoader::load`].
pub fn load_config(global: &GlobalOptions) -> Result<LoadedConfig> {
    config_loader(global)?.load()
}

/// Display current configuration options.
pub fn run_options_command(config: &Config) {
    for line in config.format_options() {
        println!("{line}");
    }
}

/// Display configuration property sources, lowest precedence first.
pub fn run_sources_command(loaded: &LoadedConfig) {
    for line in loaded.format_sources() {
        println!("{line}");
    }
}
