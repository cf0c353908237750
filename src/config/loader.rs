// envdump: Startup Environment Reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .with_default_files(dir)   envdump.toml + envdump-<profile>.toml
//!   .add_toml_file(req)
//!   .add_toml_str()
//!   .with_env_prefix()
//!   .set()
//!        |
//!        v
//!    load()
//!      1. merge without profile files  -> profiles.active
//!      2. merge with profile files     -> Config
//!      3. collect every layer          -> PropertySources
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use config::{Environment, File, FileFormat, Source, Value, ValueKind};

use super::{Config, DEFAULTS_TOML, LIST_KEYS};
use crate::core::env::Snapshot;
use crate::core::sources::{PropertySource, PropertySources, kind};
use crate::error::{ConfigError, Result};

/// Name of the built-in defaults source.
pub const DEFAULTS_SOURCE: &str = "defaults";

/// Name of the prefixed environment variable source.
pub const ENVIRONMENT_SOURCE: &str = "systemEnvironment";

/// Name of the command-line override source.
pub const COMMAND_LINE_SOURCE: &str = "commandLineArgs";

/// Base name of the default configuration files.
pub const DEFAULT_CONFIG_NAME: &str = "envdump";

/// One configuration layer, kept so it can be reported on its own.
struct Layer {
    name: String,
    kind: &'static str,
    source: Box<dyn Source + Send + Sync>,
}

impl Layer {
    fn toml_file(path: &Path, required: bool) -> Self {
        Self {
            name: path.display().to_string(),
            kind: kind::PROPERTIES_FILE,
            source: Box::new(File::from(path).format(FileFormat::Toml).required(required)),
        }
    }

    fn toml_str(name: impl Into<String>, kind: &'static str, content: &str) -> Self {
        Self {
            name: name.into(),
            kind,
            source: Box::new(File::from_str(content, FileFormat::Toml)),
        }
    }
}

impl Clone for Layer {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            kind: self.kind,
            source: self.source.clone_into_box(),
        }
    }
}

/// Result of [`ConfigLoader::load`].
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The merged configuration.
    pub config: Config,
    /// Every layer that contributed, lowest precedence first.
    pub sources: PropertySources,
    /// Directories configuration files were looked up in.
    pub config_dirs: Vec<PathBuf>,
}

impl LoadedConfig {
    /// One line per source: `1. [kind] name`.
    #[must_use]
    pub fn format_sources(&self) -> Vec<String> {
        self.sources
            .iter()
            .enumerate()
            .map(|(i, source)| format!("{}. [{}] {}", i + 1, source.kind(), source.name()))
            .collect()
    }
}

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    search_dirs: Vec<PathBuf>,
    explicit: Vec<Layer>,
    explicit_dirs: Vec<PathBuf>,
    env_prefix: Option<String>,
    env_source: Option<config::Map<String, String>>,
    overrides: Vec<(String, String)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            search_dirs: Vec::new(),
            explicit: Vec::new(),
            explicit_dirs: Vec::new(),
            env_prefix: None,
            env_source: None,
            overrides: Vec::new(),
        }
    }

    /// Looks for the default file and profile files in `dir`.
    ///
    /// Missing files are skipped.
    #[must_use]
    pub fn with_default_files<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.search_dirs.push(dir.as_ref().to_path_buf());
        self
    }

    /// Adds a TOML configuration file to the loader.
    ///
    /// The file will be read when `load()` is called. If the file doesn't exist
    /// or contains invalid TOML, `load()` will return an error.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        let p = path.as_ref();
        self.explicit.push(Layer::toml_file(p, true));
        self.remember_dir(p);
        self
    }

    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        let p = path.as_ref();
        if p.exists() {
            self.explicit.push(Layer::toml_file(p, false));
            self.remember_dir(p);
        }
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        let name = format!("<string #{}>", self.explicit.len() + 1);
        self.explicit
            .push(Layer::toml_str(name, kind::PROPERTIES_FILE, content));
        self
    }

    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Reads prefixed variables from `vars` instead of the process environment.
    #[must_use]
    pub fn with_env_source<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env_source = Some(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Sets a configuration override.
    ///
    /// List keys (see [`LIST_KEYS`]) take a comma-separated value.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.push((key.into(), value.into()));
        self
    }

    /// Sets an override given as `KEY=VALUE`.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidAssignment` if there is no `=` or the
    /// key is empty.
    pub fn set_assignment(self, assignment: &str) -> Result<Self> {
        let (key, value) = parse_assignment("--set", assignment)?;
        Ok(self.set(key, value))
    }

    /// Builds the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn build(self) -> Result<Config> {
        self.load().map(|loaded| loaded.config)
    }

    /// Loads the configuration and the sources it was merged from.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required configuration files are missing.
    /// - Configuration files have invalid TOML syntax.
    /// - Overrides or environment variables cannot be converted.
    /// - The merged configuration cannot be deserialized or fails validation.
    pub fn load(self) -> Result<LoadedConfig> {
        let bootstrap = self.merge(&self.layers(&[]))?;
        bootstrap.profiles.validate()?;
        let profiles = bootstrap.profiles.active;

        let layers = self.layers(&profiles);
        let mut config = self.merge(&layers)?;
        // Profile files cannot switch profiles on.
        config.profiles.active = profiles;
        config.validate()?;

        let sources = self.property_sources(&layers)?;
        tracing::debug!(
            layers = layers.len(),
            profiles = ?config.profiles.active,
            "configuration loaded"
        );

        Ok(LoadedConfig {
            config,
            sources,
            config_dirs: self.config_dirs(),
        })
    }

    fn remember_dir(&mut self, path: &Path) {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !self.explicit_dirs.contains(&dir) {
            self.explicit_dirs.push(dir);
        }
    }

    fn config_dirs(&self) -> Vec<PathBuf> {
        let mut dirs = self.search_dirs.clone();
        for dir in &self.explicit_dirs {
            if !dirs.contains(dir) {
                dirs.push(dir.clone());
            }
        }
        dirs
    }

    fn layers(&self, profiles: &[String]) -> Vec<Layer> {
        let mut layers = vec![Layer::toml_str(DEFAULTS_SOURCE, kind::MAP, DEFAULTS_TOML)];

        let file_names = std::iter::once(format!("{DEFAULT_CONFIG_NAME}.toml")).chain(
            profiles
                .iter()
                .map(|profile| format!("{DEFAULT_CONFIG_NAME}-{profile}.toml")),
        );
        for file_name in file_names {
            for dir in &self.search_dirs {
                let path = dir.join(&file_name);
                if path.is_file() {
                    tracing::debug!(path = %path.display(), "found configuration file");
                    layers.push(Layer::toml_file(&path, false));
                }
            }
        }

        layers.extend(self.explicit.iter().cloned());

        if let Some(prefix) = &self.env_prefix {
            let mut env = Environment::with_prefix(prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(",");
            for key in LIST_KEYS {
                env = env.with_list_parse_key(key);
            }
            if let Some(vars) = &self.env_source {
                env = env.source(Some(vars.clone()));
            }
            layers.push(Layer {
                name: ENVIRONMENT_SOURCE.to_string(),
                kind: kind::SYSTEM_ENVIRONMENT,
                source: Box::new(env),
            });
        }

        layers
    }

    fn merge(&self, layers: &[Layer]) -> Result<Config> {
        let sources: Vec<Box<dyn Source + Send + Sync>> = layers
            .iter()
            .map(|layer| layer.source.clone_into_box())
            .collect();
        let mut builder = config::Config::builder().add_source(sources);

        for (key, value) in &self.overrides {
            let applied = if LIST_KEYS.contains(&key.as_str()) {
                builder.set_override(key, split_list(value))
            } else {
                builder.set_override(key, value.as_str())
            };
            builder = applied.map_err(|e| ConfigError::ParseError {
                source_name: COMMAND_LINE_SOURCE.to_string(),
                message: e.to_string(),
            })?;
        }

        let merged = builder.build()?;
        let config: Config = merged.try_deserialize()?;
        Ok(config)
    }

    fn property_sources(&self, layers: &[Layer]) -> Result<PropertySources> {
        let mut sources = layers
            .iter()
            .map(|layer| -> Result<PropertySource> {
                let values = layer.source.collect()?;
                Ok(PropertySource::new(
                    layer.name.clone(),
                    layer.kind,
                    flatten(&values),
                ))
            })
            .collect::<Result<PropertySources>>()?;

        if !self.overrides.is_empty() {
            sources.push(PropertySource::opaque(
                COMMAND_LINE_SOURCE,
                kind::COMMAND_LINE,
            ));
        }
        Ok(sources)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits `KEY=VALUE` at the first `=`.
///
/// # Errors
///
/// Returns a `ConfigError::InvalidAssignment` naming `option` if there is no
/// `=` or the key is empty.
pub fn parse_assignment(
    option: &str,
    assignment: &str,
) -> std::result::Result<(String, String), ConfigError> {
    match assignment.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(ConfigError::InvalidAssignment {
            option: option.to_string(),
            assignment: assignment.to_string(),
        }),
    }
}

/// Splits a comma-separated list, dropping blanks.
#[must_use]
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Flattens nested tables and arrays into dotted keys.
///
/// Empty tables and arrays stay visible as `key={}` and `key=[]`.
fn flatten(values: &config::Map<String, Value>) -> Snapshot {
    let mut out = BTreeMap::new();
    for (key, value) in values {
        flatten_into(key, value, &mut out);
    }
    Snapshot::from_map(out)
}

fn flatten_into(prefix: &str, value: &Value, out: &mut BTreeMap<String, String>) {
    match &value.kind {
        ValueKind::Table(table) if table.is_empty() => {
            out.insert(prefix.to_string(), "{}".to_string());
        }
        ValueKind::Array(items) if items.is_empty() => {
            out.insert(prefix.to_string(), "[]".to_string());
        }
        ValueKind::Table(table) => {
            for (key, nested) in table {
                flatten_into(&format!("{prefix}.{key}"), nested, out);
            }
        }
        ValueKind::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                flatten_into(&format!("{prefix}[{i}]"), item, out);
            }
        }
        _ => {
            out.insert(prefix.to_string(), value.to_string());
        }
    }
}
