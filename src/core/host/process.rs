// envdump: Startup Environment Reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Host environment backed by the running process.
//!
//! ```text
//! CaptureOptions (profiles, sources, config dirs, -D defines)
//!        |
//!        v
//! ProcessEnvironment::capture()
//!   environment_variables  <- std::env::vars_os (lossy)
//!   system_properties      <- runtime_properties() + defines
//!   search_path            <- config dirs -> PATH -> library path -> linker
//! ```

use bon::Builder;
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::{HostEnvironment, StandardEnvironment};
use crate::core::env::{Snapshot, current_env, split_path_list};
use crate::core::search_path::{SearchPathNode, SearchScope};
use crate::core::sources::PropertySources;

/// Search-path node names, leaf first.
pub const CONFIG_SEARCH_PATH: &str = "config-search-path";
pub const EXECUTABLE_SEARCH_PATH: &str = "executable-search-path";
pub const LIBRARY_SEARCH_PATH: &str = "library-search-path";
pub const SYSTEM_LINKER: &str = "system-linker";

/// Variable the platform's dynamic loader reads extra library paths from.
#[cfg(windows)]
const LIBRARY_PATH_VAR: &str = "PATH";
#[cfg(target_os = "macos")]
const LIBRARY_PATH_VAR: &str = "DYLD_LIBRARY_PATH";
#[cfg(not(any(windows, target_os = "macos")))]
const LIBRARY_PATH_VAR: &str = "LD_LIBRARY_PATH";

/// Inputs the host resolved before capturing the process.
#[derive(Debug, Clone, Default, Builder)]
pub struct CaptureOptions {
    #[builder(setters(name = with_active_profiles), default)]
    active_profiles: Vec<String>,
    #[builder(setters(name = with_default_profiles), default)]
    default_profiles: Vec<String>,
    #[builder(setters(name = with_property_sources), default)]
    property_sources: PropertySources,
    /// Directories configuration files were looked up in.
    #[builder(setters(name = with_config_dirs), default)]
    config_dirs: Vec<PathBuf>,
    /// `-D key=value` definitions; these win over captured properties.
    #[builder(setters(name = with_defines), default)]
    defines: Snapshot,
}

/// Snapshot of the running process.
#[derive(Debug, Clone)]
pub struct ProcessEnvironment {
    active_profiles: Vec<String>,
    default_profiles: Vec<String>,
    environment_variables: Snapshot,
    system_properties: Snapshot,
    property_sources: PropertySources,
    search_path: SearchScope,
}

impl ProcessEnvironment {
    /// Captures the current process environment and runtime facts.
    #[must_use]
    pub fn capture(options: CaptureOptions) -> Self {
        Self::from_parts(options, current_env(), runtime_properties())
    }

    /// Builds from already captured variables and properties.
    #[must_use]
    pub fn from_parts(options: CaptureOptions, variables: Snapshot, properties: Snapshot) -> Self {
        let system_properties = properties.merged_with(&options.defines);
        let search_path = search_path_chain(&options.config_dirs, &variables);

        tracing::debug!(
            variables = variables.len(),
            properties = system_properties.len(),
            sources = options.property_sources.len(),
            search_path = search_path.chain().count(),
            "captured process environment"
        );

        Self {
            active_profiles: options.active_profiles,
            default_profiles: options.default_profiles,
            environment_variables: variables,
            system_properties,
            property_sources: options.property_sources,
            search_path,
        }
    }
}

impl HostEnvironment for ProcessEnvironment {
    fn active_profiles(&self) -> &[String] {
        &self.active_profiles
    }

    fn default_profiles(&self) -> &[String] {
        &self.default_profiles
    }

    fn as_standard(&self) -> Option<&dyn StandardEnvironment> {
        Some(self)
    }

    fn search_path(&self) -> Option<&dyn SearchPathNode> {
        Some(&self.search_path)
    }
}

impl StandardEnvironment for ProcessEnvironment {
    fn environment_variables(&self) -> &Snapshot {
        &self.environment_variables
    }

    fn system_properties(&self) -> &Snapshot {
        &self.system_properties
    }

    fn property_sources(&self) -> &PropertySources {
        &self.property_sources
    }
}

/// Platform and process facts, the native counterpart of runtime system
/// properties.
///
/// Facts the OS refuses to report (e.g. a deleted working directory) are
/// recorded as empty strings.
#[must_use]
pub fn runtime_properties() -> Snapshot {
    let display = |path: std::io::Result<PathBuf>| {
        path.map(|p| p.display().to_string()).unwrap_or_default()
    };
    let args = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ");

    let mut props = BTreeMap::new();
    props.insert("app.name", env!("CARGO_PKG_NAME").to_string());
    props.insert("app.version", env!("CARGO_PKG_VERSION").to_string());
    props.insert("file.separator", std::path::MAIN_SEPARATOR_STR.to_string());
    props.insert("os.arch", std::env::consts::ARCH.to_string());
    props.insert("os.family", std::env::consts::FAMILY.to_string());
    props.insert("os.name", std::env::consts::OS.to_string());
    props.insert(
        "path.separator",
        if cfg!(windows) { ";" } else { ":" }.to_string(),
    );
    props.insert("process.args", args);
    props.insert("process.cwd", display(std::env::current_dir()));
    props.insert("process.exe", display(std::env::current_exe()));
    props.insert("process.id", std::process::id().to_string());
    props.insert("temp.dir", std::env::temp_dir().display().to_string());

    props.into_iter().collect()
}

/// Builds the lookup chain for the process, most specific scope first.
#[must_use]
pub fn search_path_chain(config_dirs: &[PathBuf], variables: &Snapshot) -> SearchScope {
    let path_entries = |var: &str| {
        variables
            .get(var)
            .map(split_path_list)
            .unwrap_or_default()
    };
    let executable_var = if variables.get("PATH").is_none() && variables.get("Path").is_some() {
        "Path"
    } else {
        "PATH"
    };

    let linker = SearchScope::opaque(SYSTEM_LINKER);
    let library =
        SearchScope::new(LIBRARY_SEARCH_PATH, path_entries(LIBRARY_PATH_VAR)).with_parent(linker);
    let executable =
        SearchScope::new(EXECUTABLE_SEARCH_PATH, path_entries(executable_var)).with_parent(library);

    SearchScope::new(
        CONFIG_SEARCH_PATH,
        config_dirs.iter().map(|dir| dir.display().to_string()),
    )
    .with_parent(executable)
}
