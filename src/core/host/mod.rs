// envdump: Startup Environment Reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Host capability traits consumed by the reporter.
//!
//! ```text
//! HostEnvironment                 StandardEnvironment (optional capability)
//!   type_name()                     environment_variables() -> &Snapshot
//!   active_profiles()               system_properties()     -> &Snapshot
//!   default_profiles()              property_sources()      -> &PropertySources
//!   as_standard() ----------------> Some(..) when raw dumps are supported
//!   search_path() -> leaf SearchPathNode
//! ```
//!
//! Implementations: [`StaticEnvironment`] (plain data) and
//! [`process::ProcessEnvironment`] (the live process).

pub mod process;


use bon::Builder;

use crate::core::env::Snapshot;
use crate::core::search_path::{SearchPathNode, SearchScope};
use crate::core::sources::PropertySources;

/// The host's runtime environment abstraction.
pub trait HostEnvironment {
    /// Name of the concrete environment kind.
    fn type_name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    fn active_profiles(&self) -> &[String];

    fn default_profiles(&self) -> &[String];

    /// Raw-dump capability, if this environment has it.
    fn as_standard(&self) -> Option<&dyn StandardEnvironment> {
        None
    }

    /// Whether OS variables, runtime properties and sources can be dumped.
    fn supports_raw_dump(&self) -> bool {
        self.as_standard().is_some()
    }

    /// Most specific node of the search-path chain.
    fn search_path(&self) -> Option<&dyn SearchPathNode>;
}

/// Raw access to the data behind a standard environment.
pub trait StandardEnvironment {
    fn environment_variables(&self) -> &Snapshot;

    fn system_properties(&self) -> &Snapshot;

    /// Configuration sources, lowest precedence first.
    fn property_sources(&self) -> &PropertySources;
}

/// Environment assembled from plain data.
///
/// Useful for embedding hosts that already hold their own snapshots.
///
/// # Example
///
/// ```
/// use envdump::core::host::{HostEnvironment, StaticEnvironment};
///
/// let env = StaticEnvironment::builder()
///     .with_active_profiles(vec!["dev".to_string()])
///     .build();
/// assert!(env.supports_raw_dump());
/// ```
#[derive(Debug, Clone, Builder)]
pub struct StaticEnvironment {
    #[builder(setters(name = with_active_profiles), default)]
    active_profiles: Vec<String>,
    #[builder(setters(name = with_default_profiles), default)]
    default_profiles: Vec<String>,
    #[builder(setters(name = with_environment_variables), default)]
    environment_variables: Snapshot,
    #[builder(setters(name = with_system_properties), default)]
    system_properties: Snapshot,
    #[builder(setters(name = with_property_sources), default)]
    property_sources: PropertySources,
    #[builder(setters(name = with_search_path))]
    search_path: Option<SearchScope>,
    /// When false the environment reports no raw-dump capability.
    #[builder(setters(name = with_standard), default = true)]
    standard: bool,
}

impl Default for StaticEnvironment {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl HostEnvironment for StaticEnvironment {
    fn active_profiles(&self) -> &[String] {
        &self.active_profiles
    }

    fn default_profiles(&self) -> &[String] {
        &self.default_profiles
    }

    fn as_standard(&self) -> Option<&dyn StandardEnvironment> {
        self.standard.then_some(self as &dyn StandardEnvironment)
    }

    fn search_path(&self) -> Option<&dyn SearchPathNode> {
        self.search_path
            .as_ref()
            .map(|scope| scope as &dyn SearchPathNode)
    }
}

impl StandardEnvironment for StaticEnvironment {
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
