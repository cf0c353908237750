// envdump: Startup Environment Reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The startup environment report.
//!
//! # Report Shape
//!
//! ```text
//! -- environment information dump start ------------
//! environment is of type <type>
//! active profiles: a, b
//! default profiles: default
//! [raw dump supported]
//!   -- system environment ---   KEY=value ... (sorted)   ------
//!   -- system properties ----   key=value ... (sorted)   ------
//!   ---- property sources ---   found property sources: [...]
//!       per source (in precedence order): kind, name, contents if dumpable
//!   ------
//! [otherwise]
//!   one "skipping environment dump" line
//! -- environment information dump end --------------
//! -- search path dump ------------------------------
//! loader=<type>, [entries]  |  (cannot display entries of <type>)   leaf -> root
//! ------
//! ```
//!
//! The whole report is collected before anything is logged, so a precondition
//! failure never leaves a partial report in the log.

pub mod format;
pub mod redact;


use std::fmt;

use crate::core::host::{HostEnvironment, StandardEnvironment};
use crate::core::search_path::{MAX_SEARCH_PATH_DEPTH, SearchPathChain};
use crate::error::ReportError;
use format::{REPORT_WIDTH, SOURCE_WIDTH, banner, rule};
use redact::Redactor;

/// `tracing` target every report line is emitted under.
pub const REPORT_TARGET: &str = "envdump::report::dump";

/// Part of the report a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Banners, environment type, profiles, skip notice.
    Overview,
    /// OS environment variables.
    SystemEnvironment,
    /// Runtime properties.
    SystemProperties,
    /// Configuration property sources.
    PropertySources,
    /// Search-path chain.
    SearchPath,
}

impl Section {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::SystemEnvironment => "system-environment",
            Self::SystemProperties => "system-properties",
            Self::PropertySources => "property-sources",
            Self::SearchPath => "search-path",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One formatted line of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    section: Section,
    text: String,
}

impl ReportLine {
    #[must_use]
    pub const fn section(&self) -> Section {
        self.section
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A collected report, ready to be emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    lines: Vec<ReportLine>,
}

impl Report {
    #[must_use]
    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    /// Text of every line, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(ReportLine::text)
    }

    /// Text of the lines belonging to `section`, in order.
    pub fn section(&self, section: Section) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .filter(move |line| line.section == section)
            .map(ReportLine::text)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Writes every line to the log at INFO level.
    pub fn emit(&self) {
        for line in &self.lines {
            tracing::info!(target: REPORT_TARGET, "{}", line.text);
        }
    }

    fn push(&mut self, section: Section, text: impl Into<String>) {
        self.lines.push(ReportLine {
            section,
            text: text.into(),
        });
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line.text)?;
        }
        Ok(())
    }
}

/// Produces the startup environment report.
///
/// Holds no state besides its redaction rules; one reporter can serve any
/// number of hosts.
///
/// # Example
///
/// ```
/// use envdump::core::host::StaticEnvironment;
/// use envdump::report::EnvironmentReporter;
///
/// let env = StaticEnvironment::builder()
///     .with_active_profiles(vec!["dev".to_string()])
///     .build();
/// let report = EnvironmentReporter::new().report(&env)?;
/// assert!(report.texts().any(|line| line == "active profiles: dev"));
/// # Ok::<(), envdump::error::ReportError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvironmentReporter {
    redactor: Redactor,
}

impl EnvironmentReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            redactor: Redactor::none(),
        }
    }

    /// Masks values of keys matched by `redactor`.
    #[must_use]
    pub fn with_redactor(mut self, redactor: Redactor) -> Self {
        self.redactor = redactor;
        self
    }

    /// Startup hook: reports on the host environment and logs the result.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::MissingEnvironment` if the host has no
    /// environment yet, or any error of [`Self::report`]. Nothing is logged
    /// in either case.
    pub fn on_startup(
        &self,
        environment: Option<&dyn HostEnvironment>,
    ) -> Result<Report, ReportError> {
        let environment = environment.ok_or(ReportError::MissingEnvironment)?;
        let report = self.report(environment)?;
        report.emit();
        Ok(report)
    }

    /// Collects the report lines for `environment` without logging them.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::SearchPathTooDeep` if the search-path chain is
    /// longer than [`MAX_SEARCH_PATH_DEPTH`].
    pub fn report(&self, environment: &dyn HostEnvironment) -> Result<Report, ReportError> {
        let mut report = Report::default();
        let type_name = environment.type_name();

        report.push(
            Section::Overview,
            banner("--", "environment information dump start", REPORT_WIDTH),
        );
        report.push(Section::Overview, format::environment_type(type_name));
        report.push(
            Section::Overview,
            format::profiles("active", environment.active_profiles()),
        );
        report.push(
            Section::Overview,
            format::profiles("default", environment.default_profiles()),
        );

        if let Some(standard) = environment.as_standard() {
            self.dump_standard(&mut report, standard);
        } else {
            tracing::debug!(environment = type_name, "raw dump not supported");
            report.push(Section::Overview, format::skipped_dump(type_name));
        }

        report.push(
            Section::Overview,
            banner("--", "environment information dump end", REPORT_WIDTH),
        );

        Self::dump_search_path(&mut report, environment)?;

        Ok(report)
    }

    fn dump_standard(&self, report: &mut Report, standard: &dyn StandardEnvironment) {
        report.push(
            Section::SystemEnvironment,
            banner("--", "system environment", REPORT_WIDTH),
        );
        for (key, value) in standard.environment_variables().iter() {
            report.push(
                Section::SystemEnvironment,
                format::entry(key, value, &self.redactor),
            );
        }
        report.push(Section::SystemEnvironment, rule(REPORT_WIDTH));

        report.push(
            Section::SystemProperties,
            banner("--", "system properties", REPORT_WIDTH),
        );
        for (key, value) in standard.system_properties().iter() {
            report.push(
                Section::SystemProperties,
                format::entry(key, value, &self.redactor),
            );
        }
        report.push(Section::SystemProperties, rule(REPORT_WIDTH));

        let sources = standard.property_sources();
        report.push(
            Section::PropertySources,
            banner("----", "property sources", REPORT_WIDTH),
        );
        report.push(
            Section::PropertySources,
            format::sources_description(&sources.to_string()),
        );
        for source in sources {
            report.push(
                Section::PropertySources,
                banner("----", "property source dump start", SOURCE_WIDTH),
            );
            report.push(Section::PropertySources, format::source_kind(source.kind()));
            report.push(Section::PropertySources, format::source_name(source.name()));
            if source.is_dumpable() {
                report.push(
                    Section::PropertySources,
                    format::source_contents(source.source(), &self.redactor),
                );
            }
            report.push(Section::PropertySources, rule(SOURCE_WIDTH));
        }
        report.push(Section::PropertySources, rule(REPORT_WIDTH));
    }

    fn dump_search_path(
        report: &mut Report,
        environment: &dyn HostEnvironment,
    ) -> Result<(), ReportError> {
        report.push(
            Section::SearchPath,
            banner("--", "search path dump", REPORT_WIDTH),
        );
        for (depth, node) in SearchPathChain::new(environment.search_path()).enumerate() {
            if depth >= MAX_SEARCH_PATH_DEPTH {
                return Err(ReportError::SearchPathTooDeep {
                    limit: MAX_SEARCH_PATH_DEPTH,
                });
            }
            let line = node.entries().map_or_else(
                || format::loader_opaque(node.type_name()),
                |entries| format::loader_entries(node.type_name(), entries),
            );
            report.push(Section::SearchPath, line);
        }
        report.push(Section::SearchPath, rule(REPORT_WIDTH));
        Ok(())
    }
}
