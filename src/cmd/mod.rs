// envdump: Startup Environment Reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> config::load_config --> cmd::run_* handlers
//!   report, sources, options
//! ```

pub mod config;
pub mod report;
