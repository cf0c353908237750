// envdump: Startup Environment Reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |          report / sources / options
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  TOML, env, --set layers  |
//!              '-------------+-------------'
//!                            v
//!              ,---------------------------,
//!              |          report           |
//!              |  EnvironmentReporter      |
//!              |  format, redact           |
//!              '-------------+-------------'
//!                            v
//!   +--------------------------------------------------+
//!   |  core   env, host, sources, search_path          |
//!   +--------------------------------------------------+
//!   |  foundation   error, logging                     |
//!   +--------------------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod report;
