// envdump: Startup Environment Reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core model of the host environment being reported on.
//!
//! ```text
//!                 core
//!                  |
//!     +--------+---+---------+------------+
//!     |        |             |            |
//!     v        v             v            v
//!    env     host         sources     search_path
//!     |        |             |            |
//!  Snapshot  HostEnvironment PropertySource SearchPathNode
//!            StandardEnvironment           SearchPathChain
//!            ProcessEnvironment            SearchScope
//! ```

pub mod env;
pub mod host;
pub mod search_path;
pub mod sources;
