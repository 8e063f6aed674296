// Copyright (C) 2026 Launchpad Developers
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod app;
pub mod client;
pub mod decode;
pub mod fetch;
pub mod handlers;
pub mod logging;
pub mod metrics;
pub mod routes;
pub mod state;
pub mod types;
pub mod utils;

#[cfg(test)]
pub mod test_fixtures;
