// Copyright (C) 2026 Launchpad Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::{
    handlers::metrics,
    routes::{RegisterRoute, RouteRegistry},
    state::AppState,
};
use axum::{Router, routing::get};

/// Unversioned, so scrapers can use the conventional path.
pub fn routes(registry: &RouteRegistry) -> Router<AppState> {
    Router::new().route_registered(registry, "", "/metrics", "get", get(metrics::get_metrics))
}
