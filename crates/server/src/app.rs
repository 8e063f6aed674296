// Copyright (C) 2026 Launchpad Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::{
    logging::http_logger_middleware,
    metrics::metrics_middleware,
    routes::{self, API_VERSION, RegisterRoute},
    state::AppState,
};
use axum::{Router, middleware, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn create_app(state: AppState) -> Router {
    let registry = &state.route_registry;

    let v1 = Router::new()
        .merge(routes::health::routes(registry))
        .merge(routes::version::routes(registry))
        .merge(routes::collections::collections_routes(registry))
        .merge(routes::collections::proxy_routes(registry))
        .merge(routes::accounts::accounts_routes(registry));

    let mut app = Router::new()
        .route_registered(registry, "", "/", "get", get(routes::root::root_handler))
        .nest(API_VERSION, v1);

    if state.config.metrics.enabled {
        app = app
            .merge(routes::metrics::routes(registry))
            .layer(middleware::from_fn(metrics_middleware));
    }

    app.layer(middleware::from_fn(http_logger_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
