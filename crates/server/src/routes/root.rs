//! Root endpoint handler.

use crate::state::AppState;
use axum::{Json, extract::State};
use serde_json::{Value, json};

/// Handler for GET /
///
/// Returns API metadata and a list of all available routes.
pub async fn root_handler(State(state): State<AppState>) -> Json<Value> {
    let routes = state.route_registry.routes();

    Json(json!({
        "github": env!("CARGO_PKG_REPOSITORY"),
        "version": env!("CARGO_PKG_VERSION"),
        "listen": format!("{}:{}", state.config.express.bind_host, state.config.express.port),
        "network": {
            "gateway": state.config.network.gateway_url,
            "hrp": state.launchpad.hrp(),
            "proxyContract": state.launchpad.proxy_contract(),
            "registryContract": state.launchpad.registry_contract(),
        },
        "routes": routes
    }))
}
