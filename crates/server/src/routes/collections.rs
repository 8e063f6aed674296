use crate::handlers::{collections, creation_fee, live_minters};
use crate::routes::{API_VERSION, RegisterRoute, RouteRegistry};
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn collections_routes(registry: &RouteRegistry) -> Router<AppState> {
    Router::new()
        .route_registered(
            registry,
            API_VERSION,
            "/collections",
            "get",
            get(collections::get_collections),
        )
        .route_registered(
            registry,
            API_VERSION,
            "/collections/:address",
            "get",
            get(collections::get_collection),
        )
}

/// Endpoints answered by the minter proxy contract.
pub fn proxy_routes(registry: &RouteRegistry) -> Router<AppState> {
    Router::new()
        .route_registered(
            registry,
            API_VERSION,
            "/live-minters",
            "get",
            get(live_minters::get_live_minters),
        )
        .route_registered(
            registry,
            API_VERSION,
            "/creation-fee",
            "get",
            get(creation_fee::get_creation_fee),
        )
}
