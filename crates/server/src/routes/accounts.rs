use crate::handlers::accounts;
use crate::routes::{API_VERSION, RegisterRoute, RouteRegistry};
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn accounts_routes(registry: &RouteRegistry) -> Router<AppState> {
    Router::new()
        .route_registered(
            registry,
            API_VERSION,
            "/accounts/:address/minters",
            "get",
            get(accounts::get_account_minters),
        )
        .route_registered(
            registry,
            API_VERSION,
            "/accounts/:address/collections",
            "get",
            get(accounts::get_account_collections),
        )
}
