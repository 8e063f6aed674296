// Copyright (C) 2026 Launchpad Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::fetch::BatchOutcome;
use crate::handlers::common::{CollectionInfoView, LaunchpadError, map_batch};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CollectionsQueryParams {
    /// Comma-separated minter addresses.
    pub addresses: Option<String>,
}

impl CollectionsQueryParams {
    pub fn address_list(&self) -> Vec<String> {
        self.addresses
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Handler for GET /v1/collections?addresses=a,b
///
/// Always 200 once the parameter is present: addresses that fail are listed
/// under `errors` next to the decoded `records`.
pub async fn get_collections(
    State(state): State<AppState>,
    Query(params): Query<CollectionsQueryParams>,
) -> Result<Json<BatchOutcome<CollectionInfoView>>, LaunchpadError> {
    let addresses = params.address_list();
    if addresses.is_empty() {
        return Err(LaunchpadError::MissingQueryParam("addresses"));
    }

    let outcome = state.launchpad.fetch_collections_info(&addresses).await;
    tracing::debug!(
        requested = addresses.len(),
        decoded = outcome.records.len(),
        failed = outcome.errors.len(),
        "Fetched collections"
    );

    Ok(Json(map_batch(outcome)))
}
