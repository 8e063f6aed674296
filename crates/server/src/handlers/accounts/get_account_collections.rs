// Copyright (C) 2026 Launchpad Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::decode::CollectionSummary;
use crate::fetch::BatchOutcome;
use crate::handlers::common::LaunchpadError;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
};

/// Handler for GET /v1/accounts/:address/collections
///
/// Lists the owner's minters with their collection names. Minters whose
/// name cannot be read are reported under `errors`.
pub async fn get_account_collections(
    State(state): State<AppState>,
    Path(owner): Path<String>,
) -> Result<Json<BatchOutcome<CollectionSummary>>, LaunchpadError> {
    let outcome = state.launchpad.fetch_collection_summaries(&owner).await?;
    Ok(Json(outcome))
}
