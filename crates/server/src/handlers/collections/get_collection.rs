// Copyright (C) 2026 Launchpad Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::handlers::common::{CollectionInfoView, LaunchpadError};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
};

/// Handler for GET /v1/collections/:address
pub async fn get_collection(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<CollectionInfoView>, LaunchpadError> {
    let info = state.launchpad.collection_info(&address).await?;
    Ok(Json(CollectionInfoView::from(info)))
}
