// Copyright (C) 2026 Launchpad Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::handlers::common::{LaunchpadError, LiveMinterView};
use crate::state::AppState;
use axum::{Json, extract::State};

/// Handler for GET /v1/live-minters
pub async fn get_live_minters(
    State(state): State<AppState>,
) -> Result<Json<Vec<LiveMinterView>>, LaunchpadError> {
    let minters = state.launchpad.live_minters().await?;
    Ok(Json(minters.into_iter().map(LiveMinterView::from).collect()))
}
