// Copyright (C) 2026 Launchpad Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::handlers::common::LaunchpadError;
use crate::state::AppState;
use crate::types::Bech32Address;
use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AccountMintersResponse {
    pub owner: String,
    pub minters: Vec<Bech32Address>,
}

/// Handler for GET /v1/accounts/:address/minters
pub async fn get_account_minters(
    State(state): State<AppState>,
    Path(owner): Path<String>,
) -> Result<Json<AccountMintersResponse>, LaunchpadError> {
    let minters = state.launchpad.address_minters(&owner).await?;
    Ok(Json(AccountMintersResponse { owner, minters }))
}
