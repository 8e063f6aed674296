// Copyright (C) 2026 Launchpad Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::handlers::common::{LaunchpadError, format_amount};
use crate::state::AppState;
use crate::types::{Bech32Address, U256, u256_decimal};
use axum::{Json, extract::State};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreationFeeResponse {
    pub proxy_contract: Bech32Address,
    #[serde(with = "u256_decimal")]
    pub fee: U256,
    pub formatted_fee: String,
}

/// Handler for GET /v1/creation-fee
pub async fn get_creation_fee(
    State(state): State<AppState>,
) -> Result<Json<CreationFeeResponse>, LaunchpadError> {
    let fee = state.launchpad.creation_fee().await?;
    Ok(Json(CreationFeeResponse {
        proxy_contract: state.launchpad.proxy_contract().clone(),
        fee,
        formatted_fee: format_amount(fee),
    }))
}
