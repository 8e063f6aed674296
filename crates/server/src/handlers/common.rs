// Copyright (C) 2026 Launchpad Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error and response types shared by the launchpad endpoints.

use crate::decode::{CollectionInfo, LiveMinter, MintCost};
use crate::fetch::{BatchOutcome, FetchError};
use crate::types::{U256, u256_decimal};
use crate::utils::format::{
    DEFAULT_DECIMALS, format_token_amount, ipfs_asset_url, token_ticker,
};
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// Fractional digits shown in formatted amounts.
pub const DISPLAY_PRECISION: usize = 2;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum LaunchpadError {
    #[error("Missing required query parameter '{0}'")]
    MissingQueryParam(&'static str),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl LaunchpadError {
    pub fn status(&self) -> StatusCode {
        match self {
            LaunchpadError::MissingQueryParam(_) => StatusCode::BAD_REQUEST,
            LaunchpadError::Fetch(FetchError::InvalidAddress { .. }) => StatusCode::BAD_REQUEST,
            LaunchpadError::Fetch(FetchError::Schema(_)) => StatusCode::BAD_GATEWAY,
            LaunchpadError::Fetch(FetchError::Network(err)) if err.is_timeout() => {
                StatusCode::GATEWAY_TIMEOUT
            }
            LaunchpadError::Fetch(FetchError::Network(_)) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for LaunchpadError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let mut body = json!({ "error": self.to_string() });

        if let LaunchpadError::Fetch(FetchError::Schema(err)) = &self {
            body["endpoint"] = json!(err.endpoint());
            if let Some(field) = err.field() {
                body["field"] = json!(field);
            }
        }

        (status, Json(body)).into_response()
    }
}

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MintCostView {
    pub token_identifier: String,
    #[serde(with = "u256_decimal")]
    pub amount: U256,
    pub ticker: String,
    /// Amount at 18 decimals, as shown in the mint form.
    pub formatted_amount: String,
}

impl From<MintCost> for MintCostView {
    fn from(cost: MintCost) -> Self {
        Self {
            ticker: token_ticker(&cost.token_identifier).to_string(),
            formatted_amount: format_amount(cost.amount),
            token_identifier: cost.token_identifier,
            amount: cost.amount,
        }
    }
}

/// Collection info plus the values the launchpad UI derives from it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionInfoView {
    #[serde(flatten)]
    pub info: CollectionInfo,
    pub tag_list: Vec<String>,
    pub royalties_percent: String,
    pub mint_progress_percent: f64,
    pub sold_out: bool,
    pub preview_url: String,
    pub prices: Vec<MintCostView>,
}

impl From<CollectionInfo> for CollectionInfoView {
    fn from(info: CollectionInfo) -> Self {
        Self {
            tag_list: info.tag_list(),
            royalties_percent: info.royalties_percent(),
            mint_progress_percent: info.mint_progress_percent(),
            sold_out: info.is_sold_out(),
            preview_url: ipfs_asset_url(&info.ipfs_cid, 1, &info.file_extension),
            prices: info.mint_costs.iter().cloned().map(MintCostView::from).collect(),
            info,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveMinterView {
    #[serde(flatten)]
    pub minter: LiveMinter,
    pub ticker: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_cost: Option<String>,
    pub mint_progress_percent: f64,
    pub preview_url: String,
}

impl From<LiveMinter> for LiveMinterView {
    fn from(minter: LiveMinter) -> Self {
        Self {
            ticker: token_ticker(&minter.token_identifier).to_string(),
            formatted_cost: minter.cost.map(format_amount),
            mint_progress_percent: minter.mint_progress_percent(),
            preview_url: ipfs_asset_url(&minter.ipfs_cid, 1, "png"),
            minter,
        }
    }
}

pub fn format_amount(amount: U256) -> String {
    format_token_amount(amount, DEFAULT_DECIMALS, DISPLAY_PRECISION)
}

/// Map the records of a batch, keeping its failures.
pub fn map_batch<T, U: From<T>>(outcome: BatchOutcome<T>) -> BatchOutcome<U> {
    BatchOutcome {
        records: outcome.records.into_iter().map(U::from).collect(),
        errors: outcome.errors,
    }
}

// ============================================================================
// Tests
// ============================================================================
