// Copyright (C) 2026 Launchpad Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed records built from assembled query results.

use super::error::SchemaError;
use super::layouts::{ADDRESS_MINTERS, COLLECTION_CREATION_FEE, COLLECTION_NAME};
use super::schema::{DecodedFields, Schema, assemble};
use crate::types::{Bech32Address, QueryResult, U256, u256_decimal};
use crate::utils::format;
use serde::Serialize;

/// One accepted payment for a mint: token identifier and smallest-unit amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MintCost {
    pub token_identifier: String,
    #[serde(with = "u256_decimal")]
    pub amount: U256,
}

impl MintCost {
    fn from_fields(fields: &DecodedFields) -> Result<Self, SchemaError> {
        Ok(Self {
            token_identifier: fields.text("token_identifier")?,
            amount: fields.integer("amount")?,
        })
    }
}

/// Snapshot of a collection minter as returned by `getMinterInfo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionInfo {
    /// Minter contract that was queried.
    pub address: Bech32Address,
    pub creator_address: Bech32Address,
    pub collection_identifier: String,
    pub collection_name: String,
    pub single_nft_name: String,
    pub ticker: String,
    pub description: String,
    pub ipfs_cid: String,
    pub file_extension: String,
    /// Raw tag string as stored on chain; see [`CollectionInfo::tag_list`].
    pub tags: String,
    pub phase_name: String,
    /// Basis points times 100 (`500` is 5%).
    pub royalties: u64,
    pub total_minted: u64,
    pub max_supply: u64,
    pub max_amount_per_mint: u64,
    pub phase_id: u64,
    pub user_max_mints: u64,
    pub user_minted: u64,
    pub phase_max_mints: u64,
    pub phase_minted: u64,
    #[serde(
        with = "u256_decimal::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub fee: Option<U256>,
    pub has_json_metadata: bool,
    pub is_minting_enabled: bool,
    pub is_paused: bool,
    pub is_phase_whitelist_only: bool,
    pub can_user_mint: bool,
    pub mint_costs: Vec<MintCost>,
}

impl CollectionInfo {
    /// Tags split on `;` or `,`, trimmed, empties dropped.
    pub fn tag_list(&self) -> Vec<String> {
        format::split_tags(&self.tags)
    }

    pub fn royalties_percent(&self) -> String {
        format::royalties_percent(self.royalties)
    }

    pub fn mint_progress_percent(&self) -> f64 {
        format::progress_percent(self.total_minted, self.max_supply)
    }

    pub fn is_sold_out(&self) -> bool {
        self.max_supply > 0 && self.total_minted >= self.max_supply
    }
}

/// One active campaign from the proxy's `getLiveMinters` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveMinter {
    pub address: Bech32Address,
    pub collection_name: String,
    pub collection_description: String,
    pub ipfs_cid: String,
    pub minted: u64,
    pub max_supply: u64,
    pub token_identifier: String,
    /// Absent in the legacy 7-slot layout.
    #[serde(with = "u256_decimal::option")]
    pub cost: Option<U256>,
}

impl LiveMinter {
    fn from_fields(fields: &DecodedFields) -> Result<Self, SchemaError> {
        Ok(Self {
            address: fields.address("address")?,
            collection_name: fields.text("collection_name")?,
            collection_description: fields.text("collection_description")?,
            ipfs_cid: fields.text("ipfs_cid")?,
            minted: fields.count("minted")?,
            max_supply: fields.count("max_supply")?,
            token_identifier: fields.text("token_identifier")?,
            cost: fields.opt_integer("cost")?,
        })
    }

    pub fn mint_progress_percent(&self) -> f64 {
        format::progress_percent(self.minted, self.max_supply)
    }
}

/// Minter address with its collection name, as listed for an owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSummary {
    pub address: Bech32Address,
    pub name: String,
}

/// Decode a `getMinterInfo` response for the minter at `address`.
pub fn decode_collection_info(
    raw: &QueryResult,
    address: &Bech32Address,
    schema: &Schema,
    hrp: &str,
) -> Result<CollectionInfo, SchemaError> {
    let decoded = assemble(schema, raw, hrp)?;
    let f = &decoded.fixed;

    let mint_costs = decoded
        .groups
        .iter()
        .map(MintCost::from_fields)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CollectionInfo {
        address: address.clone(),
        creator_address: f.address("creator")?,
        collection_identifier: f.text("collection_identifier")?,
        collection_name: f.text("collection_name")?,
        single_nft_name: f.text("single_nft_name")?,
        ticker: f.text("ticker")?,
        description: f.text("description")?,
        ipfs_cid: f.text("ipfs_cid")?,
        file_extension: f.text("file_extension")?,
        tags: f.text("tags")?,
        phase_name: f.text("phase_name")?,
        royalties: f.count("royalties")?,
        total_minted: f.count("total_minted")?,
        max_supply: f.count("max_supply")?,
        max_amount_per_mint: f.count("max_amount_per_mint")?,
        phase_id: f.count("phase_id")?,
        user_max_mints: f.count("user_max_mints")?,
        user_minted: f.count("user_minted")?,
        phase_max_mints: f.count("phase_max_mints")?,
        phase_minted: f.count("phase_minted")?,
        fee: f.opt_integer("fee")?,
        has_json_metadata: f.flag("has_json_metadata")?,
        is_minting_enabled: f.flag("is_minting_enabled")?,
        is_paused: f.flag("is_paused")?,
        is_phase_whitelist_only: f.flag("is_phase_whitelist_only")?,
        can_user_mint: f.flag("can_user_mint")?,
        mint_costs,
    })
}

pub fn decode_live_minters(
    raw: &QueryResult,
    schema: &Schema,
    hrp: &str,
) -> Result<Vec<LiveMinter>, SchemaError> {
    assemble(schema, raw, hrp)?
        .groups
        .iter()
        .map(LiveMinter::from_fields)
        .collect()
}

/// Minter contracts deployed by one owner, one address per slot.
pub fn decode_address_minter_list(
    raw: &QueryResult,
    hrp: &str,
) -> Result<Vec<Bech32Address>, SchemaError> {
    assemble(&ADDRESS_MINTERS, raw, hrp)?
        .groups
        .iter()
        .map(|group| group.address("minter"))
        .collect()
}

pub fn decode_collection_creation_fee(raw: &QueryResult) -> Result<U256, SchemaError> {
    // No address fields, so the hrp is never consulted.
    assemble(&COLLECTION_CREATION_FEE, raw, "")?
        .fixed
        .integer("fee")
}

pub fn decode_collection_name(raw: &QueryResult) -> Result<String, SchemaError> {
    assemble(&COLLECTION_NAME, raw, "")?
        .fixed
        .text("collection_name")
}
