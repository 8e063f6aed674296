// Copyright (C) 2026 Launchpad Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Response layouts of the minter and minter-proxy contracts.
//!
//! Field order is the on-chain slot order. To change a layout, edit the
//! segment lists here; record builders look fields up by name.

use super::schema::{FieldKind::*, FieldSpec, Schema};
use config::{CollectionInfoVersion, LiveMinterLayout};

pub const GET_MINTER_INFO: &str = "getMinterInfo";
pub const GET_LIVE_MINTERS: &str = "getLiveMinters";
pub const GET_ADDRESS_MINTERS: &str = "getAddressMinters";
pub const GET_COLLECTION_CREATION_FEE: &str = "getCollectionCreationFee";
pub const GET_COLLECTION_NAME: &str = "getCollectionName";

// ================================================================================================
// getMinterInfo
// ================================================================================================

const COLLECTION_METADATA: &[FieldSpec] = &[
    FieldSpec::new("creator", Address),
    FieldSpec::new("collection_identifier", Text),
    FieldSpec::new("collection_name", Text),
    FieldSpec::new("single_nft_name", Text),
    FieldSpec::new("ticker", Text),
    FieldSpec::new("description", Text),
    FieldSpec::new("ipfs_cid", Text),
    FieldSpec::new("file_extension", Text),
    FieldSpec::new("tags", Text),
    FieldSpec::new("phase_name", Text),
];

const MINT_COUNTERS: &[FieldSpec] = &[
    FieldSpec::new("royalties", Integer),
    FieldSpec::new("total_minted", Integer),
    FieldSpec::new("max_supply", Integer),
    FieldSpec::new("max_amount_per_mint", Integer),
    FieldSpec::new("phase_id", Integer),
    FieldSpec::new("user_max_mints", Integer),
    FieldSpec::new("user_minted", Integer),
    FieldSpec::new("phase_max_mints", Integer),
    FieldSpec::new("phase_minted", Integer),
];

const MINTER_FEE: &[FieldSpec] = &[FieldSpec::new("fee", Integer)];

const MINTER_FLAGS: &[FieldSpec] = &[
    FieldSpec::new("has_json_metadata", Flag),
    FieldSpec::new("is_minting_enabled", Flag),
    FieldSpec::new("is_paused", Flag),
    FieldSpec::new("is_phase_whitelist_only", Flag),
    FieldSpec::new("can_user_mint", Flag),
];

const MINT_COST: &[FieldSpec] = &[
    FieldSpec::new("token_identifier", Text),
    FieldSpec::new("amount", Integer),
];

pub const COLLECTION_INFO_V1: Schema = Schema {
    endpoint: GET_MINTER_INFO,
    segments: &[COLLECTION_METADATA, MINT_COUNTERS, MINTER_FLAGS],
    tail: MINT_COST,
};

pub const COLLECTION_INFO_V2: Schema = Schema {
    endpoint: GET_MINTER_INFO,
    segments: &[COLLECTION_METADATA, MINT_COUNTERS, MINTER_FEE, MINTER_FLAGS],
    tail: MINT_COST,
};

// ================================================================================================
// getLiveMinters
// ================================================================================================

const LIVE_MINTER_FULL: &[FieldSpec] = &[
    FieldSpec::new("address", Address),
    FieldSpec::new("collection_name", Text),
    FieldSpec::new("collection_description", Text),
    FieldSpec::new("ipfs_cid", Text),
    FieldSpec::new("minted", Integer),
    FieldSpec::new("max_supply", Integer),
    FieldSpec::new("token_identifier", Text),
    FieldSpec::new("cost", Integer),
];

pub const LIVE_MINTERS_FULL: Schema = Schema {
    endpoint: GET_LIVE_MINTERS,
    segments: &[],
    tail: LIVE_MINTER_FULL,
};

/// Older proxies omit the cost slot.
pub const LIVE_MINTERS_LEGACY: Schema = Schema {
    endpoint: GET_LIVE_MINTERS,
    segments: &[],
    tail: LIVE_MINTER_FULL.split_at(7).0,
};

// ================================================================================================
// Single-purpose views
// ================================================================================================

pub const ADDRESS_MINTERS: Schema = Schema {
    endpoint: GET_ADDRESS_MINTERS,
    segments: &[],
    tail: &[FieldSpec::new("minter", Address)],
};

pub const COLLECTION_CREATION_FEE: Schema = Schema {
    endpoint: GET_COLLECTION_CREATION_FEE,
    segments: &[&[FieldSpec::new("fee", Integer)]],
    tail: &[],
};

pub const COLLECTION_NAME: Schema = Schema {
    endpoint: GET_COLLECTION_NAME,
    segments: &[&[FieldSpec::new("collection_name", Text)]],
    tail: &[],
};

/// Maps a configured layout revision to its schema.
pub trait LayoutExt {
    fn schema(&self) -> &'static Schema;
}

impl LayoutExt for CollectionInfoVersion {
    fn schema(&self) -> &'static Schema {
        match self {
            CollectionInfoVersion::V1 => &COLLECTION_INFO_V1,
            CollectionInfoVersion::V2 => &COLLECTION_INFO_V2,
        }
    }
}

impl LayoutExt for LiveMinterLayout {
    fn schema(&self) -> &'static Schema {
        match self {
            LiveMinterLayout::Full => &LIVE_MINTERS_FULL,
            LiveMinterLayout::Legacy => &LIVE_MINTERS_LEGACY,
        }
    }
}
