// Copyright (C) 2026 Launchpad Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contract response decoding.
//!
//! View calls return an ordered list of base64 slots. [`schema::assemble`]
//! walks a [`schema::Schema`] over those slots and the functions in
//! [`records`] turn the result into typed records.

pub mod error;
pub mod layouts;
pub mod primitives;
pub mod records;
pub mod schema;

pub use error::{DecodeError, SchemaError};
pub use layouts::LayoutExt;
pub use primitives::{decode_bech32_address, decode_boolean, decode_hex_integer, decode_utf8};
pub use records::{
    CollectionInfo, CollectionSummary, LiveMinter, MintCost, decode_address_minter_list,
    decode_collection_creation_fee, decode_collection_info, decode_collection_name,
    decode_live_minters,
};
pub use schema::{Decoded, DecodedFields, FieldKind, FieldSpec, Schema, assemble};
