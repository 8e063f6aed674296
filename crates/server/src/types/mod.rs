// Copyright (C) 2026 Launchpad Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Common types shared by the decoder, the query client and the API.

pub mod address;
pub mod amount;

pub use address::{AddressError, Bech32Address};
pub use amount::u256_decimal;
pub use primitive_types::U256;

use serde::{Deserialize, Deserializer, Serialize};

/// Return data of a contract view call: base64 slots in the order the
/// endpoint declares them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub return_data: Vec<String>,
}

impl QueryResult {
    pub fn new(return_data: Vec<String>) -> Self {
        Self { return_data }
    }

    pub fn len(&self) -> usize {
        self.return_data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.return_data.is_empty()
    }
}

impl From<Vec<String>> for QueryResult {
    fn from(return_data: Vec<String>) -> Self {
        Self { return_data }
    }
}

/// The gateway sends `"returnData": null` for endpoints that return nothing.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
