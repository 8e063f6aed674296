// Copyright (C) 2026 Launchpad Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Test fixtures: an in-memory query client and builders for raw contract
//! responses.

use crate::client::{NetworkError, QueryClient};
use crate::types::{Bech32Address, QueryResult};
use base64::{Engine, engine::general_purpose::STANDARD};
use std::collections::HashMap;
use std::sync::Mutex;

pub const TEST_HRP: &str = "erd";

/// A contract call seen by [`MockQueryClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub address: String,
    pub function: String,
    pub args: Vec<Vec<u8>>,
}

/// Serves canned responses keyed by contract address and function.
/// Unknown calls fail with a gateway error.
#[derive(Debug, Default)]
pub struct MockQueryClient {
    responses: HashMap<(String, String), Result<Vec<String>, String>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockQueryClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, address: &str, function: &str, slots: Vec<String>) -> Self {
        self.responses
            .insert((address.to_string(), function.to_string()), Ok(slots));
        self
    }

    pub fn with_failure(mut self, address: &str, function: &str, message: &str) -> Self {
        self.responses.insert(
            (address.to_string(), function.to_string()),
            Err(message.to_string()),
        );
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl QueryClient for MockQueryClient {
    async fn query_contract(
        &self,
        address: &str,
        function: &str,
        args: &[Vec<u8>],
    ) -> Result<QueryResult, NetworkError> {
        self.calls.lock().unwrap().push(RecordedCall {
            address: address.to_string(),
            function: function.to_string(),
            args: args.to_vec(),
        });

        match self
            .responses
            .get(&(address.to_string(), function.to_string()))
        {
            Some(Ok(slots)) => Ok(QueryResult::new(slots.clone())),
            Some(Err(message)) => Err(NetworkError::ContractReturned {
                code: "user error".to_string(),
                message: message.clone(),
            }),
            None => Err(NetworkError::Gateway {
                code: "not_found".to_string(),
                message: format!("no fixture for {function} on {address}"),
            }),
        }
    }
}

/// Address whose public key is 32 copies of `byte`.
pub fn address(byte: u8) -> Bech32Address {
    Bech32Address::from_pubkey(TEST_HRP, [byte; 32]).unwrap()
}

pub fn b64_text(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Minimal big-endian encoding, as the VM returns it (zero is empty).
pub fn b64_int(value: u128) -> String {
    let bytes = value.to_be_bytes();
    let first = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    STANDARD.encode(&bytes[first..])
}

pub fn b64_flag(value: bool) -> String {
    if value { STANDARD.encode([0x01u8]) } else { String::new() }
}

/// A v1 `getMinterInfo` response: 24 fixed slots, then one pair per cost.
///
/// Royalties 500, 250 of 1000 minted, JSON metadata on, not paused.
pub fn collection_info_slots(name: &str, minting_enabled: bool, costs: &[(&str, u128)]) -> Vec<String> {
    let mut slots = vec![
        STANDARD.encode(address(0x11).pubkey()),
        b64_text("MYCOL-a1b2c3"),
        b64_text(name),
        b64_text(&format!("{name} #")),
        b64_text("MYCOL"),
        b64_text("A test collection"),
        b64_text("bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzdi"),
        b64_text("png"),
        b64_text("art; pixel,gaming"),
        b64_text("Public"),
        b64_int(500),
        b64_int(250),
        b64_int(1000),
        b64_int(5),
        b64_int(1),
        b64_int(10),
        b64_int(0),
        b64_int(500),
        b64_int(250),
        b64_flag(true),
        b64_flag(minting_enabled),
        b64_flag(false),
        b64_flag(false),
        b64_flag(true),
    ];
    for (token, amount) in costs {
        slots.push(b64_text(token));
        slots.push(b64_int(*amount));
    }
    slots
}

/// One `getLiveMinters` group: 5 of 100 minted, priced in EGLD.
/// Without `cost` the group has the 7-slot legacy shape.
pub fn live_minter_slots(minter: Bech32Address, name: &str, cost: Option<u128>) -> Vec<String> {
    let mut slots = vec![
        STANDARD.encode(minter.pubkey()),
        b64_text(name),
        b64_text(&format!("{name} description")),
        b64_text("bafkreicid"),
        b64_int(5),
        b64_int(100),
        b64_text("EGLD"),
    ];
    if let Some(cost) = cost {
        slots.push(b64_int(cost));
    }
    slots
}
