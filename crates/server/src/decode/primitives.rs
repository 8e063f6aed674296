// Copyright (C) 2026 Launchpad Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Slot-level decoders.
//!
//! Each function takes one base64 slot of a query result and returns one
//! scalar. Empty slots are valid and decode to the zero value of their type;
//! only a byte layout that contradicts the declared type is an error.

use super::error::DecodeError;
use crate::types::{Bech32Address, U256};
use base64::{Engine, engine::general_purpose::STANDARD};

/// Largest integer the contract encodes in a single slot.
pub const MAX_INTEGER_BYTES: usize = 32;

pub fn slot_bytes(slot: &str) -> Result<Vec<u8>, DecodeError> {
    STANDARD
        .decode(slot)
        .map_err(|e| DecodeError::InvalidBase64(e.to_string()))
}

/// Hex view of a slot, for logs and error reports.
pub fn slot_hex(slot: &str) -> Result<String, DecodeError> {
    slot_bytes(slot).map(hex::encode)
}

/// Unsigned big-endian integer. Leading zero bytes are allowed.
pub fn decode_hex_integer(slot: &str) -> Result<U256, DecodeError> {
    let bytes = slot_bytes(slot)?;
    let significant = match bytes.iter().position(|b| *b != 0) {
        Some(first) => &bytes[first..],
        None => return Ok(U256::zero()),
    };
    if significant.len() > MAX_INTEGER_BYTES {
        return Err(DecodeError::IntegerTooLarge { len: bytes.len() });
    }
    Ok(U256::from_big_endian(significant))
}

/// UTF-8 text. Invalid sequences are replaced rather than rejected.
pub fn decode_utf8(slot: &str) -> Result<String, DecodeError> {
    let bytes = slot_bytes(slot)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// `true` only for the single byte `0x01`.
pub fn decode_boolean(slot: &str) -> Result<bool, DecodeError> {
    Ok(slot_bytes(slot)? == [0x01])
}

pub fn decode_bech32_address(slot: &str, hrp: &str) -> Result<Bech32Address, DecodeError> {
    let bytes = slot_bytes(slot)?;
    Ok(Bech32Address::from_slice(hrp, &bytes)?)
}

/// Narrow a decoded integer to `u64`.
pub fn to_u64(value: U256) -> Result<u64, DecodeError> {
    if value > U256::from(u64::MAX) {
        return Err(DecodeError::IntegerOverflow {
            value: value.to_string(),
            target: "u64",
        });
    }
    Ok(value.low_u64())
}
