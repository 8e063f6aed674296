// Copyright (C) 2026 Launchpad Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use super::schema::FieldKind;
use crate::types::AddressError;
use thiserror::Error;

/// A single slot could not be read as its declared type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("invalid base64: {0}")]
    InvalidBase64(String),

    #[error("integer of {len} bytes does not fit in 256 bits")]
    IntegerTooLarge { len: usize },

    #[error("integer {value} does not fit in {target}")]
    IntegerOverflow { value: String, target: &'static str },

    #[error("address must be 32 bytes, got {len}")]
    InvalidAddressLength { len: usize },

    #[error("bech32 encoding failed: {0}")]
    Bech32(String),
}

impl From<AddressError> for DecodeError {
    fn from(err: AddressError) -> Self {
        match err {
            AddressError::InvalidLength { len, .. } => DecodeError::InvalidAddressLength { len },
            other => DecodeError::Bech32(other.to_string()),
        }
    }
}

/// A response violates the structural contract of its endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error(
        "{endpoint}: expected at least {expected} slots, got {actual} (first missing field '{field}')"
    )]
    TooFewSlots {
        endpoint: &'static str,
        expected: usize,
        actual: usize,
        field: &'static str,
    },

    #[error("{endpoint}: {remaining} trailing slots do not form whole groups of {stride}")]
    UnalignedTail {
        endpoint: &'static str,
        remaining: usize,
        stride: usize,
    },

    #[error("{endpoint}: field '{field}' (slot {index}): {source}")]
    Field {
        endpoint: &'static str,
        field: &'static str,
        index: usize,
        #[source]
        source: DecodeError,
    },

    #[error("{endpoint}: no {expected:?} field named '{field}' in schema")]
    MissingField {
        endpoint: &'static str,
        field: &'static str,
        expected: FieldKind,
    },
}

impl SchemaError {
    /// Name of the field the error points at, when there is one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            SchemaError::TooFewSlots { field, .. }
            | SchemaError::Field { field, .. }
            | SchemaError::MissingField { field, .. } => Some(field),
            SchemaError::UnalignedTail { .. } => None,
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            SchemaError::TooFewSlots { endpoint, .. }
            | SchemaError::UnalignedTail { endpoint, .. }
            | SchemaError::Field { endpoint, .. }
            | SchemaError::MissingField { endpoint, .. } => endpoint,
        }
    }
}
