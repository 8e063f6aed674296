// Copyright (C) 2026 Launchpad Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Bech32 account and contract addresses.

use bech32::{FromBase32, ToBase32, Variant};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("address must be {expected} bytes, got {len}")]
    InvalidLength { expected: usize, len: usize },

    #[error("invalid bech32 string: {0}")]
    Bech32(#[from] bech32::Error),

    #[error("address prefix '{found}' does not match network prefix '{expected}'")]
    HrpMismatch { expected: String, found: String },

    #[error("address uses bech32m, expected bech32")]
    WrongVariant,
}

/// A 32-byte public key together with its bech32 text form.
///
/// The text form is computed once on construction, so `Display` and
/// serialization never fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bech32Address {
    encoded: String,
    pubkey: [u8; 32],
}

impl Bech32Address {
    /// Raw public key length of every address on the network.
    pub const PUBKEY_LEN: usize = 32;

    pub fn from_pubkey(hrp: &str, pubkey: [u8; 32]) -> Result<Self, AddressError> {
        let encoded = bech32::encode(hrp, pubkey.to_base32(), Variant::Bech32)?;
        Ok(Self { encoded, pubkey })
    }

    /// Encode raw bytes, rejecting anything that is not exactly 32 bytes long.
    pub fn from_slice(hrp: &str, bytes: &[u8]) -> Result<Self, AddressError> {
        let pubkey: [u8; 32] = bytes.try_into().map_err(|_| AddressError::InvalidLength {
            expected: Self::PUBKEY_LEN,
            len: bytes.len(),
        })?;
        Self::from_pubkey(hrp, pubkey)
    }

    /// Parse a bech32 string and check it belongs to the network `expected_hrp`.
    pub fn parse(s: &str, expected_hrp: &str) -> Result<Self, AddressError> {
        let address: Self = s.parse()?;
        let found = address.hrp();
        if found != expected_hrp {
            return Err(AddressError::HrpMismatch {
                expected: expected_hrp.to_string(),
                found: found.to_string(),
            });
        }
        Ok(address)
    }

    pub fn as_str(&self) -> &str {
        &self.encoded
    }

    pub fn pubkey(&self) -> &[u8; 32] {
        &self.pubkey
    }

    pub fn hrp(&self) -> &str {
        // The separator is the last '1'; the hrp itself may contain '1'.
        self.encoded
            .rsplit_once('1')
            .map(|(hrp, _)| hrp)
            .unwrap_or_default()
    }
}

impl FromStr for Bech32Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hrp, data, variant) = bech32::decode(s)?;
        if variant != Variant::Bech32 {
            return Err(AddressError::WrongVariant);
        }
        let bytes = Vec::<u8>::from_base32(&data)?;
        Self::from_slice(&hrp, &bytes)
    }
}

impl fmt::Display for Bech32Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded)
    }
}

impl AsRef<str> for Bech32Address {
    fn as_ref(&self) -> &str {
        &self.encoded
    }
}

impl Serialize for Bech32Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.encoded)
    }
}

impl<'de> Deserialize<'de> for Bech32Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE_HEX: &str = "0139472eff6886771a982f3083da5d421f24c29181e63888228dc81ca60d69e1";
    const ALICE: &str = "erd1qyu5wthldzr8wx5c9ucg8kjagg0jfs53s8nr3zpz3hypefsdd8ssycr6th";

    fn alice_pubkey() -> [u8; 32] {
        hex::decode(ALICE_HEX).unwrap().try_into().unwrap()
    }

    #[test]
    fn test_encode_known_address() {
        let address = Bech32Address::from_pubkey("erd", alice_pubkey()).unwrap();
        assert_eq!(address.as_str(), ALICE);
        assert_eq!(address.hrp(), "erd");
    }

    #[test]
    fn test_zero_address() {
        let address = Bech32Address::from_pubkey("erd", [0u8; 32]).unwrap();
        assert_eq!(
            address.to_string(),
            "erd1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqq6gq4hu"
        );
    }

    #[test]
    fn test_parse_round_trip() {
        let address: Bech32Address = ALICE.parse().unwrap();
        assert_eq!(address.pubkey(), &alice_pubkey());
        assert_eq!(address.to_string(), ALICE);
    }

    #[test]
    fn test_parse_checks_hrp() {
        assert!(Bech32Address::parse(ALICE, "erd").is_ok());

        let err = Bech32Address::parse(ALICE, "tst").unwrap_err();
        assert_eq!(
            err,
            AddressError::HrpMismatch {
                expected: "tst".to_string(),
                found: "erd".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_rejects_bad_checksum() {
        let mut tampered = ALICE.to_string();
        tampered.pop();
        tampered.push('q');
        assert!(matches!(
            tampered.parse::<Bech32Address>(),
            Err(AddressError::Bech32(_))
        ));
    }

    #[test]
    fn test_from_slice_rejects_wrong_length() {
        let err = Bech32Address::from_slice("erd", &[7u8; 20]).unwrap_err();
        assert_eq!(
            err,
            AddressError::InvalidLength {
                expected: 32,
                len: 20
            }
        );
    }

    #[test]
    fn test_serde_as_string() {
        let address: Bech32Address = ALICE.parse().unwrap();
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, format!("\"{}\"", ALICE));

        let back: Bech32Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, address);
    }
}
