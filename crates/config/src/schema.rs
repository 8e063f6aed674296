use serde::{Deserialize, Deserializer};
use std::str::FromStr;
use thiserror::Error;

/// Layout revision of the `getMinterInfo` response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollectionInfoVersion {
    /// 24 fixed slots, no fee.
    #[default]
    V1,
    /// 25 fixed slots, fee after the phase counters.
    V2,
}

/// Group stride of the `getLiveMinters` response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LiveMinterLayout {
    /// 8 slots per minter, cost included.
    #[default]
    Full,
    /// 7 slots per minter, no cost slot.
    Legacy,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    kind: &'static str,
    value: String,
}

impl FromStr for CollectionInfoVersion {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "v1" | "1" => Ok(Self::V1),
            "v2" | "2" => Ok(Self::V2),
            other => Err(UnknownVariant {
                kind: "collection info schema",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for LiveMinterLayout {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full" | "8" => Ok(Self::Full),
            "legacy" | "7" => Ok(Self::Legacy),
            other => Err(UnknownVariant {
                kind: "live minter layout",
                value: other.to_string(),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for CollectionInfoVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for LiveMinterLayout {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Which response layouts the deployed contracts use.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaConfig {
    /// Env: LPA_SCHEMA_COLLECTION_INFO
    /// Valid values: v1, v2
    /// Default: v1
    pub collection_info: CollectionInfoVersion,

    /// Env: LPA_SCHEMA_LIVE_MINTER
    /// Valid values: full, legacy
    /// Default: full
    pub live_minter: LiveMinterLayout,
}
