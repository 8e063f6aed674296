// Copyright (C) 2026 Launchpad Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Query orchestration over the minter contracts.
//!
//! [`Launchpad`] is the handle every caller goes through: it owns the query
//! client, the network's address prefix, the proxy contract and the layouts in
//! use. Batch operations fan out one query per address and report failures
//! per address instead of failing the whole batch.

use crate::client::{NetworkError, QueryClient};
use crate::decode::layouts::{
    GET_ADDRESS_MINTERS, GET_COLLECTION_CREATION_FEE, GET_COLLECTION_NAME, GET_LIVE_MINTERS,
    GET_MINTER_INFO,
};
use crate::decode::{
    CollectionInfo, CollectionSummary, LayoutExt, LiveMinter, Schema, SchemaError,
    decode_address_minter_list, decode_collection_creation_fee, decode_collection_info,
    decode_collection_name, decode_live_minters,
};
use crate::metrics::registry::{CONTRACT_QUERIES, CONTRACT_QUERY_FAILURES, DECODE_FAILURES};
use crate::types::{AddressError, Bech32Address, QueryResult, U256};
use crate::utils::run_with_concurrency_settled;
use config::{NetworkConfig, SchemaConfig};
use serde::Serialize;
use serde::ser::SerializeStruct;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid address '{address}': {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: AddressError,
    },

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl FetchError {
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::InvalidAddress { .. } => "invalid_address",
            FetchError::Network(_) => "network",
            FetchError::Schema(_) => "schema",
        }
    }
}

/// One address of a batch that could not be turned into a record.
#[derive(Debug)]
pub struct AddressFailure {
    pub address: String,
    pub error: FetchError,
}

impl Serialize for AddressFailure {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("AddressFailure", 3)?;
        state.serialize_field("address", &self.address)?;
        state.serialize_field("kind", self.error.kind())?;
        state.serialize_field("error", &self.error.to_string())?;
        state.end()
    }
}

/// Records and failures of a batch, each in input order.
#[derive(Debug, Serialize)]
pub struct BatchOutcome<T> {
    pub records: Vec<T>,
    pub errors: Vec<AddressFailure>,
}

impl<T> BatchOutcome<T> {
    fn settle(results: Vec<(String, Result<T, FetchError>)>, what: &'static str) -> Self {
        let mut records = Vec::with_capacity(results.len());
        let mut errors = Vec::new();

        for (address, result) in results {
            match result {
                Ok(record) => records.push(record),
                Err(error) => {
                    tracing::warn!(
                        address = %address,
                        kind = error.kind(),
                        error = %error,
                        "Failed to fetch {what}"
                    );
                    errors.push(AddressFailure { address, error });
                }
            }
        }

        Self { records, errors }
    }
}

/// Layouts used to decode responses of the deployed contract revisions.
#[derive(Debug, Clone, Copy)]
pub struct SchemaSet {
    pub collection_info: &'static Schema,
    pub live_minter: &'static Schema,
}

impl SchemaSet {
    pub fn from_config(config: &SchemaConfig) -> Self {
        Self {
            collection_info: config.collection_info.schema(),
            live_minter: config.live_minter.schema(),
        }
    }
}

impl Default for SchemaSet {
    fn default() -> Self {
        Self::from_config(&SchemaConfig::default())
    }
}

pub struct Launchpad<C> {
    client: C,
    hrp: String,
    proxy_contract: Bech32Address,
    registry_contract: Bech32Address,
    schemas: SchemaSet,
    max_concurrent: usize,
}

impl<C: QueryClient> Launchpad<C> {
    pub fn new(
        client: C,
        hrp: impl Into<String>,
        proxy_contract: Bech32Address,
        schemas: SchemaSet,
        max_concurrent: usize,
    ) -> Self {
        Self {
            client,
            hrp: hrp.into(),
            registry_contract: proxy_contract.clone(),
            proxy_contract,
            schemas,
            max_concurrent: max_concurrent.max(1),
        }
    }

    /// Sends `getAddressMinters` to `registry` instead of the proxy.
    pub fn with_registry_contract(mut self, registry: Bech32Address) -> Self {
        self.registry_contract = registry;
        self
    }

    pub fn from_config(
        client: C,
        network: &NetworkConfig,
        schema: &SchemaConfig,
    ) -> Result<Self, FetchError> {
        let parse = |address: &str| {
            Bech32Address::parse(address, &network.hrp).map_err(|source| {
                FetchError::InvalidAddress {
                    address: address.to_string(),
                    source,
                }
            })
        };
        let proxy_contract = parse(&network.proxy_contract)?;
        let registry_contract = parse(network.address_minters_contract())?;

        Ok(Self::new(
            client,
            network.hrp.clone(),
            proxy_contract,
            SchemaSet::from_config(schema),
            network.max_concurrent_queries,
        )
        .with_registry_contract(registry_contract))
    }

    pub fn hrp(&self) -> &str {
        &self.hrp
    }

    pub fn proxy_contract(&self) -> &Bech32Address {
        &self.proxy_contract
    }

    pub fn registry_contract(&self) -> &Bech32Address {
        &self.registry_contract
    }

    pub fn schemas(&self) -> SchemaSet {
        self.schemas
    }

    pub fn parse_address(&self, address: &str) -> Result<Bech32Address, FetchError> {
        Bech32Address::parse(address.trim(), &self.hrp).map_err(|source| {
            FetchError::InvalidAddress {
                address: address.to_string(),
                source,
            }
        })
    }

    async fn query(
        &self,
        contract: &Bech32Address,
        function: &'static str,
        args: &[Vec<u8>],
    ) -> Result<QueryResult, FetchError> {
        CONTRACT_QUERIES.with_label_values(&[function]).inc();

        match self
            .client
            .query_contract(contract.as_str(), function, args)
            .await
        {
            Ok(result) => Ok(result),
            Err(err) => {
                CONTRACT_QUERY_FAILURES.with_label_values(&[function]).inc();
                Err(err.into())
            }
        }
    }

    /// Current state of the minter at `address`.
    pub async fn collection_info(&self, address: &str) -> Result<CollectionInfo, FetchError> {
        let contract = self.parse_address(address)?;
        let raw = self.query(&contract, GET_MINTER_INFO, &[]).await?;
        record_decode(decode_collection_info(
            &raw,
            &contract,
            self.schemas.collection_info,
            &self.hrp,
        ))
    }

    /// One `getMinterInfo` per address, all settled.
    pub async fn fetch_collections_info(&self, addresses: &[String]) -> BatchOutcome<CollectionInfo> {
        let tasks = addresses.iter().map(|address| async move {
            (address.clone(), self.collection_info(address).await)
        });
        let results = run_with_concurrency_settled(self.max_concurrent, tasks).await;
        BatchOutcome::settle(results, "collection info")
    }

    pub async fn collection_name(&self, address: &str) -> Result<String, FetchError> {
        let contract = self.parse_address(address)?;
        let raw = self.query(&contract, GET_COLLECTION_NAME, &[]).await?;
        record_decode(decode_collection_name(&raw))
    }

    /// Minters deployed by `owner`, each with its collection name.
    ///
    /// Fails only if the owner's minter list cannot be read; name lookups
    /// are reported per minter.
    pub async fn fetch_collection_summaries(
        &self,
        owner: &str,
    ) -> Result<BatchOutcome<CollectionSummary>, FetchError> {
        let minters = self.address_minters(owner).await?;

        let tasks = minters.into_iter().map(|minter| async move {
            let result = self
                .collection_name(minter.as_str())
                .await
                .map(|name| CollectionSummary {
                    address: minter.clone(),
                    name,
                });
            (minter.to_string(), result)
        });
        let results = run_with_concurrency_settled(self.max_concurrent, tasks).await;
        Ok(BatchOutcome::settle(results, "collection name"))
    }

    pub async fn live_minters(&self) -> Result<Vec<LiveMinter>, FetchError> {
        let raw = self.query(&self.proxy_contract, GET_LIVE_MINTERS, &[]).await?;
        record_decode(decode_live_minters(
            &raw,
            self.schemas.live_minter,
            &self.hrp,
        ))
    }

    /// Minter contracts deployed by `owner`. The owner is passed to the
    /// registry contract as its 32-byte public key.
    pub async fn address_minters(&self, owner: &str) -> Result<Vec<Bech32Address>, FetchError> {
        let owner = self.parse_address(owner)?;
        let args = [owner.pubkey().to_vec()];
        let raw = self
            .query(&self.registry_contract, GET_ADDRESS_MINTERS, &args)
            .await?;
        record_decode(decode_address_minter_list(&raw, &self.hrp))
    }

    /// Fee charged by the proxy for deploying a new minter.
    pub async fn creation_fee(&self) -> Result<U256, FetchError> {
        let raw = self
            .query(&self.proxy_contract, GET_COLLECTION_CREATION_FEE, &[])
            .await?;
        record_decode(decode_collection_creation_fee(&raw))
    }
}

fn record_decode<T>(result: Result<T, SchemaError>) -> Result<T, FetchError> {
    result.map_err(|err| {
        DECODE_FAILURES.with_label_values(&[err.endpoint()]).inc();
        err.into()
    })
}
