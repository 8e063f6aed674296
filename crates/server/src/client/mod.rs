// Copyright (C) 2026 Launchpad Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Smart-contract view calls.

pub mod gateway;

pub use gateway::GatewayClient;

use crate::types::QueryResult;
use std::future::Future;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Invalid gateway URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Gateway responded with HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Gateway error ({code}): {message}")]
    Gateway { code: String, message: String },

    #[error("Contract returned '{code}': {message}")]
    ContractReturned { code: String, message: String },

    #[error("Invalid gateway response: {0}")]
    InvalidResponse(String),
}

impl NetworkError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, NetworkError::Request { source, .. } if source.is_timeout())
    }
}

/// Executes read-only contract functions.
///
/// `args` are raw argument bytes; implementations choose their own wire
/// encoding.
pub trait QueryClient: Send + Sync {
    fn query_contract(
        &self,
        address: &str,
        function: &str,
        args: &[Vec<u8>],
    ) -> impl Future<Output = Result<QueryResult, NetworkError>> + Send;
}
