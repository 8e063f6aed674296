// Copyright (C) 2026 Launchpad Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! MultiversX gateway `vm-values/query` client.

use super::{NetworkError, QueryClient};
use crate::types::QueryResult;
use config::NetworkConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

const QUERY_PATH: &str = "vm-values/query";
const GATEWAY_SUCCESS: &str = "successful";
const RETURN_CODE_OK: &str = "ok";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VmQueryRequest<'a> {
    sc_address: &'a str,
    func_name: &'a str,
    args: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct GatewayEnvelope {
    #[serde(default)]
    data: Option<VmQueryData>,
    #[serde(default)]
    error: String,
    #[serde(default)]
    code: String,
}

#[derive(Debug, Deserialize)]
struct VmQueryData {
    data: VmOutput,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VmOutput {
    #[serde(default)]
    return_data: Option<Vec<String>>,
    #[serde(default)]
    return_code: String,
    #[serde(default)]
    return_message: String,
}

#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    query_url: String,
}

impl GatewayClient {
    pub fn new(gateway_url: &str, timeout: Duration) -> Result<Self, NetworkError> {
        let base = Url::parse(gateway_url).map_err(|source| NetworkError::InvalidUrl {
            url: gateway_url.to_string(),
            source,
        })?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(NetworkError::Build)?;

        Ok(Self {
            http,
            query_url: format!("{}/{QUERY_PATH}", base.as_str().trim_end_matches('/')),
        })
    }

    pub fn from_config(config: &NetworkConfig) -> Result<Self, NetworkError> {
        Self::new(
            &config.gateway_url,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn query_url(&self) -> &str {
        &self.query_url
    }
}

impl QueryClient for GatewayClient {
    async fn query_contract(
        &self,
        address: &str,
        function: &str,
        args: &[Vec<u8>],
    ) -> Result<QueryResult, NetworkError> {
        let body = VmQueryRequest {
            sc_address: address,
            func_name: function,
            args: args.iter().map(hex::encode).collect(),
        };

        tracing::debug!(address, function, args = body.args.len(), "Querying contract");

        let request_error = |source| NetworkError::Request {
            url: self.query_url.clone(),
            source,
        };

        let response = self
            .http
            .post(&self.query_url)
            .json(&body)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        let text = response.text().await.map_err(request_error)?;

        if !status.is_success() {
            // The gateway reports VM failures with a 4xx and a JSON envelope.
            if let Ok(envelope) = serde_json::from_str::<GatewayEnvelope>(&text)
                && !envelope.error.is_empty()
            {
                return Err(NetworkError::Gateway {
                    code: envelope.code,
                    message: envelope.error,
                });
            }
            return Err(NetworkError::HttpStatus {
                status: status.as_u16(),
                body: text,
            });
        }

        parse_envelope(&text)
    }
}

fn parse_envelope(text: &str) -> Result<QueryResult, NetworkError> {
    let envelope: GatewayEnvelope =
        serde_json::from_str(text).map_err(|e| NetworkError::InvalidResponse(e.to_string()))?;

    if envelope.code != GATEWAY_SUCCESS {
        return Err(NetworkError::Gateway {
            code: envelope.code,
            message: envelope.error,
        });
    }

    let output = envelope
        .data
        .ok_or_else(|| NetworkError::InvalidResponse("missing data".to_string()))?
        .data;

    if !output.return_code.is_empty() && output.return_code != RETURN_CODE_OK {
        return Err(NetworkError::ContractReturned {
            code: output.return_code,
            message: output.return_message,
        });
    }

    Ok(QueryResult::new(output.return_data.unwrap_or_default()))
}
