// Copyright (C) 2026 Launchpad Developers
// SPDX-License-Identifier: GPL-3.0-or-later

mod args;
mod error;
mod express;
mod log;
mod metrics;
mod network;
mod schema;

pub use args::Args;
pub use error::ConfigError;
pub use express::ExpressConfig;
pub use log::LogConfig;
pub use metrics::{MetricsConfig, MetricsError};
pub use network::NetworkConfig;
pub use schema::{CollectionInfoVersion, LiveMinterLayout, SchemaConfig, UnknownVariant};

use serde::Deserialize;
use std::path::Path;

/// Prefix of every environment variable read by [`LaunchpadConfig::from_env`].
pub const ENV_PREFIX: &str = "LPA_";

/// Flat view of the environment, one field per `LPA_*` variable.
#[derive(Debug, Deserialize)]
struct EnvConfig {
    #[serde(default = "express::default_bind_host")]
    express_bind_host: String,
    #[serde(default = "express::default_port")]
    express_port: u16,

    #[serde(default = "log::default_level")]
    log_level: String,
    #[serde(default)]
    log_json: bool,
    #[serde(default)]
    log_strip_ansi: bool,
    #[serde(default)]
    log_write: bool,
    #[serde(default = "log::default_write_path")]
    log_write_path: String,
    #[serde(default = "log::default_write_max_file_size")]
    log_write_max_file_size: u64,
    #[serde(default = "log::default_write_max_files")]
    log_write_max_files: usize,

    #[serde(default = "network::default_gateway_url")]
    network_gateway_url: String,
    #[serde(default = "network::default_hrp")]
    network_hrp: String,
    #[serde(default = "network::default_proxy_contract")]
    network_proxy_contract: String,
    #[serde(default)]
    network_registry_contract: Option<String>,
    #[serde(default = "network::default_request_timeout_secs")]
    network_request_timeout_secs: u64,
    #[serde(default = "network::default_max_concurrent_queries")]
    network_max_concurrent_queries: usize,

    #[serde(default)]
    schema_collection_info: CollectionInfoVersion,
    #[serde(default)]
    schema_live_minter: LiveMinterLayout,

    #[serde(default = "metrics::default_enabled")]
    metrics_enabled: bool,
    #[serde(default = "metrics::default_prometheus_prefix")]
    metrics_prefix: String,
}

impl From<EnvConfig> for LaunchpadConfig {
    fn from(env: EnvConfig) -> Self {
        Self {
            express: ExpressConfig {
                bind_host: env.express_bind_host,
                port: env.express_port,
            },
            log: LogConfig {
                level: env.log_level,
                json: env.log_json,
                strip_ansi: env.log_strip_ansi,
                write: env.log_write,
                write_path: env.log_write_path,
                write_max_file_size: env.log_write_max_file_size,
                write_max_files: env.log_write_max_files,
            },
            network: NetworkConfig {
                gateway_url: env.network_gateway_url,
                hrp: env.network_hrp,
                proxy_contract: env.network_proxy_contract,
                registry_contract: env.network_registry_contract,
                request_timeout_secs: env.network_request_timeout_secs,
                max_concurrent_queries: env.network_max_concurrent_queries,
            },
            schema: SchemaConfig {
                collection_info: env.schema_collection_info,
                live_minter: env.schema_live_minter,
            },
            metrics: MetricsConfig {
                enabled: env.metrics_enabled,
                prometheus_prefix: env.metrics_prefix,
            },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LaunchpadConfig {
    pub express: ExpressConfig,
    pub log: LogConfig,
    pub network: NetworkConfig,
    pub schema: SchemaConfig,
    pub metrics: MetricsConfig,
}

impl LaunchpadConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let env = envy::prefixed(ENV_PREFIX).from_env::<EnvConfig>()?;
        let config = Self::from(env);
        config.validate()?;
        Ok(config)
    }

    /// Load variables from `path` (when the file exists) and then read the environment.
    ///
    /// Variables already present in the process environment win over the file.
    pub fn from_env_file(path: &str) -> Result<Self, ConfigError> {
        if Path::new(path).exists() {
            dotenv::from_filename(path).map_err(|source| ConfigError::EnvFileError {
                path: path.to_string(),
                source,
            })?;
        }
        Self::from_env()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.express.validate()?;
        self.log.validate()?;
        self.network.validate()?;
        self.metrics.validate()?;
        Ok(())
    }
}
