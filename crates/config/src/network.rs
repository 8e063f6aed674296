use crate::ConfigError;

#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// MultiversX gateway (proxy) HTTP URL used for contract view calls
    ///
    /// Env: LPA_NETWORK_GATEWAY_URL
    /// Valid schemes: http://, https://
    /// Default: https://devnet-gateway.multiversx.com
    pub gateway_url: String,

    /// Human-readable part of bech32 addresses on this network
    ///
    /// Env: LPA_NETWORK_HRP
    /// Default: erd
    pub hrp: String,

    /// Minter proxy contract serving getLiveMinters and getCollectionCreationFee
    ///
    /// Env: LPA_NETWORK_PROXY_CONTRACT
    pub proxy_contract: String,

    /// Contract serving getAddressMinters, when it is not the proxy
    ///
    /// Env: LPA_NETWORK_REGISTRY_CONTRACT
    /// Default: unset (the proxy contract answers)
    pub registry_contract: Option<String>,

    /// Timeout for a single contract query, in seconds
    ///
    /// Env: LPA_NETWORK_REQUEST_TIMEOUT_SECS
    /// Default: 30
    pub request_timeout_secs: u64,

    /// Upper bound on contract queries in flight for one batch
    ///
    /// Env: LPA_NETWORK_MAX_CONCURRENT_QUERIES
    /// Default: 32
    pub max_concurrent_queries: usize,
}

pub(crate) fn default_gateway_url() -> String {
    "https://devnet-gateway.multiversx.com".to_string()
}

pub(crate) fn default_hrp() -> String {
    "erd".to_string()
}

pub(crate) fn default_proxy_contract() -> String {
    "erd1qqqqqqqqqqqqqpgq0vct9qkqcnr0vgj8hsvdmufzxy9nevppu7zs8qzs0r".to_string()
}

pub(crate) fn default_request_timeout_secs() -> u64 {
    30
}

pub(crate) fn default_max_concurrent_queries() -> usize {
    32
}

impl NetworkConfig {
    /// Contract to ask for an owner's minters.
    pub fn address_minters_contract(&self) -> &str {
        self.registry_contract
            .as_deref()
            .unwrap_or(&self.proxy_contract)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        Self::validate_url(&self.gateway_url)?;

        // bech32 limits the hrp to 1..=83 printable characters; the network uses lowercase
        let hrp_valid = !self.hrp.is_empty()
            && self.hrp.len() <= 83
            && self
                .hrp
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
        if !hrp_valid {
            return Err(ConfigError::ValidateError(format!(
                "Invalid bech32 prefix '{}'. Must be 1-83 lowercase ASCII letters or digits",
                self.hrp
            )));
        }

        if !self.proxy_contract.starts_with(&format!("{}1", self.hrp)) {
            return Err(ConfigError::ValidateError(format!(
                "Proxy contract '{}' is not a '{}' address",
                self.proxy_contract, self.hrp
            )));
        }

        if let Some(registry) = &self.registry_contract {
            if !registry.starts_with(&format!("{}1", self.hrp)) {
                return Err(ConfigError::ValidateError(format!(
                    "Registry contract '{}' is not a '{}' address",
                    registry, self.hrp
                )));
            }
        }

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ValidateError(
                "Request timeout must be greater than 0".to_string(),
            ));
        }

        if self.max_concurrent_queries == 0 {
            return Err(ConfigError::ValidateError(
                "Max concurrent queries must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    fn validate_url(url_str: &str) -> Result<(), ConfigError> {
        if url_str.is_empty() {
            return Err(ConfigError::ValidateError(
                "Gateway URL cannot be empty".to_string(),
            ));
        }

        let parsed = url::Url::parse(url_str)
            .map_err(|e| ConfigError::ValidateError(format!("Invalid URL '{}': {}", url_str, e)))?;

        match parsed.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ConfigError::ValidateError(format!(
                "Invalid URL scheme '{}'. Must be http:// or https://",
                scheme
            ))),
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            gateway_url: default_gateway_url(),
            hrp: default_hrp(),
            proxy_contract: default_proxy_contract(),
            registry_contract: None,
            request_timeout_secs: default_request_timeout_secs(),
            max_concurrent_queries: default_max_concurrent_queries(),
        }
    }
}
