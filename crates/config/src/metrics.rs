// Copyright (C) 2026 Launchpad Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error(
        "Invalid Prometheus prefix '{0}': must start with [a-zA-Z_:] and contain only [a-zA-Z0-9_:]"
    )]
    InvalidPrometheusPrefix(String),
}

/// Configuration for Prometheus metrics
#[derive(Debug, Clone)]
pub struct MetricsConfig {
    /// Expose the /metrics endpoints
    ///
    /// Env: LPA_METRICS_ENABLED
    /// Default: true
    pub enabled: bool,

    /// Prometheus metric name prefix
    ///
    /// Env: LPA_METRICS_PREFIX
    /// Default: launchpad_api
    pub prometheus_prefix: String,
}

pub(crate) fn default_enabled() -> bool {
    true
}

pub(crate) fn default_prometheus_prefix() -> String {
    "launchpad_api".to_string()
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            prometheus_prefix: default_prometheus_prefix(),
        }
    }
}

impl MetricsConfig {
    pub(crate) fn validate(&self) -> Result<(), MetricsError> {
        let mut chars = self.prometheus_prefix.chars();
        let valid = match chars.next() {
            None => false,
            Some(first) => {
                (first.is_ascii_alphabetic() || first == '_' || first == ':')
                    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':')
            }
        };

        if !valid {
            return Err(MetricsError::InvalidPrometheusPrefix(
                self.prometheus_prefix.clone(),
            ));
        }

        Ok(())
    }
}
