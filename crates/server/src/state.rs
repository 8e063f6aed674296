// Copyright (C) 2026 Launchpad Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::client::{GatewayClient, NetworkError};
use crate::fetch::{FetchError, Launchpad};
use crate::routes::RouteRegistry;
use config::LaunchpadConfig;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("Failed to create gateway client: {0}")]
    Client(#[from] NetworkError),

    #[error("Invalid launchpad setup: {0}")]
    Launchpad(#[from] FetchError),
}

#[derive(Clone)]
pub struct AppState {
    pub config: LaunchpadConfig,
    pub launchpad: Arc<Launchpad<GatewayClient>>,
    pub route_registry: RouteRegistry,
}

impl AppState {
    pub fn new(config: LaunchpadConfig) -> Result<Self, StateError> {
        let client = GatewayClient::from_config(&config.network)?;
        let launchpad = Launchpad::from_config(client, &config.network, &config.schema)?;

        Ok(Self {
            config,
            launchpad: Arc::new(launchpad),
            route_registry: RouteRegistry::new(),
        })
    }
}
