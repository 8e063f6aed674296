// Copyright (C) 2026 Launchpad Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use config::{Args, LaunchpadConfig};
use server::{app, logging, metrics, state::AppState};
use std::net::{IpAddr, SocketAddr};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse_args();
    let config = LaunchpadConfig::from_env_file(&args.env_file)?;

    logging::init(&config.log)?;
    if config.metrics.enabled {
        metrics::init(&config.metrics.prometheus_prefix);
    }

    let ip: IpAddr = config.express.bind_host.parse()?;
    let addr = SocketAddr::new(ip, config.express.port);

    tracing::info!("Log level: {}", config.log.level);
    tracing::info!("Gateway URL: {}", config.network.gateway_url);
    tracing::info!("Proxy contract: {}", config.network.proxy_contract);
    tracing::info!(
        "Registry contract: {}",
        config.network.address_minters_contract()
    );
    tracing::info!(
        collection_info = ?config.schema.collection_info,
        live_minter = ?config.schema.live_minter,
        "Response layouts"
    );

    let state = AppState::new(config)?;
    let app = app::create_app(state);

    tracing::info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
