//! HTTP server initialization and runtime setup.
//!
//! Builds the WHOIS client and service from configuration and runs the Axum
//! server until it fails.

use crate::application::services::WhoisService;
use crate::config::Config;
use crate::infrastructure::whois::TcpWhoisClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;

/// Creates the application state from configuration.
pub fn build_state(config: &Config) -> AppState {
    let mut client = TcpWhoisClient::new().with_port(config.whois_port);
    if let Some(timeout) = config.whois_timeout() {
        client = client.with_timeout(timeout);
    }

    let whois_service = WhoisService::new(Arc::new(client), config.whois_root_server.clone());

    AppState::new(Arc::new(whois_service))
}

/// Runs the HTTP server with the given configuration.
///
/// Binds every interface on the configured port and serves `/whois` and
/// `/health`.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails (e.g. port already in use)
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config);
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr()
        .parse()
        .with_context(|| format!("invalid listen address '{}'", config.listen_addr()))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Error starting server on port {}", config.port))?;

    tracing::info!("Starting server on port {}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
