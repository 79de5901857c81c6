//! # Countries API server
//!
//! Reads [`Config`], starts the [`CountrySystem`] and serves the router until Ctrl-C.

use clap::Parser;
use countries_api::config::Config;
use countries_api::http::{router, AppState};
use countries_api::lifecycle::{setup_tracing, CountrySystem};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = Config::parse();
    info!(?config, "Starting countries service");

    let system = CountrySystem::new(config.channel_capacity, config.initial_collection());
    let app = router(AppState::new(system.country_client.clone()));

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .map_err(|e| format!("Failed to bind {}: {}", config.bind, e))?;
    info!(addr = %config.bind, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("Server error: {}", e))?;

    // The router (and its client clones) is gone; the actor can now stop.
    system.shutdown().await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
