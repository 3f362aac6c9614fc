//! # oasis-api: Binary Entry Point
//!
//! Parses configuration, installs tracing and serves the API until
//! Ctrl-C.

use clap::Parser;

use oasis_api::config::AppConfig;
use oasis_api::state::AppState;
use oasis_api::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::parse();
    telemetry::init_tracing(config.log_format);

    let addr = config.socket_addr();
    let state = AppState::with_config(config);
    tracing::info!(
        offset_items = state.catalog.offset_items().len(),
        cursor_items = state.catalog.cursor_items().len(),
        laptops = state.catalog.laptops().len(),
        "datasets built"
    );

    let app = oasis_api::app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("OASIS API listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("OASIS API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
