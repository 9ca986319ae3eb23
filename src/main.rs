use anyhow::{Context, Result};
use em_services_site::{config::Config, logging, server, site::RenderedSite};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    logging::init()?;

    info!("Starting EM SERVICES site");

    let config = Config::from_env()?;
    let site = Arc::new(RenderedSite::build_validated()?);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("✓ Listening on http://{}", addr);

    axum::serve(listener, server::router(site))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        // Keep serving; the process can still be killed
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
