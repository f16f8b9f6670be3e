// File: services/slotbook_backend/src/main.rs
use slotbook_backend::build_app;
use slotbook_config::load_config;
use std::error::Error;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    slotbook_common::logging::init();

    if let Err(e) = run().await {
        error!("Slotbook backend failed: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = Arc::new(load_config()?);
    info!(
        api_url = %config.zoom.api_url,
        token_ttl_secs = config.zoom.token_ttl_secs,
        request_timeout_secs = config.zoom.request_timeout_secs,
        "Configuration loaded"
    );

    let app = build_app(config.clone())?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("server is listening on http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
