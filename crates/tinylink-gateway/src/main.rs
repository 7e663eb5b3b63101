use clap::Parser;
use std::sync::Arc;
use tinylink_gateway::cli::Cli;
use tinylink_gateway::{App, AppState, Settings};
use tinylink_shortener::ShortenerService;
use tinylink_storage::InMemoryStore;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::try_from(Cli::try_parse()?)?;

    tinylink_telemetry::init(settings.log_format)?;

    let shortener = ShortenerService::new(InMemoryStore::new());
    let state = AppState::new(Arc::new(shortener), settings.base_url.clone());

    let listener = tokio::net::TcpListener::bind(settings.listen_addr()).await?;
    info!(
        listen_addr = %listener.local_addr()?,
        base_url = %settings.base_url,
        "starting gateway server"
    );

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
