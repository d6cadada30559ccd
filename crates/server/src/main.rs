mod api;
mod cli;
mod router;
mod rules;
mod state;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use crate::cli::Cli;
use crate::state::AppState;

async fn serve(config: rulepad_core::Config) -> anyhow::Result<()> {
    config.log_summary();

    let state = Arc::new(AppState::new(config));
    state
        .store
        .ensure_dir()
        .with_context(|| format!("failed to prepare rules directory {}", state.store.rules_dir().display()))?;

    if !state.config.storage.static_dir.is_dir() {
        tracing::warn!(
            path = %state.config.storage.static_dir.display(),
            "static directory not found, only the API will be served"
        );
    }

    let addr = state.config.server.bind_addr();
    let port = state.config.server.port;
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server is running on http://localhost:{}", port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = cli.load_config();
    serve(config).await
}
