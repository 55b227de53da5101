//! Runs the postdesk HTTP server.
//!
//! Usage:
//!
//! ```text
//! postdesk [--listen ADDR] [--posts-endpoint URL] [--upstream-timeout-secs N] [--log-format auto|text|json]
//! ```
//!
//! Every flag also reads an environment variable; see `postdesk --help`.

use clap::Parser;
use postdesk::{
    config::Config,
    telemetry,
    web::{AppState, router},
};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::parse();
    telemetry::init_logging(config.log_format)?;

    let state = AppState::from_config(&config)?;
    let listener = TcpListener::bind(config.listen_addr).await?;
    info!(
        addr = %listener.local_addr()?,
        posts_endpoint = %config.posts_endpoint,
        "postdesk listening"
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("postdesk stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
    }
}
