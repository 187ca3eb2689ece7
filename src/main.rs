//! reqecho - HTTP echo server
//!
//! Configured through `ECHO_HOST`, `ECHO_PORT`, `ECHO_PATH` and
//! `ECHO_MAX_BODY_SIZE`; log verbosity through `RUST_LOG`.

use reqecho::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = EchoConfig::from_env()?;

    tracing::info!("Starting echo server...");
    tracing::info!("Try: curl 'http://localhost:{}{}?a=1&a=2'", config.port, config.path);
    tracing::info!(
        "Try: curl -F name=value -F upload=@Cargo.toml http://localhost:{}{}",
        config.port,
        config.path
    );

    EchoServer::new(config).run().await
}
