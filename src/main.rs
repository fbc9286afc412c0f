mod config;
mod routes;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, ServerConfig};

#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is normal outside development.
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "wordbook stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), HostError> {
    let config = ServerConfig::from_env()?;
    let app = routes::app()?;

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(|source| HostError::Bind { addr: config.addr, source })?;

    tracing::info!(addr = %config.addr, "wordbook listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
