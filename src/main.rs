//! cmdsrv - line-oriented TCP command server.
//!
//! Loads the configuration, registers the utility commands and serves.

use cmdsrv::config::{Config, LogFormat};
use cmdsrv::handlers::{AddHandler, EchoHandler};
use cmdsrv::Server;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());

    let config = Config::load(&config_path);

    // Initialize tracing
    let log_format = config
        .as_ref()
        .map(|c| c.log.format)
        .unwrap_or_default();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match log_format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
    }

    let config = config.map_err(|e| {
        error!(path = %config_path, error = %e, "Failed to load config");
        e
    })?;

    info!(
        version_major = config.server.version_major,
        version_minor = config.server.version_minor,
        dialect = %config.server.dialect,
        address = %config.listen.address,
        "Starting cmdsrv"
    );

    let mut server = Server::from_config(&config);
    server.handle("echo", EchoHandler).handle("add", AddHandler);

    server.listen_and_serve(&config.listen.address).await;

    Ok(())
}
