//! OMDb Proxy - HTTP proxy server binary
//!
//! Loads configuration from the environment and serves the proxy routes
//! until shut down via SIGTERM or Ctrl+C.

use proxy::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;

    // Start server
    proxy::start_server(config).await?;

    Ok(())
}
