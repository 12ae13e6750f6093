use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Outbound HTTP client with connection pooling (shared across requests)
    pub http: reqwest::Client,
}

impl ServerState {
    /// Create new server state
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.upstream_timeout())
            .connect_timeout(config.upstream_connect_timeout())
            .pool_max_idle_per_host(32)
            .build()
            .map_err(|e| ServerError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            config: Arc::new(config),
            http,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_initialization() {
        let state = ServerState::new(ServerConfig::default()).unwrap();
        assert_eq!(state.config.port, 8080);
    }
}
