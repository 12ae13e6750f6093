use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Base URL of the upstream movie API; the `?t=` query is appended to it
    #[serde(default = "default_upstream_url")]
    pub upstream_url: String,

    /// Total timeout for an upstream request, in seconds
    #[serde(default = "default_upstream_timeout_secs")]
    pub upstream_timeout_secs: u64,

    /// Connect timeout for upstream requests, in seconds
    #[serde(default = "default_upstream_connect_timeout_secs")]
    pub upstream_connect_timeout_secs: u64,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            upstream_url: default_upstream_url(),
            upstream_timeout_secs: default_upstream_timeout_secs(),
            upstream_connect_timeout_secs: default_upstream_connect_timeout_secs(),
            log_level: default_log_level(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config files
    pub fn load() -> anyhow::Result<Self> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("proxy").required(false))
            // Override with environment variables
            .add_source(config::Environment::with_prefix("OMDB_PROXY").separator("__"));

        let config: ServerConfig = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get upstream request timeout as Duration
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    /// Get upstream connect timeout as Duration
    pub fn upstream_connect_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_connect_timeout_secs)
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_upstream_url() -> String {
    "http://www.omdbapi.com/".to_string()
}

fn default_upstream_timeout_secs() -> u64 {
    30
}

fn default_upstream_connect_timeout_secs() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.upstream_url, "http://www.omdbapi.com/");
        assert_eq!(cfg.upstream_timeout_secs, 30);
        assert_eq!(cfg.upstream_connect_timeout_secs, 10);
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn test_socket_addr() {
        let cfg = ServerConfig::default();
        let addr = cfg.socket_addr().unwrap();
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_socket_addr_rejects_garbage() {
        let cfg = ServerConfig {
            bind_addr: "not-an-address".to_string(),
            ..ServerConfig::default()
        };
        assert!(cfg.socket_addr().is_err());
    }
}
