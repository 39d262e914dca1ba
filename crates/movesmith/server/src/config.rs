//! Server configuration

use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr};

use crate::error::{ServerError, ServerResult};

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8080;

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: SocketAddr,

    /// Enable permissive CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,
}

impl ServerConfig {
    /// Replace the listen address with a user-supplied `host:port`.
    pub fn with_listen(mut self, listen: &str) -> ServerResult<Self> {
        self.listen_addr = listen
            .parse()
            .map_err(|e| ServerError::Config(format!("invalid listen address '{listen}': {e}")))?;
        Ok(self)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            enable_cors: true,
        }
    }
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT))
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.listen_addr.to_string(), "127.0.0.1:8080");
        assert!(config.enable_cors);
    }

    #[test]
    fn config_with_listen() {
        let config = ServerConfig::default().with_listen("0.0.0.0:9000").unwrap();
        assert_eq!(config.listen_addr.port(), 9000);
    }

    #[test]
    fn config_with_listen_rejects_garbage() {
        let err = ServerConfig::default().with_listen("nowhere").unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
        assert!(err.to_string().contains("nowhere"));
    }

    #[test]
    fn config_deserialize_fills_defaults() {
        let config: ServerConfig = serde_json::from_str(r#"{"enable_cors": false}"#).unwrap();
        assert_eq!(config.listen_addr, default_listen_addr());
        assert!(!config.enable_cors);
    }
}
