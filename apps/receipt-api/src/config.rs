//! Receipt API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                | Default   |
//! |-------------------------|-----------|
//! | `RECEIPT_API_BIND_ADDR` | `0.0.0.0` |
//! | `RECEIPT_API_PORT`      | `8080`    |
//!
//! Log verbosity is controlled separately through `RUST_LOG`.

use std::env;
use std::net::{IpAddr, SocketAddr};

use serde::{Deserialize, Serialize};

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default bind address (all interfaces).
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

/// Receipt API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Interface to listen on
    pub bind_addr: IpAddr,

    /// HTTP port
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            bind_addr: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = lookup("RECEIPT_API_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("RECEIPT_API_BIND_ADDR".to_string()))?;

        let port = lookup("RECEIPT_API_PORT")
            .unwrap_or_else(|| DEFAULT_PORT.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("RECEIPT_API_PORT".to_string()))?;

        Ok(ApiConfig { bind_addr, port })
    }

    /// Returns the socket address to bind.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
