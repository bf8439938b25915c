//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Snapshot served when `TRANSIT_BASE` is unset.
pub const DEFAULT_BASE_PATH: &str = "transport_catalogue.db";

/// Listen address used when `TRANSIT_ADDR` is unset.
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Error from reading the server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid TRANSIT_ADDR {value:?}: {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Configuration for the `serve` mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Snapshot written by `make_base`
    pub base_path: PathBuf,
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Read `TRANSIT_BASE` and `TRANSIT_ADDR` from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_path = lookup("TRANSIT_BASE")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_PATH.to_string());
        let addr = lookup("TRANSIT_ADDR")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidAddr { value: addr, source })?;

        Ok(Self {
            base_path: PathBuf::from(base_path),
            addr,
        })
    }
}
