//! Runtime configuration loaded from the environment.

use std::net::SocketAddr;

use thiserror::Error;

use shoppinglist_observability::DEFAULT_FILTER;

/// Environment variable holding the listen address.
pub const BIND_ADDR_VAR: &str = "BASE_ITEMS_BIND_ADDR";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Environment variable holding the fallback log filter (`RUST_LOG` still wins).
pub const LOG_FILTER_VAR: &str = "BASE_ITEMS_LOG_FILTER";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidBindAddr { var: &'static str, value: String },
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub log_filter: String,
}

impl ApiConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variables (unset variables yield `None`).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = match lookup(BIND_ADDR_VAR) {
            Some(raw) => parse_bind_addr(raw.trim())?,
            None => default_bind_addr(),
        };
        let log_filter = lookup(LOG_FILTER_VAR)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        Ok(Self { bind_addr, log_filter })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            log_filter: DEFAULT_FILTER.to_string(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

fn parse_bind_addr(raw: &str) -> Result<SocketAddr, ConfigError> {
    raw.parse().map_err(|_| ConfigError::InvalidBindAddr {
        var: BIND_ADDR_VAR,
        value: raw.to_string(),
    })
}
