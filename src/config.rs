//! Host configuration parsed from environment variables.
//!
//! Leptos site options (site root, asset dir, reload port) are read
//! separately from `[package.metadata.leptos]` in `Cargo.toml`.

use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND: &str = "0.0.0.0";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT '{0}': expected an integer in 1..=65535")]
    InvalidPort(String),
    #[error("invalid WORDBOOK_BIND '{0}': expected an IP address")]
    InvalidBind(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Build host config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `WORDBOOK_BIND`: listen address, default `0.0.0.0`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build host config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_port(lookup("PORT").as_deref())?;
        let ip = parse_bind(lookup("WORDBOOK_BIND").as_deref())?;
        Ok(Self { addr: SocketAddr::new(ip, port) })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_PORT);
    };
    match raw.parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort(raw.to_owned())),
    }
}

fn parse_bind(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    let raw = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_BIND);
    raw.parse().map_err(|_| ConfigError::InvalidBind(raw.to_owned()))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
