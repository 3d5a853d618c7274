//! Server configuration parsed from environment variables.
//!
//! Required: none.
//!
//! Optional:
//! - `HOST`: bind address, default `0.0.0.0`
//! - `PORT`: bind port, default 3000
//! - `SITE_DIR`: directory holding the built `pkg/` assets; the Leptos
//!   `site-root` is used when absent

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid HOST {value:?}: expected an IP address")]
    InvalidHost { value: String },
    #[error("invalid PORT {value:?}: expected 1-65535")]
    InvalidPort { value: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub site_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST, port: DEFAULT_PORT, site_dir: None }
    }
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `HOST` or `PORT` is set but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `HOST` or `PORT` is set but unparsable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = match non_empty(lookup("HOST")) {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidHost { value })?,
            None => DEFAULT_HOST,
        };
        let port = match non_empty(lookup("PORT")) {
            Some(value) => parse_port(&value).ok_or(ConfigError::InvalidPort { value })?,
            None => DEFAULT_PORT,
        };
        let site_dir = non_empty(lookup("SITE_DIR")).map(PathBuf::from);
        Ok(Self { host, port, site_dir })
    }

    #[must_use]
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn parse_port(raw: &str) -> Option<u16> {
    raw.parse::<u16>().ok().filter(|p| *p != 0)
}
