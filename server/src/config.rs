//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Errors produced while reading server configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `PORT` is set but not a valid port number.
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    /// `SITE_ADDR` is set but not an IP address.
    #[error("invalid SITE_ADDR: {0}")]
    InvalidAddr(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Socket the HTTP listener binds to.
    pub addr: SocketAddr,
    /// Static root override. `None` uses the Leptos `site_root`.
    pub site_root: Option<PathBuf>,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_ADDR`: default `0.0.0.0`
    /// - `SITE_ROOT`: directory holding `pkg/` and static assets
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if `PORT` or `SITE_ADDR` is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("SITE_ADDR").ok().as_deref(),
            std::env::var("SITE_ROOT").ok().as_deref(),
        )
    }

    fn from_values(port: Option<&str>, addr: Option<&str>, site_root: Option<&str>) -> Result<Self, ConfigError> {
        let port = parse_port(port)?;
        let ip = parse_addr(addr)?;
        let site_root = site_root
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);
        Ok(Self { addr: SocketAddr::new(ip, port), site_root })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_addr(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_ADDR),
        Some(value) => value
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidAddr(value.to_owned())),
    }
}
