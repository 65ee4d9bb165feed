//! Settings from the process environment (optionally seeded from `.env`).

use crate::error::ConfigError;
use std::net::SocketAddr;

pub const DATABASE_URL_KEY: &str = "DATABASE_URL";
pub const BIND_ADDR_KEY: &str = "BIND_ADDR";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: SocketAddr,
}

impl Settings {
    /// Load `.env` if present, then read settings from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. `DATABASE_URL` is required.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup(DATABASE_URL_KEY)
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing(DATABASE_URL_KEY))?;
        let raw_addr = lookup(BIND_ADDR_KEY).unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = raw_addr.parse().map_err(|_| ConfigError::Invalid {
            key: BIND_ADDR_KEY,
            value: raw_addr.clone(),
        })?;
        Ok(Settings {
            database_url,
            bind_addr,
        })
    }
}
