use std::net::SocketAddr;

use dioxus_logger::tracing::Level;

use crate::server::error::config::ConfigError;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,
    pub log_level: Level,
}

impl Config {
    /// Reads configuration from environment variables
    ///
    /// `DATABASE_URL` is required, `BIND_ADDRESS` defaults to `0.0.0.0:8080` and
    /// `LOG_LEVEL` defaults to `info`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::invalid("BIND_ADDRESS", e))?;

        let log_level = match lookup("LOG_LEVEL") {
            Some(level) => level
                .parse::<Level>()
                .map_err(|e| ConfigError::invalid("LOG_LEVEL", e))?,
            None => Level::INFO,
        };

        Ok(Self {
            database_url,
            bind_address,
            log_level,
        })
    }
}
