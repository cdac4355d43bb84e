//! Environment-driven server configuration

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    /// Largest pasted words text accepted when creating or editing a list.
    pub max_words_text_bytes: usize,
    /// Idle time after which an unfinished study session is dropped.
    pub session_idle_timeout: Duration,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Env vars:
    /// - DATABASE_URL: PostgreSQL connection string (required)
    /// - HOST / PORT: bind address (default 0.0.0.0:3000)
    /// - DATABASE_MAX_CONNECTIONS: pool size (default 10)
    /// - MAX_WORDS_TEXT_BYTES: pasted list limit (default 65536)
    /// - SESSION_IDLE_TIMEOUT_SECS: idle study session lifetime (default 3600)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or(&lookup, "PORT", 3000)?;
        let max_connections = parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 10)?;
        let max_words_text_bytes = parse_or(&lookup, "MAX_WORDS_TEXT_BYTES", 64 * 1024)?;
        let session_idle_timeout =
            Duration::from_secs(parse_or(&lookup, "SESSION_IDLE_TIMEOUT_SECS", 60 * 60)?);

        Ok(Self {
            database_url,
            host,
            port,
            max_connections,
            max_words_text_bytes,
            session_idle_timeout,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
