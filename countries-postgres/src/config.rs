//! Runtime configuration read from the environment
//!
//! | variable                        | default                                        |
//! |---------------------------------|------------------------------------------------|
//! | `DATABASE_URL`                  | required                                       |
//! | `COUNTRIES_MAX_CONNECTIONS`     | `5`                                            |
//! | `COUNTRIES_ACQUIRE_TIMEOUT_SECS`| `30`                                           |
//! | `COUNTRIES_SOURCE_URL`          | `https://countriesnow.space/api/v0.1/countries`|
//! | `COUNTRIES_SOURCE_TIMEOUT_SECS` | `30`                                           |

use countries_source::DEFAULT_SOURCE_URL;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_SOURCE_TIMEOUT_SECS: u64 = 30;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value '{value}' for {key}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub source_url: String,
    pub source_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let max_connections = parse_or(
            "COUNTRIES_MAX_CONNECTIONS",
            get("COUNTRIES_MAX_CONNECTIONS"),
            DEFAULT_MAX_CONNECTIONS,
        )?;
        let acquire_timeout = parse_or(
            "COUNTRIES_ACQUIRE_TIMEOUT_SECS",
            get("COUNTRIES_ACQUIRE_TIMEOUT_SECS"),
            DEFAULT_ACQUIRE_TIMEOUT_SECS,
        )?;
        let source_url = get("COUNTRIES_SOURCE_URL").unwrap_or_else(|| DEFAULT_SOURCE_URL.to_string());
        let source_timeout = parse_or(
            "COUNTRIES_SOURCE_TIMEOUT_SECS",
            get("COUNTRIES_SOURCE_TIMEOUT_SECS"),
            DEFAULT_SOURCE_TIMEOUT_SECS,
        )?;

        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "COUNTRIES_MAX_CONNECTIONS",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            database_url,
            max_connections,
            acquire_timeout: Duration::from_secs(acquire_timeout),
            source_url,
            source_timeout: Duration::from_secs(source_timeout),
        })
    }

    pub async fn connect(&self) -> Result<PgPool, sqlx::Error> {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
            .connect(&self.database_url)
            .await
    }
}

fn parse_or<T: FromStr>(key: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
