//! Server configuration read from the environment.
//!
//! `main.rs` loads an optional `.env` file first, so every variable below can
//! also be set there.
//!
//! | Variable          | Default       |
//! |-------------------|---------------|
//! | `NEWS_HOST`       | `127.0.0.1`   |
//! | `NEWS_PORT`       | `8080`        |
//! | `NEWS_DATABASE`   | `news.sqlite` |
//! | `NEWS_JSON_LIMIT` | `1048576`     |

use std::env;
use std::str::FromStr;
use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATABASE: &str = "news.sqlite";
pub const DEFAULT_JSON_LIMIT: usize = 1024 * 1024;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?} ({reason})")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Path of the SQLite database file, `:memory:` for a throwaway store.
    pub database: String,
    /// Maximum accepted request body size in bytes.
    pub json_limit: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            host: lookup("NEWS_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parsed(&lookup, "NEWS_PORT", DEFAULT_PORT)?,
            database: lookup("NEWS_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            json_limit: parsed(&lookup, "NEWS_JSON_LIMIT", DEFAULT_JSON_LIMIT)?,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parsed<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            name,
            reason: e.to_string(),
            value,
        }),
    }
}
