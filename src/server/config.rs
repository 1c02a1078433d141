use std::{str::FromStr, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://gamerank.db?mode=rwc";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_PUBLIC_DIR: &str = "public";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 4;

pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,

    pub bind_addr: String,
    pub public_dir: String,
    pub request_timeout: Duration,
}

impl Config {
    /// Loads configuration from the environment, falling back to defaults for unset variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - Configuration ready for startup
    /// - `Err(AppError::ConfigErr(InvalidEnvVar))` - A numeric variable could not be parsed
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        Ok(Self {
            database_url: std::env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            database_max_connections: parse_env("DATABASE_MAX_CONNECTIONS")?
                .unwrap_or(defaults.database_max_connections),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            public_dir: std::env::var("PUBLIC_DIR").unwrap_or(defaults.public_dir),
            request_timeout: parse_env("REQUEST_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            database_max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            public_dir: DEFAULT_PUBLIC_DIR.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

fn parse_env<T: FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
        Err(_) => Ok(None),
    }
}
