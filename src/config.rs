//! Process configuration from environment variables (a `.env` file is loaded first by `main`).

use crate::error::ConfigError;
use std::collections::HashMap;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: &str = "5432";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub max_connections: u32,
    pub max_body_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_vars(&vars)
    }

    /// `DATABASE_URL` wins; otherwise the URL is assembled from the `APP_DB_*` variables.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let get = |key: &str| vars.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());

        let database_url = match get("DATABASE_URL") {
            Some(url) => url.to_string(),
            None => {
                let user = get("APP_DB_USERNAME").ok_or(ConfigError::Missing("APP_DB_USERNAME"))?;
                let name = get("APP_DB_NAME").ok_or(ConfigError::Missing("APP_DB_NAME"))?;
                let password = get("APP_DB_PASSWORD").unwrap_or("");
                let host = get("APP_DB_HOST").unwrap_or(DEFAULT_DB_HOST);
                let port = get("APP_DB_PORT").unwrap_or(DEFAULT_DB_PORT);
                format!(
                    "postgres://{}:{}@{}:{}/{}?sslmode=disable",
                    user, password, host, port, name
                )
            }
        };

        let max_connections = match get("DB_MAX_CONNECTIONS") {
            Some(v) => v.parse().map_err(|_| ConfigError::Invalid {
                key: "DB_MAX_CONNECTIONS",
                value: v.to_string(),
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        let max_body_bytes = match get("MAX_BODY_BYTES") {
            Some(v) => v.parse().map_err(|_| ConfigError::Invalid {
                key: "MAX_BODY_BYTES",
                value: v.to_string(),
            })?,
            None => DEFAULT_MAX_BODY_BYTES,
        };

        Ok(Config {
            database_url,
            bind_addr: get("BIND_ADDR").unwrap_or(DEFAULT_BIND_ADDR).to_string(),
            max_connections,
            max_body_bytes,
        })
    }
}
