//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_DB_MAX_CONNECTIONS, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, ENV_DEVELOPMENT,
    ENV_PRODUCTION,
};
use crate::errors::{AppError, AppResult};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub server_host: String,
    pub server_port: u16,
    pub environment: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("db_max_connections", &self.db_max_connections)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("environment", &self.environment)
            .finish()
    }
}

impl Config {
    /// Load configuration from the process environment (and `.env`, if present).
    ///
    /// Fails if `DATABASE_URL` is missing or `PORT` is not a valid port number.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = var("DATABASE_URL")
            .ok_or_else(|| AppError::internal("DATABASE_URL environment variable is required"))?;

        let server_port = match var("PORT") {
            Some(port) => port
                .parse()
                .map_err(|_| AppError::internal(format!("PORT is not a valid port: {}", port)))?,
            None => DEFAULT_SERVER_PORT,
        };

        Ok(Self {
            database_url,
            db_max_connections: var("DB_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS),
            server_host: var("HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
            server_port,
            environment: var("ENV").unwrap_or_else(|| ENV_DEVELOPMENT.to_string()),
        })
    }

    /// Whether the service runs with production verbosity.
    pub fn is_production(&self) -> bool {
        self.environment == ENV_PRODUCTION
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://x")])).unwrap();

        assert_eq!(config.server_port, 8080);
        assert_eq!(config.environment, "development");
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert!(!config.is_production());
    }

    #[test]
    fn test_missing_database_url_fails() {
        let result = Config::from_lookup(lookup(&[("PORT", "9000")]));
        assert!(matches!(result, Err(AppError::Internal(_))));

        let result = Config::from_lookup(lookup(&[("DATABASE_URL", "  ")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides_and_bad_port() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://x"),
            ("PORT", "9000"),
            ("ENV", "production"),
        ]))
        .unwrap();
        assert_eq!(config.server_port, 9000);
        assert!(config.is_production());

        let result = Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://x"), ("PORT", "abc")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_redacts_database_url() {
        let config = Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://secret")])).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret"));
    }
}
