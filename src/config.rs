//! Process configuration, read from the environment (and `.env` via dotenv).

use crate::utils::AppError;
use std::env;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATABASE: &str = "DbBootcamp";

/// Which document store backs the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    MongoDB,
    Memory,
}

impl std::str::FromStr for StorageBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mongodb" | "mongo" => Ok(StorageBackend::MongoDB),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(AppError::ConfigError(format!(
                "unknown STORAGE_BACKEND '{}' (expected 'mongodb' or 'memory')",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub mongo_uri: Option<String>,
    pub database_name: String,
    pub backend: StorageBackend,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, so tests don't have to touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| AppError::ConfigError(format!("invalid PORT '{}'", raw)))?,
            None => DEFAULT_PORT,
        };

        let backend = match lookup("STORAGE_BACKEND") {
            Some(raw) => raw.parse()?,
            None => StorageBackend::MongoDB,
        };

        let mongo_uri = lookup("MONGO_DB_URI").filter(|uri| !uri.trim().is_empty());
        if backend == StorageBackend::MongoDB && mongo_uri.is_none() {
            return Err(AppError::ConfigError("MONGO_DB_URI must be set".to_string()));
        }

        let database_name =
            lookup("MONGO_DB_NAME").unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        Ok(Self {
            host,
            port,
            mongo_uri,
            database_name,
            backend,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_with_mongo_uri() {
        let config =
            AppConfig::from_lookup(lookup_from(&[("MONGO_DB_URI", "mongodb://localhost:27017")]))
                .unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.database_name, "DbBootcamp");
        assert_eq!(config.backend, StorageBackend::MongoDB);
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn test_mongo_backend_requires_uri() {
        let result = AppConfig::from_lookup(lookup_from(&[]));
        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }

    #[test]
    fn test_memory_backend_without_uri() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("STORAGE_BACKEND", "memory"),
            ("PORT", "8080"),
            ("HOST", "127.0.0.1"),
        ]))
        .unwrap();
        assert_eq!(config.backend, StorageBackend::Memory);
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert!(config.mongo_uri.is_none());
    }

    #[test]
    fn test_invalid_port_rejected() {
        let result = AppConfig::from_lookup(lookup_from(&[
            ("STORAGE_BACKEND", "memory"),
            ("PORT", "not-a-port"),
        ]));
        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }

    #[test]
    fn test_unknown_backend_rejected() {
        let result = AppConfig::from_lookup(lookup_from(&[("STORAGE_BACKEND", "postgres")]));
        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }
}
