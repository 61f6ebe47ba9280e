//! Configuración de base de datos
//!
//! Este módulo maneja la configuración del pool SQLite con SQLx.

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Configuración de la base de datos
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://park.db".to_string(),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

impl DatabaseConfig {
    /// Leer la configuración desde `DATABASE_URL` y `DATABASE_MAX_CONNECTIONS`
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let max_connections = match std::env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(value) => value.parse().with_context(|| {
                format!("DATABASE_MAX_CONNECTIONS must be a valid number, got '{}'", value)
            })?,
            Err(_) => defaults.max_connections,
        };

        Ok(Self {
            url: std::env::var("DATABASE_URL").unwrap_or(defaults.url),
            max_connections,
            acquire_timeout: defaults.acquire_timeout,
        })
    }

    /// Opciones de conexión: crea el fichero si no existe.
    ///
    /// `vehicle.driver_id` no lleva REFERENCES: create/update guardan el id tal
    /// cual y solo /vehicles/set_driver comprueba que el conductor exista.
    fn connect_options(&self) -> Result<SqliteConnectOptions, sqlx::Error> {
        Ok(SqliteConnectOptions::from_str(&self.url)?.create_if_missing(true))
    }

    /// Crear un nuevo pool de conexiones
    pub async fn create_pool(&self) -> Result<SqlitePool, sqlx::Error> {
        SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
            .connect_with(self.connect_options()?)
            .await
    }

    /// Crear un pool en memoria para testing.
    ///
    /// Cada conexión a `sqlite::memory:` abre una base distinta, así que el
    /// pool se limita a una sola conexión que nunca se recicla.
    pub async fn create_test_pool() -> Result<SqlitePool, sqlx::Error> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_config_default() {
        let config = DatabaseConfig::default();
        assert_eq!(config.url, "sqlite://park.db");
        assert!(config.max_connections > 0);
    }

    #[test]
    fn test_connect_options_parse() {
        let config = DatabaseConfig {
            url: "sqlite://fleet-test.db".to_string(),
            ..DatabaseConfig::default()
        };
        assert!(config.connect_options().is_ok());
    }
}
