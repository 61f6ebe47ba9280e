//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno del servidor HTTP.

use anyhow::{Context, Result};
use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 5000,
            host: "0.0.0.0".to_string(),
            cors_origins: Vec::new(),
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración desde el entorno, con valores por defecto
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let port = match env::var("PORT") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("PORT must be a valid number, got '{}'", value))?,
            Err(_) => defaults.port,
        };

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            port,
            host: env::var("HOST").unwrap_or(defaults.host),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|origins| parse_origins(&origins))
                .unwrap_or_default(),
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        let origins = parse_origins("http://localhost:3000, https://fleet.example.com,,");
        assert_eq!(origins, vec!["http://localhost:3000", "https://fleet.example.com"]);
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn test_server_url() {
        let config = EnvironmentConfig::default();
        assert_eq!(config.server_url(), "0.0.0.0:5000");
        assert!(config.is_development());
    }

    #[tokio::test]
    async fn test_server_url_binds_with_hostname() {
        let config = EnvironmentConfig {
            host: "localhost".to_string(),
            port: 0,
            ..Default::default()
        };
        assert_eq!(config.server_url(), "localhost:0");

        let listener = tokio::net::TcpListener::bind(config.server_url()).await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }
}
