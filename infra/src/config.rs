//! Configuration for infrastructure services.
//!
//! Loaded from environment variables (with `.env` support via dotenvy in the
//! binaries). `DATABASE_URL` is required for the API service; everything else
//! has a local-development default.

use std::env;

use serde::{Deserialize, Serialize};

use crate::error::InfrastructureError;

/// Database configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// MySQL connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    pub max_connections: u32,
}

/// Queue channel configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueConfig {
    /// Redis connection URL.
    pub url: String,
    /// List key carrying the queued messages.
    pub queue_key: String,
    /// Blocking-pop timeout for the consumer, in seconds.
    pub poll_timeout_secs: u64,
}

/// Delivery callback configuration (worker side).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallbackConfig {
    /// Base URL of the submission API, e.g. `http://127.0.0.1:8080`.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

/// HTTP server bind configuration (API side).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Combined configuration for both service binaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfrastructureConfig {
    pub database: DatabaseConfig,
    pub queue: QueueConfig,
    pub callback: CallbackConfig,
    pub server: ServerConfig,
}

impl InfrastructureConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let database = DatabaseConfig {
            url: env::var("DATABASE_URL")
                .map_err(|_| InfrastructureError::Config("DATABASE_URL must be set".to_string()))?,
            max_connections: parse_env("DATABASE_MAX_CONNECTIONS", 5)?,
        };

        let queue = QueueConfig {
            url: env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string()),
            queue_key: env::var("QUEUE_KEY").unwrap_or_else(|_| "sms-queue".to_string()),
            poll_timeout_secs: parse_env("QUEUE_POLL_TIMEOUT_SECS", 5)?,
        };

        let callback = CallbackConfig {
            base_url: env::var("CALLBACK_BASE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string()),
            timeout_secs: parse_env("CALLBACK_TIMEOUT_SECS", 10)?,
        };

        let server = ServerConfig {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_env("SERVER_PORT", 8080)?,
        };

        Ok(Self {
            database,
            queue,
            callback,
            server,
        })
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> Result<T, InfrastructureError> {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| InfrastructureError::Config(format!("{} must be a valid number", name))),
        Err(_) => Ok(default),
    }
}
