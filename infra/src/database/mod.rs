//! Database access - MySQL implementations using SQLx.

pub mod mysql;

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::error::InfrastructureError;

pub use mysql::MySqlMessageRepository;

/// Create a MySQL connection pool from configuration.
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, InfrastructureError> {
    info!(
        max_connections = config.max_connections,
        "connecting to MySQL"
    );

    MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await
        .map_err(|e| InfrastructureError::Database(format!("Failed to connect to MySQL: {}", e)))
}
