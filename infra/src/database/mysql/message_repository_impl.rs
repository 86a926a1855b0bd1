//! MySQL implementation of the MessageRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use sms_core::domain::entities::{NewSmsRecord, SmsRecord};
use sms_core::errors::DomainError;
use sms_core::repositories::MessageRepository;

/// MySQL-backed message store.
///
/// Rows live in the `sms_messages` table (see `infra/migrations/`). Ids are
/// assigned by AUTO_INCREMENT; per-row write serialization is left to the
/// database's own transaction mechanism.
pub struct MySqlMessageRepository {
    pool: MySqlPool,
}

impl MySqlMessageRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: &sqlx::mysql::MySqlRow) -> Result<SmsRecord, DomainError> {
        Ok(SmsRecord {
            id: row
                .try_get("id")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get id: {}", e),
                })?,
            phone_number: row
                .try_get("phone_number")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get phone_number: {}", e),
                })?,
            text: row.try_get("text").map_err(|e| DomainError::Database {
                message: format!("Failed to get text: {}", e),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            status: row.try_get("status").map_err(|e| DomainError::Database {
                message: format!("Failed to get status: {}", e),
            })?,
        })
    }
}

#[async_trait]
impl MessageRepository for MySqlMessageRepository {
    async fn insert(&self, message: NewSmsRecord) -> Result<SmsRecord, DomainError> {
        let result = sqlx::query(
            "INSERT INTO sms_messages (phone_number, text, created_at, status) VALUES (?, ?, ?, ?)",
        )
        .bind(&message.phone_number)
        .bind(&message.text)
        .bind(message.created_at)
        .bind(&message.status)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::Database {
            message: format!("Failed to insert SMS message: {}", e),
        })?;

        Ok(SmsRecord {
            id: result.last_insert_id() as i64,
            phone_number: message.phone_number,
            text: message.text,
            created_at: message.created_at,
            status: message.status,
        })
    }

    async fn list_all(&self) -> Result<Vec<SmsRecord>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, phone_number, text, created_at, status FROM sms_messages ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Database {
            message: format!("Failed to list SMS messages: {}", e),
        })?;

        rows.iter().map(Self::row_to_record).collect()
    }

    async fn update_status(&self, id: i64, status: &str) -> Result<u64, DomainError> {
        let result = sqlx::query("UPDATE sms_messages SET status = ? WHERE id = ?")
            .bind(status)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to update status for SMS {}: {}", id, e),
            })?;

        Ok(result.rows_affected())
    }
}
