//! Message repository trait defining the interface for SMS persistence.
//!
//! Implementations handle the actual database operations while keeping the
//! abstraction boundary between the domain and infrastructure layers.

use async_trait::async_trait;

use crate::domain::entities::{NewSmsRecord, SmsRecord};
use crate::errors::DomainError;

/// Repository contract for SMS message persistence.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Persist a new message and return the stored record, including the
    /// identifier assigned by the store.
    async fn insert(&self, message: NewSmsRecord) -> Result<SmsRecord, DomainError>;

    /// List every stored message.
    async fn list_all(&self) -> Result<Vec<SmsRecord>, DomainError>;

    /// Set the status of the message with the given id.
    ///
    /// Returns the number of rows affected; `0` means no message with that
    /// id exists. The status string is stored as given, with no transition
    /// guard — last writer wins.
    async fn update_status(&self, id: i64, status: &str) -> Result<u64, DomainError>;
}
