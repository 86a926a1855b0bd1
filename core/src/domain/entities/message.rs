//! SMS message entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sms_shared::types::QueuedMessage;

/// Canonical delivery states of a stored SMS message.
///
/// The persisted `status` column is a plain string rather than this enum:
/// the callback endpoint upper-cases and stores whatever status string
/// arrives, so rows can hold values outside this set. The enum covers the
/// states written by the pipeline itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryStatus {
    /// Accepted and waiting on the queue.
    Queued,
    /// The provider (here, the simulator) reported successful delivery.
    Delivered,
    /// The provider reported a delivery failure.
    Failed,
}

impl DeliveryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Queued => "QUEUED",
            DeliveryStatus::Delivered => "DELIVERED",
            DeliveryStatus::Failed => "FAILED",
        }
    }
}

impl std::fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An inbound submission before validation and persistence. Ephemeral;
/// converted into a [`NewSmsRecord`] once admitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsSubmission {
    pub phone_number: String,
    pub text: String,
}

/// A message ready to be persisted. The store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSmsRecord {
    pub phone_number: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub status: String,
}

impl NewSmsRecord {
    /// Build a record for an admitted submission, stamped now and QUEUED.
    pub fn queued(submission: SmsSubmission) -> Self {
        Self {
            phone_number: submission.phone_number,
            text: submission.text,
            created_at: Utc::now(),
            status: DeliveryStatus::Queued.as_str().to_string(),
        }
    }
}

/// A persisted SMS message row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsRecord {
    /// Identifier assigned by the store.
    pub id: i64,
    pub phone_number: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub status: String,
}

impl SmsRecord {
    /// Snapshot this record for the queue. The snapshot is denormalized;
    /// later status changes to the row are not reflected in it.
    pub fn to_queued_message(&self) -> QueuedMessage {
        QueuedMessage {
            id: self.id,
            phone_number: self.phone_number.clone(),
            text: self.text.clone(),
            created_at: self.created_at,
            status: self.status.clone(),
        }
    }
}
