//! Queue and callback wire formats.
//!
//! `QueuedMessage` is the JSON snapshot placed on the `sms-queue` channel by
//! the submission service; `CallbackPayload` is the delivery-outcome report
//! the worker POSTs back to the submission service. Both are denormalized
//! snapshots, not live references to stored rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Callback status value for a delivered message.
pub const STATUS_DELIVERED: &str = "delivered";

/// Callback status value for a failed message.
pub const STATUS_FAILED: &str = "failed";

/// Snapshot of a submitted SMS placed on the queue for asynchronous
/// processing. Carries the store-assigned id so the consumer can report the
/// outcome back against the right row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueuedMessage {
    /// Identifier assigned by the message store.
    pub id: i64,
    /// Recipient phone number, exactly as submitted.
    pub phone_number: String,
    /// Message text.
    pub text: String,
    /// Submission timestamp.
    pub created_at: DateTime<Utc>,
    /// Status at enqueue time (always `QUEUED` in practice).
    pub status: String,
}

/// Delivery-outcome report sent from the worker to the submission service's
/// callback endpoint.
///
/// `error_message` is set only for failed deliveries; `delivered_at`
/// (formatted `yyyy-MM-dd HH:mm:ss`) only for successful ones. The `id` is
/// carried as a string, matching the callback contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallbackPayload {
    pub id: String,
    pub status: String,
    pub error_message: Option<String>,
    pub delivered_at: Option<String>,
}

impl CallbackPayload {
    /// True if this payload reports a successful delivery.
    pub fn is_delivered(&self) -> bool {
        self.status == STATUS_DELIVERED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_queued() -> QueuedMessage {
        QueuedMessage {
            id: 42,
            phone_number: "+12025550123".to_string(),
            text: "hello".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            status: "QUEUED".to_string(),
        }
    }

    #[test]
    fn queued_message_round_trips_through_json() {
        let message = sample_queued();
        let json = serde_json::to_string(&message).unwrap();
        let decoded: QueuedMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, message);
    }

    #[test]
    fn queued_message_uses_snake_case_field_names() {
        let json = serde_json::to_value(sample_queued()).unwrap();
        assert_eq!(json["id"], 42);
        assert_eq!(json["phone_number"], "+12025550123");
        assert_eq!(json["created_at"].as_str().unwrap(), "2024-03-01T12:00:00Z");
        assert_eq!(json["status"], "QUEUED");
    }

    #[test]
    fn callback_payload_serializes_nulls_for_absent_fields() {
        let payload = CallbackPayload {
            id: "42".to_string(),
            status: STATUS_DELIVERED.to_string(),
            error_message: None,
            delivered_at: Some("2024-03-01 12:00:05".to_string()),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["id"], "42");
        assert_eq!(json["status"], "delivered");
        assert!(json["error_message"].is_null());
        assert_eq!(json["delivered_at"], "2024-03-01 12:00:05");
    }

    #[test]
    fn callback_payload_deserializes_with_missing_optionals() {
        let payload: CallbackPayload =
            serde_json::from_str(r#"{"id":"7","status":"failed","error_message":"Network timeout","delivered_at":null}"#)
                .unwrap();
        assert_eq!(payload.id, "7");
        assert!(!payload.is_delivered());
        assert_eq!(payload.error_message.as_deref(), Some("Network timeout"));
        assert!(payload.delivered_at.is_none());
    }
}
