//! Delivery simulator implementation.

use std::sync::Arc;

use chrono::Utc;

use super::outcome::{OutcomeSource, DELIVERY_SUCCESS_RATE, ERROR_REASONS};
use super::traits::CallbackSender;
use sms_shared::types::{CallbackPayload, QueuedMessage, STATUS_DELIVERED, STATUS_FAILED};

/// Timestamp format used for `delivered_at` in callback payloads.
const DELIVERED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Stand-in for a real SMS gateway: draws a delivered/failed outcome for each
/// consumed message and reports it through the callback channel.
///
/// Processing is fire-and-forget: callback failures (transport errors or
/// non-2xx responses) are logged and swallowed, and the message counts as
/// processed either way. A single bad message never takes the worker down.
pub struct DeliverySimulator<O: OutcomeSource, C: CallbackSender> {
    outcomes: Arc<O>,
    callback: Arc<C>,
}

impl<O: OutcomeSource, C: CallbackSender> DeliverySimulator<O, C> {
    pub fn new(outcomes: Arc<O>, callback: Arc<C>) -> Self {
        Self { outcomes, callback }
    }

    /// Process one consumed message: draw an outcome, build the callback
    /// payload, and send it. Never fails.
    pub async fn process(&self, message: &QueuedMessage) {
        tracing::info!(id = message.id, "processing SMS message");

        let delivered = self.outcomes.draw_unit() < DELIVERY_SUCCESS_RATE;
        let payload = self.build_payload(message, delivered);

        tracing::info!(
            id = message.id,
            status = %payload.status,
            "sending delivery callback"
        );

        match self.callback.send_callback(&payload).await {
            Ok(status) if (200..300).contains(&status) => {
                tracing::info!(id = message.id, "callback delivered");
            }
            Ok(status) => {
                tracing::error!(id = message.id, status, "callback rejected");
            }
            Err(error) => {
                tracing::error!(id = message.id, %error, "failed to send callback");
            }
        }
    }

    fn build_payload(&self, message: &QueuedMessage, delivered: bool) -> CallbackPayload {
        if delivered {
            CallbackPayload {
                id: message.id.to_string(),
                status: STATUS_DELIVERED.to_string(),
                error_message: None,
                delivered_at: Some(Utc::now().format(DELIVERED_AT_FORMAT).to_string()),
            }
        } else {
            let reason = ERROR_REASONS[self.outcomes.pick_index(ERROR_REASONS.len())];
            CallbackPayload {
                id: message.id.to_string(),
                status: STATUS_FAILED.to_string(),
                error_message: Some(reason.to_string()),
                delivered_at: None,
            }
        }
    }
}
