//! Outbound callback seam implemented by the infrastructure layer.

use async_trait::async_trait;

use crate::errors::DomainError;
use sms_shared::types::CallbackPayload;

/// Sends a delivery-outcome report to the submission service's callback
/// endpoint.
#[async_trait]
pub trait CallbackSender: Send + Sync {
    /// POST the payload; resolves to the HTTP status code on a completed
    /// exchange, or an error on transport failure.
    async fn send_callback(&self, payload: &CallbackPayload) -> Result<u16, DomainError>;
}
