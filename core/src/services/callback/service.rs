//! Callback service implementation.

use std::sync::Arc;

use crate::errors::{DomainError, DomainResult};
use crate::repositories::MessageRepository;
use sms_shared::types::CallbackPayload;

/// Applies a delivery-outcome report to the stored message it targets.
///
/// The status string is upper-cased and stored as-is, without restricting it
/// to the known delivered/failed values. There is no optimistic concurrency
/// control; concurrent callbacks for the same id race and the last writer
/// wins.
pub struct CallbackService<R: MessageRepository> {
    repository: Arc<R>,
}

impl<R: MessageRepository> CallbackService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Handle one callback.
    ///
    /// A non-numeric id is an internal error (the worker always sends ids it
    /// read off the queue); an unknown id is `NotFound`.
    pub async fn handle(&self, payload: &CallbackPayload) -> DomainResult<()> {
        tracing::info!(id = %payload.id, status = %payload.status, "received delivery callback");

        let id: i64 = payload.id.parse().map_err(|_| {
            tracing::error!(id = %payload.id, "callback id is not a valid identifier");
            DomainError::Internal {
                message: format!("invalid callback id: {}", payload.id),
            }
        })?;

        let status = payload.status.to_uppercase();
        let updated = self
            .repository
            .update_status(id, &status)
            .await
            .map_err(|error| {
                tracing::error!(id, %error, "failed to update SMS status");
                error
            })?;

        if updated == 0 {
            tracing::warn!(id, "no SMS message found for callback");
            return Err(DomainError::NotFound {
                resource: format!("SMS message {}", id),
            });
        }

        tracing::info!(id, status = %status, "SMS status updated");
        Ok(())
    }
}
