//! Submission service implementation.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::{NewSmsRecord, SmsRecord, SmsSubmission};
use crate::errors::{DomainError, DomainResult};
use crate::queue::QueuePublisher;
use crate::repositories::MessageRepository;
use crate::validation::SmsValidator;

/// Hook invoked when the queue publish fails after the record has already
/// been persisted. The persist and the publish are not transactionally
/// coupled, so at this point the row is committed and stuck in `QUEUED`.
///
/// The default [`NoRecovery`] does nothing beyond what the service already
/// logs; deployments that want retry or compensation plug in their own
/// implementation.
#[async_trait]
pub trait PublishRecovery: Send + Sync {
    async fn on_publish_failure(&self, record: &SmsRecord, error: &DomainError);
}

/// Default recovery hook: leave the row as-is.
pub struct NoRecovery;

#[async_trait]
impl PublishRecovery for NoRecovery {
    async fn on_publish_failure(&self, record: &SmsRecord, _error: &DomainError) {
        tracing::warn!(
            id = record.id,
            "no recovery configured; record remains QUEUED"
        );
    }
}

/// Service handling new SMS submissions: runs the validator, persists the
/// admitted message, and publishes its snapshot onto the queue channel.
pub struct SubmissionService<R: MessageRepository, Q: QueuePublisher> {
    repository: Arc<R>,
    queue: Arc<Q>,
    recovery: Arc<dyn PublishRecovery>,
}

impl<R: MessageRepository, Q: QueuePublisher> SubmissionService<R, Q> {
    /// Create a submission service with the default (no-op) publish
    /// recovery hook.
    pub fn new(repository: Arc<R>, queue: Arc<Q>) -> Self {
        Self::with_recovery(repository, queue, Arc::new(NoRecovery))
    }

    /// Create a submission service with a custom publish recovery hook.
    pub fn with_recovery(
        repository: Arc<R>,
        queue: Arc<Q>,
        recovery: Arc<dyn PublishRecovery>,
    ) -> Self {
        Self {
            repository,
            queue,
            recovery,
        }
    }

    /// Submit a new SMS for delivery.
    ///
    /// On success exactly one row has been written (status `QUEUED`) and
    /// exactly one matching snapshot published. Validation failures map to a
    /// client error; persistence and publish failures are logged with
    /// context and surfaced as server errors, never retried in-process.
    pub async fn submit(&self, submission: SmsSubmission) -> DomainResult<SmsRecord> {
        SmsValidator::validate(&submission).map_err(|failure| {
            tracing::warn!(error = %failure.message, "SMS validation failed");
            failure
        })?;

        let record = self
            .repository
            .insert(NewSmsRecord::queued(submission))
            .await
            .map_err(|error| {
                tracing::error!(%error, "failed to persist SMS message");
                error
            })?;

        if let Err(error) = self.queue.publish(&record.to_queued_message()).await {
            tracing::error!(id = record.id, %error, "failed to publish SMS message");
            self.recovery.on_publish_failure(&record, &error).await;
            return Err(error);
        }

        tracing::info!(id = record.id, "SMS message queued for delivery");
        Ok(record)
    }
}
