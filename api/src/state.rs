//! Application state shared across handlers.

use std::sync::Arc;

use sms_core::queue::QueuePublisher;
use sms_core::repositories::MessageRepository;
use sms_core::services::{CallbackService, SubmissionService};

/// Shared services, wired explicitly in `main` (or from mocks in tests).
pub struct AppState<R, Q>
where
    R: MessageRepository,
    Q: QueuePublisher,
{
    pub submission: Arc<SubmissionService<R, Q>>,
    pub callbacks: Arc<CallbackService<R>>,
    pub repository: Arc<R>,
}

impl<R, Q> AppState<R, Q>
where
    R: MessageRepository,
    Q: QueuePublisher,
{
    /// Wire the default services on top of a repository and queue.
    pub fn new(repository: Arc<R>, queue: Arc<Q>) -> Self {
        Self {
            submission: Arc::new(SubmissionService::new(repository.clone(), queue)),
            callbacks: Arc::new(CallbackService::new(repository.clone())),
            repository,
        }
    }
}
