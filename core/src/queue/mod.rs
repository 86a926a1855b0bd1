//! Queue channel interfaces implemented by the infrastructure layer.
//!
//! The pipeline uses one channel (`sms-queue`) with a single producer role
//! (the submission service) and a single consumer role (the delivery worker).
//! Delivery is at-least-once; consumers must tolerate duplicates.

use async_trait::async_trait;

use crate::errors::DomainError;
use sms_shared::types::QueuedMessage;

/// Producer side of the queue channel.
#[async_trait]
pub trait QueuePublisher: Send + Sync {
    /// Publish one message snapshot onto the channel.
    async fn publish(&self, message: &QueuedMessage) -> Result<(), DomainError>;
}

/// Consumer side of the queue channel.
#[async_trait]
pub trait QueueConsumer: Send + Sync {
    /// Wait for the next message, up to the implementation's poll timeout.
    ///
    /// Returns `Ok(None)` when the timeout elapses with nothing queued.
    /// A malformed message surfaces as `Err(DomainError::Queue)`; the
    /// message is consumed regardless (no re-delivery).
    async fn next_message(&self) -> Result<Option<QueuedMessage>, DomainError>;
}
