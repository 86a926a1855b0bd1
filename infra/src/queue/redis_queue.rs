//! Redis-backed queue channel.
//!
//! One Redis list carries JSON-encoded [`QueuedMessage`] snapshots. The
//! producer LPUSHes; the consumer BRPOPs with a timeout so the worker loop
//! stays responsive. BRPOP removes the element before the consumer sees it,
//! so a message that fails to decode is gone — matching the pipeline's
//! no-redelivery semantics.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use tracing::{debug, error, info};

use sms_core::errors::DomainError;
use sms_core::queue::{QueueConsumer, QueuePublisher};
use sms_shared::types::QueuedMessage;

use crate::config::QueueConfig;
use crate::error::InfrastructureError;

/// Redis list queue for SMS messages.
#[derive(Clone)]
pub struct RedisQueue {
    connection: MultiplexedConnection,
    queue_key: String,
    poll_timeout_secs: u64,
}

impl RedisQueue {
    /// Connect to Redis and return a queue handle.
    pub async fn connect(config: &QueueConfig) -> Result<Self, InfrastructureError> {
        info!(queue_key = %config.queue_key, "connecting to Redis queue");

        let client = redis::Client::open(config.url.as_str()).map_err(|e| {
            error!("Failed to parse Redis URL: {}", e);
            InfrastructureError::Config(format!("Invalid Redis URL: {}", e))
        })?;

        let connection = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| {
                error!("Failed to connect to Redis: {}", e);
                InfrastructureError::Queue(format!("Failed to connect to Redis: {}", e))
            })?;

        info!("Redis queue connection established");

        Ok(Self {
            connection,
            queue_key: config.queue_key.clone(),
            poll_timeout_secs: config.poll_timeout_secs,
        })
    }
}

#[async_trait]
impl QueuePublisher for RedisQueue {
    async fn publish(&self, message: &QueuedMessage) -> Result<(), DomainError> {
        let body = serde_json::to_string(message).map_err(|e| DomainError::Queue {
            message: format!("Failed to encode queued message: {}", e),
        })?;

        let mut connection = self.connection.clone();
        let _: i64 = connection
            .lpush(&self.queue_key, body)
            .await
            .map_err(|e| DomainError::Queue {
                message: format!("Failed to publish to {}: {}", self.queue_key, e),
            })?;

        debug!(id = message.id, "message published to queue");
        Ok(())
    }
}

#[async_trait]
impl QueueConsumer for RedisQueue {
    async fn next_message(&self) -> Result<Option<QueuedMessage>, DomainError> {
        let mut connection = self.connection.clone();

        // BRPOP returns (key, value) or nil on timeout
        let reply: Option<(String, String)> = redis::cmd("BRPOP")
            .arg(&self.queue_key)
            .arg(self.poll_timeout_secs)
            .query_async(&mut connection)
            .await
            .map_err(|e| DomainError::Queue {
                message: format!("Failed to read from {}: {}", self.queue_key, e),
            })?;

        match reply {
            Some((_, body)) => {
                let message: QueuedMessage =
                    serde_json::from_str(&body).map_err(|e| DomainError::Queue {
                        message: format!("Failed to decode queued message: {}", e),
                    })?;
                debug!(id = message.id, "message consumed from queue");
                Ok(Some(message))
            }
            None => Ok(None),
        }
    }
}
