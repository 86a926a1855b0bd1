//! SMS delivery worker.
//!
//! Long-lived consumer: pulls queued messages off the Redis channel one at a
//! time, simulates a delivery outcome, and reports it to the submission
//! service's callback endpoint. Per-message failures (malformed payloads,
//! callback errors) are logged and swallowed; the loop never dies over a
//! single message.

use std::sync::Arc;
use std::time::Duration;

use log::{error, info};

use sms_core::queue::QueueConsumer;
use sms_core::services::{CallbackSender, DeliverySimulator, OutcomeSource, ThreadRngOutcomes};
use sms_infra::http::HttpCallbackClient;
use sms_infra::queue::RedisQueue;
use sms_infra::InfrastructureConfig;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting SMS delivery worker");

    let config = InfrastructureConfig::from_env().expect("configuration must be valid");

    let queue = RedisQueue::connect(&config.queue)
        .await
        .expect("Redis must be reachable");

    let callback_client = Arc::new(
        HttpCallbackClient::new(&config.callback).expect("callback client must build"),
    );

    let simulator = DeliverySimulator::new(Arc::new(ThreadRngOutcomes), callback_client);

    info!(
        "Consuming from '{}', callbacks to {}",
        config.queue.queue_key, config.callback.base_url
    );

    run_consumer(&queue, &simulator).await;
}

/// Consumer loop: one message at a time, sequential decode-simulate-callback
/// per message.
async fn run_consumer<Q, O, C>(queue: &Q, simulator: &DeliverySimulator<O, C>)
where
    Q: QueueConsumer,
    O: OutcomeSource,
    C: CallbackSender,
{
    loop {
        match queue.next_message().await {
            Ok(Some(message)) => simulator.process(&message).await,
            // Poll timeout with an empty queue
            Ok(None) => continue,
            Err(e) => {
                // Covers broken connections and undecodable payloads; an
                // undecodable message is already popped and therefore lost
                error!("Failed to read from queue: {}", e);
                tokio::time::sleep(Duration::from_secs(1)).await;
            }
        }
    }
}
