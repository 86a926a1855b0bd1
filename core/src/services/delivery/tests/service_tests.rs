//! Delivery simulator behavior tests.

use std::sync::Arc;

use chrono::{NaiveDateTime, Utc};

use super::mocks::{FixedOutcomes, MockCallbackSender, SenderBehavior};
use crate::services::delivery::{DeliverySimulator, ERROR_REASONS};
use sms_shared::types::QueuedMessage;

fn queued_message(id: i64) -> QueuedMessage {
    QueuedMessage {
        id,
        phone_number: "+12025550123".to_string(),
        text: "hello".to_string(),
        created_at: Utc::now(),
        status: "QUEUED".to_string(),
    }
}

fn simulator(
    draw: f64,
    index: usize,
    behavior: SenderBehavior,
) -> (
    DeliverySimulator<FixedOutcomes, MockCallbackSender>,
    Arc<MockCallbackSender>,
) {
    let sender = Arc::new(MockCallbackSender::new(behavior));
    let simulator = DeliverySimulator::new(Arc::new(FixedOutcomes { draw, index }), sender.clone());
    (simulator, sender)
}

#[tokio::test]
async fn delivered_outcome_builds_delivered_payload() {
    let (simulator, sender) = simulator(0.0, 0, SenderBehavior::Respond(200));

    simulator.process(&queued_message(42)).await;

    let sent = sender.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].id, "42");
    assert_eq!(sent[0].status, "delivered");
    assert!(sent[0].error_message.is_none());

    // delivered_at carries the expected timestamp format
    let delivered_at = sent[0].delivered_at.as_deref().unwrap();
    assert!(NaiveDateTime::parse_from_str(delivered_at, "%Y-%m-%d %H:%M:%S").is_ok());
}

#[tokio::test]
async fn failed_outcome_builds_failed_payload_with_reason() {
    let (simulator, sender) = simulator(0.99, 2, SenderBehavior::Respond(200));

    simulator.process(&queued_message(7)).await;

    let sent = sender.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].status, "failed");
    assert_eq!(sent[0].error_message.as_deref(), Some(ERROR_REASONS[2]));
    assert!(sent[0].delivered_at.is_none());
}

#[tokio::test]
async fn draw_exactly_at_threshold_is_a_failure() {
    let (simulator, sender) = simulator(0.85, 0, SenderBehavior::Respond(200));

    simulator.process(&queued_message(1)).await;

    assert_eq!(sender.sent.lock().unwrap()[0].status, "failed");
}

#[tokio::test]
async fn draw_just_below_threshold_is_a_delivery() {
    let (simulator, sender) = simulator(0.8499, 0, SenderBehavior::Respond(200));

    simulator.process(&queued_message(1)).await;

    assert_eq!(sender.sent.lock().unwrap()[0].status, "delivered");
}

#[tokio::test]
async fn non_2xx_callback_response_is_swallowed() {
    let (simulator, sender) = simulator(0.0, 0, SenderBehavior::Respond(500));

    // Must not panic or error; the message counts as processed
    simulator.process(&queued_message(9)).await;

    assert_eq!(sender.sent.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn transport_error_is_swallowed() {
    let (simulator, sender) = simulator(0.0, 0, SenderBehavior::TransportError);

    simulator.process(&queued_message(9)).await;

    assert_eq!(sender.sent.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn each_message_produces_exactly_one_callback() {
    let (simulator, sender) = simulator(0.5, 0, SenderBehavior::Respond(200));

    for id in 1..=5 {
        simulator.process(&queued_message(id)).await;
    }

    let sent = sender.sent.lock().unwrap();
    assert_eq!(sent.len(), 5);
    for (payload, expected_id) in sent.iter().zip(1..=5) {
        assert_eq!(payload.id, expected_id.to_string());
        assert!(payload.status == "delivered" || payload.status == "failed");
        assert_eq!(payload.error_message.is_some(), payload.status == "failed");
        assert_eq!(payload.delivered_at.is_some(), payload.status == "delivered");
    }
}
