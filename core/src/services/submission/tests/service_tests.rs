//! Submission service behavior tests.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use super::mocks::{CountingRecovery, MockMessageRepository, MockQueuePublisher};
use crate::domain::entities::SmsSubmission;
use crate::errors::DomainError;
use crate::services::submission::SubmissionService;

fn valid_submission() -> SmsSubmission {
    SmsSubmission {
        phone_number: "+12025550123".to_string(),
        text: "hello".to_string(),
    }
}

#[tokio::test]
async fn valid_submission_persists_and_publishes_once() {
    let repository = Arc::new(MockMessageRepository::new(false));
    let queue = Arc::new(MockQueuePublisher::new(false));
    let service = SubmissionService::new(repository.clone(), queue.clone());

    let record = service.submit(valid_submission()).await.unwrap();

    assert_eq!(record.status, "QUEUED");
    assert_eq!(record.phone_number, "+12025550123");

    let stored = repository.records.lock().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0], record);

    let published = queue.published.lock().unwrap();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].id, record.id);
    assert_eq!(published[0].phone_number, record.phone_number);
    assert_eq!(published[0].text, record.text);
    assert_eq!(published[0].status, "QUEUED");
}

#[tokio::test]
async fn invalid_submission_touches_neither_store_nor_queue() {
    let repository = Arc::new(MockMessageRepository::new(false));
    let queue = Arc::new(MockQueuePublisher::new(false));
    let service = SubmissionService::new(repository.clone(), queue.clone());

    let error = service
        .submit(SmsSubmission {
            phone_number: "5550123".to_string(),
            text: "hi".to_string(),
        })
        .await
        .unwrap_err();

    match error {
        DomainError::Validation(failure) => {
            assert_eq!(
                failure.details,
                vec!["Invalid phone number format. Use international format (e.g., +1234567890)"]
            );
        }
        other => panic!("expected validation error, got {:?}", other),
    }

    assert!(repository.records.lock().unwrap().is_empty());
    assert!(queue.published.lock().unwrap().is_empty());
}

#[tokio::test]
async fn persistence_failure_publishes_nothing() {
    let repository = Arc::new(MockMessageRepository::new(true));
    let queue = Arc::new(MockQueuePublisher::new(false));
    let service = SubmissionService::new(repository, queue.clone());

    let error = service.submit(valid_submission()).await.unwrap_err();
    assert!(matches!(error, DomainError::Database { .. }));
    assert!(queue.published.lock().unwrap().is_empty());
}

#[tokio::test]
async fn publish_failure_leaves_row_queued_and_invokes_recovery() {
    let repository = Arc::new(MockMessageRepository::new(false));
    let queue = Arc::new(MockQueuePublisher::new(true));
    let recovery = Arc::new(CountingRecovery::new());
    let service =
        SubmissionService::with_recovery(repository.clone(), queue, recovery.clone());

    let error = service.submit(valid_submission()).await.unwrap_err();
    assert!(matches!(error, DomainError::Queue { .. }));

    // No compensation: the persisted row stays QUEUED
    let stored = repository.records.lock().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].status, "QUEUED");

    assert_eq!(recovery.invocations.load(Ordering::SeqCst), 1);
}
