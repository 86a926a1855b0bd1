//! Callback service behavior tests.

use std::sync::Arc;

use super::mocks::MockMessageRepository;
use crate::errors::DomainError;
use crate::services::callback::CallbackService;
use sms_shared::types::CallbackPayload;

fn payload(id: &str, status: &str) -> CallbackPayload {
    CallbackPayload {
        id: id.to_string(),
        status: status.to_string(),
        error_message: None,
        delivered_at: None,
    }
}

#[tokio::test]
async fn known_id_updates_status_uppercased() {
    let repository = Arc::new(MockMessageRepository::with_queued_record(42));
    let service = CallbackService::new(repository.clone());

    service.handle(&payload("42", "delivered")).await.unwrap();

    assert_eq!(repository.status_of(42).as_deref(), Some("DELIVERED"));
}

#[tokio::test]
async fn failed_status_is_stored_uppercased() {
    let repository = Arc::new(MockMessageRepository::with_queued_record(42));
    let service = CallbackService::new(repository.clone());

    service.handle(&payload("42", "failed")).await.unwrap();

    assert_eq!(repository.status_of(42).as_deref(), Some("FAILED"));
}

#[tokio::test]
async fn arbitrary_status_strings_are_stored_verbatim_uppercased() {
    // The handler does not restrict status to the known values
    let repository = Arc::new(MockMessageRepository::with_queued_record(42));
    let service = CallbackService::new(repository.clone());

    service.handle(&payload("42", "on-hold")).await.unwrap();

    assert_eq!(repository.status_of(42).as_deref(), Some("ON-HOLD"));
}

#[tokio::test]
async fn unknown_id_is_not_found_and_store_unchanged() {
    let repository = Arc::new(MockMessageRepository::with_queued_record(42));
    let service = CallbackService::new(repository.clone());

    let error = service.handle(&payload("99", "delivered")).await.unwrap_err();
    assert!(matches!(error, DomainError::NotFound { .. }));
    assert_eq!(repository.status_of(42).as_deref(), Some("QUEUED"));
}

#[tokio::test]
async fn non_numeric_id_is_an_internal_error() {
    let repository = Arc::new(MockMessageRepository::with_queued_record(42));
    let service = CallbackService::new(repository);

    let error = service
        .handle(&payload("not-a-number", "delivered"))
        .await
        .unwrap_err();
    assert!(matches!(error, DomainError::Internal { .. }));
}

#[tokio::test]
async fn store_failure_propagates_as_database_error() {
    let repository = Arc::new(MockMessageRepository::failing());
    let service = CallbackService::new(repository);

    let error = service.handle(&payload("1", "delivered")).await.unwrap_err();
    assert!(matches!(error, DomainError::Database { .. }));
}
