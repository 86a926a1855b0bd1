//! Handler for POST /api/sms/callback
//!
//! Receives delivery-outcome reports from the worker and applies them to the
//! stored message. Response bodies are empty; the status code carries the
//! result, matching the callback contract.

use actix_web::{web, HttpResponse};

use crate::state::AppState;
use sms_core::errors::DomainError;
use sms_core::queue::QueuePublisher;
use sms_core::repositories::MessageRepository;
use sms_shared::types::CallbackPayload;

/// # Responses
///
/// * `200` - status updated
/// * `404` - no message with the given id
/// * `500` - malformed id or store failure
pub async fn callback<R, Q>(
    state: web::Data<AppState<R, Q>>,
    payload: web::Json<CallbackPayload>,
) -> HttpResponse
where
    R: MessageRepository + 'static,
    Q: QueuePublisher + 'static,
{
    log::info!(
        "Received callback for SMS id: {} with status: {}",
        payload.id,
        payload.status
    );

    match state.callbacks.handle(&payload).await {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(DomainError::NotFound { .. }) => HttpResponse::NotFound().finish(),
        Err(error) => {
            log::error!("Failed to update SMS status: {}", error);
            HttpResponse::InternalServerError().finish()
        }
    }
}
