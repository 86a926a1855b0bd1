//! Handler for POST /api/sms/send
//!
//! Validates the submission, persists it, and queues it for delivery.

use actix_web::{web, HttpResponse};

use crate::dto::SendSmsRequest;
use crate::state::AppState;
use sms_core::errors::DomainError;
use sms_core::queue::QueuePublisher;
use sms_core::repositories::MessageRepository;

/// # Responses
///
/// * `200` - `{"status":"queued","message":"SMS queued for delivery"}`
/// * `400` - `{"error": <primary message>, "details": [<all failures>]}`
/// * `500` - `{"error":"Failed to queue message"}`
pub async fn send_sms<R, Q>(
    state: web::Data<AppState<R, Q>>,
    request: web::Json<SendSmsRequest>,
) -> HttpResponse
where
    R: MessageRepository + 'static,
    Q: QueuePublisher + 'static,
{
    log::info!("Received SMS request for phone: {}", request.phone_number);

    match state.submission.submit(request.into_inner().into_submission()).await {
        Ok(record) => {
            log::info!("SMS message queued successfully, id: {}", record.id);
            HttpResponse::Ok().json(serde_json::json!({
                "status": "queued",
                "message": "SMS queued for delivery"
            }))
        }
        Err(DomainError::Validation(failure)) => {
            log::warn!("SMS validation failed: {}", failure.message);
            HttpResponse::BadRequest().json(serde_json::json!({
                "error": failure.message,
                "details": failure.details
            }))
        }
        Err(error) => {
            log::error!("Failed to queue SMS message: {}", error);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to queue message"
            }))
        }
    }
}
