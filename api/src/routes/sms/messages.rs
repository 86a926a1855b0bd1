//! Handler for GET /api/sms/messages

use actix_web::{web, HttpResponse};

use crate::state::AppState;
use sms_core::queue::QueuePublisher;
use sms_core::repositories::MessageRepository;

/// Returns every stored SMS message as a JSON array, or
/// `500 {"error":"Failed to retrieve messages"}` on a store failure.
pub async fn list_messages<R, Q>(state: web::Data<AppState<R, Q>>) -> HttpResponse
where
    R: MessageRepository + 'static,
    Q: QueuePublisher + 'static,
{
    log::info!("Listing SMS messages");

    match state.repository.list_all().await {
        Ok(messages) => HttpResponse::Ok().json(messages),
        Err(error) => {
            log::error!("Failed to retrieve SMS messages: {}", error);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to retrieve messages"
            }))
        }
    }
}
