//! `/api/sms` routes.

mod callback;
mod messages;
mod send;

pub use callback::callback;
pub use messages::list_messages;
pub use send::send_sms;

use actix_web::{web, Scope};

use sms_core::queue::QueuePublisher;
use sms_core::repositories::MessageRepository;

/// Build the `/api/sms` scope for the given repository and queue types.
pub fn scope<R, Q>() -> Scope
where
    R: MessageRepository + 'static,
    Q: QueuePublisher + 'static,
{
    web::scope("/api/sms")
        .route("/send", web::post().to(send_sms::<R, Q>))
        .route("/messages", web::get().to(list_messages::<R, Q>))
        .route("/callback", web::post().to(callback::<R, Q>))
}
