//! Wire-format types exchanged between the two services.

pub mod message;

pub use message::{CallbackPayload, QueuedMessage, STATUS_DELIVERED, STATUS_FAILED};
