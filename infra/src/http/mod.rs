//! Outbound HTTP - delivery callback client.

mod callback_client;

pub use callback_client::HttpCallbackClient;
