//! Infrastructure error type.

use sms_core::errors::DomainError;
use thiserror::Error;

/// Errors raised while setting up or talking to external services.
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Queue error: {0}")]
    Queue(String),

    #[error("HTTP client error: {0}")]
    Http(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        match error {
            InfrastructureError::Database(message) => DomainError::Database { message },
            InfrastructureError::Queue(message) => DomainError::Queue { message },
            InfrastructureError::Config(message) | InfrastructureError::Http(message) => {
                DomainError::Internal { message }
            }
        }
    }
}
