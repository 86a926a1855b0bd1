//! Domain error types and the validation failure report.

use serde::Serialize;
use thiserror::Error;

/// The result of a rejected admission check.
///
/// `details` holds every failure found, in the order the checks ran;
/// `message` is the sole detail when there is one, or a generic marker when
/// there are several. Both are surfaced verbatim in the 400 response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{message}")]
pub struct ValidationFailure {
    pub message: String,
    pub details: Vec<String>,
}

impl ValidationFailure {
    /// Build a failure from the ordered list of problems found.
    pub fn from_details(details: Vec<String>) -> Self {
        debug_assert!(!details.is_empty());
        let message = if details.len() == 1 {
            details[0].clone()
        } else {
            "Multiple validation errors".to_string()
        };
        Self { message, details }
    }
}

/// Core domain errors.
///
/// The HTTP layer maps these onto status codes: `Validation` → 400,
/// `NotFound` → 404, everything else → 500.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Queue error: {message}")]
    Queue { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_detail_becomes_the_primary_message() {
        let failure = ValidationFailure::from_details(vec!["Text message is required".to_string()]);
        assert_eq!(failure.message, "Text message is required");
        assert_eq!(failure.details.len(), 1);
    }

    #[test]
    fn multiple_details_get_a_generic_primary_message() {
        let failure = ValidationFailure::from_details(vec![
            "Phone number is required".to_string(),
            "Text message is required".to_string(),
        ]);
        assert_eq!(failure.message, "Multiple validation errors");
        assert_eq!(failure.details.len(), 2);
    }

    #[test]
    fn validation_failure_converts_into_domain_error() {
        let failure = ValidationFailure::from_details(vec!["Text message is required".to_string()]);
        let error: DomainError = failure.into();
        assert!(matches!(error, DomainError::Validation(_)));
        assert_eq!(error.to_string(), "Text message is required");
    }
}
