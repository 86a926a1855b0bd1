//! Validator for SMS submissions.
//!
//! Checks the recipient phone number and the message text, collecting every
//! failure found rather than stopping at the first. Pure computation; no
//! side effects.

use sms_shared::utils::phone::{matches_sms_phone_format, normalize_phone_number};

use crate::domain::entities::SmsSubmission;
use crate::errors::ValidationFailure;

/// Maximum message text length, in characters, before trimming.
pub const MAX_TEXT_LENGTH: usize = 160;

/// Validator for SMS submissions.
pub struct SmsValidator;

impl SmsValidator {
    /// Validate a submission. On failure returns every problem found, in
    /// check order (phone checks first, then text checks).
    pub fn validate(submission: &SmsSubmission) -> Result<(), ValidationFailure> {
        let mut errors = Vec::new();

        Self::validate_phone_number(&submission.phone_number, &mut errors);
        Self::validate_text(&submission.text, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationFailure::from_details(errors))
        }
    }

    /// Phone number format check on its own, for reuse outside admission.
    pub fn is_valid_phone_number(phone_number: &str) -> bool {
        if phone_number.trim().is_empty() {
            return false;
        }
        matches_sms_phone_format(&normalize_phone_number(phone_number))
    }

    fn validate_phone_number(phone_number: &str, errors: &mut Vec<String>) {
        if phone_number.trim().is_empty() {
            errors.push("Phone number is required".to_string());
            return;
        }

        let normalized = normalize_phone_number(phone_number);
        if normalized.trim().is_empty() {
            errors.push("Phone number cannot be empty after normalization".to_string());
            return;
        }

        if !matches_sms_phone_format(&normalized) {
            errors.push(
                "Invalid phone number format. Use international format (e.g., +1234567890)"
                    .to_string(),
            );
        }
    }

    fn validate_text(text: &str, errors: &mut Vec<String>) {
        if text.trim().is_empty() {
            errors.push("Text message is required".to_string());
            return;
        }

        if text.chars().count() > MAX_TEXT_LENGTH {
            errors.push(format!(
                "Text message too long. Maximum {} characters allowed",
                MAX_TEXT_LENGTH
            ));
        }
    }
}
