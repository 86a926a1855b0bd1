//! Admission validation for SMS submissions.

pub mod sms_validator;

pub use sms_validator::{SmsValidator, MAX_TEXT_LENGTH};
