//! SMS request DTOs.
//!
//! The public submission contract uses camelCase field names; the callback
//! body reuses the shared [`CallbackPayload`](sms_shared::types::CallbackPayload)
//! wire type directly.

use serde::{Deserialize, Serialize};

use sms_core::domain::entities::SmsSubmission;

/// Body of `POST /api/sms/send`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendSmsRequest {
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    pub text: String,
}

impl SendSmsRequest {
    pub fn into_submission(self) -> SmsSubmission {
        SmsSubmission {
            phone_number: self.phone_number,
            text: self.text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_body() {
        let request: SendSmsRequest =
            serde_json::from_str(r#"{"phoneNumber":"+12025550123","text":"hello"}"#).unwrap();
        assert_eq!(request.phone_number, "+12025550123");
        assert_eq!(request.text, "hello");
    }

    #[test]
    fn rejects_snake_case_phone_field() {
        assert!(
            serde_json::from_str::<SendSmsRequest>(
                r#"{"phone_number":"+12025550123","text":"hello"}"#
            )
            .is_err()
        );
    }
}
