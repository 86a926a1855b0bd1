//! Request DTOs.

pub mod sms;

pub use sms::SendSmsRequest;
