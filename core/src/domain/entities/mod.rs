pub mod message;

pub use message::{DeliveryStatus, NewSmsRecord, SmsRecord, SmsSubmission};
