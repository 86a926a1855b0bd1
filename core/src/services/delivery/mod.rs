//! Delivery simulation: consumes queued messages and reports a simulated
//! outcome through the callback channel.

mod outcome;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use outcome::{OutcomeSource, ThreadRngOutcomes, DELIVERY_SUCCESS_RATE, ERROR_REASONS};
pub use service::DeliverySimulator;
pub use traits::CallbackSender;
