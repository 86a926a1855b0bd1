//! Randomness source for simulated delivery outcomes.
//!
//! The simulator takes its randomness through the [`OutcomeSource`] trait so
//! tests can fix outcomes deterministically; production wiring uses
//! [`ThreadRngOutcomes`].

use rand::Rng;

/// Probability that a consumed message is reported as delivered.
pub const DELIVERY_SUCCESS_RATE: f64 = 0.85;

/// Canned error reasons for failed deliveries, picked uniformly at random.
pub const ERROR_REASONS: [&str; 4] = [
    "Network timeout",
    "SMS service unavailable",
    "Rate limit exceeded",
    "Invalid message format",
];

/// Source of random draws for the delivery simulator.
pub trait OutcomeSource: Send + Sync {
    /// A uniform draw in `[0, 1)`, compared against the success threshold.
    fn draw_unit(&self) -> f64;

    /// A uniform index in `[0, len)`, used to pick an error reason.
    fn pick_index(&self, len: usize) -> usize;
}

/// Production outcome source backed by the thread-local RNG. Draws are
/// independent per message.
pub struct ThreadRngOutcomes;

impl OutcomeSource for ThreadRngOutcomes {
    fn draw_unit(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }

    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}
