//! Submission service: validate, persist, publish.

mod service;

#[cfg(test)]
mod tests;

pub use service::{NoRecovery, PublishRecovery, SubmissionService};
