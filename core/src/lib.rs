//! # SMS Pipeline Core
//!
//! Core business logic and domain layer for the SMS pipeline. This crate
//! contains the domain entities, the admission validator, the submission,
//! delivery-simulation and callback services, and the repository/queue
//! interfaces implemented by the infrastructure layer.

pub mod domain;
pub mod errors;
pub mod queue;
pub mod repositories;
pub mod services;
pub mod validation;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use queue::*;
pub use repositories::*;
pub use services::*;
pub use validation::*;
