//! Domain entities for the SMS pipeline.

pub mod entities;

pub use entities::*;
