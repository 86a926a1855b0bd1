//! # SMS Pipeline Shared
//!
//! Wire types and pure utilities shared between the submission API and the
//! delivery worker. This crate has no I/O dependencies; everything here is
//! plain data and pure computation.

pub mod types;
pub mod utils;
