//! # Infrastructure Layer
//!
//! Concrete implementations of the core seams: the MySQL message store, the
//! Redis-backed queue channel, and the HTTP callback client, plus
//! environment-driven configuration for both service binaries.

pub mod config;
pub mod database;
pub mod error;
pub mod http;
pub mod queue;

pub use config::{
    CallbackConfig, DatabaseConfig, InfrastructureConfig, QueueConfig, ServerConfig,
};
pub use error::InfrastructureError;
