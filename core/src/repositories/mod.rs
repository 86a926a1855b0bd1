//! Repository interfaces implemented by the infrastructure layer.

pub mod message_repository;

pub use message_repository::MessageRepository;
