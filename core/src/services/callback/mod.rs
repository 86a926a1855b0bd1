//! Callback handling: applies delivery outcomes to stored messages.

mod service;

#[cfg(test)]
mod tests;

pub use service::CallbackService;
