//! Pure utility functions.

pub mod phone;
