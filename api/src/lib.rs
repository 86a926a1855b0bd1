//! SMS submission API.
//!
//! HTTP surface of the pipeline: accepts submissions, lists stored messages,
//! and receives delivery callbacks from the worker. Handlers are generic over
//! the core repository/queue traits so tests can run them against mocks.

pub mod dto;
pub mod middleware;
pub mod routes;
pub mod state;
