//! Queue channel - Redis list implementation.

mod redis_queue;

pub use redis_queue::RedisQueue;
