//! Response cache adapters.
//!
//! - [`InMemoryResponseCache`]: process-local map, used when no Redis URL is
//!   configured and in tests.
//! - [`RedisResponseCache`]: pooled Redis client storing JSON with a TTL plus
//!   random jitter so entries written together do not expire together.

mod memory;
mod redis;

pub use memory::InMemoryResponseCache;
pub use redis::{CacheTtl, RedisResponseCache};
