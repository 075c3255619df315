//! Port interface for caching service responses.
//!
//! Services call the cache explicitly: reads go through [`ResponseCache::get`]
//! before the repository is consulted, and every mutation of cached data is
//! followed by [`ResponseCache::evict`] on the affected key. Values travel as
//! JSON so that one backend can hold search results and subscription lists
//! side by side.
use async_trait::async_trait;
use serde_json::Value;

use super::{CacheKey, define_port_error};

define_port_error! {
    /// Errors surfaced by the caching adapter.
    pub enum ResponseCacheError {
        /// Cache backend is unavailable or timing out.
        Backend { message: String } => "response cache backend failure: {message}",
        /// Serialisation or deserialisation of cached content failed.
        Serialization { message: String } => "response cache serialisation failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResponseCache: Send + Sync {
    /// Read the cached value for `key`, if any.
    async fn get(&self, key: &CacheKey) -> Result<Option<Value>, ResponseCacheError>;

    /// Store `value` under `key`, replacing any previous entry.
    async fn put(&self, key: &CacheKey, value: &Value) -> Result<(), ResponseCacheError>;

    /// Drop the entry stored under `key`. Missing keys are not an error.
    async fn evict(&self, key: &CacheKey) -> Result<(), ResponseCacheError>;
}
