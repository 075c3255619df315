//! Redis-backed response cache.
//!
//! Values are stored as JSON strings under the domain's namespaced keys
//! (`search:v1:<sha256>`, `users:<username>`, ...). Every write sets an
//! expiry of the configured TTL plus a random jitter.

use std::time::Duration;

use async_trait::async_trait;
use bb8_redis::redis::{self, AsyncCommands};
use bb8_redis::{RedisConnectionManager, bb8};
use rand::Rng;
use serde_json::Value;
use tracing::debug;

use crate::domain::ports::{CacheKey, ResponseCache, ResponseCacheError};

type RedisPool = bb8::Pool<RedisConnectionManager>;

/// Expiry applied to cache writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheTtl {
    base: Duration,
    jitter: Duration,
}

impl CacheTtl {
    /// Expire entries after `base` plus up to `jitter`.
    pub fn new(base: Duration, jitter: Duration) -> Self {
        Self { base, jitter }
    }

    /// Draw the expiry, in whole seconds, for one write. Never below one.
    pub fn sample_secs(&self) -> u64 {
        let jitter = self.jitter.as_secs();
        let extra = if jitter == 0 {
            0
        } else {
            rand::thread_rng().gen_range(0..=jitter)
        };
        self.base.as_secs().saturating_add(extra).max(1)
    }
}

/// [`ResponseCache`] backed by a `bb8` pool of Redis connections.
#[derive(Clone)]
pub struct RedisResponseCache {
    pool: RedisPool,
    ttl: CacheTtl,
}

impl RedisResponseCache {
    /// Wrap an existing connection pool.
    pub fn new(pool: RedisPool, ttl: CacheTtl) -> Self {
        Self { pool, ttl }
    }

    /// Build a pool for `redis_url` and wrap it.
    ///
    /// # Errors
    /// Returns [`ResponseCacheError::Backend`] when the URL is invalid or the
    /// pool cannot be built.
    pub async fn connect(redis_url: &str, ttl: CacheTtl) -> Result<Self, ResponseCacheError> {
        let manager = RedisConnectionManager::new(redis_url).map_err(backend_error)?;
        let pool = bb8::Pool::builder()
            .build(manager)
            .await
            .map_err(backend_error)?;
        Ok(Self::new(pool, ttl))
    }

    async fn connection(
        &self,
    ) -> Result<bb8::PooledConnection<'_, RedisConnectionManager>, ResponseCacheError> {
        self.pool.get().await.map_err(backend_error)
    }
}

fn backend_error(error: impl std::fmt::Display) -> ResponseCacheError {
    ResponseCacheError::backend(error.to_string())
}

fn serialization_error(error: serde_json::Error) -> ResponseCacheError {
    ResponseCacheError::serialization(error.to_string())
}

fn decode(payload: Option<String>) -> Result<Option<Value>, ResponseCacheError> {
    payload
        .map(|raw| serde_json::from_str(&raw).map_err(serialization_error))
        .transpose()
}

#[async_trait]
impl ResponseCache for RedisResponseCache {
    async fn get(&self, key: &CacheKey) -> Result<Option<Value>, ResponseCacheError> {
        let mut conn = self.connection().await?;
        let payload: Option<String> = conn
            .get(key.as_str())
            .await
            .map_err(|err: redis::RedisError| backend_error(err))?;
        decode(payload)
    }

    async fn put(&self, key: &CacheKey, value: &Value) -> Result<(), ResponseCacheError> {
        let payload = serde_json::to_string(value).map_err(serialization_error)?;
        let ttl_secs = self.ttl.sample_secs();
        let mut conn = self.connection().await?;
        let () = conn
            .set_ex(key.as_str(), payload, ttl_secs)
            .await
            .map_err(|err: redis::RedisError| backend_error(err))?;
        debug!(cache_key = %key, ttl_secs, "response cached");
        Ok(())
    }

    async fn evict(&self, key: &CacheKey) -> Result<(), ResponseCacheError> {
        let mut conn = self.connection().await?;
        let () = conn
            .del(key.as_str())
            .await
            .map_err(|err: redis::RedisError| backend_error(err))?;
        Ok(())
    }
}
