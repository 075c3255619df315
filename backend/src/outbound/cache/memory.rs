//! Process-local response cache.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde_json::Value;

use crate::domain::ports::{CacheKey, ResponseCache, ResponseCacheError};

#[derive(Debug, Clone)]
struct Entry {
    value: Value,
    expires_at: Option<DateTime<Utc>>,
}

/// [`ResponseCache`] backed by a mutex-guarded map.
///
/// Entries never expire unless a TTL is set with
/// [`InMemoryResponseCache::with_ttl`].
pub struct InMemoryResponseCache {
    entries: Mutex<HashMap<CacheKey, Entry>>,
    ttl: Option<(chrono::Duration, Arc<dyn Clock>)>,
}

impl Default for InMemoryResponseCache {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryResponseCache {
    /// Create an empty cache whose entries never expire.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl: None,
        }
    }

    /// Create an empty cache whose entries expire `ttl` after being written.
    pub fn with_ttl(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        let ttl = chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::MAX);
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl: Some((ttl, clock)),
        }
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.lock().map(|entries| entries.len()).unwrap_or_default()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<CacheKey, Entry>>, ResponseCacheError> {
        self.entries
            .lock()
            .map_err(|_| ResponseCacheError::backend("in-memory cache lock poisoned"))
    }

    fn now(&self) -> Option<DateTime<Utc>> {
        self.ttl.as_ref().map(|(_, clock)| clock.utc())
    }
}

#[async_trait]
impl ResponseCache for InMemoryResponseCache {
    async fn get(&self, key: &CacheKey) -> Result<Option<Value>, ResponseCacheError> {
        let now = self.now();
        let mut entries = self.lock()?;
        let expired = match (entries.get(key), now) {
            (None, _) => return Ok(None),
            (Some(entry), Some(now)) => entry.expires_at.is_some_and(|at| at <= now),
            (Some(_), None) => false,
        };
        if expired {
            entries.remove(key);
            return Ok(None);
        }
        Ok(entries.get(key).map(|entry| entry.value.clone()))
    }

    async fn put(&self, key: &CacheKey, value: &Value) -> Result<(), ResponseCacheError> {
        let now = self.now();
        let expires_at = self
            .ttl
            .as_ref()
            .zip(now)
            .and_then(|((ttl, _), now)| now.checked_add_signed(*ttl));
        let mut entries = self.lock()?;
        if let Some(now) = now {
            // Expired entries are otherwise only dropped when their key is read.
            entries.retain(|_, entry| entry.expires_at.is_none_or(|at| at > now));
        }
        entries.insert(
            key.clone(),
            Entry {
                value: value.clone(),
                expires_at,
            },
        );
        Ok(())
    }

    async fn evict(&self, key: &CacheKey) -> Result<(), ResponseCacheError> {
        self.lock()?.remove(key);
        Ok(())
    }
}
