//! Domain cache key type shared by response cache adapters.
//!
//! Keys are namespaced so that unrelated cached views never collide:
//!
//! - `search:v1:<sha256>`: a full search result, fingerprinted from the
//!   canonical JSON form of the request.
//! - `users:<username>`: a user's subscription list.
//! - `podcasts:<podcast id>` and `podcasts:<podcast id>-<episode id>`:
//!   podcast and episode aggregates whose vote counts change.
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::domain::{SearchRequest, Username};

const SEARCH_NAMESPACE: &str = "search:v1";
const USERS_NAMESPACE: &str = "users";
const PODCASTS_NAMESPACE: &str = "podcasts";

/// Cache key used to store, read and evict cached responses.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Construct a cache key after validating that it is non-empty and trimmed.
    pub fn new(value: impl Into<String>) -> Result<Self, CacheKeyValidationError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(CacheKeyValidationError::Empty);
        }
        if raw.trim() != raw {
            return Err(CacheKeyValidationError::ContainsWhitespace);
        }
        Ok(Self(raw))
    }

    /// Key for a cached search result, derived from the whole request value.
    ///
    /// Two requests that differ in any field map to different keys.
    pub fn search(request: &SearchRequest) -> Result<Self, serde_json::Error> {
        let canonical = serde_json::to_vec(request)?;
        let mut hasher = Sha256::new();
        hasher.update(&canonical);
        let digest = hasher.finalize();
        Ok(Self(format!("{SEARCH_NAMESPACE}:{}", hex::encode(digest))))
    }

    /// Key for the cached subscription list of `username`.
    pub fn subscriptions(username: &Username) -> Self {
        Self(format!("{USERS_NAMESPACE}:{username}"))
    }

    /// Key for a cached podcast aggregate.
    pub fn podcast(podcast_id: i64) -> Self {
        Self(format!("{PODCASTS_NAMESPACE}:{podcast_id}"))
    }

    /// Key for a cached episode aggregate, scoped by its podcast.
    pub fn episode(podcast_id: i64, episode_id: i64) -> Self {
        Self(format!("{PODCASTS_NAMESPACE}:{podcast_id}-{episode_id}"))
    }

    /// Borrow the underlying key as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Validation errors returned when constructing [`CacheKey`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheKeyValidationError {
    /// Key is empty after trimming whitespace.
    #[error("cache key must not be empty")]
    Empty,
    /// Key contains leading or trailing whitespace.
    #[error("cache key must not contain surrounding whitespace")]
    ContainsWhitespace,
}
