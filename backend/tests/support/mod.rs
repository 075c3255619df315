//! Shared helper utilities for backend integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`, so
//! common fixtures live here and are pulled in with `mod support;`.

#![allow(dead_code)]

pub mod user_store;

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use mockable::DefaultClock;
use podcast_directory::domain::ports::ResponseCache;
use podcast_directory::domain::{AccountService, Episode, Podcast};
use podcast_directory::outbound::cache::InMemoryResponseCache;
use podcast_directory::outbound::password::BcryptPasswordHasher;

use self::user_store::InMemoryUserRepository;

/// Lowest bcrypt cost, keeping the tests fast.
pub const TEST_BCRYPT_COST: u32 = 4;

/// Podcast `id` with `episodes` episodes, newest first.
pub fn podcast(id: i64, episodes: i64) -> Podcast {
    let slug = format!("cast-{id}");
    let base = Utc
        .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
        .single()
        .expect("valid timestamp");
    let mut podcast = Podcast::new(id, format!("Cast {id}"), slug.clone());
    podcast.episodes = (1..=episodes)
        .rev()
        .map(|eid| {
            let mut episode = Episode::new(id, slug.clone(), eid, format!("Episode {eid}"), "ep");
            episode.publication_date = Some(base + Duration::days(eid + id * 100));
            episode
        })
        .collect();
    podcast
}

/// Account service over `repository` and `cache` with a real bcrypt hasher.
pub fn account_service(
    repository: Arc<InMemoryUserRepository>,
    cache: Arc<dyn ResponseCache>,
) -> AccountService<InMemoryUserRepository> {
    AccountService::new(
        repository,
        cache,
        Arc::new(BcryptPasswordHasher::new(TEST_BCRYPT_COST).expect("valid bcrypt cost")),
        Arc::new(DefaultClock),
    )
}

/// Fresh in-memory cache without expiry.
pub fn memory_cache() -> Arc<InMemoryResponseCache> {
    Arc::new(InMemoryResponseCache::new())
}
