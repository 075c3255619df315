//! Wiring of the domain services from configuration and repositories.

use std::sync::Arc;
use std::time::Duration;

use mockable::{Clock, DefaultClock};
use thiserror::Error;
use tracing::info;

use super::CoreSettings;
use crate::domain::ports::{
    AccountLifecycle, PasswordHashError, PodcastSearch, ResponseCache, ResponseCacheError,
    SearchRepository, Subscriptions, UserRepository,
};
use crate::domain::{AccountService, SearchService};
use crate::outbound::cache::{CacheTtl, InMemoryResponseCache, RedisResponseCache};
use crate::outbound::password::BcryptPasswordHasher;

/// Failures raised while assembling the services.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The response cache could not be created.
    #[error("response cache unavailable: {0}")]
    Cache(#[from] ResponseCacheError),
    /// The password hasher rejected its configuration.
    #[error("password hasher misconfigured: {0}")]
    PasswordHasher(#[from] PasswordHashError),
}

/// Driving ports handed to inbound adapters.
#[derive(Clone)]
pub struct CoreServices {
    /// Podcast and episode search.
    pub search: Arc<dyn PodcastSearch>,
    /// Registration, password reset and activation.
    pub accounts: Arc<dyn AccountLifecycle>,
    /// Subscriptions, playlists and votes.
    pub subscriptions: Arc<dyn Subscriptions>,
}

async fn build_cache(
    settings: &CoreSettings,
    clock: Arc<dyn Clock>,
) -> Result<Arc<dyn ResponseCache>, BootstrapError> {
    let ttl = Duration::from_secs(settings.cache_ttl_secs);
    match settings.redis_url.as_deref() {
        Some(url) => {
            let jitter = Duration::from_secs(settings.cache_ttl_jitter_secs);
            let cache = RedisResponseCache::connect(url, CacheTtl::new(ttl, jitter)).await?;
            info!("using Redis response cache");
            Ok(Arc::new(cache))
        }
        None => {
            info!("using in-memory response cache");
            Ok(Arc::new(InMemoryResponseCache::with_ttl(ttl, clock)))
        }
    }
}

/// Build the search and account services over the given repositories.
///
/// # Errors
/// Returns [`BootstrapError`] when the cache or the password hasher cannot be
/// set up from `settings`.
pub async fn build_services<S, U>(
    settings: &CoreSettings,
    search_repository: Arc<S>,
    user_repository: Arc<U>,
) -> Result<CoreServices, BootstrapError>
where
    S: SearchRepository + 'static,
    U: UserRepository + 'static,
{
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let hasher = Arc::new(BcryptPasswordHasher::new(settings.bcrypt_cost)?);
    let cache = build_cache(settings, clock.clone()).await?;

    let search = SearchService::new(search_repository, cache.clone())
        .with_query_builder(settings.query_builder());
    let accounts = Arc::new(AccountService::new(user_repository, cache, hasher, clock));

    Ok(CoreServices {
        search: Arc::new(search),
        accounts: accounts.clone(),
        subscriptions: accounts,
    })
}
