//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`SearchRepository`, `UserRepository`, `ResponseCache`,
//! `PasswordHasher`) are implemented by outbound adapters. Driving ports
//! (`PodcastSearch`, `AccountLifecycle`, `Subscriptions`) are implemented by
//! the domain services and called by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod account_lifecycle;
mod cache_key;
mod password_hasher;
mod podcast_search;
mod response_cache;
mod search_repository;
mod subscriptions;
mod user_repository;

pub use account_lifecycle::AccountLifecycle;
pub use cache_key::{CacheKey, CacheKeyValidationError};
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHashError, PasswordHasher};
pub use podcast_search::PodcastSearch;
#[cfg(test)]
pub use response_cache::MockResponseCache;
pub use response_cache::{ResponseCache, ResponseCacheError};
#[cfg(test)]
pub use search_repository::MockSearchRepository;
pub use search_repository::{FixtureSearchRepository, SearchRepository, SearchRepositoryError};
pub use subscriptions::Subscriptions;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{FixtureUserRepository, UserPersistenceError, UserRepository};
