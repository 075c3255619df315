//! Port for full-text podcast and episode lookups.
//!
//! Adapters receive a fully normalised [`SearchQuery`]: query text already
//! assembled for the engine's boolean or natural mode, pagination already
//! resolved into an offset and limit. They only translate it into their
//! storage dialect.

use async_trait::async_trait;

use crate::domain::{Episode, Podcast, SearchQuery};

use super::define_port_error;

define_port_error! {
    /// Errors raised by search repository adapters.
    pub enum SearchRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "search repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "search repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchRepository: Send + Sync {
    /// Return podcasts matching the query, in the requested order.
    async fn search_podcasts(&self, query: &SearchQuery)
    -> Result<Vec<Podcast>, SearchRepositoryError>;

    /// Return episodes matching the query, in the requested order.
    async fn search_episodes(&self, query: &SearchQuery)
    -> Result<Vec<Episode>, SearchRepositoryError>;
}

/// Search repository used until a full-text backend is wired; never matches.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSearchRepository;

#[async_trait]
impl SearchRepository for FixtureSearchRepository {
    async fn search_podcasts(
        &self,
        _query: &SearchQuery,
    ) -> Result<Vec<Podcast>, SearchRepositoryError> {
        Ok(Vec::new())
    }

    async fn search_episodes(
        &self,
        _query: &SearchQuery,
    ) -> Result<Vec<Episode>, SearchRepositoryError> {
        Ok(Vec::new())
    }
}
