//! Search service implementing the [`PodcastSearch`] driving port.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::ports::{CacheKey, PodcastSearch, ResponseCache, SearchRepository};

use super::{
    QueryBuilder, SearchError, SearchHit, SearchQuery, SearchRequest, SearchResult, SearchTarget,
};

/// Search service: builds the query, reads through the cache, maps records.
#[derive(Clone)]
pub struct SearchService<R> {
    repository: Arc<R>,
    cache: Arc<dyn ResponseCache>,
    query_builder: QueryBuilder,
}

impl<R> SearchService<R> {
    /// Create a service using the default "match all" placeholders.
    pub fn new(repository: Arc<R>, cache: Arc<dyn ResponseCache>) -> Self {
        Self {
            repository,
            cache,
            query_builder: QueryBuilder::default(),
        }
    }

    /// Replace the query builder, e.g. to change the placeholder list.
    #[must_use]
    pub fn with_query_builder(mut self, query_builder: QueryBuilder) -> Self {
        self.query_builder = query_builder;
        self
    }
}

impl<R> SearchService<R>
where
    R: SearchRepository,
{
    async fn cached_result(&self, key: &CacheKey) -> Option<SearchResult> {
        let value = match self.cache.get(key).await {
            Ok(value) => value?,
            Err(err) => {
                warn!(cache_key = %key, error = %err, "search cache read failed");
                return None;
            }
        };
        match serde_json::from_value(value) {
            Ok(result) => Some(result),
            Err(err) => {
                warn!(cache_key = %key, error = %err, "discarding undecodable cached search result");
                None
            }
        }
    }

    async fn store_result(&self, key: &CacheKey, result: &SearchResult) {
        let value = match serde_json::to_value(result) {
            Ok(value) => value,
            Err(err) => {
                warn!(cache_key = %key, error = %err, "search result not cacheable");
                return;
            }
        };
        if let Err(err) = self.cache.put(key, &value).await {
            warn!(cache_key = %key, error = %err, "search cache write failed");
        }
    }

    async fn fetch_hits(&self, query: &SearchQuery) -> Result<Vec<SearchHit>, SearchError> {
        debug!(
            target_kind = ?query.target,
            mode = ?query.mode,
            offset = query.offset,
            limit = query.limit,
            "dispatching search"
        );
        let hits: Vec<SearchHit> = match query.target {
            SearchTarget::Podcasts => self
                .repository
                .search_podcasts(query)
                .await?
                .iter()
                .map(SearchHit::from_podcast)
                .collect(),
            SearchTarget::Episodes => self
                .repository
                .search_episodes(query)
                .await?
                .iter()
                .map(SearchHit::from_episode)
                .collect(),
        };
        Ok(hits)
    }
}

#[async_trait]
impl<R> PodcastSearch for SearchService<R>
where
    R: SearchRepository,
{
    async fn search(&self, request: SearchRequest) -> Result<SearchResult, SearchError> {
        let key = CacheKey::search(&request)
            .map_err(|err| SearchError::encoding(format!("search cache key: {err}")))?;

        if let Some(result) = self.cached_result(&key).await {
            debug!(cache_key = %key, "search served from cache");
            return Ok(result);
        }

        let query = self.query_builder.build(&request)?;
        let results = self.fetch_hits(&query).await?;
        let result = SearchResult {
            results,
            current_page: request.page_number(),
            results_per_page: request.results_per_page,
        };

        self.store_result(&key, &result).await;
        Ok(result)
    }
}
