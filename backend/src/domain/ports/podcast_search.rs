//! Driving port for podcast and episode search.
//!
//! Inbound adapters hand over the raw [`SearchRequest`] exactly as the user
//! submitted it; normalisation, caching and result mapping happen behind
//! this port.

use async_trait::async_trait;

use crate::domain::{SearchError, SearchRequest, SearchResult};

/// Domain use-case port for searching the directory.
#[async_trait]
pub trait PodcastSearch: Send + Sync {
    /// Run a search and return one page of mapped results.
    async fn search(&self, request: SearchRequest) -> Result<SearchResult, SearchError>;
}
