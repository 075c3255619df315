//! Podcast and episode search.
//!
//! A [`SearchRequest`] goes through three steps: the [`QueryBuilder`]
//! normalises it into a [`SearchQuery`], the repository runs that query, and
//! each returned record is projected into a [`SearchHit`]. The
//! [`SearchService`] caches the resulting page under a key derived from the
//! whole request.

mod error;
mod hit;
mod query_builder;
mod request;
mod service;

pub use error::SearchError;
pub use hit::{SearchHit, SearchHitValidationError, SearchResult};
pub use query_builder::{DEFAULT_MATCH_ALL_PLACEHOLDERS, QueryBuilder};
pub use request::{
    DEFAULT_RESULTS_PER_PAGE, OrderBy, SearchMode, SearchQuery, SearchRequest, SearchTarget,
};
pub use service::SearchService;
