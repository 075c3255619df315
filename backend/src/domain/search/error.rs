//! Failures surfaced by the search service.

use thiserror::Error;

use crate::domain::ports::SearchRepositoryError;

/// Errors returned by [`crate::domain::ports::PodcastSearch`].
///
/// Repository failures pass through untouched; the service adds only the
/// encoding failure of its own query construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The request cannot be represented as an engine query or cache key.
    #[error("search request cannot be encoded: {message}")]
    Encoding {
        /// What could not be encoded.
        message: String,
    },
    /// The search repository failed.
    #[error(transparent)]
    Repository(#[from] SearchRepositoryError),
}

impl SearchError {
    /// Convenience constructor for [`SearchError::Encoding`].
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::Encoding {
            message: message.into(),
        }
    }
}
