//! Search request as submitted by the user, and the normalised query handed
//! to the repository.

use serde::{Deserialize, Serialize};

/// Default number of results on one page.
pub const DEFAULT_RESULTS_PER_PAGE: u32 = 10;

/// How the query text is interpreted by the full-text engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Relevance-ranked free text.
    #[default]
    Natural,
    /// Explicit required, excluded and optional terms.
    Boolean,
}

/// Which records a search returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchTarget {
    /// Podcast feeds.
    Podcasts,
    /// Individual episodes.
    #[default]
    Episodes,
}

/// Explicit result ordering. Absent means relevance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderBy {
    /// Newest first.
    PublicationDate,
    /// Highest rated first.
    Rating,
    /// Most subscribed first.
    Popularity,
}

/// Structured search request.
///
/// The whole value doubles as the cache key for the search result, so every
/// field that influences the outcome lives here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchRequest {
    /// Free text typed by the user (natural mode).
    pub query_text: Option<String>,
    /// Return everything, ignoring the query text (natural mode).
    pub fetch_all: bool,
    /// Interpretation of the query.
    pub search_mode: SearchMode,
    /// Podcasts or episodes.
    pub search_target: SearchTarget,
    /// Category filter; blank means no filter.
    pub category_id: Option<String>,
    /// Words that must all appear (boolean mode).
    pub all_these_words: Option<String>,
    /// Words that must not appear (boolean mode).
    pub none_of_these_words: Option<String>,
    /// Words of which any may appear, passed through as written (boolean mode).
    pub any_of_these_words: Option<String>,
    /// Phrase that must appear as-is, quotes included (boolean mode).
    pub exact_phrase: Option<String>,
    /// One-based page number.
    pub current_page: u32,
    /// Page size.
    pub results_per_page: u32,
    /// Requested ordering.
    pub order_by: Option<OrderBy>,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            query_text: None,
            fetch_all: false,
            search_mode: SearchMode::default(),
            search_target: SearchTarget::default(),
            category_id: None,
            all_these_words: None,
            none_of_these_words: None,
            any_of_these_words: None,
            exact_phrase: None,
            current_page: 1,
            results_per_page: DEFAULT_RESULTS_PER_PAGE,
            order_by: None,
        }
    }
}

impl SearchRequest {
    /// One-based page number, with pages below one read as the first page.
    pub fn page_number(&self) -> u32 {
        self.current_page.max(1)
    }

    /// Zero-based offset of the first item on the requested page.
    ///
    /// Pages below one are read as the first page.
    ///
    /// # Examples
    /// ```
    /// use podcast_directory::domain::SearchRequest;
    ///
    /// let request = SearchRequest {
    ///     current_page: 3,
    ///     results_per_page: 20,
    ///     ..SearchRequest::default()
    /// };
    /// assert_eq!(request.first_item_on_page(), 40);
    /// ```
    pub fn first_item_on_page(&self) -> u64 {
        let page = u64::from(self.page_number());
        (page - 1) * u64::from(self.results_per_page)
    }
}

/// Normalised query passed to [`crate::domain::ports::SearchRepository`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Engine-ready query text; `None` matches everything.
    pub query_text: Option<String>,
    /// Boolean-mode exclusions, also present as plain tokens in `query_text`.
    pub excluded_terms: Vec<String>,
    /// Category filter.
    pub category_id: Option<String>,
    /// Interpretation of `query_text`.
    pub mode: SearchMode,
    /// Podcasts or episodes.
    pub target: SearchTarget,
    /// Ordering; `None` means relevance.
    pub order_by: Option<OrderBy>,
    /// Zero-based offset of the first row.
    pub offset: u64,
    /// Maximum number of rows.
    pub limit: u32,
}
