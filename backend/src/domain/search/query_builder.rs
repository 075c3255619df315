//! Turns a [`SearchRequest`] into the [`SearchQuery`] a full-text engine can
//! run.
//!
//! Natural mode passes the user's text through, unless the request asks for
//! everything: then the text is dropped and results fall back to newest
//! first. Boolean mode assembles the query from the advanced-search clauses:
//! required words, excluded words, optional words, then the exact phrase
//! marked as required with `+`.

use super::{OrderBy, SearchError, SearchMode, SearchQuery, SearchRequest};

/// Placeholder texts the quick-search box submits when left untouched.
pub const DEFAULT_MATCH_ALL_PLACEHOLDERS: [&str; 5] = [
    "Search...",
    "Căutare...",
    "Buscar...",
    "Suchen...",
    "Rechercher...",
];

const REQUIRED_MARKER: char = '+';

/// Builds normalised search queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryBuilder {
    match_all_placeholders: Vec<String>,
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_MATCH_ALL_PLACEHOLDERS)
    }
}

impl QueryBuilder {
    /// Create a builder treating `placeholders` as "match all" texts.
    pub fn new<I, S>(placeholders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            match_all_placeholders: placeholders
                .into_iter()
                .map(|placeholder| placeholder.into().trim().to_owned())
                .filter(|placeholder| !placeholder.is_empty())
                .collect(),
        }
    }

    /// Normalise `request` into a repository query.
    ///
    /// # Errors
    /// Returns [`SearchError::Encoding`] when the resulting query text or
    /// category contains a NUL character, which full-text engines cannot
    /// store.
    ///
    /// # Examples
    /// ```
    /// use podcast_directory::domain::search::QueryBuilder;
    /// use podcast_directory::domain::{SearchMode, SearchRequest};
    ///
    /// let request = SearchRequest {
    ///     search_mode: SearchMode::Boolean,
    ///     all_these_words: Some("rust async".to_owned()),
    ///     exact_phrase: Some("\"zero cost\"".to_owned()),
    ///     ..SearchRequest::default()
    /// };
    /// let query = QueryBuilder::default().build(&request).unwrap();
    /// assert_eq!(query.query_text.as_deref(), Some("rust async +\"zero cost\""));
    /// ```
    pub fn build(&self, request: &SearchRequest) -> Result<SearchQuery, SearchError> {
        let category_id = non_blank(request.category_id.as_deref()).map(str::to_owned);

        let (query_text, excluded_terms, order_by) = match request.search_mode {
            SearchMode::Natural => {
                let (text, order_by) = self.natural_text(request);
                (text, Vec::new(), order_by)
            }
            SearchMode::Boolean => {
                let (text, excluded) = boolean_text(request);
                (text, excluded, request.order_by)
            }
        };

        ensure_encodable("query text", query_text.as_deref())?;
        ensure_encodable("category", category_id.as_deref())?;

        Ok(SearchQuery {
            query_text,
            excluded_terms,
            category_id,
            mode: request.search_mode,
            target: request.search_target,
            order_by,
            offset: request.first_item_on_page(),
            limit: request.results_per_page,
        })
    }

    /// Whether the request asks for every record rather than a text match.
    pub fn is_match_all(&self, request: &SearchRequest) -> bool {
        if request.fetch_all {
            return true;
        }
        match non_blank(request.query_text.as_deref()) {
            None => true,
            Some(text) => self
                .match_all_placeholders
                .iter()
                .any(|placeholder| placeholder == text),
        }
    }

    fn natural_text(&self, request: &SearchRequest) -> (Option<String>, Option<OrderBy>) {
        if self.is_match_all(request) {
            let order_by = request.order_by.or(Some(OrderBy::PublicationDate));
            return (None, order_by);
        }
        // Real text: relevance ranking decides the order.
        let text = non_blank(request.query_text.as_deref()).map(str::to_owned);
        (text, None)
    }
}

fn boolean_text(request: &SearchRequest) -> (Option<String>, Vec<String>) {
    let mut parts: Vec<String> = Vec::new();

    if let Some(words) = non_blank(request.all_these_words.as_deref()) {
        parts.extend(words.split_whitespace().map(str::to_owned));
    }

    let excluded: Vec<String> = non_blank(request.none_of_these_words.as_deref())
        .map(|words| words.split_whitespace().map(str::to_owned).collect())
        .unwrap_or_default();
    parts.extend(excluded.iter().cloned());

    if let Some(block) = non_blank(request.any_of_these_words.as_deref()) {
        parts.push(block.to_owned());
    }

    if let Some(phrase) = non_blank(request.exact_phrase.as_deref()) {
        parts.push(format!("{REQUIRED_MARKER}{phrase}"));
    }

    let text = (!parts.is_empty()).then(|| parts.join(" "));
    (text, excluded)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|trimmed| !trimmed.is_empty())
}

fn ensure_encodable(field: &str, value: Option<&str>) -> Result<(), SearchError> {
    match value {
        Some(text) if text.contains('\0') => Err(SearchError::encoding(format!(
            "{field} contains a NUL character"
        ))),
        _ => Ok(()),
    }
}
