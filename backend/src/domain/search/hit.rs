//! Uniform projection of podcasts and episodes for search result pages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Episode, MediaType, Podcast};

/// Validation errors raised when a hit is rebuilt from its serialised form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchHitValidationError {
    /// `isEpisode` disagrees with the presence of an episode id.
    #[error("episode hits must carry an episode id and podcast hits must not")]
    ShapeMismatch,
}

/// One entry of a search result page.
///
/// ## Invariants
/// - `is_episode` is `true` exactly when `episode_id` is present.
///
/// Hits are only built from a [`Podcast`] or an [`Episode`], or decoded from
/// a cached payload that satisfies the invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(try_from = "SearchHitDto", into = "SearchHitDto")]
pub struct SearchHit {
    podcast_id: i64,
    episode_id: Option<i64>,
    is_episode: bool,
    title: String,
    publication_date: Option<DateTime<Utc>>,
    media_type: Option<MediaType>,
    description: Option<String>,
    media_url: Option<String>,
    relative_link: String,
}

impl SearchHit {
    /// Project a podcast.
    pub fn from_podcast(podcast: &Podcast) -> Self {
        Self {
            podcast_id: podcast.podcast_id,
            episode_id: None,
            is_episode: false,
            title: podcast.title.clone(),
            publication_date: podcast.publication_date,
            media_type: podcast.media_type,
            description: podcast.description.clone(),
            media_url: podcast.last_episode_media_url.clone(),
            relative_link: podcast.relative_link(),
        }
    }

    /// Project an episode.
    pub fn from_episode(episode: &Episode) -> Self {
        Self {
            podcast_id: episode.podcast_id,
            episode_id: Some(episode.episode_id),
            is_episode: true,
            title: episode.title.clone(),
            publication_date: episode.publication_date,
            media_type: episode.media_type,
            description: episode.description.clone(),
            media_url: episode.media_url.clone(),
            relative_link: episode.relative_link(),
        }
    }

    /// Identifier of the podcast (or the episode's podcast).
    pub fn podcast_id(&self) -> i64 {
        self.podcast_id
    }

    /// Episode identifier, present for episode hits only.
    pub fn episode_id(&self) -> Option<i64> {
        self.episode_id
    }

    /// Whether the hit describes an episode.
    pub fn is_episode(&self) -> bool {
        self.is_episode
    }

    /// Display title.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Publication date, if known.
    pub fn publication_date(&self) -> Option<DateTime<Utc>> {
        self.publication_date
    }

    /// Media kind, if known.
    pub fn media_type(&self) -> Option<MediaType> {
        self.media_type
    }

    /// Description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Playable media URL, if any.
    pub fn media_url(&self) -> Option<&str> {
        self.media_url.as_deref()
    }

    /// Site-relative link to the podcast or episode page.
    pub fn relative_link(&self) -> &str {
        self.relative_link.as_str()
    }
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Hits in repository order.
    pub results: Vec<SearchHit>,
    /// Echo of the requested page.
    pub current_page: u32,
    /// Echo of the requested page size.
    pub results_per_page: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchHitDto {
    podcast_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    episode_id: Option<i64>,
    is_episode: bool,
    title: String,
    publication_date: Option<DateTime<Utc>>,
    media_type: Option<MediaType>,
    description: Option<String>,
    media_url: Option<String>,
    relative_link: String,
}

impl From<SearchHit> for SearchHitDto {
    fn from(value: SearchHit) -> Self {
        Self {
            podcast_id: value.podcast_id,
            episode_id: value.episode_id,
            is_episode: value.is_episode,
            title: value.title,
            publication_date: value.publication_date,
            media_type: value.media_type,
            description: value.description,
            media_url: value.media_url,
            relative_link: value.relative_link,
        }
    }
}

impl TryFrom<SearchHitDto> for SearchHit {
    type Error = SearchHitValidationError;

    fn try_from(value: SearchHitDto) -> Result<Self, Self::Error> {
        if value.is_episode != value.episode_id.is_some() {
            return Err(SearchHitValidationError::ShapeMismatch);
        }
        Ok(Self {
            podcast_id: value.podcast_id,
            episode_id: value.episode_id,
            is_episode: value.is_episode,
            title: value.title,
            publication_date: value.publication_date,
            media_type: value.media_type,
            description: value.description,
            media_url: value.media_url,
            relative_link: value.relative_link,
        })
    }
}
