//! Podcast and episode records as handed over by the persistence layer.
//!
//! These are read models: the persistence collaborator builds them and the
//! services only reshape them (link computation, episode previews).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of media a podcast or episode publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    /// Audio enclosures.
    Audio,
    /// Video enclosures.
    Video,
}

/// A podcast feed listed in the directory.
///
/// `title_in_url` is the URL slug derived from the title. `identifier` is an
/// optional vanity short name which, when set, replaces the numeric path in
/// links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Podcast {
    /// Numeric podcast identifier.
    pub podcast_id: i64,
    /// Optional vanity short name.
    pub identifier: Option<String>,
    /// Podcast title.
    pub title: String,
    /// URL slug of the title.
    pub title_in_url: String,
    /// Publication date of the most recent episode.
    pub publication_date: Option<DateTime<Utc>>,
    /// Media kind of the feed.
    pub media_type: Option<MediaType>,
    /// Feed description.
    pub description: Option<String>,
    /// Media URL of the most recent episode.
    pub last_episode_media_url: Option<String>,
    /// Episodes attached by the query that produced this record.
    #[serde(default)]
    pub episodes: Vec<Episode>,
}

impl Podcast {
    /// Site-relative link to the podcast page.
    ///
    /// # Examples
    /// ```
    /// use podcast_directory::domain::Podcast;
    ///
    /// let podcast = Podcast::new(42, "My cast", "my-cast");
    /// assert_eq!(podcast.relative_link(), "/podcasts/42/my-cast");
    /// ```
    pub fn relative_link(&self) -> String {
        match self.identifier.as_deref().map(str::trim) {
            Some(identifier) if !identifier.is_empty() => format!("/{identifier}"),
            _ => format!("/podcasts/{}/{}", self.podcast_id, self.title_in_url),
        }
    }

    /// Minimal podcast record with no optional data.
    pub fn new(podcast_id: i64, title: impl Into<String>, title_in_url: impl Into<String>) -> Self {
        Self {
            podcast_id,
            identifier: None,
            title: title.into(),
            title_in_url: title_in_url.into(),
            publication_date: None,
            media_type: None,
            description: None,
            last_episode_media_url: None,
            episodes: Vec::new(),
        }
    }

    /// Keep only the first `max` episodes; shorter lists are left alone.
    pub fn truncate_episodes(&mut self, max: usize) {
        self.episodes.truncate(max);
    }
}

/// A single episode of a podcast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    /// Identifier of the owning podcast.
    pub podcast_id: i64,
    /// Episode identifier, unique within the podcast.
    pub episode_id: i64,
    /// Episode title.
    pub title: String,
    /// URL slug of the episode title.
    pub title_in_url: String,
    /// URL slug of the owning podcast.
    pub podcast_title_in_url: String,
    /// Publication date.
    pub publication_date: Option<DateTime<Utc>>,
    /// Media kind of the enclosure.
    pub media_type: Option<MediaType>,
    /// Episode description.
    pub description: Option<String>,
    /// Enclosure URL.
    pub media_url: Option<String>,
}

impl Episode {
    /// Minimal episode record with no optional data.
    pub fn new(
        podcast_id: i64,
        podcast_title_in_url: impl Into<String>,
        episode_id: i64,
        title: impl Into<String>,
        title_in_url: impl Into<String>,
    ) -> Self {
        Self {
            podcast_id,
            episode_id,
            title: title.into(),
            title_in_url: title_in_url.into(),
            podcast_title_in_url: podcast_title_in_url.into(),
            publication_date: None,
            media_type: None,
            description: None,
            media_url: None,
        }
    }

    /// Site-relative link nested under the owning podcast.
    pub fn relative_link(&self) -> String {
        format!(
            "/podcasts/{}/{}/episodes/{}/{}",
            self.podcast_id, self.podcast_title_in_url, self.episode_id, self.title_in_url
        )
    }
}
