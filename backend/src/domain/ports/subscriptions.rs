//! Driving port for subscriptions, playlists and votes.

use async_trait::async_trait;

use crate::domain::{AccountError, Episode, PlaylistName, Podcast, Username};

/// Domain use-case port for a user's podcast subscriptions.
#[async_trait]
pub trait Subscriptions: Send + Sync {
    /// Subscribe to a podcast, optionally filing it under a playlist.
    async fn subscribe(
        &self,
        username: &Username,
        podcast_id: i64,
        playlist: Option<PlaylistName>,
    ) -> Result<(), AccountError>;

    /// Drop a podcast subscription.
    async fn unsubscribe(&self, username: &Username, podcast_id: i64)
    -> Result<(), AccountError>;

    /// Take a podcast out of one playlist while keeping the subscription.
    async fn remove_from_playlist(
        &self,
        username: &Username,
        podcast_id: i64,
        playlist: &PlaylistName,
    ) -> Result<(), AccountError>;

    /// Record a vote on a podcast.
    async fn vote_podcast(
        &self,
        username: &Username,
        podcast_id: i64,
        vote: i32,
    ) -> Result<(), AccountError>;

    /// Record a vote on a single episode.
    async fn vote_episode(
        &self,
        username: &Username,
        podcast_id: i64,
        episode_id: i64,
        vote: i32,
    ) -> Result<(), AccountError>;

    /// Subscribed podcasts with at most three preview episodes each.
    async fn subscriptions(&self, username: &Username) -> Result<Vec<Podcast>, AccountError>;

    /// Podcasts in a playlist with at most three preview episodes each.
    async fn podcasts_for_playlist(
        &self,
        username: &Username,
        playlist: &PlaylistName,
    ) -> Result<Vec<Podcast>, AccountError>;

    /// Most recent episodes across all subscriptions.
    async fn latest_episodes_from_subscriptions(
        &self,
        username: &Username,
    ) -> Result<Vec<Episode>, AccountError>;

    /// Names of the playlists the user has created.
    async fn playlist_names(&self, username: &Username)
    -> Result<Vec<PlaylistName>, AccountError>;
}
