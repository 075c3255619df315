//! Port abstraction for account and subscription persistence.
//!
//! Every call takes a flat parameter bundle and maps onto a single
//! statement in the backing store. Token checks (an activation only applies
//! when the stored registration token matches) are the adapter's job.
use async_trait::async_trait;

use crate::domain::{
    Activation, CredentialReset, Episode, EpisodeVote, PlaylistMembership, PlaylistName, Podcast,
    PodcastVote, SubscriptionChange, UserAccount, Username,
};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// A uniqueness or foreign-key constraint rejected the mutation.
        Constraint { message: String } => "user repository constraint violated: {message}",
        /// The targeted user or relation does not exist.
        NotFound { message: String } => "user repository record not found: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a newly registered account.
    async fn add_user(&self, account: &UserAccount) -> Result<(), UserPersistenceError>;

    /// Store a new password hash and registration token, disabling the account.
    async fn update_for_password_reset(
        &self,
        reset: &CredentialReset,
    ) -> Result<(), UserPersistenceError>;

    /// Fetch an account by username.
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<UserAccount>, UserPersistenceError>;

    /// Grant the activation's role to the user.
    async fn add_user_role(&self, activation: &Activation) -> Result<(), UserPersistenceError>;

    /// Apply the activation's state when its token matches the stored one.
    async fn enable_user(&self, activation: &Activation) -> Result<(), UserPersistenceError>;

    /// Add a podcast to the user's subscriptions, optionally inside a playlist.
    async fn subscribe(&self, change: &SubscriptionChange) -> Result<(), UserPersistenceError>;

    /// Remove a podcast from the user's subscriptions.
    async fn unsubscribe(
        &self,
        username: &Username,
        podcast_id: i64,
    ) -> Result<(), UserPersistenceError>;

    /// Remove a podcast from one of the user's playlists.
    async fn remove_from_playlist(
        &self,
        membership: &PlaylistMembership,
    ) -> Result<(), UserPersistenceError>;

    /// Append a podcast vote.
    async fn add_podcast_vote(&self, vote: &PodcastVote) -> Result<(), UserPersistenceError>;

    /// Append an episode vote.
    async fn add_episode_vote(&self, vote: &EpisodeVote) -> Result<(), UserPersistenceError>;

    /// Subscribed podcasts, each with its episodes newest first.
    async fn subscriptions(&self, username: &Username)
    -> Result<Vec<Podcast>, UserPersistenceError>;

    /// Podcasts inside one playlist, each with its episodes newest first.
    async fn podcasts_for_playlist(
        &self,
        username: &Username,
        playlist: &PlaylistName,
    ) -> Result<Vec<Podcast>, UserPersistenceError>;

    /// Most recent episodes across every subscribed podcast.
    async fn latest_episodes_from_subscriptions(
        &self,
        username: &Username,
    ) -> Result<Vec<Episode>, UserPersistenceError>;

    /// Distinct playlist names defined by the user.
    async fn playlist_names(
        &self,
        username: &Username,
    ) -> Result<Vec<PlaylistName>, UserPersistenceError>;
}

/// Stateless user repository used until persistence is wired.
///
/// Mutations succeed without storing anything and every lookup comes back
/// empty, so no username is ever reported as taken.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserRepository;

#[async_trait]
impl UserRepository for FixtureUserRepository {
    async fn add_user(&self, _account: &UserAccount) -> Result<(), UserPersistenceError> {
        Ok(())
    }

    async fn update_for_password_reset(
        &self,
        _reset: &CredentialReset,
    ) -> Result<(), UserPersistenceError> {
        Ok(())
    }

    async fn find_by_username(
        &self,
        _username: &Username,
    ) -> Result<Option<UserAccount>, UserPersistenceError> {
        Ok(None)
    }

    async fn add_user_role(&self, _activation: &Activation) -> Result<(), UserPersistenceError> {
        Ok(())
    }

    async fn enable_user(&self, _activation: &Activation) -> Result<(), UserPersistenceError> {
        Ok(())
    }

    async fn subscribe(&self, _change: &SubscriptionChange) -> Result<(), UserPersistenceError> {
        Ok(())
    }

    async fn unsubscribe(
        &self,
        _username: &Username,
        _podcast_id: i64,
    ) -> Result<(), UserPersistenceError> {
        Ok(())
    }

    async fn remove_from_playlist(
        &self,
        _membership: &PlaylistMembership,
    ) -> Result<(), UserPersistenceError> {
        Ok(())
    }

    async fn add_podcast_vote(&self, _vote: &PodcastVote) -> Result<(), UserPersistenceError> {
        Ok(())
    }

    async fn add_episode_vote(&self, _vote: &EpisodeVote) -> Result<(), UserPersistenceError> {
        Ok(())
    }

    async fn subscriptions(
        &self,
        _username: &Username,
    ) -> Result<Vec<Podcast>, UserPersistenceError> {
        Ok(Vec::new())
    }

    async fn podcasts_for_playlist(
        &self,
        _username: &Username,
        _playlist: &PlaylistName,
    ) -> Result<Vec<Podcast>, UserPersistenceError> {
        Ok(Vec::new())
    }

    async fn latest_episodes_from_subscriptions(
        &self,
        _username: &Username,
    ) -> Result<Vec<Episode>, UserPersistenceError> {
        Ok(Vec::new())
    }

    async fn playlist_names(
        &self,
        _username: &Username,
    ) -> Result<Vec<PlaylistName>, UserPersistenceError> {
        Ok(Vec::new())
    }
}
