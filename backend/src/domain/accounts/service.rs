//! Account service implementing the [`AccountLifecycle`] and
//! [`Subscriptions`] driving ports.
//!
//! Every operation is a single delegated step. The only state the service
//! touches itself is the response cache: the cached subscription list is
//! evicted whenever the subscription relation changes, and vote-bearing
//! podcast/episode aggregates are evicted whenever a vote is recorded.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info, warn};

use crate::domain::ports::{
    AccountLifecycle, CacheKey, PasswordHasher, ResponseCache, Subscriptions, UserRepository,
};
use crate::domain::{
    AccountError, AccountState, Activation, CredentialReset, DisplayName, Episode, EpisodeVote,
    PasswordReset, PlaylistMembership, PlaylistName, Podcast, PodcastVote, Registration,
    RegistrationToken, Role, SubscriptionChange, UserAccount, Username,
};

/// Number of episodes kept per podcast in subscription and playlist views.
pub const PREVIEW_EPISODES: usize = 3;

/// Account and subscription service.
#[derive(Clone)]
pub struct AccountService<R> {
    repository: Arc<R>,
    cache: Arc<dyn ResponseCache>,
    hasher: Arc<dyn PasswordHasher>,
    clock: Arc<dyn Clock>,
}

impl<R> AccountService<R> {
    /// Create a new service with its collaborators.
    pub fn new(
        repository: Arc<R>,
        cache: Arc<dyn ResponseCache>,
        hasher: Arc<dyn PasswordHasher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            cache,
            hasher,
            clock,
        }
    }
}

impl<R> AccountService<R>
where
    R: UserRepository,
{
    async fn evict(&self, key: &CacheKey) -> Result<(), AccountError> {
        self.cache.evict(key).await?;
        debug!(cache_key = %key, "cache entry evicted");
        Ok(())
    }

    async fn cached_subscriptions(&self, key: &CacheKey) -> Option<Vec<Podcast>> {
        let value = match self.cache.get(key).await {
            Ok(value) => value?,
            Err(err) => {
                warn!(cache_key = %key, error = %err, "subscription cache read failed");
                return None;
            }
        };
        match serde_json::from_value(value) {
            Ok(podcasts) => Some(podcasts),
            Err(err) => {
                warn!(cache_key = %key, error = %err, "discarding undecodable cached subscriptions");
                None
            }
        }
    }

    async fn store_subscriptions(&self, key: &CacheKey, podcasts: &[Podcast]) {
        let value = match serde_json::to_value(podcasts) {
            Ok(value) => value,
            Err(err) => {
                warn!(cache_key = %key, error = %err, "subscriptions not cacheable");
                return;
            }
        };
        if let Err(err) = self.cache.put(key, &value).await {
            warn!(cache_key = %key, error = %err, "subscription cache write failed");
        }
    }

    fn activation(
        username: &Username,
        token: &RegistrationToken,
        role: Option<Role>,
    ) -> Activation {
        Activation {
            username: username.clone(),
            state: AccountState::Enabled,
            role,
            registration_token: token.clone(),
        }
    }
}

fn with_episode_previews(mut podcasts: Vec<Podcast>) -> Vec<Podcast> {
    for podcast in &mut podcasts {
        podcast.truncate_episodes(PREVIEW_EPISODES);
    }
    podcasts
}

#[async_trait]
impl<R> AccountLifecycle for AccountService<R>
where
    R: UserRepository,
{
    async fn register(&self, registration: Registration) -> Result<UserAccount, AccountError> {
        let Registration {
            username,
            password,
            display_name,
            registration_token,
        } = registration;

        let account = UserAccount {
            display_name: display_name.unwrap_or_else(|| DisplayName::from(username.clone())),
            password_hash: self.hasher.hash(&password).await?,
            state: AccountState::NotYetEnabled,
            role: None,
            registration_token: registration_token.unwrap_or_else(RegistrationToken::random),
            registered_at: Some(self.clock.utc()),
            username,
        };

        self.repository.add_user(&account).await?;
        info!(username = %account.username, "user registered");
        Ok(account)
    }

    async fn request_password_reset(
        &self,
        reset: PasswordReset,
    ) -> Result<RegistrationToken, AccountError> {
        let credentials = CredentialReset {
            password_hash: self.hasher.hash(&reset.new_password).await?,
            registration_token: RegistrationToken::random(),
            state: AccountState::NotYetEnabled,
            username: reset.username,
        };

        self.repository
            .update_for_password_reset(&credentials)
            .await?;
        info!(username = %credentials.username, "password reset requested");
        Ok(credentials.registration_token)
    }

    async fn is_existing_user(&self, username: &Username) -> Result<bool, AccountError> {
        let account = self.repository.find_by_username(username).await?;
        Ok(account.is_some())
    }

    async fn enable_after_registration(
        &self,
        username: &Username,
        token: &RegistrationToken,
    ) -> Result<(), AccountError> {
        let activation = Self::activation(username, token, Some(Role::User));

        self.repository.add_user_role(&activation).await?;
        self.repository.enable_user(&activation).await?;
        info!(username = %username, "account enabled after registration");
        Ok(())
    }

    async fn enable_after_password_reset(
        &self,
        username: &Username,
        token: &RegistrationToken,
    ) -> Result<(), AccountError> {
        let activation = Self::activation(username, token, None);

        self.repository.enable_user(&activation).await?;
        info!(username = %username, "account enabled after password reset");
        Ok(())
    }
}

#[async_trait]
impl<R> Subscriptions for AccountService<R>
where
    R: UserRepository,
{
    async fn subscribe(
        &self,
        username: &Username,
        podcast_id: i64,
        playlist: Option<PlaylistName>,
    ) -> Result<(), AccountError> {
        let change = SubscriptionChange {
            username: username.clone(),
            podcast_id,
            playlist,
        };

        self.repository.subscribe(&change).await?;
        self.evict(&CacheKey::subscriptions(username)).await
    }

    async fn unsubscribe(
        &self,
        username: &Username,
        podcast_id: i64,
    ) -> Result<(), AccountError> {
        self.repository.unsubscribe(username, podcast_id).await?;
        self.evict(&CacheKey::subscriptions(username)).await
    }

    async fn remove_from_playlist(
        &self,
        username: &Username,
        podcast_id: i64,
        playlist: &PlaylistName,
    ) -> Result<(), AccountError> {
        let membership = PlaylistMembership {
            username: username.clone(),
            podcast_id,
            playlist: playlist.clone(),
        };

        self.repository.remove_from_playlist(&membership).await?;
        self.evict(&CacheKey::subscriptions(username)).await
    }

    async fn vote_podcast(
        &self,
        username: &Username,
        podcast_id: i64,
        vote: i32,
    ) -> Result<(), AccountError> {
        let podcast_vote = PodcastVote {
            username: username.clone(),
            podcast_id,
            vote,
        };

        self.repository.add_podcast_vote(&podcast_vote).await?;
        self.evict(&CacheKey::podcast(podcast_id)).await
    }

    async fn vote_episode(
        &self,
        username: &Username,
        podcast_id: i64,
        episode_id: i64,
        vote: i32,
    ) -> Result<(), AccountError> {
        let episode_vote = EpisodeVote {
            username: username.clone(),
            podcast_id,
            episode_id,
            vote,
        };

        self.repository.add_episode_vote(&episode_vote).await?;
        self.evict(&CacheKey::episode(podcast_id, episode_id)).await
    }

    async fn subscriptions(&self, username: &Username) -> Result<Vec<Podcast>, AccountError> {
        let key = CacheKey::subscriptions(username);
        if let Some(podcasts) = self.cached_subscriptions(&key).await {
            return Ok(podcasts);
        }

        let podcasts = with_episode_previews(self.repository.subscriptions(username).await?);
        self.store_subscriptions(&key, &podcasts).await;
        Ok(podcasts)
    }

    async fn podcasts_for_playlist(
        &self,
        username: &Username,
        playlist: &PlaylistName,
    ) -> Result<Vec<Podcast>, AccountError> {
        let podcasts = self
            .repository
            .podcasts_for_playlist(username, playlist)
            .await?;
        Ok(with_episode_previews(podcasts))
    }

    async fn latest_episodes_from_subscriptions(
        &self,
        username: &Username,
    ) -> Result<Vec<Episode>, AccountError> {
        Ok(self
            .repository
            .latest_episodes_from_subscriptions(username)
            .await?)
    }

    async fn playlist_names(
        &self,
        username: &Username,
    ) -> Result<Vec<PlaylistName>, AccountError> {
        Ok(self.repository.playlist_names(username).await?)
    }
}
