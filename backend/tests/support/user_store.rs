//! In-memory `UserRepository` for service-level integration tests.

use std::collections::{BTreeSet, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use podcast_directory::domain::ports::{UserPersistenceError, UserRepository};
use podcast_directory::domain::{
    Activation, CredentialReset, Episode, EpisodeVote, PlaylistMembership, PlaylistName, Podcast,
    PodcastVote, SubscriptionChange, UserAccount, Username,
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Subscription {
    username: Username,
    podcast_id: i64,
    playlist: Option<PlaylistName>,
}

#[derive(Default)]
struct State {
    users: HashMap<Username, UserAccount>,
    catalogue: Vec<Podcast>,
    subscriptions: Vec<Subscription>,
    podcast_votes: Vec<PodcastVote>,
    episode_votes: Vec<EpisodeVote>,
}

/// User store keeping accounts and relations in process memory.
///
/// Activations only apply when the presented token matches the stored one,
/// mirroring a conditional `UPDATE`.
#[derive(Default)]
pub struct InMemoryUserRepository {
    state: Mutex<State>,
    subscription_reads: AtomicUsize,
}

impl InMemoryUserRepository {
    /// Repository whose catalogue holds `podcasts`.
    pub fn with_catalogue(podcasts: Vec<Podcast>) -> Self {
        let repo = Self::default();
        repo.lock().catalogue = podcasts;
        repo
    }

    /// Stored account for `username`.
    pub fn account(&self, username: &Username) -> Option<UserAccount> {
        self.lock().users.get(username).cloned()
    }

    /// Number of times the subscription list was read from the store.
    pub fn subscription_reads(&self) -> usize {
        self.subscription_reads.load(Ordering::SeqCst)
    }

    /// Podcast votes recorded so far.
    pub fn podcast_votes(&self) -> Vec<PodcastVote> {
        self.lock().podcast_votes.clone()
    }

    /// Episode votes recorded so far.
    pub fn episode_votes(&self) -> Vec<EpisodeVote> {
        self.lock().episode_votes.clone()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("user store mutex")
    }
}

impl State {
    fn subscribed_podcasts(
        &self,
        username: &Username,
        playlist: Option<&PlaylistName>,
    ) -> Vec<Podcast> {
        let ids: BTreeSet<i64> = self
            .subscriptions
            .iter()
            .filter(|sub| &sub.username == username)
            .filter(|sub| playlist.is_none() || sub.playlist.as_ref() == playlist)
            .map(|sub| sub.podcast_id)
            .collect();
        self.catalogue
            .iter()
            .filter(|podcast| ids.contains(&podcast.podcast_id))
            .cloned()
            .collect()
    }

    fn account_mut(
        &mut self,
        username: &Username,
    ) -> Result<&mut UserAccount, UserPersistenceError> {
        self.users
            .get_mut(username)
            .ok_or_else(|| UserPersistenceError::not_found(username.to_string()))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn add_user(&self, account: &UserAccount) -> Result<(), UserPersistenceError> {
        let mut state = self.lock();
        if state.users.contains_key(&account.username) {
            return Err(UserPersistenceError::constraint(format!(
                "duplicate username {}",
                account.username
            )));
        }
        state
            .users
            .insert(account.username.clone(), account.clone());
        Ok(())
    }

    async fn update_for_password_reset(
        &self,
        reset: &CredentialReset,
    ) -> Result<(), UserPersistenceError> {
        let mut state = self.lock();
        let account = state.account_mut(&reset.username)?;
        account.password_hash = reset.password_hash.clone();
        account.registration_token = reset.registration_token.clone();
        account.state = reset.state;
        Ok(())
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<UserAccount>, UserPersistenceError> {
        Ok(self.account(username))
    }

    async fn add_user_role(&self, activation: &Activation) -> Result<(), UserPersistenceError> {
        let mut state = self.lock();
        let account = state.account_mut(&activation.username)?;
        if account.registration_token == activation.registration_token {
            account.role = activation.role;
        }
        Ok(())
    }

    async fn enable_user(&self, activation: &Activation) -> Result<(), UserPersistenceError> {
        let mut state = self.lock();
        let account = state.account_mut(&activation.username)?;
        if account.registration_token == activation.registration_token {
            account.state = activation.state;
        }
        Ok(())
    }

    async fn subscribe(&self, change: &SubscriptionChange) -> Result<(), UserPersistenceError> {
        let subscription = Subscription {
            username: change.username.clone(),
            podcast_id: change.podcast_id,
            playlist: change.playlist.clone(),
        };
        let mut state = self.lock();
        if !state.subscriptions.contains(&subscription) {
            state.subscriptions.push(subscription);
        }
        Ok(())
    }

    async fn unsubscribe(
        &self,
        username: &Username,
        podcast_id: i64,
    ) -> Result<(), UserPersistenceError> {
        self.lock()
            .subscriptions
            .retain(|sub| !(&sub.username == username && sub.podcast_id == podcast_id));
        Ok(())
    }

    async fn remove_from_playlist(
        &self,
        membership: &PlaylistMembership,
    ) -> Result<(), UserPersistenceError> {
        self.lock().subscriptions.retain(|sub| {
            !(sub.username == membership.username
                && sub.podcast_id == membership.podcast_id
                && sub.playlist.as_ref() == Some(&membership.playlist))
        });
        Ok(())
    }

    async fn add_podcast_vote(&self, vote: &PodcastVote) -> Result<(), UserPersistenceError> {
        self.lock().podcast_votes.push(vote.clone());
        Ok(())
    }

    async fn add_episode_vote(&self, vote: &EpisodeVote) -> Result<(), UserPersistenceError> {
        self.lock().episode_votes.push(vote.clone());
        Ok(())
    }

    async fn subscriptions(
        &self,
        username: &Username,
    ) -> Result<Vec<Podcast>, UserPersistenceError> {
        self.subscription_reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.lock().subscribed_podcasts(username, None))
    }

    async fn podcasts_for_playlist(
        &self,
        username: &Username,
        playlist: &PlaylistName,
    ) -> Result<Vec<Podcast>, UserPersistenceError> {
        Ok(self.lock().subscribed_podcasts(username, Some(playlist)))
    }

    async fn latest_episodes_from_subscriptions(
        &self,
        username: &Username,
    ) -> Result<Vec<Episode>, UserPersistenceError> {
        let mut episodes: Vec<Episode> = self
            .lock()
            .subscribed_podcasts(username, None)
            .into_iter()
            .flat_map(|podcast| podcast.episodes)
            .collect();
        episodes.sort_by(|a, b| b.publication_date.cmp(&a.publication_date));
        Ok(episodes)
    }

    async fn playlist_names(
        &self,
        username: &Username,
    ) -> Result<Vec<PlaylistName>, UserPersistenceError> {
        let names: BTreeSet<String> = self
            .lock()
            .subscriptions
            .iter()
            .filter(|sub| &sub.username == username)
            .filter_map(|sub| sub.playlist.clone())
            .map(String::from)
            .collect();
        Ok(names
            .into_iter()
            .map(|name| PlaylistName::new(name).expect("stored playlist names are valid"))
            .collect())
    }
}
