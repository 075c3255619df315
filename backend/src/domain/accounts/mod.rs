//! User accounts, subscriptions, playlists and votes.
//!
//! [`AccountService`] implements both account driving ports. It owns no
//! persistence logic of its own: each operation delegates to the
//! [`UserRepository`](crate::domain::ports::UserRepository) and keeps the
//! response cache consistent with the change.

mod error;
mod model;
mod service;

pub use error::AccountError;
pub use model::{
    AccountState, AccountValidationError, Activation, CredentialReset, DisplayName, EpisodeVote,
    Password, PasswordHash, PasswordReset, PlaylistMembership, PlaylistName, PodcastVote,
    Registration, RegistrationToken, Role, SubscriptionChange, UserAccount, Username,
};
pub use service::{AccountService, PREVIEW_EPISODES};
