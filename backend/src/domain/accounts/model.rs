//! Account, subscription and vote types.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use zeroize::Zeroizing;

/// Validation errors returned by the account newtype constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountValidationError {
    /// Username was missing or blank once trimmed.
    #[error("username must not be empty")]
    EmptyUsername,
    /// Password was empty.
    #[error("password must not be empty")]
    EmptyPassword,
    /// Display name was blank once trimmed.
    #[error("display name must not be empty")]
    EmptyDisplayName,
    /// Playlist name was blank once trimmed.
    #[error("playlist name must not be empty")]
    EmptyPlaylistName,
    /// Registration token was blank once trimmed.
    #[error("registration token must not be empty")]
    EmptyRegistrationToken,
}

macro_rules! trimmed_string_newtype {
    ($(#[$meta:meta])* $name:ident, $error:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Validate and construct the value, trimming surrounding whitespace.
            pub fn new(value: impl AsRef<str>) -> Result<Self, AccountValidationError> {
                let trimmed = value.as_ref().trim();
                if trimmed.is_empty() {
                    return Err(AccountValidationError::$error);
                }
                Ok(Self(trimmed.to_owned()))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_ref())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = AccountValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

trimmed_string_newtype!(
    /// Login name of an account; the e-mail address used at registration.
    Username,
    EmptyUsername
);

trimmed_string_newtype!(
    /// Name shown to other users.
    DisplayName,
    EmptyDisplayName
);

trimmed_string_newtype!(
    /// Label of a user-defined playlist.
    PlaylistName,
    EmptyPlaylistName
);

trimmed_string_newtype!(
    /// Opaque one-time credential e-mailed to confirm an account action.
    RegistrationToken,
    EmptyRegistrationToken
);

impl RegistrationToken {
    /// Issue a fresh random token.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl From<Username> for DisplayName {
    fn from(value: Username) -> Self {
        Self(value.0)
    }
}

/// Plaintext password supplied by the user.
///
/// The buffer is wiped on drop and never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Wrap a non-empty password. Whitespace is kept as typed.
    pub fn new(value: impl Into<String>) -> Result<Self, AccountValidationError> {
        let value = Zeroizing::new(value.into());
        if value.is_empty() {
            return Err(AccountValidationError::EmptyPassword);
        }
        Ok(Self(value))
    }

    /// Plaintext for the hashing adapter.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Stored one-way credential produced by a password hasher.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap an encoded hash string.
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Encoded hash as stored by the repository.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

/// Whether an account may sign in.
///
/// Persisted as a small integer: `0` for not-yet-enabled, `1` for enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountState {
    /// Waiting for token confirmation.
    NotYetEnabled,
    /// Confirmed and active.
    Enabled,
}

impl AccountState {
    /// Integer flag used by the persistence layer.
    pub fn as_flag(self) -> i16 {
        match self {
            Self::NotYetEnabled => 0,
            Self::Enabled => 1,
        }
    }

    /// Decode a persisted flag; unknown values read as not-yet-enabled.
    pub fn from_flag(flag: i16) -> Self {
        if flag == 1 {
            Self::Enabled
        } else {
            Self::NotYetEnabled
        }
    }
}

/// Authorisation role granted on activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Regular signed-in user.
    #[serde(rename = "ROLE_USER")]
    User,
}

impl Role {
    /// Role name as stored by the persistence layer.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "ROLE_USER",
        }
    }
}

/// Account record exchanged with the user repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    /// Login name.
    pub username: Username,
    /// Stored password hash.
    pub password_hash: PasswordHash,
    /// Name shown to other users.
    pub display_name: DisplayName,
    /// Enablement state.
    pub state: AccountState,
    /// Granted role, once activated.
    pub role: Option<Role>,
    /// Token the next activation must present.
    pub registration_token: RegistrationToken,
    /// When the account was registered.
    pub registered_at: Option<DateTime<Utc>>,
}

/// Sign-up form data.
#[derive(Debug, Clone)]
pub struct Registration {
    /// Requested login name.
    pub username: Username,
    /// Chosen password.
    pub password: Password,
    /// Optional display name; defaults to the username.
    pub display_name: Option<DisplayName>,
    /// Token chosen by the caller; a random one is issued when absent.
    pub registration_token: Option<RegistrationToken>,
}

/// Password-forgotten form data.
#[derive(Debug, Clone)]
pub struct PasswordReset {
    /// Account whose password changes.
    pub username: Username,
    /// Replacement password.
    pub new_password: Password,
}

/// Parameters persisted when a password reset is requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialReset {
    /// Account whose password changes.
    pub username: Username,
    /// Hash of the replacement password.
    pub password_hash: PasswordHash,
    /// Freshly issued confirmation token.
    pub registration_token: RegistrationToken,
    /// Always [`AccountState::NotYetEnabled`].
    pub state: AccountState,
}

/// Parameters persisted when an account is confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    /// Account being confirmed.
    pub username: Username,
    /// Target state.
    pub state: AccountState,
    /// Role to grant, if any.
    pub role: Option<Role>,
    /// Token presented by the user.
    pub registration_token: RegistrationToken,
}

/// Parameters for a new subscription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionChange {
    /// Subscriber.
    pub username: Username,
    /// Podcast subscribed to.
    pub podcast_id: i64,
    /// Playlist to file the podcast under.
    pub playlist: Option<PlaylistName>,
}

/// Parameters identifying a podcast inside a playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistMembership {
    /// Playlist owner.
    pub username: Username,
    /// Podcast in the playlist.
    pub podcast_id: i64,
    /// Playlist label.
    pub playlist: PlaylistName,
}

/// Vote cast on a podcast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodcastVote {
    /// Voter.
    pub username: Username,
    /// Podcast voted on.
    pub podcast_id: i64,
    /// Vote value, e.g. `1` or `-1`.
    pub vote: i32,
}

/// Vote cast on an episode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeVote {
    /// Voter.
    pub username: Username,
    /// Owning podcast.
    pub podcast_id: i64,
    /// Episode voted on.
    pub episode_id: i64,
    /// Vote value, e.g. `1` or `-1`.
    pub vote: i32,
}
