//! Podcast directory domain.
//!
//! Purpose: hold the directory's records, the search and account services,
//! and the ports those services depend on. Adapters live in
//! [`crate::outbound`]; wiring lives in [`crate::app`].
//!
//! Public surface:
//! - [`Podcast`], [`Episode`] and [`MediaType`]: directory records.
//! - [`search`]: request normalisation and [`SearchService`].
//! - [`accounts`]: account types and [`AccountService`].
//! - [`ports`]: driving and driven port traits.

pub mod accounts;
mod podcast;
pub mod ports;
pub mod search;

pub use self::accounts::{
    AccountError, AccountService, AccountState, AccountValidationError, Activation,
    CredentialReset, DisplayName, EpisodeVote, Password, PasswordHash, PasswordReset,
    PlaylistMembership, PlaylistName, PodcastVote, Registration, RegistrationToken, Role,
    SubscriptionChange, UserAccount, Username,
};
pub use self::podcast::{Episode, MediaType, Podcast};
pub use self::search::{
    OrderBy, SearchError, SearchHit, SearchMode, SearchQuery, SearchRequest, SearchResult,
    SearchService, SearchTarget,
};
