//! Failures surfaced by the account and subscription service.

use thiserror::Error;

use crate::domain::ports::{PasswordHashError, ResponseCacheError, UserPersistenceError};

/// Errors returned by the account driving ports.
///
/// Collaborator errors are wrapped as-is so callers can still tell a missing
/// record from a constraint violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    /// The user repository failed.
    #[error(transparent)]
    Repository(#[from] UserPersistenceError),
    /// The password hasher failed.
    #[error(transparent)]
    PasswordHash(#[from] PasswordHashError),
    /// Evicting a stale cache entry failed after the mutation was stored.
    #[error(transparent)]
    Cache(#[from] ResponseCacheError),
}
