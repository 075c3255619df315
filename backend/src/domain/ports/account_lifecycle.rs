//! Driving port for account registration and activation.

use async_trait::async_trait;

use crate::domain::{
    AccountError, PasswordReset, Registration, RegistrationToken, UserAccount, Username,
};

/// Domain use-case port covering the account lifecycle.
///
/// Accounts start out not-yet-enabled and become enabled once the user
/// confirms the registration token sent by e-mail. A password reset puts the
/// account back into the not-yet-enabled state with a fresh token.
#[async_trait]
pub trait AccountLifecycle: Send + Sync {
    /// Create a new, not-yet-enabled account and return what was stored.
    async fn register(&self, registration: Registration) -> Result<UserAccount, AccountError>;

    /// Replace the password, disable the account and return the new token.
    async fn request_password_reset(
        &self,
        reset: PasswordReset,
    ) -> Result<RegistrationToken, AccountError>;

    /// Whether an account already exists for `username`.
    async fn is_existing_user(&self, username: &Username) -> Result<bool, AccountError>;

    /// Confirm a registration: grant the user role and enable the account.
    async fn enable_after_registration(
        &self,
        username: &Username,
        token: &RegistrationToken,
    ) -> Result<(), AccountError>;

    /// Confirm a password reset: enable the account, leaving its role alone.
    async fn enable_after_password_reset(
        &self,
        username: &Username,
        token: &RegistrationToken,
    ) -> Result<(), AccountError>;
}
