//! Port for the one-way password transform applied before credentials are
//! stored.
//!
//! Hashing is CPU-bound. Adapters must keep it off the async worker threads.

use async_trait::async_trait;

use crate::domain::{Password, PasswordHash};

use super::define_port_error;

define_port_error! {
    /// Errors raised by password hashing adapters.
    pub enum PasswordHashError {
        /// The adapter was configured with parameters it cannot use.
        Configuration { message: String } => "password hasher misconfigured: {message}",
        /// Hashing the supplied password failed.
        Hashing { message: String } => "password hashing failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Produce the opaque credential stored in place of `password`.
    async fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordHashError>;
}
