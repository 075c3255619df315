//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **cache**: in-memory and Redis-backed [`ResponseCache`] adapters
//! - **password**: bcrypt-backed [`PasswordHasher`] adapter
//!
//! Adapters translate between domain types and infrastructure
//! representations. They contain no business logic.
//!
//! [`ResponseCache`]: crate::domain::ports::ResponseCache
//! [`PasswordHasher`]: crate::domain::ports::PasswordHasher

pub mod cache;
pub mod password;
