//! Search and subscription services for a podcast directory.
//!
//! - [`domain`]: records, services and ports.
//! - [`outbound`]: cache and password-hashing adapters.
//! - [`app`]: configuration, telemetry and service wiring.

pub mod app;
pub mod domain;
pub mod outbound;
