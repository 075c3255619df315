//! Application wiring: configuration, telemetry and service assembly.

pub mod config;
pub mod state;
pub mod telemetry;

pub use config::CoreSettings;
pub use state::{BootstrapError, CoreServices, build_services};
pub use telemetry::init_tracing;
