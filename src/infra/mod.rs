//! Infrastructure layer: adapters for config, logging, recorded input, and the
//! outbound stand-ins for network and notification delivery.

pub mod clock;
pub mod config;
pub mod contracts;
pub mod error;
pub mod logging;
pub mod seed;
pub mod stubs;
pub mod update_source;

/// Returns the infra module name for smoke checks.
pub fn module_name() -> &'static str {
    "infra"
}
