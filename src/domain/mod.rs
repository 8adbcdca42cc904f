//! Domain layer: the state tree, its entities and the update wire contract.

pub mod chat;
pub mod effects;
pub mod folder;
pub mod full_info;
pub mod global_state;
pub mod ids;
pub mod message;
pub mod tab;
pub mod thread;
pub mod topic;
pub mod update;
pub mod user;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
