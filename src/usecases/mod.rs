//! Use case layer: update dispatch, the store that commits its results, and the
//! workflows built on top of them.

pub mod apply_update;
pub mod bootstrap;
pub mod context;
pub mod contracts;
pub mod replay;
pub mod scheduler;
pub mod store;
pub mod tab_actions;
pub mod update_loop;

/// Returns the usecases module name for smoke checks.
pub fn module_name() -> &'static str {
    "usecases"
}
