//! State layer: selectors and reducers over the state tree.

pub mod reducers;
pub mod selectors;

/// Returns the state module name for smoke checks.
pub fn module_name() -> &'static str {
    "state"
}
