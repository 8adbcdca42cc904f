//! Pure state transitions, one sub-tree concern each.
//!
//! Reducers take the state by value and hand the next version back, so a caller
//! chaining several of them always feeds the latest version into the next call.

pub mod chats;
pub mod folders;
pub mod full_info;
pub mod messages;
pub mod tabs;
pub mod threads;
pub mod topics;
