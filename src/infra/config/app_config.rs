use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::ids::UserId;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub state: StateConfig,
    pub replay: ReplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    /// Write logs to this file instead of stderr.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StateConfig {
    pub max_active_pinned_chats: usize,
    pub typing_status_clear_delay_ms: u64,
    /// Overrides the local user id stored in a seed state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_user_id: Option<UserId>,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            max_active_pinned_chats: 5,
            typing_status_clear_delay_ms: 6_000,
            current_user_id: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ReplayConfig {
    pub settle_timers: bool,
}
