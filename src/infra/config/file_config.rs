use std::{num::NonZeroUsize, path::PathBuf};

use serde::Deserialize;

use crate::{
    domain::ids::UserId,
    infra::config::{AppConfig, LogConfig, ReplayConfig, StateConfig},
};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub state: Option<FileStateConfig>,
    pub replay: Option<FileReplayConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(state) = self.state {
            state.merge_into(&mut config.state);
        }

        if let Some(replay) = self.replay {
            replay.merge_into(&mut config.replay);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }

        if self.file.is_some() {
            config.file = self.file;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileStateConfig {
    pub max_active_pinned_chats: Option<NonZeroUsize>,
    pub typing_status_clear_delay_ms: Option<u64>,
    pub current_user_id: Option<UserId>,
}

impl FileStateConfig {
    fn merge_into(self, config: &mut StateConfig) {
        if let Some(max_active_pinned_chats) = self.max_active_pinned_chats {
            config.max_active_pinned_chats = max_active_pinned_chats.get();
        }

        if let Some(delay_ms) = self.typing_status_clear_delay_ms {
            config.typing_status_clear_delay_ms = delay_ms;
        }

        if self.current_user_id.is_some() {
            config.current_user_id = self.current_user_id;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileReplayConfig {
    pub settle_timers: Option<bool>,
}

impl FileReplayConfig {
    fn merge_into(self, config: &mut ReplayConfig) {
        if let Some(settle_timers) = self.settle_timers {
            config.settle_timers = settle_timers;
        }
    }
}
