use tracing_appender::non_blocking::WorkerGuard;

use crate::{infra::config::AppConfig, usecases::apply_update::DispatcherConfig};

#[derive(Debug)]
pub struct AppContext {
    pub config: AppConfig,
    pub config_source: String,
    /// Keeps the file log writer flushing until the context is dropped.
    _log_guard: Option<WorkerGuard>,
}

impl AppContext {
    pub fn new(config: AppConfig, config_source: String) -> Self {
        Self {
            config,
            config_source,
            _log_guard: None,
        }
    }

    pub fn with_log_guard(mut self, guard: Option<WorkerGuard>) -> Self {
        self._log_guard = guard;
        self
    }

    pub fn dispatcher_config(&self) -> DispatcherConfig {
        DispatcherConfig {
            max_active_pinned_chats: self.config.state.max_active_pinned_chats,
            typing_status_clear_delay_ms: self.config.state.typing_status_clear_delay_ms,
        }
    }
}
