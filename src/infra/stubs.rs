use anyhow::Result;

use crate::{
    domain::effects::{ActionIntent, Notification},
    usecases::contracts::{ActionSink, Notifier},
};

#[cfg(test)]
use crate::infra::{config::AppConfig, contracts::ConfigAdapter};

#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct StubConfigAdapter;

#[cfg(test)]
impl ConfigAdapter for StubConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        Ok(AppConfig::default())
    }

    fn describe_source(&self) -> String {
        "defaults".to_owned()
    }
}

/// Stands in for the network layer: records the intent in the log and counts it.
#[derive(Debug, Clone, Default)]
pub struct LoggingActionSink {
    pub requested: usize,
}

impl ActionSink for LoggingActionSink {
    fn request(&mut self, intent: &ActionIntent) -> Result<()> {
        self.requested += 1;
        tracing::info!(intent = intent.name(), detail = ?intent, "action requested");
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoggingNotifier {
    pub delivered: usize,
}

impl Notifier for LoggingNotifier {
    fn notify(&mut self, notification: &Notification) -> Result<()> {
        self.delivered += 1;
        match notification {
            Notification::AboutMessage { chat, message } => tracing::info!(
                chat_id = chat.id,
                chat_title = %chat.title,
                message_id = message.id,
                content = message.display_content(),
                "message notification"
            ),
            Notification::CloseMessageNotifications {
                chat_id,
                last_read_inbox_message_id,
            } => tracing::info!(
                chat_id,
                last_read_inbox_message_id = ?last_read_inbox_message_id,
                "message notifications closed"
            ),
        }
        Ok(())
    }
}
