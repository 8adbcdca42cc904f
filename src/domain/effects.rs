//! Side effects requested while applying an update.
//!
//! The dispatcher never performs effects itself; it returns them next to the new
//! state and the store routes each one after committing.

use super::{
    chat::Chat,
    ids::{ChatId, MessageId, TabId, ThreadId, TopicId},
    message::Message,
    tab::DialogData,
    update::Update,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Apply another update right after the current one.
    Dispatch(Box<Update>),
    Action(ActionIntent),
    Notify(Notification),
    Schedule { delay_ms: u64, task: ScheduledTask },
}

/// Named follow-up intents, fire-and-forget from the dispatcher's side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionIntent {
    LoadTopChats,
    LoadChannelRecommendations { chat_id: ChatId },
    RequestChatUpdate { chat_id: ChatId },
    LoadChatJoinRequests { chat_id: ChatId },
    LoadTopicById { chat_id: ChatId, topic_id: TopicId },
    LoadTopics { chat_id: ChatId, force: bool },
    CloseForumPanel { tab_id: TabId },
    OpenChat { chat_id: ChatId, tab_id: TabId },
    ShowDialog { data: DialogData, tab_id: TabId },
}

impl ActionIntent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadTopChats => "loadTopChats",
            Self::LoadChannelRecommendations { .. } => "loadChannelRecommendations",
            Self::RequestChatUpdate { .. } => "requestChatUpdate",
            Self::LoadChatJoinRequests { .. } => "loadChatJoinRequests",
            Self::LoadTopicById { .. } => "loadTopicById",
            Self::LoadTopics { .. } => "loadTopics",
            Self::CloseForumPanel { .. } => "closeForumPanel",
            Self::OpenChat { .. } => "openChat",
            Self::ShowDialog { .. } => "showDialog",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    AboutMessage {
        chat: Box<Chat>,
        message: Box<Message>,
    },
    CloseMessageNotifications {
        chat_id: ChatId,
        last_read_inbox_message_id: Option<MessageId>,
    },
}

/// Deferred work. Carries only the keys needed to re-read live state when it fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduledTask {
    ClearTypingStatus {
        chat_id: ChatId,
        thread_id: ThreadId,
        timestamp: i64,
    },
}
