use serde::{Deserialize, Serialize};

use super::ids::{ChatId, MessageId, TopicId, UserId};

/// Service action carried by a message instead of (or next to) text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum MessageAction {
    JoinedChannel { target_chat_id: ChatId },
    Other { text: String },
}

impl MessageAction {
    pub fn display_label(&self) -> &str {
        match self {
            Self::JoinedChannel { .. } => "you joined this channel",
            Self::Other { text } => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecentReaction {
    pub peer_id: i64,
    pub is_unread: bool,
    pub is_own: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MessageReactions {
    pub recent_reactions: Vec<RecentReaction>,
}

impl MessageReactions {
    /// True while someone else's reaction on this message has not been seen yet.
    pub fn has_unread_foreign(&self) -> bool {
        self.recent_reactions
            .iter()
            .any(|reaction| reaction.is_unread && !reaction.is_own)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Message {
    pub id: MessageId,
    pub chat_id: ChatId,
    pub sender_id: Option<UserId>,
    pub text: String,
    pub date: i64,
    pub is_outgoing: bool,
    pub is_from_scheduled: bool,
    pub has_unread_mention: bool,
    /// Forum topic the message was posted in; `None` means the General topic.
    pub topic_id: Option<TopicId>,
    pub reactions: Option<MessageReactions>,
    pub views: Option<u32>,
    pub action: Option<MessageAction>,
}

impl Message {
    /// Returns the display content: service label when the message is an action,
    /// otherwise its text.
    pub fn display_content(&self) -> &str {
        match &self.action {
            Some(action) => action.display_label(),
            None => &self.text,
        }
    }
}

/// Field-level update shared by a batch of messages.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MessageUpdate {
    pub reactions: Option<MessageReactions>,
    /// Absent on the wire means the mention is no longer unread.
    pub has_unread_mention: bool,
    pub views: Option<u32>,
}

impl MessageUpdate {
    pub fn apply_to(&self, message: &mut Message) {
        if let Some(reactions) = &self.reactions {
            message.reactions = Some(reactions.clone());
        }
        if let Some(views) = self.views {
            message.views = Some(views);
        }
        message.has_unread_mention = self.has_unread_mention;
    }
}
