use serde::{Deserialize, Serialize};

use super::ids::TopicId;

/// Forum sub-thread of a chat with `is_forum` set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Topic {
    pub id: TopicId,
    pub title: String,
    pub unread_count: u32,
    pub is_pinned: bool,
    pub is_closed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TopicPatch {
    pub unread_count: Option<u32>,
    pub is_pinned: Option<bool>,
}

impl TopicPatch {
    pub fn apply_to(self, topic: &mut Topic) {
        if let Some(unread_count) = self.unread_count {
            topic.unread_count = unread_count;
        }
        if let Some(is_pinned) = self.is_pinned {
            topic.is_pinned = is_pinned;
        }
    }
}
