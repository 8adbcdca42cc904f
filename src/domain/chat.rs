use serde::{Deserialize, Serialize};

use super::ids::{ChatId, FolderId, MessageId, PhotoId, TopicId, ARCHIVED_FOLDER_ID};

/// Kind of chat as far as the state core cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChatKind {
    /// Private 1-to-1 conversation with a user.
    #[default]
    Private,
    /// Small group sharing the common message id box.
    BasicGroup,
    /// Megagroup with its own message id space.
    SuperGroup,
    /// Broadcast channel.
    Channel,
}

impl ChatKind {
    /// Private chats and basic groups share one message id sequence per account.
    pub fn uses_common_box(self) -> bool {
        matches!(self, Self::Private | Self::BasicGroup)
    }
}

/// Which chat list a chat, pinned id or dialog belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListType {
    Active,
    Archived,
    Saved,
}

impl ListType {
    pub fn from_folder_id(folder_id: Option<FolderId>) -> Self {
        if folder_id == Some(ARCHIVED_FOLDER_ID) {
            Self::Archived
        } else {
            Self::Active
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatPhoto {
    pub id: PhotoId,
    #[serde(default)]
    pub date: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Chat {
    pub id: ChatId,
    pub kind: ChatKind,
    pub title: String,
    pub folder_id: Option<FolderId>,
    pub unread_count: u32,
    pub unread_mentions_count: u32,
    pub unread_mentions: Vec<MessageId>,
    pub unread_reactions_count: u32,
    pub unread_reactions: Vec<MessageId>,
    pub last_read_inbox_message_id: Option<MessageId>,
    pub last_read_outbox_message_id: Option<MessageId>,
    pub last_message_id: Option<MessageId>,
    pub is_forum: bool,
    pub is_forum_as_messages: bool,
    pub is_not_joined: bool,
    pub is_restricted: bool,
    pub are_stories_hidden: bool,
    pub draft_date: Option<i64>,
    pub ordered_pinned_topic_ids: Vec<TopicId>,
    /// `None` until the photo list has been fetched.
    pub photos: Option<Vec<ChatPhoto>>,
    pub members_count: Option<u32>,
}

impl Chat {
    pub fn new(id: ChatId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn is_channel(&self) -> bool {
        self.kind == ChatKind::Channel
    }
}

/// Partial chat payload. A `None` field was absent on the wire and leaves the stored
/// value untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChatPatch {
    pub kind: Option<ChatKind>,
    pub title: Option<String>,
    pub folder_id: Option<FolderId>,
    pub unread_count: Option<u32>,
    pub unread_mentions_count: Option<u32>,
    pub unread_reactions_count: Option<u32>,
    pub last_read_inbox_message_id: Option<MessageId>,
    pub last_read_outbox_message_id: Option<MessageId>,
    pub last_message_id: Option<MessageId>,
    pub is_forum: Option<bool>,
    pub is_forum_as_messages: Option<bool>,
    pub is_not_joined: Option<bool>,
    pub is_restricted: Option<bool>,
    pub are_stories_hidden: Option<bool>,
    pub ordered_pinned_topic_ids: Option<Vec<TopicId>>,
    pub photos: Option<Vec<ChatPhoto>>,
    pub members_count: Option<u32>,
}

impl ChatPatch {
    pub fn apply_to(self, chat: &mut Chat) {
        macro_rules! merge {
            ($($field:ident),* $(,)?) => {
                $(if let Some(value) = self.$field {
                    chat.$field = value;
                })*
            };
        }

        merge!(
            kind,
            title,
            unread_count,
            unread_mentions_count,
            unread_reactions_count,
            is_forum,
            is_forum_as_messages,
            is_not_joined,
            is_restricted,
            are_stories_hidden,
            ordered_pinned_topic_ids,
        );

        if self.folder_id.is_some() {
            chat.folder_id = self.folder_id;
        }
        if self.last_read_inbox_message_id.is_some() {
            chat.last_read_inbox_message_id = self.last_read_inbox_message_id;
        }
        if self.last_read_outbox_message_id.is_some() {
            chat.last_read_outbox_message_id = self.last_read_outbox_message_id;
        }
        if self.last_message_id.is_some() {
            chat.last_message_id = self.last_message_id;
        }
        if self.photos.is_some() {
            chat.photos = self.photos;
        }
        if self.members_count.is_some() {
            chat.members_count = self.members_count;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_leaves_absent_fields_untouched() {
        let mut chat = Chat {
            title: "General".to_owned(),
            unread_count: 4,
            last_read_inbox_message_id: Some(10),
            ..Chat::new(1)
        };

        ChatPatch {
            unread_count: Some(0),
            ..ChatPatch::default()
        }
        .apply_to(&mut chat);

        assert_eq!(chat.unread_count, 0);
        assert_eq!(chat.title, "General");
        assert_eq!(chat.last_read_inbox_message_id, Some(10));
    }

    #[test]
    fn list_type_follows_archive_folder() {
        assert_eq!(ListType::from_folder_id(None), ListType::Active);
        assert_eq!(ListType::from_folder_id(Some(7)), ListType::Active);
        assert_eq!(
            ListType::from_folder_id(Some(ARCHIVED_FOLDER_ID)),
            ListType::Archived
        );
    }

    #[test]
    fn patch_deserializes_from_camel_case_payload() {
        let patch: ChatPatch =
            serde_json::from_str(r#"{"lastReadInboxMessageId": 5, "isForum": true}"#)
                .expect("patch should parse");

        assert_eq!(patch.last_read_inbox_message_id, Some(5));
        assert_eq!(patch.is_forum, Some(true));
        assert_eq!(patch.title, None);
    }
}
