//! Identifier aliases and well-known ids shared across the state tree.

pub type ChatId = i64;
pub type UserId = i64;
pub type MessageId = i64;
pub type ThreadId = i64;
pub type TopicId = i64;
pub type FolderId = i32;
pub type TabId = u32;
pub type PhotoId = String;

/// Thread id of the main (non-topic) conversation of every chat.
pub const MAIN_THREAD_ID: ThreadId = -1;

/// Forum messages without an explicit topic belong to the "General" topic.
pub const GENERAL_TOPIC_ID: TopicId = 1;

/// Server folder id of the archive.
pub const ARCHIVED_FOLDER_ID: FolderId = 1;

/// Client-generated messages get ids at or above this base so they never collide
/// with server ids.
pub const LOCAL_MESSAGE_ID_BASE: MessageId = 1 << 40;

pub fn is_local_message_id(id: MessageId) -> bool {
    id >= LOCAL_MESSAGE_ID_BASE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_ids_are_not_local() {
        assert!(!is_local_message_id(1));
        assert!(!is_local_message_id(LOCAL_MESSAGE_ID_BASE - 1));
        assert!(is_local_message_id(LOCAL_MESSAGE_ID_BASE + 7));
    }
}
