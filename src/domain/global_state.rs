//! Root of the state tree.
//!
//! Every sub-tree is a plain owned value; a new version of the tree is produced by
//! taking the previous one by value, changing what the update touches and handing it
//! back. Nothing in here has interior mutability.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::{
    chat::{Chat, ListType},
    folder::{ChatFolder, FolderInvite},
    full_info::ChatFullInfo,
    ids::{ChatId, FolderId, MessageId, TabId, ThreadId, TopicId, UserId, LOCAL_MESSAGE_ID_BASE},
    message::Message,
    tab::TabState,
    thread::ThreadParams,
    topic::Topic,
    user::User,
};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChatsState {
    pub by_id: BTreeMap<ChatId, Chat>,
    /// Live chat-list ordering per list type.
    pub list_ids: BTreeMap<ListType, Vec<ChatId>>,
    /// Pin order per list type, most recently pinned first. An empty list is stored as
    /// an absent entry.
    pub ordered_pinned_ids: BTreeMap<ListType, Vec<ChatId>>,
    pub full_info_by_id: BTreeMap<ChatId, ChatFullInfo>,
    pub topics_by_chat_id: BTreeMap<ChatId, BTreeMap<TopicId, Topic>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UsersState {
    pub by_id: BTreeMap<UserId, User>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MessagesState {
    pub by_chat_id: BTreeMap<ChatId, BTreeMap<MessageId, Message>>,
    pub thread_params: BTreeMap<ChatId, BTreeMap<ThreadId, ThreadParams>>,
    pub next_local_id: MessageId,
}

impl Default for MessagesState {
    fn default() -> Self {
        Self {
            by_chat_id: BTreeMap::new(),
            thread_params: BTreeMap::new(),
            next_local_id: LOCAL_MESSAGE_ID_BASE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChatFoldersState {
    pub by_id: BTreeMap<FolderId, ChatFolder>,
    pub ordered_ids: Vec<FolderId>,
    pub recommended: Vec<ChatFolder>,
    pub invites: BTreeMap<FolderId, FolderInvite>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoriesState {
    pub hidden_peer_ids: BTreeSet<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GlobalState {
    pub current_user_id: Option<UserId>,
    pub chats: ChatsState,
    pub users: UsersState,
    pub messages: MessagesState,
    pub chat_folders: ChatFoldersState,
    pub stories: StoriesState,
    /// Tab slices iterate in tab id order.
    pub by_tab_id: BTreeMap<TabId, TabState>,
}

impl GlobalState {
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_tabs(tab_ids: impl IntoIterator<Item = TabId>) -> Self {
        Self {
            by_tab_id: tab_ids
                .into_iter()
                .map(|id| (id, TabState::new(id)))
                .collect(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_survives_json_round_trip_with_integer_and_enum_keys() {
        let mut state = GlobalState::with_tabs([1, 2]);
        state.chats.by_id.insert(-100, Chat::new(-100));
        state.chats.list_ids.insert(ListType::Active, vec![-100]);

        let raw = serde_json::to_string(&state).expect("state should encode");
        let decoded: GlobalState = serde_json::from_str(&raw).expect("state should decode");

        assert_eq!(decoded, state);
    }

    #[test]
    fn new_state_reserves_local_message_id_range() {
        let state = GlobalState::default();

        assert_eq!(state.messages.next_local_id, LOCAL_MESSAGE_ID_BASE);
    }
}
