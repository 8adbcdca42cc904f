use serde::{Deserialize, Serialize};

use super::ids::{ChatId, TabId, ThreadId, MAIN_THREAD_ID};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageListType {
    #[default]
    Thread,
    Pinned,
    Scheduled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageList {
    pub chat_id: ChatId,
    pub thread_id: ThreadId,
    #[serde(rename = "type", default)]
    pub list_type: MessageListType,
}

impl MessageList {
    pub fn main_thread(chat_id: ChatId) -> Self {
        Self {
            chat_id,
            thread_id: MAIN_THREAD_ID,
            list_type: MessageListType::Thread,
        }
    }
}

/// Opaque payload shown in a modal dialog (e.g. an invite preview).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DialogData {
    pub title: String,
    pub about: Option<String>,
    pub hash: Option<String>,
    pub participants_count: Option<u32>,
}

/// Transient view state of one open UI tab.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TabState {
    pub id: TabId,
    /// 0 selects "All chats"; `n > 0` selects the n-th ordered folder.
    pub active_chat_folder: usize,
    /// Navigation stack; the last entry is the current message list.
    pub message_lists: Vec<MessageList>,
    pub forum_panel_chat_id: Option<ChatId>,
    pub dialogs: Vec<DialogData>,
}

impl TabState {
    pub fn new(id: TabId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn current_message_list(&self) -> Option<&MessageList> {
        self.message_lists.last()
    }
}

/// Partial tab update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TabPatch {
    pub active_chat_folder: Option<usize>,
    pub forum_panel_chat_id: Option<Option<ChatId>>,
}

impl TabPatch {
    pub fn apply_to(self, tab: &mut TabState) {
        if let Some(index) = self.active_chat_folder {
            tab.active_chat_folder = index;
        }
        if let Some(forum_panel_chat_id) = self.forum_panel_chat_id {
            tab.forum_panel_chat_id = forum_panel_chat_id;
        }
    }
}
