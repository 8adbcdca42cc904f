use serde::{Deserialize, Serialize};

use super::ids::{ChatId, FolderId};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChatFolder {
    pub id: FolderId,
    pub title: String,
    pub included_chat_ids: Vec<ChatId>,
    pub excluded_chat_ids: Vec<ChatId>,
    pub pinned_chat_ids: Vec<ChatId>,
    pub has_my_invites: bool,
}

/// Pending shareable-folder invite waiting for the user's decision.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FolderInvite {
    pub slug: String,
    pub title: String,
    pub missing_chat_ids: Vec<ChatId>,
}
