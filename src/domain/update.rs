//! Incoming server-observed changes.
//!
//! The wire form is a JSON object tagged by `@type`; field presence is meaningful
//! (for instance an `updateChatFolder` without `folder` deletes the folder).

use serde::{Deserialize, Serialize};

use super::{
    chat::{ChatPatch, ChatPhoto},
    folder::ChatFolder,
    full_info::{ChatMember, FullInfoPatch},
    ids::{ChatId, FolderId, MessageId, PhotoId, ThreadId, TopicId, UserId},
    message::{Message, MessageUpdate},
    tab::DialogData,
    thread::{Draft, TypingStatus},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "@type",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum Update {
    UpdateChat {
        id: ChatId,
        chat: ChatPatch,
        new_profile_photo: Option<ChatPhoto>,
        #[serde(default)]
        no_top_chats_request: bool,
    },
    UpdateChatJoin {
        id: ChatId,
    },
    UpdateChatLeave {
        id: ChatId,
    },
    UpdateChatInbox {
        id: ChatId,
        chat: ChatPatch,
    },
    UpdateChatTypingStatus {
        id: ChatId,
        thread_id: Option<ThreadId>,
        typing_status: Option<TypingStatus>,
    },
    NewMessage {
        chat_id: ChatId,
        id: MessageId,
        message: Message,
    },
    UpdateChannelMessages {
        channel_id: ChatId,
        ids: Vec<MessageId>,
        message_update: MessageUpdate,
    },
    UpdateCommonBoxMessages {
        ids: Vec<MessageId>,
        message_update: MessageUpdate,
    },
    UpdateChatFullInfo {
        id: ChatId,
        full_info: FullInfoPatch,
    },
    UpdatePinnedChatIds {
        ids: Vec<ChatId>,
        folder_id: Option<FolderId>,
    },
    UpdatePinnedSavedDialogIds {
        ids: Vec<ChatId>,
    },
    UpdateChatPinned {
        id: ChatId,
        is_pinned: bool,
    },
    UpdateSavedDialogPinned {
        id: ChatId,
        is_pinned: bool,
    },
    UpdateChatListType {
        id: ChatId,
        folder_id: FolderId,
    },
    UpdateChatFolder {
        id: FolderId,
        folder: Option<ChatFolder>,
    },
    UpdateChatFoldersOrder {
        ordered_ids: Vec<FolderId>,
    },
    UpdateRecommendedChatFolders {
        folders: Vec<ChatFolder>,
    },
    UpdateChatMembers {
        id: ChatId,
        replaced_members: Option<Vec<ChatMember>>,
        added_member: Option<ChatMember>,
        deleted_member_id: Option<UserId>,
    },
    DeleteProfilePhotos {
        chat_id: ChatId,
        ids: Vec<PhotoId>,
    },
    DraftMessage {
        chat_id: ChatId,
        thread_id: Option<ThreadId>,
        draft: Option<Draft>,
    },
    ShowInvite {
        data: DialogData,
    },
    UpdatePendingJoinRequests {
        chat_id: ChatId,
        requests_pending: u32,
        #[serde(default)]
        recent_requester_ids: Vec<UserId>,
    },
    UpdatePinnedTopic {
        chat_id: ChatId,
        topic_id: TopicId,
        is_pinned: bool,
    },
    UpdatePinnedTopicsOrder {
        chat_id: ChatId,
        order: Vec<TopicId>,
    },
    UpdateTopic {
        chat_id: ChatId,
        topic_id: TopicId,
    },
    UpdateTopics {
        chat_id: ChatId,
    },
    UpdateViewForumAsMessages {
        chat_id: ChatId,
        is_enabled: bool,
    },
    /// Any `@type` this client does not know about.
    #[serde(other)]
    Unsupported,
}

impl Update {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UpdateChat { .. } => "update_chat",
            Self::UpdateChatJoin { .. } => "update_chat_join",
            Self::UpdateChatLeave { .. } => "update_chat_leave",
            Self::UpdateChatInbox { .. } => "update_chat_inbox",
            Self::UpdateChatTypingStatus { .. } => "update_chat_typing_status",
            Self::NewMessage { .. } => "new_message",
            Self::UpdateChannelMessages { .. } => "update_channel_messages",
            Self::UpdateCommonBoxMessages { .. } => "update_common_box_messages",
            Self::UpdateChatFullInfo { .. } => "update_chat_full_info",
            Self::UpdatePinnedChatIds { .. } => "update_pinned_chat_ids",
            Self::UpdatePinnedSavedDialogIds { .. } => "update_pinned_saved_dialog_ids",
            Self::UpdateChatPinned { .. } => "update_chat_pinned",
            Self::UpdateSavedDialogPinned { .. } => "update_saved_dialog_pinned",
            Self::UpdateChatListType { .. } => "update_chat_list_type",
            Self::UpdateChatFolder { .. } => "update_chat_folder",
            Self::UpdateChatFoldersOrder { .. } => "update_chat_folders_order",
            Self::UpdateRecommendedChatFolders { .. } => "update_recommended_chat_folders",
            Self::UpdateChatMembers { .. } => "update_chat_members",
            Self::DeleteProfilePhotos { .. } => "delete_profile_photos",
            Self::DraftMessage { .. } => "draft_message",
            Self::ShowInvite { .. } => "show_invite",
            Self::UpdatePendingJoinRequests { .. } => "update_pending_join_requests",
            Self::UpdatePinnedTopic { .. } => "update_pinned_topic",
            Self::UpdatePinnedTopicsOrder { .. } => "update_pinned_topics_order",
            Self::UpdateTopic { .. } => "update_topic",
            Self::UpdateTopics { .. } => "update_topics",
            Self::UpdateViewForumAsMessages { .. } => "update_view_forum_as_messages",
            Self::Unsupported => "unsupported",
        }
    }
}

/// The one member-list mutation an `updateChatMembers` carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MembersChange {
    Replaced(Vec<ChatMember>),
    Added(ChatMember),
    Deleted(UserId),
}

impl MembersChange {
    /// Resolves the wire fields; when several are present, replacement wins over
    /// addition, which wins over deletion.
    pub fn from_wire(
        replaced_members: Option<Vec<ChatMember>>,
        added_member: Option<ChatMember>,
        deleted_member_id: Option<UserId>,
    ) -> Option<Self> {
        replaced_members
            .map(Self::Replaced)
            .or_else(|| added_member.map(Self::Added))
            .or_else(|| deleted_member_id.map(Self::Deleted))
    }
}
