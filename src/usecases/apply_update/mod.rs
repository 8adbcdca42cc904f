//! Update dispatcher: turns one incoming [`Update`] into the next state tree plus the
//! side effects it asks for.
//!
//! Dispatch is an exhaustive match over the closed update type. Each handler reads the
//! snapshot through selectors, builds the next version through reducers, and reports
//! "no change" when the update touches nothing that is loaded.

mod chats;
mod folders;
mod members;
mod messages;
mod pinned;
mod topics;

use crate::domain::{effects::Effect, global_state::GlobalState, update::Update};

const UPDATE_IGNORED: &str = "STATE_UPDATE_IGNORED";

pub const DEFAULT_MAX_ACTIVE_PINNED_CHATS: usize = 5;
pub const DEFAULT_TYPING_STATUS_CLEAR_DELAY_MS: u64 = 6_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatcherConfig {
    pub max_active_pinned_chats: usize,
    pub typing_status_clear_delay_ms: u64,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            max_active_pinned_chats: DEFAULT_MAX_ACTIVE_PINNED_CHATS,
            typing_status_clear_delay_ms: DEFAULT_TYPING_STATUS_CLEAR_DELAY_MS,
        }
    }
}

/// Result of applying one update. `state == None` means nothing worth committing
/// changed; effects may still be present.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateOutcome {
    pub state: Option<GlobalState>,
    pub effects: Vec<Effect>,
}

impl UpdateOutcome {
    pub fn no_change() -> Self {
        Self::default()
    }

    pub fn changed(state: GlobalState) -> Self {
        Self {
            state: Some(state),
            effects: Vec::new(),
        }
    }

    pub fn effects_only(effects: Vec<Effect>) -> Self {
        Self {
            state: None,
            effects,
        }
    }

    pub fn with_effects(mut self, effects: impl IntoIterator<Item = Effect>) -> Self {
        self.effects.extend(effects);
        self
    }

    pub fn is_no_change(&self) -> bool {
        self.state.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateDispatcher {
    config: DispatcherConfig,
}

impl UpdateDispatcher {
    pub fn new(config: DispatcherConfig) -> Self {
        Self { config }
    }

    /// Applies `update` to `global`. `now_ms` stamps client-generated records.
    pub fn apply(&self, global: &GlobalState, update: Update, now_ms: i64) -> UpdateOutcome {
        let kind = update.kind();
        let outcome = match update {
            Update::UpdateChat {
                id,
                chat,
                new_profile_photo,
                no_top_chats_request,
            } => chats::on_update_chat(global, id, chat, new_profile_photo, no_top_chats_request),
            Update::UpdateChatJoin { id } => chats::on_chat_join(global, id, now_ms),
            Update::UpdateChatLeave { id } => chats::on_chat_leave(global, id),
            Update::UpdateChatInbox { id, chat } => chats::on_chat_inbox(global, id, chat),
            Update::UpdateChatListType { id, folder_id } => {
                chats::on_chat_list_type(global, id, folder_id)
            }
            Update::DeleteProfilePhotos { chat_id, ids } => {
                chats::on_delete_profile_photos(global, chat_id, &ids)
            }
            Update::ShowInvite { data } => chats::on_show_invite(global, data),
            Update::UpdateChatTypingStatus {
                id,
                thread_id,
                typing_status,
            } => messages::on_typing_status(global, id, thread_id, typing_status, &self.config),
            Update::NewMessage {
                chat_id,
                id,
                message,
            } => messages::on_new_message(global, chat_id, id, message),
            Update::UpdateChannelMessages {
                channel_id,
                ids,
                message_update,
            } => messages::on_messages_update(global, Some(channel_id), &ids, &message_update),
            Update::UpdateCommonBoxMessages {
                ids,
                message_update,
            } => messages::on_messages_update(global, None, &ids, &message_update),
            Update::DraftMessage {
                chat_id,
                thread_id,
                draft,
            } => messages::on_draft(global, chat_id, thread_id, draft),
            Update::UpdateChatFullInfo { id, full_info } => {
                members::on_full_info(global, id, full_info)
            }
            Update::UpdateChatMembers {
                id,
                replaced_members,
                added_member,
                deleted_member_id,
            } => members::on_members(global, id, replaced_members, added_member, deleted_member_id),
            Update::UpdatePendingJoinRequests {
                chat_id,
                requests_pending,
                recent_requester_ids,
            } => members::on_pending_join_requests(
                global,
                chat_id,
                requests_pending,
                recent_requester_ids,
            ),
            Update::UpdatePinnedChatIds { ids, folder_id } => {
                pinned::on_pinned_chat_ids(global, ids, folder_id)
            }
            Update::UpdatePinnedSavedDialogIds { ids } => {
                pinned::on_pinned_saved_dialog_ids(global, ids)
            }
            Update::UpdateChatPinned { id, is_pinned } => {
                pinned::on_chat_pinned(global, id, is_pinned, &self.config)
            }
            Update::UpdateSavedDialogPinned { id, is_pinned } => {
                pinned::on_saved_dialog_pinned(global, id, is_pinned)
            }
            Update::UpdateChatFolder { id, folder } => folders::on_chat_folder(global, id, folder),
            Update::UpdateChatFoldersOrder { ordered_ids } => {
                folders::on_folders_order(global, ordered_ids)
            }
            Update::UpdateRecommendedChatFolders { folders } => {
                folders::on_recommended_folders(global, folders)
            }
            Update::UpdatePinnedTopic {
                chat_id,
                topic_id,
                is_pinned,
            } => topics::on_pinned_topic(global, chat_id, topic_id, is_pinned),
            Update::UpdatePinnedTopicsOrder { chat_id, order } => {
                topics::on_pinned_topics_order(global, chat_id, order)
            }
            Update::UpdateTopic { chat_id, topic_id } => topics::on_topic(global, chat_id, topic_id),
            Update::UpdateTopics { chat_id } => topics::on_topics(global, chat_id),
            Update::UpdateViewForumAsMessages {
                chat_id,
                is_enabled,
            } => topics::on_view_forum_as_messages(global, chat_id, is_enabled),
            Update::Unsupported => {
                tracing::debug!(code = UPDATE_IGNORED, "unsupported update ignored");
                UpdateOutcome::no_change()
            }
        };

        tracing::trace!(
            update_kind = kind,
            changed = !outcome.is_no_change(),
            effects = outcome.effects.len(),
            "update applied"
        );

        outcome
    }
}
