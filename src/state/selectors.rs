//! Read-only queries over a state snapshot.
//!
//! Every selector is total: missing data yields `None` (or an empty slice), never a
//! panic.

use std::collections::BTreeMap;

use crate::domain::{
    chat::{Chat, ListType},
    full_info::ChatFullInfo,
    global_state::GlobalState,
    ids::{ChatId, FolderId, MessageId, TabId, ThreadId, TopicId, GENERAL_TOPIC_ID},
    message::Message,
    tab::{MessageList, TabState},
    thread::{Draft, ThreadParams, TypingStatus},
    topic::Topic,
};

pub fn select_chat(global: &GlobalState, chat_id: ChatId) -> Option<&Chat> {
    global.chats.by_id.get(&chat_id)
}

pub fn select_chat_full_info(global: &GlobalState, chat_id: ChatId) -> Option<&ChatFullInfo> {
    global.chats.full_info_by_id.get(&chat_id)
}

/// List the chat lives in, derived from its folder. Restricted or unknown chats have
/// none.
pub fn select_chat_list_type(global: &GlobalState, chat_id: ChatId) -> Option<ListType> {
    let chat = select_chat(global, chat_id)?;
    if chat.is_restricted {
        return None;
    }

    Some(ListType::from_folder_id(chat.folder_id))
}

pub fn select_list_ids(global: &GlobalState, list_type: ListType) -> &[ChatId] {
    global
        .chats
        .list_ids
        .get(&list_type)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

pub fn select_pinned_ids(global: &GlobalState, list_type: ListType) -> &[ChatId] {
    global
        .chats
        .ordered_pinned_ids
        .get(&list_type)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// True when the chat appears in the active or archived chat list.
pub fn select_is_chat_listed(global: &GlobalState, chat_id: ChatId) -> bool {
    [ListType::Active, ListType::Archived]
        .into_iter()
        .any(|list_type| select_list_ids(global, list_type).contains(&chat_id))
}

#[cfg_attr(not(test), allow(dead_code))]
pub fn select_is_chat_pinned(global: &GlobalState, chat_id: ChatId) -> bool {
    select_chat_list_type(global, chat_id)
        .is_some_and(|list_type| select_pinned_ids(global, list_type).contains(&chat_id))
}

pub fn select_chat_messages(
    global: &GlobalState,
    chat_id: ChatId,
) -> Option<&BTreeMap<MessageId, Message>> {
    global.messages.by_chat_id.get(&chat_id)
}

/// Private chats and basic groups share a message id space; finds which of them
/// holds `message_id`.
pub fn select_common_box_chat_id(global: &GlobalState, message_id: MessageId) -> Option<ChatId> {
    global
        .messages
        .by_chat_id
        .iter()
        .find(|(chat_id, messages)| {
            messages.contains_key(&message_id)
                && select_chat(global, **chat_id).is_some_and(|chat| chat.kind.uses_common_box())
        })
        .map(|(chat_id, _)| *chat_id)
}

pub fn select_thread_params(
    global: &GlobalState,
    chat_id: ChatId,
    thread_id: ThreadId,
) -> Option<&ThreadParams> {
    global
        .messages
        .thread_params
        .get(&chat_id)
        .and_then(|threads| threads.get(&thread_id))
}

pub fn select_typing_status(
    global: &GlobalState,
    chat_id: ChatId,
    thread_id: ThreadId,
) -> Option<&TypingStatus> {
    select_thread_params(global, chat_id, thread_id)
        .and_then(|params| params.typing_status.as_ref())
}

pub fn select_draft(global: &GlobalState, chat_id: ChatId, thread_id: ThreadId) -> Option<&Draft> {
    select_thread_params(global, chat_id, thread_id).and_then(|params| params.draft.as_ref())
}

pub fn select_tab_state(global: &GlobalState, tab_id: TabId) -> Option<&TabState> {
    global.by_tab_id.get(&tab_id)
}

pub fn select_current_message_list(global: &GlobalState, tab_id: TabId) -> Option<&MessageList> {
    select_tab_state(global, tab_id).and_then(TabState::current_message_list)
}

/// Folder id behind the tab's active folder index; index 0 ("All chats") has none.
#[cfg_attr(not(test), allow(dead_code))]
pub fn select_active_folder_id(global: &GlobalState, tab_id: TabId) -> Option<FolderId> {
    let index = select_tab_state(global, tab_id)?.active_chat_folder;
    let position = index.checked_sub(1)?;
    global.chat_folders.ordered_ids.get(position).copied()
}

pub fn select_topic(global: &GlobalState, chat_id: ChatId, topic_id: TopicId) -> Option<&Topic> {
    global
        .chats
        .topics_by_chat_id
        .get(&chat_id)
        .and_then(|topics| topics.get(&topic_id))
}

pub fn select_topic_from_message<'a>(
    global: &'a GlobalState,
    message: &Message,
) -> Option<&'a Topic> {
    select_topic(
        global,
        message.chat_id,
        message.topic_id.unwrap_or(GENERAL_TOPIC_ID),
    )
}
