use crate::domain::{
    chat::{Chat, ChatPatch, ChatPhoto, ListType},
    global_state::GlobalState,
    ids::{ChatId, FolderId, MessageId},
};

/// Merges `patch` into the chat, creating the chat on first observation. A new
/// profile photo goes to the front of the known photo list.
pub fn update_chat(
    mut global: GlobalState,
    chat_id: ChatId,
    patch: ChatPatch,
    new_profile_photo: Option<ChatPhoto>,
) -> GlobalState {
    let chat = global
        .chats
        .by_id
        .entry(chat_id)
        .or_insert_with(|| Chat::new(chat_id));
    patch.apply_to(chat);

    if let Some(photo) = new_profile_photo {
        let photos = chat.photos.get_or_insert_with(Vec::new);
        photos.retain(|existing| existing.id != photo.id);
        photos.insert(0, photo);
    }

    global
}

/// Runs `mutate` against an already known chat; unknown chats are left alone.
pub fn modify_chat(
    mut global: GlobalState,
    chat_id: ChatId,
    mutate: impl FnOnce(&mut Chat),
) -> GlobalState {
    if let Some(chat) = global.chats.by_id.get_mut(&chat_id) {
        mutate(chat);
    }

    global
}

/// Appends ids missing from the list, keeping the existing order.
pub fn update_chat_list_ids(
    mut global: GlobalState,
    list_type: ListType,
    ids: &[ChatId],
) -> GlobalState {
    let list = global.chats.list_ids.entry(list_type).or_default();
    for id in ids {
        if !list.contains(id) {
            list.push(*id);
        }
    }

    global
}

/// Moves the chat to the list matching `folder_id`.
pub fn update_chat_list_type(
    mut global: GlobalState,
    chat_id: ChatId,
    folder_id: FolderId,
) -> GlobalState {
    for list_type in [ListType::Active, ListType::Archived] {
        if let Some(list) = global.chats.list_ids.get_mut(&list_type) {
            list.retain(|id| *id != chat_id);
        }
    }

    let folder_id = (folder_id != 0).then_some(folder_id);
    global = update_chat_list_ids(global, ListType::from_folder_id(folder_id), &[chat_id]);
    modify_chat(global, chat_id, |chat| chat.folder_id = folder_id)
}

/// Takes the chat out of the chat lists (and their pins) and marks it not joined. The
/// chat record itself stays.
pub fn leave_chat(mut global: GlobalState, chat_id: ChatId) -> GlobalState {
    for list_type in [ListType::Active, ListType::Archived] {
        if let Some(list) = global.chats.list_ids.get_mut(&list_type) {
            list.retain(|id| *id != chat_id);
        }

        let pinned: Vec<ChatId> = global
            .chats
            .ordered_pinned_ids
            .get(&list_type)
            .map(|ids| ids.iter().copied().filter(|id| *id != chat_id).collect())
            .unwrap_or_default();
        global = replace_pinned_ids(global, list_type, pinned);
    }

    modify_chat(global, chat_id, |chat| chat.is_not_joined = true)
}

/// Stores the pin order for a list; an empty order removes the entry.
pub fn replace_pinned_ids(
    mut global: GlobalState,
    list_type: ListType,
    ids: Vec<ChatId>,
) -> GlobalState {
    if ids.is_empty() {
        global.chats.ordered_pinned_ids.remove(&list_type);
    } else {
        global.chats.ordered_pinned_ids.insert(list_type, ids);
    }

    global
}

pub fn add_unread_mentions(
    global: GlobalState,
    chat_id: ChatId,
    ids: &[MessageId],
    should_update_count: bool,
) -> GlobalState {
    modify_chat(global, chat_id, |chat| {
        let mut added = 0;
        for id in ids {
            if !chat.unread_mentions.contains(id) {
                chat.unread_mentions.push(*id);
                added += 1;
            }
        }
        chat.unread_mentions.sort_unstable();

        if should_update_count {
            chat.unread_mentions_count = chat.unread_mentions_count.saturating_add(added);
        }
    })
}

pub fn remove_unread_mentions(
    global: GlobalState,
    chat_id: ChatId,
    ids: &[MessageId],
    should_update_count: bool,
) -> GlobalState {
    modify_chat(global, chat_id, |chat| {
        let before = chat.unread_mentions.len();
        chat.unread_mentions.retain(|id| !ids.contains(id));
        let removed = before - chat.unread_mentions.len();

        if should_update_count {
            let removed = u32::try_from(removed).unwrap_or(u32::MAX);
            chat.unread_mentions_count = chat.unread_mentions_count.saturating_sub(removed);
        }
    })
}

pub fn update_unread_reactions(
    global: GlobalState,
    chat_id: ChatId,
    unread_reactions_count: u32,
    unread_reactions: Vec<MessageId>,
) -> GlobalState {
    modify_chat(global, chat_id, |chat| {
        chat.unread_reactions_count = unread_reactions_count;
        chat.unread_reactions = unread_reactions;
    })
}

pub fn update_peer_stories_hidden(
    mut global: GlobalState,
    peer_id: ChatId,
    is_hidden: bool,
) -> GlobalState {
    if is_hidden {
        global.stories.hidden_peer_ids.insert(peer_id);
    } else {
        global.stories.hidden_peer_ids.remove(&peer_id);
    }

    global
}
