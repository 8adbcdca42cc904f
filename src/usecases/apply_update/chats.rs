use crate::{
    domain::{
        chat::{ChatPatch, ChatPhoto},
        effects::{ActionIntent, Effect, Notification},
        global_state::GlobalState,
        ids::{is_local_message_id, ChatId, FolderId, MessageId, PhotoId},
        message::MessageAction,
        tab::DialogData,
        update::Update,
    },
    state::{
        reducers::{
            chats::{
                leave_chat, modify_chat, update_chat, update_chat_list_ids, update_chat_list_type,
                update_peer_stories_hidden,
            },
            messages::{build_local_message, delete_chat_messages},
        },
        selectors::{
            select_chat, select_chat_list_type, select_chat_messages,
            select_current_message_list, select_is_chat_listed,
        },
    },
};

use super::UpdateOutcome;

pub(super) fn on_update_chat(
    global: &GlobalState,
    chat_id: ChatId,
    mut patch: ChatPatch,
    new_profile_photo: Option<ChatPhoto>,
    no_top_chats_request: bool,
) -> UpdateOutcome {
    let local_chat = select_chat(global, chat_id);
    let prev_is_forum = local_chat.is_some_and(|chat| chat.is_forum);
    let prev_stories_hidden = local_chat.is_some_and(|chat| chat.are_stories_hidden);
    let stored_outbox_id = local_chat.and_then(|chat| chat.last_read_outbox_message_id);

    // Out-of-order delivery: an older outbox marker means the read markers in this
    // payload are stale.
    if let (Some(incoming), Some(stored)) = (patch.last_read_outbox_message_id, stored_outbox_id) {
        if incoming < stored {
            patch.last_read_inbox_message_id = None;
            patch.last_read_outbox_message_id = None;
        }
    }

    let forum_toggle = patch
        .is_forum
        .filter(|is_forum| *is_forum != prev_is_forum);
    let stories_hidden = patch
        .are_stories_hidden
        .filter(|is_hidden| *is_hidden != prev_stories_hidden);
    let last_read_inbox_message_id = patch.last_read_inbox_message_id;

    let mut next = update_chat(global.clone(), chat_id, patch, new_profile_photo);
    if let Some(is_hidden) = stories_hidden {
        next = update_peer_stories_hidden(next, chat_id, is_hidden);
    }

    let mut effects = Vec::new();

    if !no_top_chats_request && !select_is_chat_listed(&next, chat_id) {
        // The chat may be about to appear in the chat list.
        effects.push(Effect::Action(ActionIntent::LoadTopChats));
    }

    if last_read_inbox_message_id.is_some() {
        effects.push(Effect::Notify(Notification::CloseMessageNotifications {
            chat_id,
            last_read_inbox_message_id,
        }));
    }

    if forum_toggle.is_some() {
        for tab_id in next.by_tab_id.keys().copied() {
            let is_current = select_current_message_list(&next, tab_id)
                .is_some_and(|list| list.chat_id == chat_id);
            if !is_current {
                continue;
            }

            if prev_is_forum {
                effects.push(Effect::Action(ActionIntent::CloseForumPanel { tab_id }));
            }
            effects.push(Effect::Action(ActionIntent::OpenChat { chat_id, tab_id }));
        }
    }

    UpdateOutcome::changed(next).with_effects(effects)
}

pub(super) fn on_chat_join(global: &GlobalState, chat_id: ChatId, now_ms: i64) -> UpdateOutcome {
    let list_type = select_chat_list_type(global, chat_id);
    let chat = select_chat(global, chat_id);
    let mut next = None;
    let mut effects = Vec::new();

    if let Some(chat) = chat.filter(|chat| chat.is_channel()) {
        effects.push(Effect::Action(ActionIntent::LoadChannelRecommendations {
            chat_id,
        }));

        let (reserved, message) = build_local_message(
            global.clone(),
            chat_id,
            global.current_user_id,
            MessageAction::JoinedChannel {
                target_chat_id: chat.id,
            },
            now_ms / 1_000,
        );
        next = Some(reserved);
        effects.push(Effect::Dispatch(Box::new(Update::NewMessage {
            chat_id,
            id: message.id,
            message,
        })));
    }

    let Some(list_type) = list_type else {
        return UpdateOutcome {
            state: next,
            effects,
        };
    };

    let next = next.unwrap_or_else(|| global.clone());
    let next = update_chat_list_ids(next, list_type, &[chat_id]);
    let next = modify_chat(next, chat_id, |chat| chat.is_not_joined = false);
    effects.push(Effect::Action(ActionIntent::RequestChatUpdate { chat_id }));

    UpdateOutcome::changed(next).with_effects(effects)
}

pub(super) fn on_chat_leave(global: &GlobalState, chat_id: ChatId) -> UpdateOutcome {
    let chat = select_chat(global, chat_id);
    let is_joined = chat.is_some_and(|chat| !chat.is_not_joined);
    let local_ids: Vec<MessageId> = if chat.is_some_and(|chat| chat.is_channel()) {
        select_chat_messages(global, chat_id)
            .map(|messages| {
                messages
                    .keys()
                    .copied()
                    .filter(|id| is_local_message_id(*id))
                    .collect()
            })
            .unwrap_or_default()
    } else {
        Vec::new()
    };

    if !is_joined && !select_is_chat_listed(global, chat_id) && local_ids.is_empty() {
        return UpdateOutcome::no_change();
    }

    let mut next = leave_chat(global.clone(), chat_id);
    if !local_ids.is_empty() {
        next = delete_chat_messages(next, chat_id, &local_ids);
    }

    UpdateOutcome::changed(next)
}

pub(super) fn on_chat_inbox(global: &GlobalState, chat_id: ChatId, patch: ChatPatch) -> UpdateOutcome {
    UpdateOutcome::changed(update_chat(global.clone(), chat_id, patch, None))
}

pub(super) fn on_chat_list_type(
    global: &GlobalState,
    chat_id: ChatId,
    folder_id: FolderId,
) -> UpdateOutcome {
    UpdateOutcome::changed(update_chat_list_type(global.clone(), chat_id, folder_id))
}

pub(super) fn on_delete_profile_photos(
    global: &GlobalState,
    chat_id: ChatId,
    ids: &[PhotoId],
) -> UpdateOutcome {
    let has_photos = select_chat(global, chat_id).is_some_and(|chat| chat.photos.is_some());
    if !has_photos {
        return UpdateOutcome::no_change();
    }

    UpdateOutcome::changed(modify_chat(global.clone(), chat_id, |chat| {
        if let Some(photos) = chat.photos.as_mut() {
            photos.retain(|photo| !ids.contains(&photo.id));
        }
    }))
}

pub(super) fn on_show_invite(global: &GlobalState, data: DialogData) -> UpdateOutcome {
    let effects = global
        .by_tab_id
        .keys()
        .map(|tab_id| {
            Effect::Action(ActionIntent::ShowDialog {
                data: data.clone(),
                tab_id: *tab_id,
            })
        })
        .collect();

    UpdateOutcome::effects_only(effects)
}
