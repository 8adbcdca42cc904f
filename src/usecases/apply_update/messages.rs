use crate::{
    domain::{
        effects::{Effect, Notification, ScheduledTask},
        global_state::GlobalState,
        ids::{is_local_message_id, ChatId, MessageId, ThreadId, MAIN_THREAD_ID},
        message::{Message, MessageUpdate},
        thread::{Draft, ThreadParam, TypingStatus},
        topic::TopicPatch,
    },
    state::{
        reducers::{
            chats::{
                add_unread_mentions, modify_chat, remove_unread_mentions, update_unread_reactions,
            },
            messages::{add_message, update_message},
            threads::replace_thread_param,
            topics::update_topic,
        },
        selectors::{
            select_chat, select_chat_messages, select_common_box_chat_id, select_draft,
            select_topic_from_message, select_typing_status,
        },
    },
};

use super::{DispatcherConfig, UpdateOutcome};

pub(super) fn on_typing_status(
    global: &GlobalState,
    chat_id: ChatId,
    thread_id: Option<ThreadId>,
    typing_status: Option<TypingStatus>,
    config: &DispatcherConfig,
) -> UpdateOutcome {
    let thread_id = thread_id.unwrap_or(MAIN_THREAD_ID);
    if typing_status.is_none() && select_typing_status(global, chat_id, thread_id).is_none() {
        return UpdateOutcome::no_change();
    }

    let expiry = typing_status.as_ref().map(|status| Effect::Schedule {
        delay_ms: config.typing_status_clear_delay_ms,
        task: ScheduledTask::ClearTypingStatus {
            chat_id,
            thread_id,
            timestamp: status.timestamp,
        },
    });

    let next = replace_thread_param(
        global.clone(),
        chat_id,
        thread_id,
        ThreadParam::TypingStatus(typing_status),
    );

    UpdateOutcome::changed(next).with_effects(expiry)
}

/// Stores the message and, unless the local user sent it live, bumps the unread
/// counters and asks for a notification.
pub(super) fn on_new_message(
    global: &GlobalState,
    chat_id: ChatId,
    message_id: MessageId,
    mut message: Message,
) -> UpdateOutcome {
    let Some(chat) = select_chat(global, chat_id) else {
        return UpdateOutcome::no_change();
    };
    let chat = chat.clone();

    message.id = message_id;
    message.chat_id = chat_id;
    let mut next = add_message(global.clone(), message.clone());

    let is_own_live_message =
        message.sender_id == global.current_user_id && !message.is_from_scheduled;
    // Client-built service messages never count, even before the local user id is known.
    if is_own_live_message || is_local_message_id(message_id) {
        return UpdateOutcome::changed(next);
    }

    next = modify_chat(next, chat_id, |chat| {
        chat.unread_count = chat.unread_count.saturating_add(1);
    });

    if message_id != 0 && message.has_unread_mention {
        next = add_unread_mentions(next, chat_id, &[message_id], true);
    }

    if chat.is_forum {
        if let Some(topic) = select_topic_from_message(&next, &message) {
            let (topic_id, unread_count) = (topic.id, topic.unread_count);
            next = update_topic(
                next,
                chat_id,
                topic_id,
                TopicPatch {
                    unread_count: Some(unread_count.saturating_add(1)),
                    ..TopicPatch::default()
                },
            );
        }
    }

    let notification = Effect::Notify(Notification::AboutMessage {
        chat: Box::new(chat),
        message: Box::new(message),
    });

    UpdateOutcome::changed(next).with_effects([notification])
}

/// Batch field update for messages of one channel (`channel_id`) or of the common
/// message box (`None`, chat resolved per message).
pub(super) fn on_messages_update(
    global: &GlobalState,
    channel_id: Option<ChatId>,
    ids: &[MessageId],
    message_update: &MessageUpdate,
) -> UpdateOutcome {
    let mut next = global.clone();
    let mut touched = false;

    for &id in ids {
        let Some(chat_id) = channel_id.or_else(|| select_common_box_chat_id(&next, id)) else {
            continue;
        };
        let Some(chat) = select_chat(&next, chat_id) else {
            continue;
        };
        let (unread_reactions_count, unread_mentions_count) =
            (chat.unread_reactions_count, chat.unread_mentions_count);
        let has_listed_mention = chat.unread_mentions.contains(&id);

        if let Some(reactions) = &message_update.reactions {
            if unread_reactions_count > 0 && !reactions.has_unread_foreign() {
                let remaining = chat
                    .unread_reactions
                    .iter()
                    .copied()
                    .filter(|reaction_id| *reaction_id != id)
                    .collect();
                next = update_unread_reactions(
                    next,
                    chat_id,
                    unread_reactions_count.saturating_sub(1),
                    remaining,
                );
                touched = true;
            }
        }

        if !message_update.has_unread_mention && unread_mentions_count > 0 && has_listed_mention {
            next = remove_unread_mentions(next, chat_id, &[id], true);
            touched = true;
        }

        let is_loaded =
            select_chat_messages(&next, chat_id).is_some_and(|messages| messages.contains_key(&id));
        if is_loaded {
            next = update_message(next, chat_id, id, message_update);
            touched = true;
        }
    }

    if !touched {
        return UpdateOutcome::no_change();
    }

    UpdateOutcome::changed(next)
}

pub(super) fn on_draft(
    global: &GlobalState,
    chat_id: ChatId,
    thread_id: Option<ThreadId>,
    draft: Option<Draft>,
) -> UpdateOutcome {
    if select_chat(global, chat_id).is_none() {
        return UpdateOutcome::no_change();
    }

    let thread_id = thread_id.unwrap_or(MAIN_THREAD_ID);
    let kept_effect_id =
        select_draft(global, chat_id, thread_id).and_then(|current| current.effect_id.clone());
    let draft = draft.map(|mut draft| {
        if draft.effect_id.is_none() {
            draft.effect_id = kept_effect_id;
        }
        draft
    });
    let draft_date = draft.as_ref().and_then(|draft| draft.date);

    let next = replace_thread_param(
        global.clone(),
        chat_id,
        thread_id,
        ThreadParam::Draft(draft),
    );
    let next = modify_chat(next, chat_id, |chat| chat.draft_date = draft_date);

    UpdateOutcome::changed(next)
}
