use crate::domain::{
    global_state::GlobalState,
    ids::{is_local_message_id, ChatId, MessageId, UserId},
    message::{Message, MessageAction, MessageUpdate},
};

/// Stores the message and advances the chat's last message id for server messages.
pub fn add_message(mut global: GlobalState, message: Message) -> GlobalState {
    let chat_id = message.chat_id;
    let message_id = message.id;

    global
        .messages
        .by_chat_id
        .entry(chat_id)
        .or_default()
        .insert(message_id, message);

    if !is_local_message_id(message_id) {
        if let Some(chat) = global.chats.by_id.get_mut(&chat_id) {
            if chat.last_message_id.map_or(true, |last| last < message_id) {
                chat.last_message_id = Some(message_id);
            }
        }
    }

    global
}

pub fn update_message(
    mut global: GlobalState,
    chat_id: ChatId,
    message_id: MessageId,
    message_update: &MessageUpdate,
) -> GlobalState {
    if let Some(message) = global
        .messages
        .by_chat_id
        .get_mut(&chat_id)
        .and_then(|messages| messages.get_mut(&message_id))
    {
        message_update.apply_to(message);
    }

    global
}

pub fn delete_chat_messages(
    mut global: GlobalState,
    chat_id: ChatId,
    message_ids: &[MessageId],
) -> GlobalState {
    if let Some(messages) = global.messages.by_chat_id.get_mut(&chat_id) {
        for id in message_ids {
            messages.remove(id);
        }
        if messages.is_empty() {
            global.messages.by_chat_id.remove(&chat_id);
        }
    }

    global
}

/// Builds a client-side service message with a fresh local id, reserving the id in
/// the returned state.
pub fn build_local_message(
    mut global: GlobalState,
    chat_id: ChatId,
    sender_id: Option<UserId>,
    action: MessageAction,
    date: i64,
) -> (GlobalState, Message) {
    let id = global.messages.next_local_id;
    global.messages.next_local_id += 1;

    let message = Message {
        id,
        chat_id,
        sender_id,
        date,
        is_outgoing: true,
        action: Some(action),
        ..Message::default()
    };

    (global, message)
}
