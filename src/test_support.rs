use anyhow::Result;

use crate::{
    domain::{
        chat::Chat,
        effects::{ActionIntent, Notification},
        folder::ChatFolder,
        full_info::ChatMember,
        global_state::GlobalState,
        ids::{ChatId, FolderId, MessageId, TopicId, UserId},
        message::Message,
        topic::Topic,
    },
    usecases::contracts::{ActionSink, Notifier},
};

pub const SELF_USER_ID: UserId = 1;

pub fn chat(id: ChatId) -> Chat {
    Chat {
        title: format!("chat {id}"),
        ..Chat::new(id)
    }
}

/// State with the given chats, one tab (id 1) and the local user set.
pub fn state_with_chats(chats: Vec<Chat>) -> GlobalState {
    let mut global = GlobalState::with_tabs([1]);
    global.current_user_id = Some(SELF_USER_ID);
    global.chats.by_id = chats.into_iter().map(|chat| (chat.id, chat)).collect();
    global
}

pub fn message(chat_id: ChatId, id: MessageId, sender_id: Option<UserId>) -> Message {
    Message {
        id,
        chat_id,
        sender_id,
        text: format!("message {id}"),
        ..Message::default()
    }
}

pub fn topic(id: TopicId) -> Topic {
    Topic {
        id,
        title: format!("topic {id}"),
        ..Topic::default()
    }
}

pub fn folder(id: FolderId) -> ChatFolder {
    ChatFolder {
        id,
        title: format!("folder {id}"),
        ..ChatFolder::default()
    }
}

pub fn member(user_id: UserId, is_admin: bool) -> ChatMember {
    ChatMember {
        user_id,
        is_admin,
        ..ChatMember::default()
    }
}

#[derive(Debug, Default)]
pub struct RecordingActionSink {
    pub requested: Vec<ActionIntent>,
}

impl ActionSink for RecordingActionSink {
    fn request(&mut self, intent: &ActionIntent) -> Result<()> {
        self.requested.push(intent.clone());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub delivered: Vec<Notification>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notification: &Notification) -> Result<()> {
        self.delivered.push(notification.clone());
        Ok(())
    }
}
