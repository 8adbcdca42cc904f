//! Owns the current state snapshot and routes the effects every update asks for.

use std::collections::VecDeque;

use crate::{
    domain::{
        effects::{Effect, ScheduledTask},
        global_state::GlobalState,
        update::Update,
    },
    state::selectors::select_typing_status,
    usecases::{
        apply_update::UpdateDispatcher,
        contracts::{ActionSink, Notifier},
        scheduler::TaskScheduler,
        tab_actions::apply_tab_action,
    },
};

const ACTION_REQUEST_FAILED: &str = "STORE_ACTION_REQUEST_FAILED";
const NOTIFICATION_FAILED: &str = "STORE_NOTIFICATION_FAILED";
const TASK_SUPERSEDED: &str = "STORE_TASK_SUPERSEDED";

pub struct Store<A, N> {
    state: GlobalState,
    version: u64,
    dispatcher: UpdateDispatcher,
    scheduler: TaskScheduler,
    actions: A,
    notifier: N,
}

impl<A: ActionSink, N: Notifier> Store<A, N> {
    pub fn new(state: GlobalState, dispatcher: UpdateDispatcher, actions: A, notifier: N) -> Self {
        Self {
            state,
            version: 0,
            dispatcher,
            scheduler: TaskScheduler::default(),
            actions,
            notifier,
        }
    }

    pub fn state(&self) -> &GlobalState {
        &self.state
    }

    /// Number of commits so far.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn next_task_due(&self) -> Option<i64> {
        self.scheduler.next_due()
    }

    pub fn pending_tasks(&self) -> usize {
        self.scheduler.len()
    }

    pub fn actions(&self) -> &A {
        &self.actions
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Applies `update` and every follow-up update it queues, in order. Returns whether
    /// anything was committed.
    pub fn dispatch(&mut self, update: Update, now_ms: i64) -> bool {
        let mut pending = VecDeque::from([update]);
        let mut committed = false;

        while let Some(update) = pending.pop_front() {
            let outcome = self.dispatcher.apply(&self.state, update, now_ms);
            if let Some(next) = outcome.state {
                self.commit(next);
                committed = true;
            }

            for effect in outcome.effects {
                committed |= self.route(effect, now_ms, &mut pending);
            }
        }

        committed
    }

    /// Fires every scheduled task due at `now_ms`. Returns how many fired.
    pub fn run_due_tasks(&mut self, now_ms: i64) -> usize {
        let mut fired = 0;
        while let Some(task) = self.scheduler.pop_due(now_ms) {
            self.run_task(task, now_ms);
            fired += 1;
        }

        fired
    }

    fn commit(&mut self, next: GlobalState) {
        self.state = next;
        self.version += 1;
        tracing::trace!(version = self.version, "state committed");
    }

    fn route(&mut self, effect: Effect, now_ms: i64, pending: &mut VecDeque<Update>) -> bool {
        match effect {
            Effect::Dispatch(update) => pending.push_back(*update),
            Effect::Action(intent) => {
                if let Some(next) = apply_tab_action(&self.state, &intent) {
                    self.commit(next);
                    return true;
                }

                if let Err(error) = self.actions.request(&intent) {
                    tracing::warn!(
                        code = ACTION_REQUEST_FAILED,
                        intent = intent.name(),
                        error = ?error,
                        "action request failed"
                    );
                }
            }
            Effect::Notify(notification) => {
                if let Err(error) = self.notifier.notify(&notification) {
                    tracing::warn!(
                        code = NOTIFICATION_FAILED,
                        error = ?error,
                        "notification delivery failed"
                    );
                }
            }
            Effect::Schedule { delay_ms, task } => {
                let delay_ms = i64::try_from(delay_ms).unwrap_or(i64::MAX);
                self.scheduler.schedule(now_ms.saturating_add(delay_ms), task);
            }
        }

        false
    }

    fn run_task(&mut self, task: ScheduledTask, now_ms: i64) {
        match task {
            ScheduledTask::ClearTypingStatus {
                chat_id,
                thread_id,
                timestamp,
            } => {
                let is_current = select_typing_status(&self.state, chat_id, thread_id)
                    .is_some_and(|status| status.timestamp == timestamp);
                if !is_current {
                    tracing::debug!(
                        code = TASK_SUPERSEDED,
                        chat_id,
                        thread_id,
                        "typing status changed since expiry was scheduled"
                    );
                    return;
                }

                self.dispatch(
                    Update::UpdateChatTypingStatus {
                        id: chat_id,
                        thread_id: Some(thread_id),
                        typing_status: None,
                    },
                    now_ms,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::{anyhow, Result};

    use super::*;
    use crate::{
        domain::{
            chat::{ChatKind, ChatPatch, ListType},
            effects::{ActionIntent, Notification},
            ids::{is_local_message_id, ChatId, MAIN_THREAD_ID},
            tab::MessageList,
            thread::TypingStatus,
        },
        test_support::{
            chat, message, state_with_chats, RecordingActionSink, RecordingNotifier,
        },
    };

    type TestStore = Store<RecordingActionSink, RecordingNotifier>;

    fn store(global: GlobalState) -> TestStore {
        Store::new(
            global,
            UpdateDispatcher::default(),
            RecordingActionSink::default(),
            RecordingNotifier::default(),
        )
    }

    fn typing(chat_id: ChatId, timestamp: i64) -> Update {
        Update::UpdateChatTypingStatus {
            id: chat_id,
            thread_id: None,
            typing_status: Some(TypingStatus {
                user_id: Some(99),
                action: "typing".to_owned(),
                timestamp,
            }),
        }
    }

    #[test]
    fn commits_bump_version_and_no_change_does_not() {
        let mut store = store(state_with_chats(vec![chat(1)]));

        assert!(store.dispatch(
            Update::NewMessage {
                chat_id: 1,
                id: 5,
                message: message(1, 5, Some(99)),
            },
            0,
        ));
        assert_eq!(store.version(), 1);

        assert!(!store.dispatch(Update::UpdateChatJoin { id: 42 }, 0));
        assert_eq!(store.version(), 1);
        assert_eq!(store.notifier().delivered.len(), 1);
    }

    #[test]
    fn typing_status_expires_after_delay() {
        let mut store = store(state_with_chats(vec![chat(1)]));
        store.dispatch(typing(1, 100), 0);

        assert_eq!(store.next_task_due(), Some(6_000));
        assert_eq!(store.run_due_tasks(5_999), 0);
        assert!(select_typing_status(store.state(), 1, MAIN_THREAD_ID).is_some());

        assert_eq!(store.run_due_tasks(6_000), 1);
        assert!(select_typing_status(store.state(), 1, MAIN_THREAD_ID).is_none());
    }

    #[test]
    fn superseded_typing_expiry_keeps_newer_status() {
        let mut store = store(state_with_chats(vec![chat(1)]));
        store.dispatch(typing(1, 100), 0);
        store.dispatch(typing(1, 200), 3_000);

        assert_eq!(store.run_due_tasks(6_000), 1);
        let status = select_typing_status(store.state(), 1, MAIN_THREAD_ID)
            .expect("newer status should survive the stale expiry");
        assert_eq!(status.timestamp, 200);

        assert_eq!(store.run_due_tasks(9_000), 1);
        assert!(select_typing_status(store.state(), 1, MAIN_THREAD_ID).is_none());
    }

    #[test]
    fn channel_join_runs_follow_up_message_and_requests_loads() {
        let mut channel = chat(-100);
        channel.kind = ChatKind::Channel;
        channel.is_not_joined = true;
        let mut store = store(state_with_chats(vec![channel]));

        assert!(store.dispatch(Update::UpdateChatJoin { id: -100 }, 5_000));

        let messages = &store.state().messages.by_chat_id[&-100];
        assert_eq!(messages.len(), 1);
        assert!(messages.keys().all(|id| is_local_message_id(*id)));
        assert_eq!(store.state().chats.by_id[&-100].unread_count, 0);
        assert!(store.state().chats.list_ids[&ListType::Active].contains(&-100));
        assert_eq!(
            store.actions().requested,
            vec![
                ActionIntent::LoadChannelRecommendations { chat_id: -100 },
                ActionIntent::RequestChatUpdate { chat_id: -100 },
            ]
        );
        assert!(store.notifier().delivered.is_empty());
    }

    #[test]
    fn channel_join_before_user_is_known_stays_read_and_silent() {
        let mut channel = chat(-100);
        channel.kind = ChatKind::Channel;
        channel.is_not_joined = true;
        let mut global = state_with_chats(vec![channel]);
        global.current_user_id = None;
        let mut store = store(global);

        assert!(store.dispatch(Update::UpdateChatJoin { id: -100 }, 5_000));

        assert_eq!(store.state().messages.by_chat_id[&-100].len(), 1);
        assert_eq!(store.state().chats.by_id[&-100].unread_count, 0);
        assert!(store.notifier().delivered.is_empty());
    }

    #[test]
    fn forum_toggle_reopens_chat_in_tab_without_remote_requests() {
        let mut forum = chat(3);
        forum.is_forum = true;
        let mut global = state_with_chats(vec![forum]);
        global.chats.list_ids.insert(ListType::Active, vec![3]);
        let tab = global.by_tab_id.get_mut(&1).expect("tab 1 should exist");
        tab.message_lists.push(MessageList::main_thread(3));
        tab.forum_panel_chat_id = Some(3);
        let mut store = store(global);

        store.dispatch(
            Update::UpdateChat {
                id: 3,
                chat: ChatPatch {
                    is_forum: Some(false),
                    ..ChatPatch::default()
                },
                new_profile_photo: None,
                no_top_chats_request: false,
            },
            0,
        );

        let tab = &store.state().by_tab_id[&1];
        assert_eq!(tab.forum_panel_chat_id, None);
        assert_eq!(tab.message_lists, vec![MessageList::main_thread(3)]);
        assert!(store.actions().requested.is_empty());
    }

    #[test]
    fn read_inbox_closes_notifications() {
        let mut store = store(state_with_chats(vec![chat(1)]));

        store.dispatch(
            Update::UpdateChatInbox {
                id: 1,
                chat: ChatPatch {
                    last_read_inbox_message_id: Some(8),
                    ..ChatPatch::default()
                },
            },
            0,
        );

        // Inbox updates only merge counters; notification closing follows full chat updates.
        assert!(store.notifier().delivered.is_empty());

        store.dispatch(
            Update::UpdateChat {
                id: 1,
                chat: ChatPatch {
                    last_read_inbox_message_id: Some(9),
                    ..ChatPatch::default()
                },
                new_profile_photo: None,
                no_top_chats_request: true,
            },
            0,
        );
        assert_eq!(
            store.notifier().delivered,
            vec![Notification::CloseMessageNotifications {
                chat_id: 1,
                last_read_inbox_message_id: Some(9),
            }]
        );
    }

    #[derive(Debug, Default)]
    struct FailingSink {
        attempts: usize,
    }

    impl ActionSink for FailingSink {
        fn request(&mut self, _intent: &ActionIntent) -> Result<()> {
            self.attempts += 1;
            Err(anyhow!("network unavailable"))
        }
    }

    #[test]
    fn failed_action_request_does_not_stop_dispatch() {
        let mut store = Store::new(
            state_with_chats(vec![]),
            UpdateDispatcher::default(),
            FailingSink::default(),
            RecordingNotifier::default(),
        );

        assert!(store.dispatch(
            Update::UpdateChat {
                id: 4,
                chat: ChatPatch::default(),
                new_profile_photo: None,
                no_top_chats_request: false,
            },
            0,
        ));
        assert_eq!(store.actions().attempts, 1);
        assert!(store.state().chats.by_id.contains_key(&4));
    }
}
