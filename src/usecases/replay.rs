//! Replays a recorded update stream through the store, the way a live session would
//! receive it.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::sync::mpsc;

use crate::{
    domain::{global_state::GlobalState, ids::TabId, tab::TabState, update::Update},
    infra::{
        clock::RuntimeClock,
        seed::load_seed,
        stubs::{LoggingActionSink, LoggingNotifier},
        update_source::read_updates,
    },
    usecases::{
        apply_update::UpdateDispatcher,
        context::AppContext,
        store::Store,
        update_loop::{self, LoopOptions, LoopReport},
    },
};

const DEFAULT_TAB_ID: TabId = 1;
const UPDATE_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayRequest {
    pub updates: PathBuf,
    pub seed: Option<PathBuf>,
    pub settle: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayOutcome {
    pub report: LoopReport,
    pub version: u64,
    pub actions_requested: usize,
    pub notifications_delivered: usize,
    pub state: GlobalState,
}

pub fn replay(context: &AppContext, request: &ReplayRequest) -> Result<ReplayOutcome> {
    let seed = initial_state(context, request.seed.as_deref())?;
    let updates = read_updates(&request.updates)?;
    tracing::info!(
        updates = updates.len(),
        path = %request.updates.display(),
        "replaying recorded updates"
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to build replay runtime")?;

    let options = LoopOptions {
        settle: request.settle || context.config.replay.settle_timers,
    };
    let mut store = Store::new(
        seed,
        UpdateDispatcher::new(context.dispatcher_config()),
        LoggingActionSink::default(),
        LoggingNotifier::default(),
    );

    let report = runtime.block_on(feed(&mut store, updates, options))?;

    Ok(ReplayOutcome {
        report,
        version: store.version(),
        actions_requested: store.actions().requested,
        notifications_delivered: store.notifier().delivered,
        state: store.state().clone(),
    })
}

fn initial_state(context: &AppContext, seed: Option<&Path>) -> Result<GlobalState> {
    let mut global = match seed {
        Some(path) => load_seed(path)?,
        None => GlobalState::default(),
    };

    if global.by_tab_id.is_empty() {
        global.by_tab_id.insert(DEFAULT_TAB_ID, TabState::new(DEFAULT_TAB_ID));
    }
    if let Some(current_user_id) = context.config.state.current_user_id {
        global.current_user_id = Some(current_user_id);
    }

    Ok(global)
}

async fn feed(
    store: &mut Store<LoggingActionSink, LoggingNotifier>,
    updates: Vec<Update>,
    options: LoopOptions,
) -> Result<LoopReport> {
    let clock = RuntimeClock::new();
    let (tx, rx) = mpsc::channel(UPDATE_CHANNEL_CAPACITY);

    let producer = tokio::spawn(async move {
        for update in updates {
            if tx.send(update).await.is_err() {
                break;
            }
        }
    });

    let report = update_loop::run(store, rx, &clock, options).await;
    producer.await.context("update producer task failed")?;

    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::infra::config::AppConfig;

    fn context(config: AppConfig) -> AppContext {
        AppContext::new(config, "test".to_owned())
    }

    const UPDATES: &str = r#"{"@type": "updateChat", "id": 3, "chat": {"title": "news"}, "noTopChatsRequest": true}
{"@type": "updateChatListType", "id": 3, "folderId": 0}
{"@type": "newMessage", "chatId": 3, "id": 10, "message": {"senderId": 99, "text": "hello"}}
{"@type": "updateChatTypingStatus", "id": 3, "typingStatus": {"userId": 99, "action": "typing", "timestamp": 1}}
{"@type": "updateChatPinned", "id": 3, "isPinned": true}
"#;

    #[test]
    fn replays_stream_into_final_state() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");
        let updates = dir.path().join("updates.jsonl");
        fs::write(&updates, UPDATES).expect("must write updates");

        let mut config = AppConfig::default();
        config.state.typing_status_clear_delay_ms = 10;

        let outcome = replay(
            &context(config),
            &ReplayRequest {
                updates,
                seed: None,
                settle: true,
            },
        )
        .expect("replay should succeed");

        let chat = &outcome.state.chats.by_id[&3];
        assert_eq!(chat.title, "news");
        assert_eq!(chat.unread_count, 1);
        assert_eq!(chat.last_message_id, Some(10));
        assert!(outcome.state.messages.thread_params.is_empty());
        assert_eq!(outcome.report.updates_received, 5);
        assert_eq!(outcome.report.tasks_fired, 1);
        assert_eq!(outcome.notifications_delivered, 1);
        assert_eq!(outcome.actions_requested, 0);
        assert_eq!(outcome.state.by_tab_id.keys().copied().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn seed_and_config_user_shape_initial_state() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");
        let seed = dir.path().join("seed.json");
        fs::write(&seed, r#"{"currentUserId": 5, "byTabId": {"4": {"id": 4}}}"#)
            .expect("must write seed");
        let mut config = AppConfig::default();
        config.state.current_user_id = Some(7);

        let global =
            initial_state(&context(config), Some(seed.as_path())).expect("seed should load");

        assert_eq!(global.current_user_id, Some(7));
        assert_eq!(global.by_tab_id.keys().copied().collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn missing_updates_file_fails() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");

        let result = replay(
            &context(AppConfig::default()),
            &ReplayRequest {
                updates: dir.path().join("absent.jsonl"),
                seed: None,
                settle: false,
            },
        );

        assert!(result.is_err());
    }
}
