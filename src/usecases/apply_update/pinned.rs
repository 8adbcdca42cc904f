use crate::{
    domain::{
        chat::ListType,
        global_state::GlobalState,
        ids::{ChatId, FolderId},
    },
    state::{
        reducers::chats::replace_pinned_ids,
        selectors::{select_chat_list_type, select_list_ids, select_pinned_ids},
    },
};

use super::{DispatcherConfig, UpdateOutcome};

/// Server-provided pin order replaces the stored one as is.
pub(super) fn on_pinned_chat_ids(
    global: &GlobalState,
    ids: Vec<ChatId>,
    folder_id: Option<FolderId>,
) -> UpdateOutcome {
    let list_type = ListType::from_folder_id(folder_id);
    UpdateOutcome::changed(replace_pinned_ids(global.clone(), list_type, ids))
}

pub(super) fn on_pinned_saved_dialog_ids(global: &GlobalState, ids: Vec<ChatId>) -> UpdateOutcome {
    UpdateOutcome::changed(replace_pinned_ids(global.clone(), ListType::Saved, ids))
}

pub(super) fn on_chat_pinned(
    global: &GlobalState,
    chat_id: ChatId,
    is_pinned: bool,
    config: &DispatcherConfig,
) -> UpdateOutcome {
    let Some(list_type) = select_chat_list_type(global, chat_id) else {
        return UpdateOutcome::no_change();
    };

    let capacity = (list_type == ListType::Active).then_some(config.max_active_pinned_chats);
    edit_pinned(global, list_type, chat_id, is_pinned, capacity)
}

pub(super) fn on_saved_dialog_pinned(
    global: &GlobalState,
    chat_id: ChatId,
    is_pinned: bool,
) -> UpdateOutcome {
    edit_pinned(global, ListType::Saved, chat_id, is_pinned, None)
}

fn edit_pinned(
    global: &GlobalState,
    list_type: ListType,
    chat_id: ChatId,
    is_pinned: bool,
    capacity: Option<usize>,
) -> UpdateOutcome {
    let current = select_pinned_ids(global, list_type);

    let next_ids = if !is_pinned {
        if !current.contains(&chat_id) {
            return UpdateOutcome::no_change();
        }
        current
            .iter()
            .copied()
            .filter(|id| *id != chat_id)
            .collect::<Vec<_>>()
    } else {
        if current.contains(&chat_id) || capacity == Some(0) {
            return UpdateOutcome::no_change();
        }
        let mut ids = current.to_vec();
        if let Some(capacity) = capacity {
            make_room(global, list_type, &mut ids, capacity);
        }
        ids.insert(0, chat_id);
        ids
    };

    UpdateOutcome::changed(replace_pinned_ids(global.clone(), list_type, next_ids))
}

/// Frees one slot in a full pinned list: ids whose chats left the live list go first,
/// then the oldest pins.
fn make_room(global: &GlobalState, list_type: ListType, ids: &mut Vec<ChatId>, capacity: usize) {
    if ids.len() < capacity {
        return;
    }

    let listed = select_list_ids(global, list_type);
    ids.retain(|id| listed.contains(id));

    if ids.len() >= capacity {
        tracing::debug!(
            list_type = ?list_type,
            capacity,
            dropped = ids.len() + 1 - capacity,
            "pinned list full, dropping oldest pins"
        );
        ids.truncate(capacity.saturating_sub(1));
    }
}
