use crate::{
    domain::{
        folder::ChatFolder,
        global_state::GlobalState,
        ids::{FolderId, TabId},
        tab::TabPatch,
    },
    state::reducers::{
        folders::{
            delete_chat_folder, replace_folders_order, replace_recommended_folders,
            upsert_chat_folder,
        },
        tabs::update_tab_state,
    },
};

use super::UpdateOutcome;

/// A folder payload upserts; its absence deletes the folder.
pub(super) fn on_chat_folder(
    global: &GlobalState,
    folder_id: FolderId,
    folder: Option<ChatFolder>,
) -> UpdateOutcome {
    match folder {
        Some(folder) => {
            UpdateOutcome::changed(upsert_chat_folder(global.clone(), folder_id, folder))
        }
        None => on_folder_deleted(global, folder_id),
    }
}

fn on_folder_deleted(global: &GlobalState, folder_id: FolderId) -> UpdateOutcome {
    let folders = &global.chat_folders;
    let position = folders.ordered_ids.iter().position(|id| *id == folder_id);
    let is_known = position.is_some()
        || folders.by_id.contains_key(&folder_id)
        || folders.invites.contains_key(&folder_id);
    if !is_known {
        return UpdateOutcome::no_change();
    }

    let mut next = global.clone();
    if let Some(position) = position {
        // Tab selectors are 1-based positions in the folder order; 0 means all chats.
        let deleted_index = position + 1;
        let shifted: Vec<(TabId, usize)> = global
            .by_tab_id
            .values()
            .filter_map(|tab| match tab.active_chat_folder {
                index if index == deleted_index => Some((tab.id, 0)),
                index if index > deleted_index => Some((tab.id, index - 1)),
                _ => None,
            })
            .collect();

        for (tab_id, active_chat_folder) in shifted {
            next = update_tab_state(
                next,
                tab_id,
                TabPatch {
                    active_chat_folder: Some(active_chat_folder),
                    ..TabPatch::default()
                },
            );
        }
    }

    UpdateOutcome::changed(delete_chat_folder(next, folder_id))
}

pub(super) fn on_folders_order(global: &GlobalState, ordered_ids: Vec<FolderId>) -> UpdateOutcome {
    UpdateOutcome::changed(replace_folders_order(global.clone(), ordered_ids))
}

pub(super) fn on_recommended_folders(
    global: &GlobalState,
    folders: Vec<ChatFolder>,
) -> UpdateOutcome {
    UpdateOutcome::changed(replace_recommended_folders(global.clone(), folders))
}
