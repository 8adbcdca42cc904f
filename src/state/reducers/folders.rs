use crate::domain::{
    folder::ChatFolder,
    global_state::GlobalState,
    ids::FolderId,
};

/// Inserts or replaces the folder and appends it to the folder order when new. Any
/// pending invite for the folder is consumed.
pub fn upsert_chat_folder(mut global: GlobalState, id: FolderId, folder: ChatFolder) -> GlobalState {
    let folders = &mut global.chat_folders;
    folders.by_id.insert(id, folder);
    if !folders.ordered_ids.contains(&id) {
        folders.ordered_ids.push(id);
    }
    folders.invites.remove(&id);

    global
}

pub fn delete_chat_folder(mut global: GlobalState, id: FolderId) -> GlobalState {
    let folders = &mut global.chat_folders;
    folders.by_id.remove(&id);
    folders.ordered_ids.retain(|ordered_id| *ordered_id != id);
    folders.invites.remove(&id);

    global
}

pub fn replace_folders_order(mut global: GlobalState, ordered_ids: Vec<FolderId>) -> GlobalState {
    global.chat_folders.ordered_ids = ordered_ids;
    global
}

pub fn replace_recommended_folders(
    mut global: GlobalState,
    folders: Vec<ChatFolder>,
) -> GlobalState {
    global.chat_folders.recommended = folders;
    global
}
