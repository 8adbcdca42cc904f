use crate::domain::{
    global_state::GlobalState,
    ids::{ChatId, TabId},
    tab::{DialogData, MessageList, TabPatch},
};

pub fn update_tab_state(mut global: GlobalState, tab_id: TabId, patch: TabPatch) -> GlobalState {
    if let Some(tab) = global.by_tab_id.get_mut(&tab_id) {
        patch.apply_to(tab);
    }

    global
}

/// Pushes the chat's main thread onto the tab's navigation stack unless it is already
/// the current list.
pub fn open_chat(mut global: GlobalState, tab_id: TabId, chat_id: ChatId) -> GlobalState {
    if let Some(tab) = global.by_tab_id.get_mut(&tab_id) {
        let list = MessageList::main_thread(chat_id);
        if tab.current_message_list() != Some(&list) {
            tab.message_lists.push(list);
        }
    }

    global
}

pub fn close_forum_panel(global: GlobalState, tab_id: TabId) -> GlobalState {
    update_tab_state(
        global,
        tab_id,
        TabPatch {
            forum_panel_chat_id: Some(None),
            ..TabPatch::default()
        },
    )
}

pub fn add_dialog(mut global: GlobalState, tab_id: TabId, data: DialogData) -> GlobalState {
    if let Some(tab) = global.by_tab_id.get_mut(&tab_id) {
        tab.dialogs.push(data);
    }

    global
}
