use crate::{
    domain::{effects::ActionIntent, global_state::GlobalState},
    state::reducers::tabs::{add_dialog, close_forum_panel, open_chat},
};

/// Resolves a tab-local intent into the next state. Returns `None` for intents that
/// need the network layer.
pub fn apply_tab_action(global: &GlobalState, intent: &ActionIntent) -> Option<GlobalState> {
    let next = match intent {
        ActionIntent::CloseForumPanel { tab_id } => close_forum_panel(global.clone(), *tab_id),
        ActionIntent::OpenChat { chat_id, tab_id } => open_chat(global.clone(), *tab_id, *chat_id),
        ActionIntent::ShowDialog { data, tab_id } => {
            add_dialog(global.clone(), *tab_id, data.clone())
        }
        ActionIntent::LoadTopChats
        | ActionIntent::LoadChannelRecommendations { .. }
        | ActionIntent::RequestChatUpdate { .. }
        | ActionIntent::LoadChatJoinRequests { .. }
        | ActionIntent::LoadTopicById { .. }
        | ActionIntent::LoadTopics { .. } => return None,
    };

    Some(next)
}
