use crate::domain::{
    full_info::{ChatFullInfo, FullInfoPatch},
    global_state::GlobalState,
    ids::ChatId,
};

pub fn update_chat_full_info(
    mut global: GlobalState,
    chat_id: ChatId,
    patch: FullInfoPatch,
) -> GlobalState {
    let full_info = global
        .chats
        .full_info_by_id
        .entry(chat_id)
        .or_insert_with(ChatFullInfo::default);
    patch.apply_to(full_info);

    global
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_into_existing_full_info() {
        let global = update_chat_full_info(
            GlobalState::default(),
            1,
            FullInfoPatch {
                about: Some("news".to_owned()),
                ..FullInfoPatch::default()
            },
        );

        let global = update_chat_full_info(
            global,
            1,
            FullInfoPatch {
                requests_pending: Some(2),
                ..FullInfoPatch::default()
            },
        );

        let full_info = &global.chats.full_info_by_id[&1];
        assert_eq!(full_info.about.as_deref(), Some("news"));
        assert_eq!(full_info.requests_pending, Some(2));
    }
}
