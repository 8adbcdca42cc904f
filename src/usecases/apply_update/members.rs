use crate::{
    domain::{
        chat::ChatPatch,
        effects::{ActionIntent, Effect},
        full_info::{ChatMember, FullInfoPatch},
        global_state::GlobalState,
        ids::{ChatId, UserId},
        update::MembersChange,
    },
    state::{
        reducers::{chats::update_chat, full_info::update_chat_full_info},
        selectors::{select_chat, select_chat_full_info},
    },
};

use super::UpdateOutcome;

pub(super) fn on_full_info(
    global: &GlobalState,
    chat_id: ChatId,
    full_info: FullInfoPatch,
) -> UpdateOutcome {
    UpdateOutcome::changed(update_chat_full_info(global.clone(), chat_id, full_info))
}

/// Applies one member-list mutation to loaded full info and recomputes the member
/// count and the admin index from the resulting list.
pub(super) fn on_members(
    global: &GlobalState,
    chat_id: ChatId,
    replaced_members: Option<Vec<ChatMember>>,
    added_member: Option<ChatMember>,
    deleted_member_id: Option<UserId>,
) -> UpdateOutcome {
    let Some(full_info) = select_chat_full_info(global, chat_id) else {
        return UpdateOutcome::no_change();
    };
    let Some(change) = MembersChange::from_wire(replaced_members, added_member, deleted_member_id)
    else {
        return UpdateOutcome::no_change();
    };

    let current = full_info.members.as_deref().unwrap_or_default();
    let members = match change {
        MembersChange::Replaced(members) => members,
        MembersChange::Added(member) => {
            if current.iter().any(|existing| existing.user_id == member.user_id) {
                return UpdateOutcome::no_change();
            }
            let mut members = current.to_vec();
            members.push(member);
            members
        }
        MembersChange::Deleted(user_id) => {
            if !current.iter().any(|existing| existing.user_id == user_id) {
                return UpdateOutcome::no_change();
            }
            current
                .iter()
                .filter(|existing| existing.user_id != user_id)
                .cloned()
                .collect()
        }
    };

    let members_count = u32::try_from(members.len()).unwrap_or(u32::MAX);
    let next = update_chat(
        global.clone(),
        chat_id,
        ChatPatch {
            members_count: Some(members_count),
            ..ChatPatch::default()
        },
        None,
    );
    let next = update_chat_full_info(next, chat_id, FullInfoPatch::with_members(members));

    UpdateOutcome::changed(next)
}

pub(super) fn on_pending_join_requests(
    global: &GlobalState,
    chat_id: ChatId,
    requests_pending: u32,
    recent_requester_ids: Vec<UserId>,
) -> UpdateOutcome {
    if select_chat(global, chat_id).is_none() {
        return UpdateOutcome::no_change();
    }

    let next = update_chat_full_info(
        global.clone(),
        chat_id,
        FullInfoPatch {
            requests_pending: Some(requests_pending),
            recent_requester_ids: Some(recent_requester_ids),
            ..FullInfoPatch::default()
        },
    );

    UpdateOutcome::changed(next).with_effects([Effect::Action(
        ActionIntent::LoadChatJoinRequests { chat_id },
    )])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{full_info::ChatFullInfo, update::Update},
        test_support::{chat, member, state_with_chats},
        usecases::apply_update::test_helpers::{apply, apply_changed},
    };

    fn state_with_members(members: Vec<ChatMember>) -> GlobalState {
        let mut global = state_with_chats(vec![chat(-5)]);
        global.chats.full_info_by_id.insert(
            -5,
            ChatFullInfo {
                members: Some(members),
                ..ChatFullInfo::default()
            },
        );
        global
    }

    fn members_update(
        replaced: Option<Vec<ChatMember>>,
        added: Option<ChatMember>,
        deleted: Option<UserId>,
    ) -> Update {
        Update::UpdateChatMembers {
            id: -5,
            replaced_members: replaced,
            added_member: added,
            deleted_member_id: deleted,
        }
    }

    fn member_ids(global: &GlobalState) -> Vec<UserId> {
        global.chats.full_info_by_id[&-5]
            .members
            .iter()
            .flatten()
            .map(|member| member.user_id)
            .collect()
    }

    #[test]
    fn members_update_without_full_info_is_no_change() {
        let global = state_with_chats(vec![chat(-5)]);

        let outcome = apply(&global, members_update(None, Some(member(2, false)), None));

        assert!(outcome.is_no_change());
    }

    #[test]
    fn added_member_updates_count_and_admin_index() {
        let global = state_with_members(vec![member(1, false)]);

        let next = apply_changed(&global, members_update(None, Some(member(2, true)), None));

        assert_eq!(member_ids(&next), vec![1, 2]);
        assert_eq!(next.chats.by_id[&-5].members_count, Some(2));
        let admins = next.chats.full_info_by_id[&-5]
            .admin_members_by_id
            .as_ref()
            .expect("admin index should be rebuilt");
        assert_eq!(admins.keys().copied().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn adding_existing_member_is_no_change() {
        let global = state_with_members(vec![member(1, false)]);

        let outcome = apply(&global, members_update(None, Some(member(1, true)), None));

        assert!(outcome.is_no_change());
    }

    #[test]
    fn deleted_member_is_removed() {
        let global = state_with_members(vec![member(1, true), member(2, false)]);

        let next = apply_changed(&global, members_update(None, None, Some(1)));

        assert_eq!(member_ids(&next), vec![2]);
        assert_eq!(next.chats.by_id[&-5].members_count, Some(1));
        let admins = next.chats.full_info_by_id[&-5]
            .admin_members_by_id
            .as_ref()
            .expect("admin index should be rebuilt");
        assert!(admins.is_empty());
    }

    #[test]
    fn deleting_unknown_member_is_no_change() {
        let global = state_with_members(vec![member(1, false)]);

        assert!(apply(&global, members_update(None, None, Some(9))).is_no_change());
    }

    #[test]
    fn replacement_wins_over_other_forms() {
        let global = state_with_members(vec![member(1, false)]);

        let next = apply_changed(
            &global,
            members_update(
                Some(vec![member(7, false), member(8, false)]),
                Some(member(9, false)),
                Some(7),
            ),
        );

        assert_eq!(member_ids(&next), vec![7, 8]);
        assert_eq!(next.chats.by_id[&-5].members_count, Some(2));
    }

    #[test]
    fn pending_join_requests_are_stored_and_reloaded() {
        let global = state_with_chats(vec![chat(-5)]);

        let outcome = apply(
            &global,
            Update::UpdatePendingJoinRequests {
                chat_id: -5,
                requests_pending: 2,
                recent_requester_ids: vec![10, 11],
            },
        );

        let next = outcome.state.expect("join requests should be stored");
        let full_info = &next.chats.full_info_by_id[&-5];
        assert_eq!(full_info.requests_pending, Some(2));
        assert_eq!(full_info.recent_requester_ids, Some(vec![10, 11]));
        assert_eq!(
            outcome.effects,
            vec![Effect::Action(ActionIntent::LoadChatJoinRequests { chat_id: -5 })]
        );
    }

    #[test]
    fn pending_join_requests_for_unknown_chat_is_no_change() {
        let outcome = apply(
            &state_with_chats(vec![]),
            Update::UpdatePendingJoinRequests {
                chat_id: -5,
                requests_pending: 1,
                recent_requester_ids: vec![],
            },
        );

        assert!(outcome.is_no_change());
        assert!(outcome.effects.is_empty());
    }

    #[test]
    fn full_info_update_creates_entry() {
        let next = apply_changed(
            &state_with_chats(vec![]),
            Update::UpdateChatFullInfo {
                id: 3,
                full_info: FullInfoPatch {
                    linked_chat_id: Some(-100),
                    ..FullInfoPatch::default()
                },
            },
        );

        assert_eq!(next.chats.full_info_by_id[&3].linked_chat_id, Some(-100));
    }
}
