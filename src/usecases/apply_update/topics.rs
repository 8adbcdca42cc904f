use crate::{
    domain::{
        chat::ChatPatch,
        effects::{ActionIntent, Effect},
        global_state::GlobalState,
        ids::{ChatId, TopicId},
        topic::TopicPatch,
    },
    state::{
        reducers::{chats::update_chat, topics::update_topic},
        selectors::{select_chat, select_topic},
    },
};

use super::UpdateOutcome;

fn is_forum(global: &GlobalState, chat_id: ChatId) -> bool {
    select_chat(global, chat_id).is_some_and(|chat| chat.is_forum)
}

pub(super) fn on_pinned_topic(
    global: &GlobalState,
    chat_id: ChatId,
    topic_id: TopicId,
    is_pinned: bool,
) -> UpdateOutcome {
    if select_chat(global, chat_id).is_none() || select_topic(global, chat_id, topic_id).is_none() {
        return UpdateOutcome::no_change();
    }

    let next = update_topic(
        global.clone(),
        chat_id,
        topic_id,
        TopicPatch {
            is_pinned: Some(is_pinned),
            ..TopicPatch::default()
        },
    );

    UpdateOutcome::changed(next)
}

pub(super) fn on_pinned_topics_order(
    global: &GlobalState,
    chat_id: ChatId,
    order: Vec<TopicId>,
) -> UpdateOutcome {
    if select_chat(global, chat_id).is_none() {
        return UpdateOutcome::no_change();
    }

    let next = update_chat(
        global.clone(),
        chat_id,
        ChatPatch {
            ordered_pinned_topic_ids: Some(order),
            ..ChatPatch::default()
        },
        None,
    );

    UpdateOutcome::changed(next)
}

pub(super) fn on_topic(global: &GlobalState, chat_id: ChatId, topic_id: TopicId) -> UpdateOutcome {
    if !is_forum(global, chat_id) {
        return UpdateOutcome::no_change();
    }

    UpdateOutcome::effects_only(vec![Effect::Action(ActionIntent::LoadTopicById {
        chat_id,
        topic_id,
    })])
}

pub(super) fn on_topics(global: &GlobalState, chat_id: ChatId) -> UpdateOutcome {
    if !is_forum(global, chat_id) {
        return UpdateOutcome::no_change();
    }

    UpdateOutcome::effects_only(vec![Effect::Action(ActionIntent::LoadTopics {
        chat_id,
        force: true,
    })])
}

pub(super) fn on_view_forum_as_messages(
    global: &GlobalState,
    chat_id: ChatId,
    is_enabled: bool,
) -> UpdateOutcome {
    if !is_forum(global, chat_id) {
        return UpdateOutcome::no_change();
    }

    let next = update_chat(
        global.clone(),
        chat_id,
        ChatPatch {
            is_forum_as_messages: Some(is_enabled),
            ..ChatPatch::default()
        },
        None,
    );

    UpdateOutcome::changed(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::update::Update,
        test_support::{chat, state_with_chats, topic},
        usecases::apply_update::test_helpers::{apply, apply_changed},
    };

    fn forum_state() -> GlobalState {
        let mut forum = chat(-7);
        forum.is_forum = true;
        let mut global = state_with_chats(vec![forum, chat(8)]);
        global
            .chats
            .topics_by_chat_id
            .entry(-7)
            .or_default()
            .insert(3, topic(3));
        global
    }

    #[test]
    fn pinned_topic_requires_loaded_topic() {
        let global = forum_state();

        let next = apply_changed(
            &global,
            Update::UpdatePinnedTopic {
                chat_id: -7,
                topic_id: 3,
                is_pinned: true,
            },
        );
        assert!(next.chats.topics_by_chat_id[&-7][&3].is_pinned);

        let outcome = apply(
            &global,
            Update::UpdatePinnedTopic {
                chat_id: -7,
                topic_id: 4,
                is_pinned: true,
            },
        );
        assert!(outcome.is_no_change());
    }

    #[test]
    fn pinned_topics_order_is_stored_on_chat() {
        let next = apply_changed(
            &forum_state(),
            Update::UpdatePinnedTopicsOrder {
                chat_id: -7,
                order: vec![3, 1],
            },
        );

        assert_eq!(next.chats.by_id[&-7].ordered_pinned_topic_ids, vec![3, 1]);
    }

    #[test]
    fn topic_changes_request_reloads_for_forums_only() {
        let global = forum_state();

        let outcome = apply(&global, Update::UpdateTopic { chat_id: -7, topic_id: 3 });
        assert!(outcome.is_no_change());
        assert_eq!(
            outcome.effects,
            vec![Effect::Action(ActionIntent::LoadTopicById {
                chat_id: -7,
                topic_id: 3,
            })]
        );

        let outcome = apply(&global, Update::UpdateTopics { chat_id: -7 });
        assert_eq!(
            outcome.effects,
            vec![Effect::Action(ActionIntent::LoadTopics {
                chat_id: -7,
                force: true,
            })]
        );

        assert!(apply(&global, Update::UpdateTopics { chat_id: 8 }).effects.is_empty());
        assert!(apply(&global, Update::UpdateTopic { chat_id: 99, topic_id: 1 })
            .effects
            .is_empty());
    }

    #[test]
    fn forum_display_mode_applies_to_forums_only() {
        let global = forum_state();

        let next = apply_changed(
            &global,
            Update::UpdateViewForumAsMessages {
                chat_id: -7,
                is_enabled: true,
            },
        );
        assert!(next.chats.by_id[&-7].is_forum_as_messages);

        let outcome = apply(
            &global,
            Update::UpdateViewForumAsMessages {
                chat_id: 8,
                is_enabled: true,
            },
        );
        assert!(outcome.is_no_change());
    }
}
