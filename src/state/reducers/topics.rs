use crate::domain::{
    global_state::GlobalState,
    ids::{ChatId, TopicId},
    topic::TopicPatch,
};

/// Merges `patch` into a loaded topic. Topics are only created by topic loading, so an
/// unknown topic is left alone.
pub fn update_topic(
    mut global: GlobalState,
    chat_id: ChatId,
    topic_id: TopicId,
    patch: TopicPatch,
) -> GlobalState {
    if let Some(topic) = global
        .chats
        .topics_by_chat_id
        .get_mut(&chat_id)
        .and_then(|topics| topics.get_mut(&topic_id))
    {
        patch.apply_to(topic);
    }

    global
}
