use crate::domain::{
    global_state::GlobalState,
    ids::{ChatId, ThreadId},
    thread::ThreadParam,
};

/// Replaces one thread parameter. Threads left without parameters are dropped so that
/// clearing a value restores the absent state.
pub fn replace_thread_param(
    mut global: GlobalState,
    chat_id: ChatId,
    thread_id: ThreadId,
    param: ThreadParam,
) -> GlobalState {
    let threads = global.messages.thread_params.entry(chat_id).or_default();
    let params = threads.entry(thread_id).or_default();
    param.apply_to(params);

    if params.is_empty() {
        threads.remove(&thread_id);
    }
    if threads.is_empty() {
        global.messages.thread_params.remove(&chat_id);
    }

    global
}
