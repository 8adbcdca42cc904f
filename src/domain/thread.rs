use serde::{Deserialize, Serialize};

use super::ids::UserId;

/// Someone is typing (or uploading, recording...) in a thread.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypingStatus {
    pub user_id: Option<UserId>,
    pub action: String,
    /// Set by the transport when the status was received, in unix ms.
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Draft {
    pub text: String,
    pub reply_to_message_id: Option<i64>,
    pub date: Option<i64>,
    pub effect_id: Option<String>,
}

/// Per-(chat, thread) parameters that do not belong to the chat record itself.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThreadParams {
    pub typing_status: Option<TypingStatus>,
    pub draft: Option<Draft>,
}

impl ThreadParams {
    pub fn is_empty(&self) -> bool {
        self.typing_status.is_none() && self.draft.is_none()
    }
}

/// Names one replaceable field of [`ThreadParams`] together with its new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThreadParam {
    TypingStatus(Option<TypingStatus>),
    Draft(Option<Draft>),
}

impl ThreadParam {
    pub fn apply_to(self, params: &mut ThreadParams) {
        match self {
            Self::TypingStatus(value) => params.typing_status = value,
            Self::Draft(value) => params.draft = value,
        }
    }
}
