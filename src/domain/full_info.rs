use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ids::UserId;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChatMember {
    pub user_id: UserId,
    pub inviter_id: Option<UserId>,
    pub joined_date: Option<i64>,
    pub is_owner: bool,
    pub is_admin: bool,
}

impl ChatMember {
    pub fn is_admin_or_owner(&self) -> bool {
        self.is_owner || self.is_admin
    }
}

/// Extended chat metadata, loaded separately from the chat itself.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChatFullInfo {
    pub about: Option<String>,
    pub members: Option<Vec<ChatMember>>,
    /// Derived from `members`: owners and admins keyed by user id.
    pub admin_members_by_id: Option<BTreeMap<UserId, ChatMember>>,
    pub requests_pending: Option<u32>,
    pub recent_requester_ids: Option<Vec<UserId>>,
    pub linked_chat_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FullInfoPatch {
    pub about: Option<String>,
    pub members: Option<Vec<ChatMember>>,
    pub admin_members_by_id: Option<BTreeMap<UserId, ChatMember>>,
    pub requests_pending: Option<u32>,
    pub recent_requester_ids: Option<Vec<UserId>>,
    pub linked_chat_id: Option<i64>,
}

impl FullInfoPatch {
    /// Member list replacement with the admin index rebuilt from it.
    pub fn with_members(members: Vec<ChatMember>) -> Self {
        let admin_members_by_id = members
            .iter()
            .filter(|member| member.is_admin_or_owner())
            .map(|member| (member.user_id, member.clone()))
            .collect();

        Self {
            members: Some(members),
            admin_members_by_id: Some(admin_members_by_id),
            ..Self::default()
        }
    }

    pub fn apply_to(self, full_info: &mut ChatFullInfo) {
        if self.about.is_some() {
            full_info.about = self.about;
        }
        if self.members.is_some() {
            full_info.members = self.members;
        }
        if self.admin_members_by_id.is_some() {
            full_info.admin_members_by_id = self.admin_members_by_id;
        }
        if self.requests_pending.is_some() {
            full_info.requests_pending = self.requests_pending;
        }
        if self.recent_requester_ids.is_some() {
            full_info.recent_requester_ids = self.recent_requester_ids;
        }
        if self.linked_chat_id.is_some() {
            full_info.linked_chat_id = self.linked_chat_id;
        }
    }
}
