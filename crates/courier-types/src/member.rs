//! Chat membership records.

use chrono::{DateTime, Utc};
use courier_core::{get, hydrate_optional, hydrate_required, Hydrate, Node};
use serde::Serialize;

use crate::chat::Chat;
use crate::time::unix_time;
use crate::user::User;

/// A user's membership in a chat.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChatMember {
    pub user: User,
    /// "creator", "administrator", "member", "restricted", "left", or
    /// "kicked".
    pub status: String,
}

/// The `status` tag of a [`ChatMember`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatMemberStatus {
    Creator,
    Administrator,
    Member,
    Restricted,
    Left,
    Kicked,
    Unknown,
}

impl ChatMember {
    pub fn status(&self) -> ChatMemberStatus {
        match self.status.as_str() {
            "creator" => ChatMemberStatus::Creator,
            "administrator" => ChatMemberStatus::Administrator,
            "member" => ChatMemberStatus::Member,
            "restricted" => ChatMemberStatus::Restricted,
            "left" => ChatMemberStatus::Left,
            "kicked" => ChatMemberStatus::Kicked,
            _ => ChatMemberStatus::Unknown,
        }
    }

    /// Whether the user is currently in the chat.
    pub fn is_present(&self) -> bool {
        matches!(
            self.status(),
            ChatMemberStatus::Creator
                | ChatMemberStatus::Administrator
                | ChatMemberStatus::Member
                | ChatMemberStatus::Restricted
        )
    }
}

impl Hydrate for ChatMember {
    fn hydrate<N: Node>(node: &N) -> Self {
        Self {
            user: hydrate_required(node, "user"),
            status: get(node, "status"),
        }
    }
}

/// An invite link for a chat.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChatInviteLink {
    /// Links created by other administrators have their tail replaced with "…".
    pub invite_link: String,
    pub creator: Option<User>,
    pub is_primary: bool,
    pub is_revoked: bool,
    /// Unix time.
    pub expire_date: i32,
    /// 1-99999.
    pub member_limit: i32,
}

impl ChatInviteLink {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        unix_time(self.expire_date)
    }
}

impl Hydrate for ChatInviteLink {
    fn hydrate<N: Node>(node: &N) -> Self {
        Self {
            invite_link: get(node, "invite_link"),
            creator: hydrate_optional(node, "creator"),
            is_primary: get(node, "is_primary"),
            is_revoked: get(node, "is_revoked"),
            expire_date: get(node, "expire_date"),
            member_limit: get(node, "member_limit"),
        }
    }
}

/// A change in a chat member's status.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChatMemberUpdated {
    pub chat: Chat,
    /// Who performed the change.
    pub from: User,
    /// Unix time.
    pub date: i32,
    pub old_chat_member: ChatMember,
    pub new_chat_member: ChatMember,
    /// Link used to join, for joins via invite link.
    pub invite_link: Option<ChatInviteLink>,
}

impl ChatMemberUpdated {
    pub fn changed_at(&self) -> Option<DateTime<Utc>> {
        unix_time(self.date)
    }

    /// The member was outside the chat before and is inside now.
    pub fn is_join(&self) -> bool {
        !self.old_chat_member.is_present() && self.new_chat_member.is_present()
    }

    /// The member was inside the chat before and is outside now.
    pub fn is_leave(&self) -> bool {
        self.old_chat_member.is_present() && !self.new_chat_member.is_present()
    }
}

impl Hydrate for ChatMemberUpdated {
    fn hydrate<N: Node>(node: &N) -> Self {
        Self {
            chat: hydrate_required(node, "chat"),
            from: hydrate_required(node, "from"),
            date: get(node, "date"),
            old_chat_member: hydrate_required(node, "old_chat_member"),
            new_chat_member: hydrate_required(node, "new_chat_member"),
            invite_link: hydrate_optional(node, "invite_link"),
        }
    }
}
