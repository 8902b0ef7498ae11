//! Chats and their profile attributes.


use courier_core::{get, hydrate_optional, optional_with, Hydrate, Node};
use serde::Serialize;

use crate::location::ChatLocation;
use crate::message::Message;
use crate::Level;

/// A private chat, group, supergroup, or channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Chat {
    pub id: i64,
    /// Chat type: "private", "group", "supergroup", or "channel".
    #[serde(rename = "type")]
    pub chat_type: String,
    pub title: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    /// Returned only in `getChat`.
    pub photo: Option<ChatPhoto>,
    pub bio: String,
    pub description: String,
    pub invite_link: String,
    /// Most recent pinned message. Returned only in `getChat`.
    pub pinned_message: Option<Box<Message>>,
    /// Default member permissions for groups and supergroups.
    pub permissions: Option<ChatPermissions>,
    pub slow_mode_delay: i32,
    pub message_auto_delete_time: i32,
    pub sticker_set_name: String,
    pub can_set_sticker_set: bool,
    /// Discussion group of a channel, or the channel of a discussion group.
    pub linked_chat_id: i64,
    pub location: Option<ChatLocation>,
}

/// The `type` tag of a [`Chat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatKind {
    Private,
    Group,
    Supergroup,
    Channel,
    /// Missing or unrecognized tag.
    Unknown,
}

impl Chat {
    pub fn kind(&self) -> ChatKind {
        match self.chat_type.as_str() {
            "private" => ChatKind::Private,
            "group" => ChatKind::Group,
            "supergroup" => ChatKind::Supergroup,
            "channel" => ChatKind::Channel,
            _ => ChatKind::Unknown,
        }
    }

    /// Groups and supergroups.
    pub fn is_group(&self) -> bool {
        matches!(self.kind(), ChatKind::Group | ChatKind::Supergroup)
    }

    pub(crate) fn hydrate_at<N: Node>(node: &N, level: Level) -> Self {
        Self {
            id: get(node, "id"),
            chat_type: get(node, "type"),
            title: get(node, "title"),
            username: get(node, "username"),
            first_name: get(node, "first_name"),
            last_name: get(node, "last_name"),
            photo: hydrate_optional(node, "photo"),
            bio: get(node, "bio"),
            description: get(node, "description"),
            invite_link: get(node, "invite_link"),
            pinned_message: match level {
                Level::Full => optional_with(node, "pinned_message", |n| {
                    Box::new(Message::hydrate_at(n, Level::Pinned))
                }),
                Level::Pinned => None,
            },
            permissions: hydrate_optional(node, "permissions"),
            slow_mode_delay: get(node, "slow_mode_delay"),
            message_auto_delete_time: get(node, "message_auto_delete_time"),
            sticker_set_name: get(node, "sticker_set_name"),
            can_set_sticker_set: get(node, "can_set_sticker_set"),
            linked_chat_id: get(node, "linked_chat_id"),
            location: hydrate_optional(node, "location"),
        }
    }
}

impl Hydrate for Chat {
    fn hydrate<N: Node>(node: &N) -> Self {
        Self::hydrate_at(node, Level::Full)
    }
}

/// File ids of a chat's small and big profile photo.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChatPhoto {
    pub small_file_id: String,
    pub small_file_unique_id: String,
    pub big_file_id: String,
    pub big_file_unique_id: String,
}

impl Hydrate for ChatPhoto {
    fn hydrate<N: Node>(node: &N) -> Self {
        Self {
            small_file_id: get(node, "small_file_id"),
            small_file_unique_id: get(node, "small_file_unique_id"),
            big_file_id: get(node, "big_file_id"),
            big_file_unique_id: get(node, "big_file_unique_id"),
        }
    }
}

/// What non-administrators may do in a chat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChatPermissions {
    pub can_send_messages: bool,
    pub can_send_media_messages: bool,
    pub can_send_polls: bool,
    pub can_send_other_messages: bool,
    pub can_add_web_page_previews: bool,
    pub can_change_info: bool,
    pub can_invite_users: bool,
    pub can_pin_messages: bool,
}

impl Hydrate for ChatPermissions {
    fn hydrate<N: Node>(node: &N) -> Self {
        Self {
            can_send_messages: get(node, "can_send_messages"),
            can_send_media_messages: get(node, "can_send_media_messages"),
            can_send_polls: get(node, "can_send_polls"),
            can_send_other_messages: get(node, "can_send_other_messages"),
            can_add_web_page_previews: get(node, "can_add_web_page_previews"),
            can_change_info: get(node, "can_change_info"),
            can_invite_users: get(node, "can_invite_users"),
            can_pin_messages: get(node, "can_pin_messages"),
        }
    }
}
