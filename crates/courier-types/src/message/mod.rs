//! Messages and their formatting entities.

mod entity;


pub use entity::MessageEntity;

use chrono::{DateTime, Utc};
use courier_core::{
    get, hydrate_array, hydrate_optional, optional_with, required_with, Hydrate, Node,
};
use serde::Serialize;

use crate::chat::Chat;
use crate::location::Location;
use crate::time::unix_time;
use crate::user::User;
use crate::Level;

/// A message in a chat.
///
/// Media, polls, payments, and voice-chat service fields are not modeled.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Message {
    pub message_id: i32,
    /// Sender. Empty for messages sent to channels.
    pub from: Option<User>,
    /// Chat the message was sent on behalf of.
    pub sender_chat: Option<Chat>,
    /// Unix time.
    pub date: i32,
    /// Conversation the message belongs to.
    pub chat: Chat,
    pub forward_from: Option<User>,
    pub forward_from_chat: Option<Chat>,
    pub forward_from_message_id: i32,
    pub forward_signature: String,
    pub forward_sender_name: String,
    pub forward_date: i32,
    /// Only `message_id`, `date`, and `chat` are populated.
    pub reply_to_message: Option<Box<Message>>,
    pub via_bot: Option<User>,
    pub edit_date: i32,
    pub media_group_id: String,
    pub author_signature: String,
    pub text: String,
    pub entities: Vec<MessageEntity>,
    pub caption: String,
    pub caption_entities: Vec<MessageEntity>,
    pub location: Option<Location>,
    /// New members added to the group (the bot may be one of them).
    pub new_chat_members: Vec<User>,
    pub left_chat_member: Option<User>,
    pub new_chat_title: String,
    pub delete_chat_photo: bool,
    pub group_chat_created: bool,
    pub supergroup_chat_created: bool,
    pub channel_chat_created: bool,
    pub migrate_to_chat_id: i64,
    pub migrate_from_chat_id: i64,
    pub pinned_message: Option<Box<Message>>,
    pub connected_website: String,
}

impl Message {
    pub fn sent_at(&self) -> Option<DateTime<Utc>> {
        unix_time(self.date)
    }

    pub fn edited_at(&self) -> Option<DateTime<Utc>> {
        unix_time(self.edit_date)
    }

    pub fn forwarded_at(&self) -> Option<DateTime<Utc>> {
        unix_time(self.forward_date)
    }

    /// Entities together with the text they cover, body first, then caption.
    pub fn entity_texts(&self) -> impl Iterator<Item = (&MessageEntity, Option<String>)> + '_ {
        let body = self.entities.iter().map(|e| (e, e.text_in(&self.text)));
        let caption = self
            .caption_entities
            .iter()
            .map(|e| (e, e.text_in(&self.caption)));
        body.chain(caption)
    }

    pub(crate) fn hydrate_at<N: Node>(node: &N, level: Level) -> Self {
        Self {
            message_id: get(node, "message_id"),
            from: hydrate_optional(node, "from"),
            sender_chat: optional_with(node, "sender_chat", |n| Chat::hydrate_at(n, level)),
            date: get(node, "date"),
            chat: required_with(node, "chat", |n| Chat::hydrate_at(n, level)),
            forward_from: hydrate_optional(node, "forward_from"),
            forward_from_chat: optional_with(node, "forward_from_chat", |n| {
                Chat::hydrate_at(n, level)
            }),
            forward_from_message_id: get(node, "forward_from_message_id"),
            forward_signature: get(node, "forward_signature"),
            forward_sender_name: get(node, "forward_sender_name"),
            forward_date: get(node, "forward_date"),
            reply_to_message: optional_with(node, "reply_to_message", |n| {
                Box::new(Self::hydrate_reply(n))
            }),
            via_bot: hydrate_optional(node, "via_bot"),
            edit_date: get(node, "edit_date"),
            media_group_id: get(node, "media_group_id"),
            author_signature: get(node, "author_signature"),
            text: get(node, "text"),
            entities: hydrate_array(node, "entities"),
            caption: get(node, "caption"),
            caption_entities: hydrate_array(node, "caption_entities"),
            location: hydrate_optional(node, "location"),
            new_chat_members: hydrate_array(node, "new_chat_members"),
            left_chat_member: hydrate_optional(node, "left_chat_member"),
            new_chat_title: get(node, "new_chat_title"),
            delete_chat_photo: get(node, "delete_chat_photo"),
            group_chat_created: get(node, "group_chat_created"),
            supergroup_chat_created: get(node, "supergroup_chat_created"),
            channel_chat_created: get(node, "channel_chat_created"),
            migrate_to_chat_id: get(node, "migrate_to_chat_id"),
            migrate_from_chat_id: get(node, "migrate_from_chat_id"),
            pinned_message: match level {
                Level::Full => optional_with(node, "pinned_message", |n| {
                    Box::new(Self::hydrate_at(n, Level::Pinned))
                }),
                Level::Pinned => None,
            },
            connected_website: get(node, "connected_website"),
        }
    }

    /// Reply targets carry only their identity and conversation.
    fn hydrate_reply<N: Node>(node: &N) -> Self {
        Self {
            message_id: get(node, "message_id"),
            date: get(node, "date"),
            chat: required_with(node, "chat", |n| Chat::hydrate_at(n, Level::Pinned)),
            ..Self::default()
        }
    }
}

impl Hydrate for Message {
    fn hydrate<N: Node>(node: &N) -> Self {
        Self::hydrate_at(node, Level::Full)
    }
}
