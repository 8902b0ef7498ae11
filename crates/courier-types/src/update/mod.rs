//! The update envelope.
//!
//! Each payload slot is hydrated on its own when its key is present. The
//! Bot API sends one payload per update in practice, but nothing here
//! enforces that: callers check the slots they care about, or iterate
//! [`Update::kinds`].


use courier_core::{get, hydrate_optional, hydrate_root, CourierError, Hydrate, Node};
use serde::Serialize;
use tracing::trace;

use crate::member::ChatMemberUpdated;
use crate::message::Message;
use crate::query::{CallbackQuery, InlineQuery};

/// One incoming update.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Update {
    pub update_id: i32,
    /// New incoming message of any kind.
    pub message: Option<Message>,
    /// New version of a message known to the bot.
    pub edited_message: Option<Message>,
    pub channel_post: Option<Message>,
    pub edited_channel_post: Option<Message>,
    pub inline_query: Option<InlineQuery>,
    pub callback_query: Option<CallbackQuery>,
    /// The bot's own membership changed in a chat.
    pub my_chat_member: Option<ChatMemberUpdated>,
    /// Another member's status changed. Requires `allowed_updates`.
    pub chat_member: Option<ChatMemberUpdated>,
}

/// Which payload slot of an [`Update`] is populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateKind {
    Message,
    EditedMessage,
    ChannelPost,
    EditedChannelPost,
    InlineQuery,
    CallbackQuery,
    MyChatMember,
    ChatMember,
}

impl UpdateKind {
    /// The protocol key of this slot.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::EditedMessage => "edited_message",
            Self::ChannelPost => "channel_post",
            Self::EditedChannelPost => "edited_channel_post",
            Self::InlineQuery => "inline_query",
            Self::CallbackQuery => "callback_query",
            Self::MyChatMember => "my_chat_member",
            Self::ChatMember => "chat_member",
        }
    }
}

impl std::fmt::Display for UpdateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Update {
    /// Hydrate an update from a decoded document, rejecting non-object roots.
    pub fn from_node<N: Node>(node: &N) -> Result<Self, CourierError> {
        let update: Self = hydrate_root(node)?;
        trace!(
            "hydrated update {} with {:?}",
            update.update_id,
            update.kinds()
        );
        Ok(update)
    }

    /// Populated slots, in slot order.
    pub fn kinds(&self) -> Vec<UpdateKind> {
        let slots = [
            (self.message.is_some(), UpdateKind::Message),
            (self.edited_message.is_some(), UpdateKind::EditedMessage),
            (self.channel_post.is_some(), UpdateKind::ChannelPost),
            (
                self.edited_channel_post.is_some(),
                UpdateKind::EditedChannelPost,
            ),
            (self.inline_query.is_some(), UpdateKind::InlineQuery),
            (self.callback_query.is_some(), UpdateKind::CallbackQuery),
            (self.my_chat_member.is_some(), UpdateKind::MyChatMember),
            (self.chat_member.is_some(), UpdateKind::ChatMember),
        ];
        slots
            .into_iter()
            .filter_map(|(present, kind)| present.then_some(kind))
            .collect()
    }

    /// No recognized payload slot is populated.
    pub fn is_empty(&self) -> bool {
        self.kinds().is_empty()
    }

    /// The first populated message-like slot, in slot order.
    pub fn any_message(&self) -> Option<&Message> {
        self.message
            .as_ref()
            .or(self.edited_message.as_ref())
            .or(self.channel_post.as_ref())
            .or(self.edited_channel_post.as_ref())
    }
}

impl Hydrate for Update {
    fn hydrate<N: Node>(node: &N) -> Self {
        Self {
            update_id: get(node, "update_id"),
            message: hydrate_optional(node, "message"),
            edited_message: hydrate_optional(node, "edited_message"),
            channel_post: hydrate_optional(node, "channel_post"),
            edited_channel_post: hydrate_optional(node, "edited_channel_post"),
            inline_query: hydrate_optional(node, "inline_query"),
            callback_query: hydrate_optional(node, "callback_query"),
            my_chat_member: hydrate_optional(node, "my_chat_member"),
            chat_member: hydrate_optional(node, "chat_member"),
        }
    }
}
