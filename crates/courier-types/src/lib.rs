//! # courier-types
//!
//! Telegram Bot API records hydrated from a decoded document tree.
//! Docs: <https://core.telegram.org/bots/api#available-types>
//!
//! Every record owns its children outright: optional children are
//! `Option<T>`, lists are `Vec<T>`, and the two recursive edges
//! (a message's reply target and a pinned message) are boxed. Dropping an
//! [`Update`] releases the whole graph.

pub mod chat;
pub mod location;
pub mod member;
pub mod message;
pub mod query;
pub mod update;
pub mod user;

mod time;

pub use chat::{Chat, ChatKind, ChatPermissions, ChatPhoto};
pub use location::{ChatLocation, Location};
pub use member::{ChatInviteLink, ChatMember, ChatMemberStatus, ChatMemberUpdated};
pub use message::{Message, MessageEntity};
pub use query::{CallbackQuery, InlineQuery};
pub use update::{Update, UpdateKind};
pub use user::User;

/// How far a chat/message hydrate may expand pinned messages.
///
/// The Bot API never nests a pinned message inside a pinned message, and a
/// reply target never carries its own reply. `Pinned` encodes that bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Level {
    /// Top-level record: pinned messages are expanded one level.
    Full,
    /// Inside a pinned message or a reply target: no further pinned
    /// messages are expanded.
    Pinned,
}
