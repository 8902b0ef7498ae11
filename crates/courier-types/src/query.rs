//! Inline and callback queries.

use courier_core::{get, hydrate_optional, Hydrate, Node};
use serde::Serialize;

use crate::location::Location;
use crate::message::Message;
use crate::user::User;

/// An incoming inline query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InlineQuery {
    pub id: String,
    pub from: Option<User>,
    /// Up to 256 characters.
    pub query: String,
    /// Offset of the results to return, controlled by the bot.
    pub offset: String,
    /// "sender", "private", "group", "supergroup", or "channel".
    pub chat_type: String,
    /// Only for bots that request user location.
    pub location: Option<Location>,
}

impl Hydrate for InlineQuery {
    fn hydrate<N: Node>(node: &N) -> Self {
        Self {
            id: get(node, "id"),
            from: hydrate_optional(node, "from"),
            query: get(node, "query"),
            offset: get(node, "offset"),
            chat_type: get(node, "chat_type"),
            location: hydrate_optional(node, "location"),
        }
    }
}

/// A press on an inline keyboard button.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CallbackQuery {
    pub id: String,
    pub from: Option<User>,
    /// The message carrying the button. Content and date may be missing for
    /// old messages.
    pub message: Option<Message>,
    /// Set instead of `message` for messages sent in inline mode.
    pub inline_message_id: String,
    pub chat_instance: String,
    /// Arbitrary button payload; clients may send anything here.
    pub data: String,
    pub game_short_name: String,
}

impl Hydrate for CallbackQuery {
    fn hydrate<N: Node>(node: &N) -> Self {
        Self {
            id: get(node, "id"),
            from: hydrate_optional(node, "from"),
            message: hydrate_optional(node, "message"),
            inline_message_id: get(node, "inline_message_id"),
            chat_instance: get(node, "chat_instance"),
            data: get(node, "data"),
            game_short_name: get(node, "game_short_name"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_objects_are_default() {
        assert_eq!(InlineQuery::hydrate(&json!({})), InlineQuery::default());
        assert_eq!(CallbackQuery::hydrate(&json!({})), CallbackQuery::default());
    }

    #[test]
    fn test_inline_query() {
        let node = json!({
            "id": "q-1",
            "from": {"id": 42, "first_name": "Ada"},
            "query": "ferris",
            "offset": "20",
            "chat_type": "sender",
            "location": {"longitude": 1.0, "latitude": 2.0},
        });
        let q = InlineQuery::hydrate(&node);
        assert_eq!(q.id, "q-1");
        assert_eq!(q.from, Some(User::hydrate(&node["from"])));
        assert_eq!(q.query, "ferris");
        assert_eq!(q.offset, "20");
        assert_eq!(q.chat_type, "sender");
        assert_eq!(q.location.as_ref().unwrap().latitude, 2.0);
    }

    #[test]
    fn test_callback_query_with_message() {
        let node = json!({
            "id": "cb-9",
            "from": {"id": 42, "first_name": "Ada"},
            "message": {
                "message_id": 77,
                "date": 1_600_000_000,
                "chat": {"id": 555, "type": "private"},
                "text": "Pick one",
            },
            "chat_instance": "-8123",
            "data": "choice:2",
        });
        let cb = CallbackQuery::hydrate(&node);
        assert_eq!(cb.id, "cb-9");
        assert_eq!(cb.message, Some(Message::hydrate(&node["message"])));
        assert_eq!(cb.message.as_ref().unwrap().text, "Pick one");
        assert_eq!(cb.chat_instance, "-8123");
        assert_eq!(cb.data, "choice:2");
        assert!(cb.inline_message_id.is_empty());
        assert!(cb.game_short_name.is_empty());
    }

    #[test]
    fn test_callback_query_inline_mode() {
        let cb = CallbackQuery::hydrate(&json!({
            "id": "cb-10",
            "inline_message_id": "AAAB",
            "game_short_name": "snake",
        }));
        assert!(cb.message.is_none());
        assert!(cb.from.is_none());
        assert_eq!(cb.inline_message_id, "AAAB");
        assert_eq!(cb.game_short_name, "snake");
    }
}
