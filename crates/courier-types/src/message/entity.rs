use courier_core::{get, hydrate_optional, Hydrate, Node};
use serde::Serialize;

use crate::user::User;

/// A formatting span inside a message's text or caption.
///
/// `offset` and `length` count UTF-16 code units, as the Bot API does.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MessageEntity {
    /// "mention", "hashtag", "bot_command", "url", "bold", "text_link",
    /// "text_mention", ...
    #[serde(rename = "type")]
    pub kind: String,
    pub offset: i32,
    pub length: i32,
    /// For "text_link" only.
    pub url: String,
    /// For "text_mention" only.
    pub user: Option<User>,
    /// For "pre" only: the programming language of the block.
    pub language: String,
}

impl MessageEntity {
    /// The part of `text` this entity covers, or `None` when the span does
    /// not fit the text or splits a surrogate pair.
    pub fn text_in(&self, text: &str) -> Option<String> {
        let start = usize::try_from(self.offset).ok()?;
        let len = usize::try_from(self.length).ok()?;
        let units: Vec<u16> = text.encode_utf16().collect();
        let span = units.get(start..start.checked_add(len)?)?;
        String::from_utf16(span).ok()
    }
}

impl Hydrate for MessageEntity {
    fn hydrate<N: Node>(node: &N) -> Self {
        Self {
            kind: get(node, "type"),
            offset: get(node, "offset"),
            length: get(node, "length"),
            url: get(node, "url"),
            user: hydrate_optional(node, "user"),
            language: get(node, "language"),
        }
    }
}
