use courier_core::{get, Hydrate, Node};
use serde::Serialize;

/// A Telegram user or bot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct User {
    pub id: i64,
    pub is_bot: bool,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    /// IETF language tag of the user's language.
    pub language_code: String,
    /// Returned only in `getMe`.
    pub can_join_groups: bool,
    /// Returned only in `getMe`.
    pub can_read_all_group_messages: bool,
    /// Returned only in `getMe`.
    pub supports_inline_queries: bool,
}

impl User {
    /// Display name: first name, a space, then `@username` when one is set.
    ///
    /// Without a username the result keeps its trailing space (`"Ada "`).
    pub fn public_name(&self) -> String {
        let handle = if self.username.is_empty() {
            String::new()
        } else {
            format!("@{}", self.username)
        };
        format!("{} {handle}", self.first_name)
    }
}

impl Hydrate for User {
    fn hydrate<N: Node>(node: &N) -> Self {
        Self {
            id: get(node, "id"),
            is_bot: get(node, "is_bot"),
            first_name: get(node, "first_name"),
            last_name: get(node, "last_name"),
            username: get(node, "username"),
            language_code: get(node, "language_code"),
            can_join_groups: get(node, "can_join_groups"),
            can_read_all_group_messages: get(node, "can_read_all_group_messages"),
            supports_inline_queries: get(node, "supports_inline_queries"),
        }
    }
}
