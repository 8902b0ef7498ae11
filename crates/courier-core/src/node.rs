//! Generic document nodes.
//!
//! Hydration never touches raw bytes. It walks an already-decoded tree of
//! maps, lists, and scalars through the [`Node`] trait, so any decoder that
//! produces such a tree can feed the record types.

/// A node in a decoded document tree.
pub trait Node: Sized {
    /// Child node stored under `key`. `None` when the key is absent or this
    /// node is not an object.
    fn child(&self, key: &str) -> Option<&Self>;

    /// Whether `key` is present on this object, whatever its value.
    fn has(&self, key: &str) -> bool {
        self.child(key).is_some()
    }

    fn is_object(&self) -> bool;

    fn is_null(&self) -> bool;

    /// The elements of a list node, in document order.
    fn elements(&self) -> Option<&[Self]>;

    /// Integral value. Floats are not converted here; see [`crate::scalar`].
    fn as_int(&self) -> Option<i64>;

    /// Any numeric value as a float.
    fn as_float(&self) -> Option<f64>;

    fn as_boolean(&self) -> Option<bool>;

    fn as_text(&self) -> Option<&str>;

    /// Short name of the node's shape, for diagnostics.
    fn kind(&self) -> &'static str;
}

impl Node for serde_json::Value {
    fn child(&self, key: &str) -> Option<&Self> {
        self.as_object()?.get(key)
    }

    fn is_object(&self) -> bool {
        serde_json::Value::is_object(self)
    }

    fn is_null(&self) -> bool {
        serde_json::Value::is_null(self)
    }

    fn elements(&self) -> Option<&[Self]> {
        self.as_array().map(Vec::as_slice)
    }

    fn as_int(&self) -> Option<i64> {
        serde_json::Value::as_i64(self)
    }

    fn as_float(&self) -> Option<f64> {
        serde_json::Value::as_f64(self)
    }

    fn as_boolean(&self) -> Option<bool> {
        serde_json::Value::as_bool(self)
    }

    fn as_text(&self) -> Option<&str> {
        serde_json::Value::as_str(self)
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "list",
            Self::Object(_) => "object",
        }
    }
}

impl Node for toml::Value {
    fn child(&self, key: &str) -> Option<&Self> {
        self.as_table()?.get(key)
    }

    fn is_object(&self) -> bool {
        self.is_table()
    }

    // TOML has no null.
    fn is_null(&self) -> bool {
        false
    }

    fn elements(&self) -> Option<&[Self]> {
        self.as_array().map(Vec::as_slice)
    }

    fn as_int(&self) -> Option<i64> {
        self.as_integer()
    }

    fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    fn as_boolean(&self) -> Option<bool> {
        self.as_bool()
    }

    fn as_text(&self) -> Option<&str> {
        self.as_str()
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Integer(_) | Self::Float(_) => "number",
            Self::Boolean(_) => "boolean",
            Self::Datetime(_) => "datetime",
            Self::Array(_) => "list",
            Self::Table(_) => "object",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_child_on_non_object_is_none() {
        let list = json!([1, 2, 3]);
        assert!(list.child("id").is_none());
        assert!(!list.has("id"));
    }

    #[test]
    fn test_json_present_null_is_present() {
        let node = json!({"photo": null});
        assert!(node.has("photo"));
        assert!(node.child("photo").is_some_and(Node::is_null));
    }

    #[test]
    fn test_json_elements_preserve_order() {
        let node = json!(["a", "b", "c"]);
        let texts: Vec<&str> = node
            .elements()
            .unwrap()
            .iter()
            .filter_map(Node::as_text)
            .collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_toml_node_reads_like_json() {
        let node: toml::Value = toml::from_str(
            r#"
            id = 7
            name = "ada"
            [chat]
            id = -1002000000000
            "#,
        )
        .unwrap();
        assert_eq!(node.child("id").and_then(Node::as_int), Some(7));
        assert_eq!(node.child("name").and_then(Node::as_text), Some("ada"));
        assert!(node.child("chat").is_some_and(Node::is_object));
        assert_eq!(
            node.child("chat")
                .and_then(|c| c.child("id"))
                .and_then(Node::as_int),
            Some(-1_002_000_000_000)
        );
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(json!({}).kind(), "object");
        assert_eq!(json!([]).kind(), "list");
        assert_eq!(json!("x").kind(), "string");
        assert_eq!(json!(1.5).kind(), "number");
        assert_eq!(json!(null).kind(), "null");
        assert_eq!(json!(true).kind(), "boolean");
    }
}
