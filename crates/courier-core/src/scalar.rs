//! The scalar accessor.
//!
//! [`get`] reads a named field and coerces it to a primitive. A missing key,
//! a non-object node, or a value of the wrong type all produce the target
//! type's zero value. Absence is never an error at this layer.

use crate::node::Node;

/// A primitive that can be read out of a document node.
pub trait Scalar: Default {
    /// Coerce `node` to `Self`, or `None` when its type does not fit.
    fn from_node<N: Node>(node: &N) -> Option<Self>;
}

/// Read `key` from `node` as `T`, falling back to `T::default()`.
pub fn get<T: Scalar, N: Node>(node: &N, key: &str) -> T {
    node.child(key).and_then(T::from_node).unwrap_or_default()
}

impl Scalar for i64 {
    fn from_node<N: Node>(node: &N) -> Option<Self> {
        node.as_int().or_else(|| {
            let f = node.as_float()?;
            // Truncate toward zero; out-of-range floats are a mismatch.
            (f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64).then(|| f as i64)
        })
    }
}

impl Scalar for i32 {
    fn from_node<N: Node>(node: &N) -> Option<Self> {
        i64::from_node(node).and_then(|v| i32::try_from(v).ok())
    }
}

impl Scalar for f64 {
    fn from_node<N: Node>(node: &N) -> Option<Self> {
        node.as_float()
    }
}

impl Scalar for f32 {
    fn from_node<N: Node>(node: &N) -> Option<Self> {
        node.as_float().map(|f| f as f32)
    }
}

impl Scalar for bool {
    fn from_node<N: Node>(node: &N) -> Option<Self> {
        node.as_boolean()
    }
}

impl Scalar for String {
    fn from_node<N: Node>(node: &N) -> Option<Self> {
        node.as_text().map(str::to_owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_key_yields_zero_values() {
        let node = json!({});
        assert_eq!(get::<String, _>(&node, "text"), "");
        assert_eq!(get::<i32, _>(&node, "date"), 0);
        assert_eq!(get::<i64, _>(&node, "id"), 0);
        assert!(!get::<bool, _>(&node, "is_bot"));
        assert_eq!(get::<f64, _>(&node, "latitude"), 0.0);
        assert_eq!(get::<f32, _>(&node, "latitude"), 0.0);
    }

    #[test]
    fn test_non_object_node_yields_zero_values() {
        let node = json!(["id", 5]);
        assert_eq!(get::<i64, _>(&node, "id"), 0);
        assert_eq!(get::<String, _>(&json!("text"), "text"), "");
    }

    #[test]
    fn test_wrong_type_yields_zero_values() {
        let node = json!({
            "id": "12345",
            "is_bot": 1,
            "first_name": 42,
            "latitude": "north",
        });
        assert_eq!(get::<i64, _>(&node, "id"), 0);
        assert!(!get::<bool, _>(&node, "is_bot"));
        assert_eq!(get::<String, _>(&node, "first_name"), "");
        assert_eq!(get::<f64, _>(&node, "latitude"), 0.0);
    }

    #[test]
    fn test_null_yields_zero_values() {
        let node = json!({"username": null, "id": null});
        assert_eq!(get::<String, _>(&node, "username"), "");
        assert_eq!(get::<i64, _>(&node, "id"), 0);
    }

    #[test]
    fn test_wide_identifiers_round_trip() {
        let node = json!({
            "id": -1_002_000_000_000_i64,
            "migrate_to_chat_id": 9_007_199_254_740_991_i64,
        });
        assert_eq!(get::<i64, _>(&node, "id"), -1_002_000_000_000);
        assert_eq!(
            get::<i64, _>(&node, "migrate_to_chat_id"),
            9_007_199_254_740_991
        );
    }

    #[test]
    fn test_i32_out_of_range_defaults() {
        let node = json!({"message_id": 5_000_000_000_i64, "date": -7});
        assert_eq!(get::<i32, _>(&node, "message_id"), 0);
        assert_eq!(get::<i32, _>(&node, "date"), -7);
    }

    #[test]
    fn test_float_truncates_into_integers() {
        let node = json!({"heading": 12.9, "live_period": -3.5});
        assert_eq!(get::<i32, _>(&node, "heading"), 12);
        assert_eq!(get::<i32, _>(&node, "live_period"), -3);
    }

    #[test]
    fn test_integer_widens_into_floats() {
        let node = json!({"longitude": 30});
        assert_eq!(get::<f64, _>(&node, "longitude"), 30.0);
    }

    #[test]
    fn test_present_values_read_through() {
        let node = json!({"first_name": "Ada", "is_bot": true});
        assert_eq!(get::<String, _>(&node, "first_name"), "Ada");
        assert!(get::<bool, _>(&node, "is_bot"));
    }
}
