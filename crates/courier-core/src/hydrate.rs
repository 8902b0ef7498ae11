//! Optional-object and array hydration.
//!
//! Hydration degrades instead of failing: a nested value with the wrong
//! shape becomes "absent", a list that is not a list becomes empty, and a
//! bad list element still takes its slot as a default record. The only
//! error is a root that is not an object, reported by [`hydrate_root`].

use tracing::debug;

use crate::error::CourierError;
use crate::node::Node;

/// A record that can be populated from a document node.
///
/// Implementations must be built only from [`crate::get`] and the helpers in
/// this module, so hydrating a non-object node yields `Self::default()`.
pub trait Hydrate: Default {
    fn hydrate<N: Node>(node: &N) -> Self;
}

/// Hydrate the object under `key`, or `None` when it is absent or not an
/// object.
pub fn hydrate_optional<R: Hydrate, N: Node>(node: &N, key: &str) -> Option<R> {
    optional_with(node, key, R::hydrate)
}

/// Like [`hydrate_optional`], with a caller-supplied hydration routine.
pub fn optional_with<R, N, F>(node: &N, key: &str, hydrate: F) -> Option<R>
where
    N: Node,
    F: FnOnce(&N) -> R,
{
    let child = node.child(key)?;
    if child.is_object() {
        return Some(hydrate(child));
    }
    if !child.is_null() {
        debug!(
            "field '{key}' is a {} instead of an object, treating as absent",
            child.kind()
        );
    }
    None
}

/// Hydrate a mandatory nested record. Absent or malformed input yields the
/// default record.
pub fn hydrate_required<R: Hydrate, N: Node>(node: &N, key: &str) -> R {
    required_with(node, key, R::hydrate)
}

/// Like [`hydrate_required`], with a caller-supplied hydration routine.
pub fn required_with<R, N, F>(node: &N, key: &str, hydrate: F) -> R
where
    R: Default,
    N: Node,
    F: FnOnce(&N) -> R,
{
    optional_with(node, key, hydrate).unwrap_or_default()
}

/// Hydrate every element of the list under `key`, in order.
///
/// An absent key or a non-list value yields an empty sequence. Elements that
/// are not objects are kept as default records.
pub fn hydrate_array<R: Hydrate, N: Node>(node: &N, key: &str) -> Vec<R> {
    let Some(child) = node.child(key) else {
        return Vec::new();
    };
    let Some(items) = child.elements() else {
        if !child.is_null() {
            debug!(
                "field '{key}' is a {} instead of a list, treating as empty",
                child.kind()
            );
        }
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            if !item.is_object() {
                debug!(
                    "{key}[{index}] is a {}, keeping a default record",
                    item.kind()
                );
            }
            R::hydrate(item)
        })
        .collect()
}

/// Hydrate a top-level record, rejecting roots that are not objects.
pub fn hydrate_root<R: Hydrate, N: Node>(node: &N) -> Result<R, CourierError> {
    if !node.is_object() {
        return Err(CourierError::NotDecodable { found: node.kind() });
    }
    Ok(R::hydrate(node))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::get;
    use serde_json::json;

    #[derive(Debug, Default, PartialEq)]
    struct Point {
        x: i64,
        label: String,
    }

    impl Hydrate for Point {
        fn hydrate<N: Node>(node: &N) -> Self {
            Self {
                x: get(node, "x"),
                label: get(node, "label"),
            }
        }
    }

    #[test]
    fn test_optional_absent_key() {
        let node = json!({});
        assert_eq!(hydrate_optional::<Point, _>(&node, "point"), None);
    }

    #[test]
    fn test_optional_present_equals_direct_hydrate() {
        let node = json!({"point": {"x": 3, "label": "a"}});
        let direct = Point::hydrate(&node["point"]);
        assert_eq!(hydrate_optional::<Point, _>(&node, "point"), Some(direct));
    }

    #[test]
    fn test_optional_wrong_shape_is_absent() {
        let node = json!({"point": [1, 2], "other": "text", "empty": null});
        assert_eq!(hydrate_optional::<Point, _>(&node, "point"), None);
        assert_eq!(hydrate_optional::<Point, _>(&node, "other"), None);
        assert_eq!(hydrate_optional::<Point, _>(&node, "empty"), None);
    }

    #[test]
    fn test_optional_empty_object_is_present_default() {
        let node = json!({"point": {}});
        assert_eq!(
            hydrate_optional::<Point, _>(&node, "point"),
            Some(Point::default())
        );
    }

    #[test]
    fn test_required_falls_back_to_default() {
        let node = json!({"point": 7});
        assert_eq!(
            hydrate_required::<Point, _>(&node, "point"),
            Point::default()
        );
        assert_eq!(
            hydrate_required::<Point, _>(&node, "missing"),
            Point::default()
        );
    }

    #[test]
    fn test_array_absent_or_not_list_is_empty() {
        let node = json!({"points": {"x": 1}});
        assert!(hydrate_array::<Point, _>(&node, "points").is_empty());
        assert!(hydrate_array::<Point, _>(&node, "missing").is_empty());
    }

    #[test]
    fn test_array_empty_list() {
        let node = json!({"points": []});
        assert!(hydrate_array::<Point, _>(&node, "points").is_empty());
    }

    #[test]
    fn test_array_preserves_order_and_length() {
        let node = json!({"points": [
            {"x": 1, "label": "one"},
            {"x": 2, "label": "two"},
            {"x": 3, "label": "three"},
        ]});
        let points: Vec<Point> = hydrate_array(&node, "points");
        assert_eq!(points.len(), 3);
        for (i, point) in points.iter().enumerate() {
            assert_eq!(*point, Point::hydrate(&node["points"][i]));
        }
    }

    #[test]
    fn test_array_bad_element_keeps_default_slot() {
        let node = json!({"points": [{"x": 1}, "garbage", {"x": 3}]});
        let points: Vec<Point> = hydrate_array(&node, "points");
        assert_eq!(points.len(), 3);
        assert_eq!(points[1], Point::default());
        assert_eq!(points[2].x, 3);
    }

    #[test]
    fn test_root_must_be_object() {
        let err = hydrate_root::<Point, _>(&json!([1, 2])).unwrap_err();
        assert!(matches!(err, CourierError::NotDecodable { found: "list" }));
        assert!(err.to_string().contains("expected an object"));

        let point: Point = hydrate_root(&json!({"x": 9})).unwrap();
        assert_eq!(point.x, 9);
    }
}
