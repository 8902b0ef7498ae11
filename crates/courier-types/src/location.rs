use courier_core::{get, hydrate_optional, Hydrate, Node};
use serde::Serialize;

/// A point on the map.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Location {
    pub longitude: f64,
    pub latitude: f64,
    /// Radius of uncertainty in meters, 0-1500.
    pub horizontal_accuracy: f64,
    /// Seconds the live location can be updated for. Live locations only.
    pub live_period: i32,
    /// Direction of movement in degrees, 1-360. Live locations only.
    pub heading: i32,
    pub proximity_alert_radius: i32,
}

impl Hydrate for Location {
    fn hydrate<N: Node>(node: &N) -> Self {
        Self {
            longitude: get(node, "longitude"),
            latitude: get(node, "latitude"),
            horizontal_accuracy: get(node, "horizontal_accuracy"),
            live_period: get(node, "live_period"),
            heading: get(node, "heading"),
            proximity_alert_radius: get(node, "proximity_alert_radius"),
        }
    }
}

/// The location a supergroup is connected to.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChatLocation {
    pub location: Option<Location>,
    pub address: String,
}

impl Hydrate for ChatLocation {
    fn hydrate<N: Node>(node: &N) -> Self {
        Self {
            location: hydrate_optional(node, "location"),
            address: get(node, "address"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_objects_are_default() {
        assert_eq!(Location::hydrate(&json!({})), Location::default());
        assert_eq!(ChatLocation::hydrate(&json!({})), ChatLocation::default());
    }

    #[test]
    fn test_live_location() {
        let loc = Location::hydrate(&json!({
            "longitude": 13.4050,
            "latitude": 52.52,
            "horizontal_accuracy": 25.5,
            "live_period": 900,
            "heading": 270,
            "proximity_alert_radius": 100,
        }));
        assert_eq!(loc.longitude, 13.405);
        assert_eq!(loc.latitude, 52.52);
        assert_eq!(loc.horizontal_accuracy, 25.5);
        assert_eq!(loc.live_period, 900);
        assert_eq!(loc.heading, 270);
        assert_eq!(loc.proximity_alert_radius, 100);
    }

    #[test]
    fn test_chat_location_nested() {
        let node = json!({
            "location": {"longitude": 2.35, "latitude": 48.85},
            "address": "Paris",
        });
        let cl = ChatLocation::hydrate(&node);
        assert_eq!(cl.address, "Paris");
        assert_eq!(cl.location, Some(Location::hydrate(&node["location"])));
    }

    #[test]
    fn test_chat_location_without_location() {
        let cl = ChatLocation::hydrate(&json!({"address": "Nowhere"}));
        assert!(cl.location.is_none());
        assert_eq!(cl.address, "Nowhere");
    }
}
