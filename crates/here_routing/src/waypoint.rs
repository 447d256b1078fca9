use std::hash::{Hash, Hasher};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::SpotError,
    geo_coordinate::{GeoCoordinate, hash_f64},
    side_of_street::SideOfStreet,
    waypoint_parameter_type::WaypointParameterType,
};

/// Relative position of a mapped location along its link, as the fractional distance between
/// the link's reference node and non-reference node.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Copy, Clone, PartialEq, PartialOrd)]
#[serde(try_from = "f64", into = "f64")]
pub struct Spot(f64);

impl Spot {
    /// Assumed by the service when a request gives neither a spot nor a display position.
    pub const MIDDLE: Spot = Spot(0.5);

    pub fn new(value: f64) -> Result<Self, SpotError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Spot(value))
        } else {
            Err(SpotError(value))
        }
    }

    pub fn get(&self) -> f64 {
        self.0
    }
}

impl Default for Spot {
    fn default() -> Self {
        Spot::MIDDLE
    }
}

impl TryFrom<f64> for Spot {
    type Error = SpotError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Spot::new(value)
    }
}

impl From<Spot> for f64 {
    fn from(value: Spot) -> Self {
        value.0
    }
}

/// A point along a calculated route, including start and end points, based on the waypoints of
/// the route request.
///
/// Waypoints are only ever produced by deserializing a routing response and are read-only.
/// `original_position` is absent when the request did not specify the waypoint as a coordinate.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Waypoint {
    link_id: String,

    /// Start points are mapped to the beginning of the link, destinations and via points to its
    /// end.
    mapped_position: GeoCoordinate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    original_position: Option<GeoCoordinate>,

    #[serde(rename = "type")]
    kind: WaypointParameterType,

    #[serde(default)]
    spot: Spot,

    side_of_street: SideOfStreet,

    #[serde(default)]
    mapped_road_name: String,

    /// Street name or public transport stop, depending on the transport mode of the request.
    #[serde(default)]
    label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_label: Option<String>,

    #[serde(default)]
    shape_index: usize,
}

impl Waypoint {
    pub fn link_id(&self) -> &str {
        &self.link_id
    }

    pub fn mapped_position(&self) -> &GeoCoordinate {
        &self.mapped_position
    }

    pub fn original_position(&self) -> Option<&GeoCoordinate> {
        self.original_position.as_ref()
    }

    pub fn kind(&self) -> WaypointParameterType {
        self.kind
    }

    pub fn spot(&self) -> Spot {
        self.spot
    }

    pub fn side_of_street(&self) -> SideOfStreet {
        self.side_of_street
    }

    pub fn mapped_road_name(&self) -> &str {
        &self.mapped_road_name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn user_label(&self) -> Option<&str> {
        self.user_label.as_deref()
    }

    /// Index into the shape array of the route this waypoint belongs to.
    pub fn shape_index(&self) -> usize {
        self.shape_index
    }

    pub fn is_stop_over(&self) -> bool {
        self.kind == WaypointParameterType::StopOver
    }
}

impl Hash for Waypoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.link_id.hash(state);
        self.mapped_position.hash(state);
        self.original_position.hash(state);
        self.kind.hash(state);
        hash_f64(self.spot.get(), state);
        self.side_of_street.hash(state);
        self.mapped_road_name.hash(state);
        self.label.hash(state);
        self.user_label.hash(state);
        self.shape_index.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use std::hash::DefaultHasher;

    use super::*;

    fn hash_of(waypoint: &Waypoint) -> u64 {
        let mut hasher = DefaultHasher::new();
        waypoint.hash(&mut hasher);
        hasher.finish()
    }

    const WAYPOINT_JSON: &str = r#"{
        "linkId": "+1035352808",
        "mappedPosition": { "latitude": 52.5160999, "longitude": 13.3779 },
        "originalPosition": { "latitude": 52.5160999, "longitude": 13.3778999 },
        "type": "stopOver",
        "spot": 0.25,
        "sideOfStreet": "left",
        "mappedRoadName": "Pariser Platz",
        "label": "Pariser Platz",
        "shapeIndex": 0,
        "source": "user"
    }"#;

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let waypoint: Waypoint = serde_json::from_str(WAYPOINT_JSON).unwrap();

        assert_eq!(waypoint.link_id(), "+1035352808");
        assert_eq!(waypoint.kind(), WaypointParameterType::StopOver);
        assert_eq!(waypoint.spot().get(), 0.25);
        assert_eq!(waypoint.side_of_street(), SideOfStreet::Left);
        assert_eq!(waypoint.mapped_road_name(), "Pariser Platz");
        assert_eq!(waypoint.user_label(), None);
        assert_eq!(waypoint.shape_index(), 0);
        assert!(waypoint.original_position().is_some());
        assert!(waypoint.is_stop_over());
    }

    #[test]
    fn test_spot_defaults_to_middle() {
        let json = WAYPOINT_JSON.replace("\"spot\": 0.25,", "");
        let waypoint: Waypoint = serde_json::from_str(&json).unwrap();

        assert_eq!(waypoint.spot(), Spot::MIDDLE);
        assert_eq!(waypoint.spot().get(), 0.5);
    }

    #[test]
    fn test_spot_out_of_range() {
        assert_eq!(Spot::new(1.5), Err(SpotError(1.5)));
        assert!(Spot::new(0.0).is_ok());
        assert!(Spot::new(1.0).is_ok());

        let json = WAYPOINT_JSON.replace("\"spot\": 0.25", "\"spot\": 1.25");
        assert!(serde_json::from_str::<Waypoint>(&json).is_err());
    }

    #[test]
    fn test_missing_original_position() {
        let waypoint: Waypoint = serde_json::from_str(
            r#"{
                "linkId": "-42",
                "mappedPosition": { "latitude": 52.0, "longitude": 13.0 },
                "type": "passThrough",
                "sideOfStreet": "neither",
                "userLabel": "Office"
            }"#,
        )
        .unwrap();

        assert_eq!(waypoint.original_position(), None);
        assert_eq!(waypoint.user_label(), Some("Office"));
        assert!(!waypoint.is_stop_over());
    }

    #[test]
    fn test_equal_waypoints_hash_alike() {
        let zero = WAYPOINT_JSON
            .replace("\"spot\": 0.25", "\"spot\": 0.0")
            .replace("\"longitude\": 13.3779", "\"longitude\": 0.0");
        let negative_zero = WAYPOINT_JSON
            .replace("\"spot\": 0.25", "\"spot\": -0.0")
            .replace("\"longitude\": 13.3779", "\"longitude\": -0.0");

        let a: Waypoint = serde_json::from_str(&zero).unwrap();
        let b: Waypoint = serde_json::from_str(&negative_zero).unwrap();

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }
}
