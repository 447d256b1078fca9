use crate::{geo_coordinate::GeoCoordinate, waypoint_parameter_type::WaypointParameterType};

const GEO_PREFIX: &str = "geo";

/// A waypoint as specified in a route request, encoded as
/// `geo!<type>!<latitude>,<longitude>[,<altitude>][;;<userLabel>]`.
#[derive(Debug, Clone, PartialEq)]
pub struct WaypointParameter {
    kind: WaypointParameterType,
    position: GeoCoordinate,
    user_label: Option<String>,
}

impl WaypointParameter {
    pub fn new(position: GeoCoordinate) -> Self {
        WaypointParameter {
            kind: WaypointParameterType::default(),
            position,
            user_label: None,
        }
    }

    pub fn pass_through(position: GeoCoordinate) -> Self {
        WaypointParameter {
            kind: WaypointParameterType::PassThrough,
            ..WaypointParameter::new(position)
        }
    }

    pub fn with_user_label(mut self, user_label: impl Into<String>) -> Self {
        self.user_label = Some(user_label.into());
        self
    }

    pub fn kind(&self) -> WaypointParameterType {
        self.kind
    }

    pub fn position(&self) -> &GeoCoordinate {
        &self.position
    }

    pub fn user_label(&self) -> Option<&str> {
        self.user_label.as_deref()
    }

    pub fn to_request_string(&self) -> String {
        let mut encoded = format!("{}!{}!{}", GEO_PREFIX, self.kind, self.position);

        if let Some(user_label) = &self.user_label {
            encoded.push_str(";;");
            encoded.push_str(user_label);
        }

        encoded
    }

    /// The `waypoint<index>` query parameter for this waypoint.
    pub fn query_param(&self, index: usize) -> (String, String) {
        (format!("waypoint{}", index), self.to_request_string())
    }
}
