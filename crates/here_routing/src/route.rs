use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{routing_mode::RoutingMode, waypoint::Waypoint};

/// Envelope of a calculate-route response. Fields the service adds over time are ignored.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct RouteResponse {
    response: CalculateRouteResponse,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRouteResponse {
    #[serde(default)]
    route: Vec<Route>,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    #[serde(default)]
    route_id: Option<String>,

    #[serde(default)]
    waypoint: Vec<Waypoint>,

    mode: RoutingMode,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    shape: Vec<String>,
}

impl RouteResponse {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn routes(&self) -> &[Route] {
        &self.response.route
    }
}

impl Route {
    pub fn route_id(&self) -> Option<&str> {
        self.route_id.as_deref()
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoint
    }

    pub fn mode(&self) -> &RoutingMode {
        &self.mode
    }

    /// Route shape as `<latitude>,<longitude>` pairs, when requested.
    pub fn shape(&self) -> &[String] {
        &self.shape
    }

    /// The shape point a waypoint was mapped to.
    pub fn shape_point(&self, waypoint: &Waypoint) -> Option<&str> {
        self.shape.get(waypoint.shape_index()).map(String::as_str)
    }
}
