use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::wire_name::impl_wire_name;

/// Whether the route stops at a waypoint or only passes through it, for instance where a road
/// changes its name and no stop-over action is required.
#[derive(
    Deserialize, Serialize, JsonSchema, Debug, Copy, Clone, PartialEq, Eq, Hash, Default,
)]
#[serde(rename_all = "camelCase")]
pub enum WaypointParameterType {
    #[default]
    #[serde(alias = "STOP_OVER")]
    StopOver,
    #[serde(alias = "PASS_THROUGH")]
    PassThrough,
}

impl_wire_name!(WaypointParameterType, "waypoint type", {
    StopOver => "stopOver",
    PassThrough => "passThrough",
});
