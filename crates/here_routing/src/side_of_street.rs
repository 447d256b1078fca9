use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::wire_name::impl_wire_name;

/// Side of the link a waypoint was mapped to, when heading from the reference node to the
/// non-reference node.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum SideOfStreet {
    #[serde(alias = "LEFT")]
    Left,
    #[serde(alias = "RIGHT")]
    Right,
    #[serde(alias = "NEITHER")]
    Neither,
}

impl_wire_name!(SideOfStreet, "side of street", {
    Left => "left",
    Right => "right",
    Neither => "neither",
});
