use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::wire_name::impl_wire_name;

/// Whether the route should be optimized for traffic.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum TrafficMode {
    #[serde(alias = "ENABLED")]
    Enabled,
    #[serde(alias = "DISABLED")]
    Disabled,
    /// Let the service decide based on the transport mode and departure time.
    #[serde(alias = "DEFAULT")]
    Default,
}

impl_wire_name!(TrafficMode, "traffic mode", {
    Enabled => "enabled",
    Disabled => "disabled",
    Default => "default",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_name() {
        assert_eq!(TrafficMode::Enabled.to_string(), "enabled");
        assert_eq!("DISABLED".parse::<TrafficMode>(), Ok(TrafficMode::Disabled));
    }
}
