use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::wire_name::impl_wire_name;

/// The routing algorithm used to calculate the route.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum RoutingType {
    /// Route calculation from start to destination optimized by travel time.
    #[serde(alias = "FASTEST")]
    Fastest,
    /// Route calculation from start to destination disregarding any speed information.
    #[serde(alias = "SHORTEST")]
    Shortest,
    /// Route calculation from start to destination optimizing based on combination of travel
    /// time and distance.
    #[serde(alias = "BALANCED")]
    Balanced,
}

impl_wire_name!(RoutingType, "routing type", {
    Fastest => "FASTEST",
    Shortest => "SHORTEST",
    Balanced => "BALANCED",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(RoutingType::Fastest.to_string(), "FASTEST");
        assert_eq!(RoutingType::Balanced.as_str(), "BALANCED");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("shortest".parse::<RoutingType>(), Ok(RoutingType::Shortest));
        assert_eq!("FASTEST".parse::<RoutingType>(), Ok(RoutingType::Fastest));

        let error = "quickest".parse::<RoutingType>().unwrap_err();
        assert_eq!(error.kind(), "routing type");
        assert_eq!(error.value(), "quickest");
    }

    #[test]
    fn test_deserialize() {
        let kind: RoutingType = serde_json::from_str("\"fastest\"").unwrap();
        assert_eq!(kind, RoutingType::Fastest);

        let kind: RoutingType = serde_json::from_str("\"SHORTEST\"").unwrap();
        assert_eq!(kind, RoutingType::Shortest);

        assert!(serde_json::from_str::<RoutingType>("\"quickest\"").is_err());
    }
}
