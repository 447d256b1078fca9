use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::wire_name::impl_wire_name;

/// Mode of transport the route is calculated for. The order in which transport modes appear in a
/// routing mode is significant: the service treats it as a priority.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum TransportMode {
    #[serde(alias = "CAR")]
    Car,
    #[serde(alias = "PEDESTRIAN")]
    Pedestrian,
    /// Car with high-occupancy vehicle lane access.
    #[serde(rename = "carHOV", alias = "CAR_HOV")]
    CarHov,
    #[serde(alias = "PUBLIC_TRANSPORT")]
    PublicTransport,
    /// Public transport using timetable information.
    #[serde(alias = "PUBLIC_TRANSPORT_TIME_TABLE")]
    PublicTransportTimeTable,
    #[serde(alias = "TRUCK")]
    Truck,
    #[serde(alias = "BICYCLE")]
    Bicycle,
}

impl_wire_name!(TransportMode, "transport mode", {
    Car => "CAR",
    Pedestrian => "PEDESTRIAN",
    CarHov => "CAR_HOV",
    PublicTransport => "PUBLIC_TRANSPORT",
    PublicTransportTimeTable => "PUBLIC_TRANSPORT_TIME_TABLE",
    Truck => "TRUCK",
    Bicycle => "BICYCLE",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_accepts_json_names() {
        assert_eq!("carHOV".parse::<TransportMode>(), Ok(TransportMode::CarHov));
        assert_eq!(
            "publicTransportTimeTable".parse::<TransportMode>(),
            Ok(TransportMode::PublicTransportTimeTable)
        );
        assert_eq!("PEDESTRIAN".parse::<TransportMode>(), Ok(TransportMode::Pedestrian));
        assert!("boat".parse::<TransportMode>().is_err());
    }

    #[test]
    fn test_serialize() {
        assert_eq!(
            serde_json::to_string(&TransportMode::CarHov).unwrap(),
            "\"carHOV\""
        );
        assert_eq!(
            serde_json::to_string(&TransportMode::PublicTransport).unwrap(),
            "\"publicTransport\""
        );
    }

    #[test]
    fn test_wire_names_are_unique() {
        for (i, a) in TransportMode::ALL.iter().enumerate() {
            for b in &TransportMode::ALL[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }
}
