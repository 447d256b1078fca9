use std::str::FromStr;

use here_routing::{
    routing_type::RoutingType, traffic_mode::TrafficMode, transport_mode::TransportMode,
};

fn parse_wire_name<T>(input: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    input.parse::<T>().map_err(|error| error.to_string())
}

pub fn parse_routing_type(input: &str) -> Result<RoutingType, String> {
    parse_wire_name(input)
}

pub fn parse_transport_mode(input: &str) -> Result<TransportMode, String> {
    parse_wire_name(input)
}

pub fn parse_traffic_mode(input: &str) -> Result<TrafficMode, String> {
    parse_wire_name(input)
}
