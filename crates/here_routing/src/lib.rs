pub mod error;
pub mod geo_coordinate;
pub mod route;
pub mod routing_mode;
pub mod routing_type;
pub mod schema;
pub mod side_of_street;
pub mod traffic_mode;
pub mod transport_mode;
pub mod waypoint;
pub mod waypoint_parameter;
pub mod waypoint_parameter_type;
mod wire_name;
