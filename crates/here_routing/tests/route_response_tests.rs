use std::env;

use here_routing::{
    route::RouteResponse, routing_type::RoutingType, side_of_street::SideOfStreet,
    transport_mode::TransportMode, waypoint::Spot, waypoint_parameter_type::WaypointParameterType,
};

fn read_fixture(name: &str) -> String {
    let path = env::current_dir().unwrap().join("tests/fixtures").join(name);
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn test_parse_calculate_route_response() {
    let response = RouteResponse::from_json(&read_fixture("calculate_route.json")).unwrap();

    assert_eq!(response.routes().len(), 1);
    let route = &response.routes()[0];
    assert_eq!(route.route_id(), Some("AG0ABgAAAAAKAA"));

    let mode = route.mode();
    assert_eq!(mode.kind(), Some(RoutingType::Fastest));
    assert_eq!(mode.transport_modes(), &[TransportMode::Car]);
    assert_eq!(mode.to_request_string().unwrap(), "FASTEST;CAR;traffic:enabled");

    let waypoints = route.waypoints();
    assert_eq!(waypoints.len(), 2);

    let start = &waypoints[0];
    assert_eq!(start.kind(), WaypointParameterType::StopOver);
    assert_eq!(start.side_of_street(), SideOfStreet::Right);
    assert_eq!(start.mapped_road_name(), "Jungfernstieg");
    assert_eq!(start.spot().get(), 0.1235955);
    assert_eq!(route.shape_point(start), Some("53.5532799,9.9939499"));

    let destination = &waypoints[1];
    assert_eq!(destination.kind(), WaypointParameterType::PassThrough);
    assert_eq!(destination.original_position(), None);
    assert_eq!(destination.spot(), Spot::MIDDLE);
    assert_eq!(destination.user_label(), Some("HAW"));
    assert_eq!(route.shape_point(destination), Some("53.5571099,10.0224699"));
}

#[test]
fn test_response_survives_serialization() {
    let response = RouteResponse::from_json(&read_fixture("calculate_route.json")).unwrap();

    let json = serde_json::to_string(&response).unwrap();
    let reparsed = RouteResponse::from_json(&json).unwrap();

    assert_eq!(response, reparsed);
}

#[test]
fn test_invalid_enum_value_is_rejected() {
    let json = read_fixture("calculate_route.json").replace("\"right\"", "\"middle\"");

    assert!(RouteResponse::from_json(&json).is_err());
}
