use std::path::PathBuf;

use clap::Args;
use here_routing::route::RouteResponse;
use tracing::{info, warn};

#[derive(Args)]
pub struct WaypointsArgs {
    /// Calculate-route response JSON file
    input: PathBuf,
}

/// One tab separated line per waypoint: type, label, mapped position, side of street, spot.
pub fn waypoint_lines(response: &RouteResponse) -> Vec<String> {
    let mut lines = Vec::new();

    for (index, route) in response.routes().iter().enumerate() {
        match route.mode().to_request_string() {
            Ok(mode) => info!("Route {}: mode {}", index, mode),
            Err(error) => warn!("Route {}: {}", index, error),
        }

        for waypoint in route.waypoints() {
            lines.push(format!(
                "{}\t{}\t{}\t{}\t{}",
                waypoint.kind(),
                waypoint.user_label().unwrap_or(waypoint.label()),
                waypoint.mapped_position(),
                waypoint.side_of_street(),
                waypoint.spot().get()
            ));
        }
    }

    lines
}

pub fn run(args: WaypointsArgs) -> Result<(), anyhow::Error> {
    let json = std::fs::read_to_string(&args.input)?;
    let response = RouteResponse::from_json(&json)?;

    if response.routes().is_empty() {
        warn!("No route in {}", args.input.display());
    }

    for line in waypoint_lines(&response) {
        println!("{}", line);
    }

    Ok(())
}
