use clap::Args;
use here_routing::{
    routing_mode::RoutingMode, routing_type::RoutingType, traffic_mode::TrafficMode,
    transport_mode::TransportMode,
};
use tracing::debug;

use crate::parsers;

#[derive(Args)]
pub struct EncodeArgs {
    /// Routing type (fastest, shortest, balanced)
    #[arg(short, long, value_parser = parsers::parse_routing_type)]
    kind: RoutingType,

    /// Transport mode, repeat in priority order
    #[arg(short, long = "transport-mode", value_parser = parsers::parse_transport_mode)]
    transport_modes: Vec<TransportMode>,

    /// Traffic mode (enabled, disabled, default)
    #[arg(long, value_parser = parsers::parse_traffic_mode)]
    traffic: Option<TrafficMode>,

    /// Feature weighting such as "tollroad:-2", repeatable
    #[arg(short, long = "feature")]
    features: Vec<String>,
}

#[derive(Args)]
pub struct DecodeArgs {
    /// Routing mode request parameter, e.g. "fastest;car;traffic:enabled"
    mode: String,
}

pub fn build_mode(args: EncodeArgs) -> RoutingMode {
    let mut builder = RoutingMode::builder()
        .with_kind(args.kind)
        .with_transport_modes(args.transport_modes)
        .with_features(args.features);

    if let Some(traffic) = args.traffic {
        builder = builder.with_traffic_mode(traffic);
    }

    builder.build()
}

pub fn run_encode(args: EncodeArgs) -> Result<(), anyhow::Error> {
    let mode = build_mode(args);
    debug!("Encoding {:?}", mode);

    println!("{}", mode.to_request_string()?);

    Ok(())
}

pub fn decode(args: &DecodeArgs) -> Result<String, anyhow::Error> {
    let mode: RoutingMode = args.mode.parse()?;

    Ok(serde_json::to_string_pretty(&mode)?)
}

pub fn run_decode(args: DecodeArgs) -> Result<(), anyhow::Error> {
    println!("{}", decode(&args)?);

    Ok(())
}
