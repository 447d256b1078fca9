use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    error::RoutingModeError, routing_type::RoutingType, traffic_mode::TrafficMode,
    transport_mode::TransportMode,
};

const SEPARATOR: char = ';';
const TRAFFIC_PREFIX: &str = "traffic:";

/// Specifies how a route is calculated.
///
/// Request parameter representation:
/// `<type>[;<transportMode>]*[;traffic:<trafficMode>][;<feature>]*`
///
/// The routing type is required for encoding, but a mode deserialized from a response may lack
/// one, so it is stored as an `Option` and checked in [`RoutingMode::to_request_string`].
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct RoutingMode {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<RoutingType>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    transport_modes: Vec<TransportMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    traffic_mode: Option<TrafficMode>,

    /// Feature weightings, e.g. `tollroad:-2`. As many as required.
    #[serde(
        rename = "feature",
        alias = "features",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    features: Vec<String>,
}

impl RoutingMode {
    pub fn new(kind: RoutingType) -> Self {
        RoutingMode {
            kind: Some(kind),
            ..Default::default()
        }
    }

    pub fn builder() -> RoutingModeBuilder {
        RoutingModeBuilder::default()
    }

    pub fn kind(&self) -> Option<RoutingType> {
        self.kind
    }

    pub fn transport_modes(&self) -> &[TransportMode] {
        &self.transport_modes
    }

    pub fn traffic_mode(&self) -> Option<TrafficMode> {
        self.traffic_mode
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn to_request_string(&self) -> Result<String, RoutingModeError> {
        encode_routing_mode(self)
    }
}

/// Encodes a routing mode into the `mode` request parameter.
pub fn encode_routing_mode(mode: &RoutingMode) -> Result<String, RoutingModeError> {
    let kind = mode.kind.ok_or(RoutingModeError::MissingKind)?;

    if let Some(feature) = mode.features.iter().find(|f| !is_valid_feature(f)) {
        return Err(RoutingModeError::InvalidFeature(feature.clone()));
    }

    let mut encoded = String::from(kind.as_str());

    for transport_mode in &mode.transport_modes {
        encoded.push(SEPARATOR);
        encoded.push_str(transport_mode.as_str());
    }

    if let Some(traffic_mode) = mode.traffic_mode {
        encoded.push(SEPARATOR);
        encoded.push_str(TRAFFIC_PREFIX);
        encoded.push_str(traffic_mode.as_str());
    }

    for feature in &mode.features {
        encoded.push(SEPARATOR);
        encoded.push_str(feature);
    }

    trace!("Encoded routing mode {}", encoded);

    Ok(encoded)
}

/// A feature must survive `FromStr` unchanged: segments are trimmed there, and a `traffic:`
/// segment would be read back as the traffic mode.
fn is_valid_feature(feature: &str) -> bool {
    !feature.is_empty()
        && !feature.contains(SEPARATOR)
        && feature.trim() == feature
        && !feature.starts_with(TRAFFIC_PREFIX)
}

#[derive(PartialEq)]
enum ParsePhase {
    TransportModes,
    Traffic,
    Features,
}

impl FromStr for RoutingMode {
    type Err = RoutingModeError;

    /// Parses a `mode` request parameter. Segments following the routing type are read as
    /// transport modes until the first segment that is not one; a `traffic:` segment may follow,
    /// and every remaining segment is a feature weighting.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = |reason: &str| RoutingModeError::Parse {
            input: s.to_owned(),
            reason: reason.to_owned(),
        };

        let mut segments = s.split(SEPARATOR);
        let kind = match segments.next() {
            Some(kind) if !kind.trim().is_empty() => kind.trim().parse::<RoutingType>()?,
            _ => return Err(parse_error("missing routing type")),
        };

        let mut builder = RoutingModeBuilder::default().with_kind(kind);
        let mut phase = ParsePhase::TransportModes;

        for segment in segments {
            let segment = segment.trim();
            if segment.is_empty() {
                return Err(parse_error("empty segment"));
            }

            if phase == ParsePhase::TransportModes {
                if let Ok(transport_mode) = segment.parse::<TransportMode>() {
                    builder = builder.with_transport_mode(transport_mode);
                    continue;
                }
                phase = ParsePhase::Traffic;
            }

            if phase == ParsePhase::Traffic {
                if let Some(traffic_mode) = segment.strip_prefix(TRAFFIC_PREFIX) {
                    builder = builder.with_traffic_mode(traffic_mode.parse()?);
                    phase = ParsePhase::Features;
                    continue;
                }
            }

            builder = builder.with_feature(segment);
            phase = ParsePhase::Features;
        }

        Ok(builder.build())
    }
}

#[derive(Default)]
pub struct RoutingModeBuilder {
    kind: Option<RoutingType>,
    transport_modes: Vec<TransportMode>,
    traffic_mode: Option<TrafficMode>,
    features: Vec<String>,
}

impl RoutingModeBuilder {
    pub fn with_kind(mut self, kind: RoutingType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_transport_mode(mut self, transport_mode: TransportMode) -> Self {
        self.transport_modes.push(transport_mode);
        self
    }

    pub fn with_transport_modes<I>(mut self, transport_modes: I) -> Self
    where
        I: IntoIterator<Item = TransportMode>,
    {
        self.transport_modes.extend(transport_modes);
        self
    }

    pub fn with_traffic_mode(mut self, traffic_mode: TrafficMode) -> Self {
        self.traffic_mode = Some(traffic_mode);
        self
    }

    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.features.push(feature.into());
        self
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features.extend(features.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> RoutingMode {
        RoutingMode {
            kind: self.kind,
            transport_modes: self.transport_modes,
            traffic_mode: self.traffic_mode,
            features: self.features,
        }
    }
}
