use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid {kind} value: {value:?}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        ParseEnumError {
            kind,
            value: value.to_owned(),
        }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RoutingModeError {
    #[error("Routing mode has no routing type")]
    MissingKind,

    #[error("Invalid feature weighting {0:?}: must be non-empty and must not contain ';'")]
    InvalidFeature(String),

    #[error("Unable to parse routing mode {input:?}: {reason}")]
    Parse { input: String, reason: String },

    #[error(transparent)]
    Enum(#[from] ParseEnumError),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeoCoordinateError {
    #[error("Latitude {0} is out of range [-90, 90]")]
    Latitude(f64),

    #[error("Longitude {0} is out of range [-180, 180]")]
    Longitude(f64),

    #[error("Altitude {0} is not a finite number")]
    Altitude(f64),
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("Spot {0} is out of range [0, 1]")]
pub struct SpotError(pub f64);
