use std::{
    fmt::Display,
    hash::{Hash, Hasher},
};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::GeoCoordinateError;

/// A WGS84 position, optionally with an altitude in meters.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Copy, Clone, PartialEq)]
#[serde(rename_all = "camelCase", try_from = "RawGeoCoordinate")]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    altitude: Option<f64>,
}

#[derive(Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
struct RawGeoCoordinate {
    latitude: f64,
    longitude: f64,
    altitude: Option<f64>,
}

impl TryFrom<RawGeoCoordinate> for GeoCoordinate {
    type Error = GeoCoordinateError;

    fn try_from(value: RawGeoCoordinate) -> Result<Self, Self::Error> {
        let coordinate = GeoCoordinate::new(value.latitude, value.longitude)?;
        match value.altitude {
            Some(altitude) => coordinate.with_altitude(altitude),
            None => Ok(coordinate),
        }
    }
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoCoordinateError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoCoordinateError::Latitude(latitude));
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoCoordinateError::Longitude(longitude));
        }

        Ok(GeoCoordinate {
            latitude,
            longitude,
            altitude: None,
        })
    }

    pub fn with_altitude(self, altitude: f64) -> Result<Self, GeoCoordinateError> {
        if !altitude.is_finite() {
            return Err(GeoCoordinateError::Altitude(altitude));
        }

        Ok(GeoCoordinate {
            altitude: Some(altitude),
            ..self
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn altitude(&self) -> Option<f64> {
        self.altitude
    }

    /// `<latitude>,<longitude>[,<altitude>]`
    pub fn to_request_string(&self) -> String {
        self.to_string()
    }
}

impl Display for GeoCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)?;
        if let Some(altitude) = self.altitude {
            write!(f, ",{}", altitude)?;
        }
        Ok(())
    }
}

impl Hash for GeoCoordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f64(self.latitude, state);
        hash_f64(self.longitude, state);
        match self.altitude {
            Some(altitude) => {
                state.write_u8(1);
                hash_f64(altitude, state);
            }
            None => state.write_u8(0),
        }
    }
}

/// Hashes a finite float consistently with `==`, so `0.0` and `-0.0` hash alike.
pub(crate) fn hash_f64<H: Hasher>(value: f64, state: &mut H) {
    state.write_u64((value + 0.0).to_bits());
}

impl From<&GeoCoordinate> for geo_types::Point {
    fn from(value: &GeoCoordinate) -> Self {
        geo_types::Point::new(value.longitude, value.latitude)
    }
}

impl From<GeoCoordinate> for geo_types::Point {
    fn from(value: GeoCoordinate) -> Self {
        geo_types::Point::from(&value)
    }
}
