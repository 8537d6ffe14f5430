//! Geodetic positions and their unit-vector form

use super::cartesian::Cartesian3;
use crate::constants::{DEG2RAD, RAD2DEG};
use crate::{GeoError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A point on the sphere in degrees
///
/// Longitude is expected in [-180, 180) and latitude in [-90, 90]; range
/// checks happen in [`crate::format::validate_position`], not here.
/// Serializes as a GeoJSON position array `[lon, lat]` or
/// `[lon, lat, elevation]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<f64>", try_from = "Vec<f64>")]
pub struct Position {
    /// Longitude in degrees, positive east
    pub lon: f64,
    /// Latitude in degrees, positive north
    pub lat: f64,
    /// Optional elevation in meters
    pub elevation: Option<f64>,
}

impl Position {
    /// Create a position without elevation
    pub fn new(lon: f64, lat: f64) -> Self {
        Position {
            lon,
            lat,
            elevation: None,
        }
    }

    /// Create a position carrying an elevation
    pub fn with_elevation(lon: f64, lat: f64, elevation: f64) -> Self {
        Position {
            lon,
            lat,
            elevation: Some(elevation),
        }
    }

    /// Longitude in radians
    pub fn lon_radians(&self) -> f64 {
        self.lon * DEG2RAD
    }

    /// Latitude in radians
    pub fn lat_radians(&self) -> f64 {
        self.lat * DEG2RAD
    }

    /// Unit vector pointing from the Earth's centre through this position
    ///
    /// - `x = cos(φ) * cos(λ)`
    /// - `y = cos(φ) * sin(λ)`
    /// - `z = sin(φ)`
    ///
    /// Elevation is ignored.
    pub fn to_cartesian(&self) -> Cartesian3 {
        let phi = self.lat_radians();
        let lambda = self.lon_radians();
        let cos_phi = phi.cos();

        Cartesian3::new(cos_phi * lambda.cos(), cos_phi * lambda.sin(), phi.sin())
    }

    /// Position that a vector points at, with longitude in [-180, 180)
    ///
    /// The vector need not be unit length. A zero vector maps to (0, 0).
    pub fn from_cartesian(cart: Cartesian3) -> Self {
        let r_xy = (cart.x * cart.x + cart.y * cart.y).sqrt();
        let phi = cart.z.atan2(r_xy);
        let lambda = cart.y.atan2(cart.x);

        Position::new(normalize_longitude(lambda * RAD2DEG), phi * RAD2DEG)
    }
}

/// Wraps a longitude in degrees into [-180, 180)
pub fn normalize_longitude(lon: f64) -> f64 {
    let wrapped = (lon + 180.0).rem_euclid(360.0) - 180.0;
    // rem_euclid may round up to exactly 360 for tiny negative inputs
    if wrapped >= 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

impl From<Position> for Vec<f64> {
    fn from(position: Position) -> Self {
        match position.elevation {
            Some(elevation) => vec![position.lon, position.lat, elevation],
            None => vec![position.lon, position.lat],
        }
    }
}

impl TryFrom<Vec<f64>> for Position {
    type Error = GeoError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        match values.as_slice() {
            [lon, lat] => Ok(Position::new(*lon, *lat)),
            [lon, lat, elevation] => Ok(Position::with_elevation(*lon, *lat, *elevation)),
            other => Err(GeoError::MalformedPosition(format!(
                "expected 2 or 3 components, got {}",
                other.len()
            ))),
        }
    }
}

impl FromStr for Position {
    type Err = GeoError;

    /// Parses `lon,lat` or `lon,lat,elevation`
    fn from_str(s: &str) -> Result<Self> {
        let values = s
            .split(',')
            .map(|part| {
                part.trim()
                    .parse::<f64>()
                    .map_err(|e| GeoError::MalformedPosition(format!("{s:?}: {e}")))
            })
            .collect::<Result<Vec<f64>>>()?;

        Position::try_from(values)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.elevation {
            Some(elevation) => write!(f, "{},{},{}", self.lon, self.lat, elevation),
            None => write!(f, "{},{}", self.lon, self.lat),
        }
    }
}
