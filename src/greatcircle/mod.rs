//! Great circles described by a start point plus a bearing or an end point
//!
//! A great circle is carried around as its normal vector. The direction of
//! the normal matters: for a path leaving `start`, `normal × start` points
//! along the initial direction of travel, which is what the intersection
//! resolver uses to tell the two antipodal crossings apart.

use crate::constants::DEG2RAD;
use crate::coordinates::{Cartesian3, Position};
use crate::{GeoError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How a path continues from its start point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathDefinition {
    /// Initial bearing in degrees
    Bearing(f64),
    /// Terminating point
    Endpoint(Position),
}

/// Discriminant of a [`PathDefinition`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Bearing,
    Endpoint,
}

impl PathDefinition {
    pub fn kind(&self) -> PathKind {
        match self {
            PathDefinition::Bearing(_) => PathKind::Bearing,
            PathDefinition::Endpoint(_) => PathKind::Endpoint,
        }
    }
}

impl FromStr for PathDefinition {
    type Err = GeoError;

    /// `lon,lat` parses as an endpoint, a single number as a bearing
    fn from_str(s: &str) -> Result<Self> {
        if s.contains(',') {
            return s.parse().map(PathDefinition::Endpoint);
        }

        s.trim()
            .parse::<f64>()
            .map(PathDefinition::Bearing)
            .map_err(|e| GeoError::MalformedPosition(format!("{s:?}: {e}")))
    }
}

/// A great-circle path: a start point and how it continues
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub start: Position,
    pub definition: PathDefinition,
}

impl Path {
    /// Path leaving `start` on an initial bearing (degrees)
    pub fn from_bearing(start: Position, bearing: f64) -> Self {
        Path {
            start,
            definition: PathDefinition::Bearing(bearing),
        }
    }

    /// Path from `start` toward `end`
    pub fn from_endpoint(start: Position, end: Position) -> Self {
        Path {
            start,
            definition: PathDefinition::Endpoint(end),
        }
    }

    pub fn kind(&self) -> PathKind {
        self.definition.kind()
    }

    /// Normal vector of the great circle containing this path
    ///
    /// See [`normal`].
    pub fn normal(&self) -> Cartesian3 {
        normal(self)
    }
}

/// Normal vector of the great circle containing `path`
///
/// For an endpoint path this is `start × end`. For a bearing path with
/// φ = latitude, λ = longitude and θ = bearing:
///
/// ```text
/// x =  sin(λ)·cos(θ) − sin(φ)·cos(λ)·sin(θ)
/// y = −cos(λ)·cos(θ) − sin(φ)·sin(λ)·sin(θ)
/// z =  cos(φ)·sin(θ)
/// ```
///
/// The result is not normalized. An endpoint path whose end equals its
/// start (or its antipode) yields a degenerate vector.
pub fn normal(path: &Path) -> Cartesian3 {
    match path.definition {
        PathDefinition::Endpoint(end) => path.start.to_cartesian().cross(&end.to_cartesian()),
        PathDefinition::Bearing(bearing) => {
            let phi = path.start.lat_radians();
            let lambda = path.start.lon_radians();
            let theta = bearing * DEG2RAD;

            let (sin_phi, cos_phi) = phi.sin_cos();
            let (sin_lambda, cos_lambda) = lambda.sin_cos();
            let (sin_theta, cos_theta) = theta.sin_cos();

            Cartesian3::new(
                sin_lambda * cos_theta - sin_phi * cos_lambda * sin_theta,
                -cos_lambda * cos_theta - sin_phi * sin_lambda * sin_theta,
                cos_phi * sin_theta,
            )
        }
    }
}
