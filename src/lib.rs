//! Geotools: great-circle geometry on a spherical Earth
//!
//! This crate computes bearings between positions, destination points along
//! great circles, and the intersection of two great-circle paths, each path
//! given either by an initial bearing or by an end point. A small formatting
//! layer validates and rounds coordinates and wraps results as GeoJSON.
//!
//! All calculations are pure functions over `Copy` values; nothing here
//! holds state between calls.

use thiserror::Error;

pub mod bearing;
pub mod constants;
pub mod coordinates;
pub mod destination;
pub mod format;
pub mod greatcircle;
pub mod intersection;

// Re-export commonly used types
pub use bearing::{bearing_to, number_to_bearing, rhumb_bearing_to, Bearing, Precision};
pub use constants::{DEG2RAD, RAD2DEG};
pub use coordinates::{to_point, to_vector, Cartesian3, Position};
pub use destination::{destination, destination_with, great_circle_distance, DestinationPoint};
pub use format::{BoundingBox, Geometry};
pub use greatcircle::{normal, Path, PathDefinition, PathKind};
pub use intersection::intersection;

/// Main error type for the geotools library
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("Indeterminate geometry: {0}")]
    IndeterminateGeometry(String),

    #[error("WGS84 {axis} ({value}) should be in the range: {min} to {max}")]
    InvalidCoordinate {
        axis: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Malformed position: {0}")]
    MalformedPosition(String),

    #[error("Unsupported geometry: {0}")]
    UnsupportedGeometry(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for geotools operations
pub type Result<T> = std::result::Result<T, GeoError>;
