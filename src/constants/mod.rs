//! Constants module for spherical geodesy calculations

use std::f64::consts::PI;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Degrees in a full turn
pub const FULL_TURN_DEG: f64 = 360.0;

// Earth model
/// Mean Earth radius in meters used for every spherical distance
pub const EARTH_MEAN_RADIUS_M: f64 = 6_371_000.0;

// Coordinate bounds
/// WGS84 coordinate bounds as `[lon_min, lat_min, lon_max, lat_max]`
pub const WGS84_MAX_BOUNDS: [f64; 4] = [-180.0, -90.0, 180.0, 90.0];
/// Minimum longitude in degrees
pub const LON_MIN: f64 = WGS84_MAX_BOUNDS[0];
/// Minimum latitude in degrees
pub const LAT_MIN: f64 = WGS84_MAX_BOUNDS[1];
/// Maximum longitude in degrees
pub const LON_MAX: f64 = WGS84_MAX_BOUNDS[2];
/// Maximum latitude in degrees
pub const LAT_MAX: f64 = WGS84_MAX_BOUNDS[3];

// Formatting
/// Decimal places kept by the formatting layer unless told otherwise
pub const DEFAULT_COORDINATE_PRECISION: u32 = 4;
/// Pixel width assumed when deriving a bounding-box resolution
pub const DEFAULT_RESOLUTION_PIXELS: u32 = 900;

// Numerics
/// Vector magnitudes and dot products below this are treated as zero
pub const DEGENERATE_EPSILON: f64 = 1e-12;
