//! Coordinate-range checks and coordinate rounding

use crate::constants::{
    DEFAULT_COORDINATE_PRECISION, LAT_MAX, LAT_MIN, LON_MAX, LON_MIN,
};
use crate::coordinates::Position;
use crate::destination::destination;
use crate::{GeoError, Result};

fn check_axis(axis: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(GeoError::InvalidCoordinate {
            axis,
            value,
            min,
            max,
        })
    }
}

/// Rejects positions outside the WGS84 longitude/latitude ranges
pub fn validate_position(position: &Position) -> Result<()> {
    check_axis("longitude", position.lon, LON_MIN, LON_MAX)?;
    check_axis("latitude", position.lat, LAT_MIN, LAT_MAX)
}

/// Rounds to `digits` decimal places, ties away from zero
///
/// Beyond 22 digits, or when scaling overflows, the value is returned as is.
pub fn round_to(value: f64, digits: u32) -> f64 {
    if digits > 22 {
        return value;
    }

    let factor = 10f64.powi(digits as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }

    scaled.round() / factor
}

/// Rounds every component of a position, elevation included
pub fn position_precision(position: &Position, digits: u32) -> Position {
    Position {
        lon: round_to(position.lon, digits),
        lat: round_to(position.lat, digits),
        elevation: position.elevation.map(|e| round_to(e, digits)),
    }
}

/// Builds a validated position rounded to `precision` decimals (4 by default)
pub fn get_position(
    lon: f64,
    lat: f64,
    elevation: Option<f64>,
    precision: Option<u32>,
) -> Result<Position> {
    let position = Position { lon, lat, elevation };
    validate_position(&position)?;

    Ok(position_precision(
        &position,
        precision.unwrap_or(DEFAULT_COORDINATE_PRECISION),
    ))
}

/// Destination from a validated origin
pub fn destination_position(origin: &Position, bearing_deg: f64, distance_m: f64) -> Result<Position> {
    validate_position(origin)?;
    Ok(destination(origin, bearing_deg, distance_m))
}
