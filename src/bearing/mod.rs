//! Orthodromic and rhumb-line bearings between positions

pub mod precision;

pub use precision::Precision;

use crate::constants::{FULL_TURN_DEG, RAD2DEG};
use crate::coordinates::Position;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_4, PI};
use std::fmt;

/// Compass direction in degrees, 0 = north, clockwise, always in [0, 360)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Bearing(f64);

impl Bearing {
    /// Create a bearing, wrapping any angle in degrees into [0, 360)
    pub fn from_degrees(degrees: f64) -> Self {
        Bearing(wrap_degrees(degrees))
    }

    /// Create a bearing from an angle in radians
    pub fn from_radians(radians: f64) -> Self {
        Bearing::from_degrees(radians * RAD2DEG)
    }

    pub fn degrees(&self) -> f64 {
        self.0
    }

    pub fn radians(&self) -> f64 {
        self.0 / RAD2DEG
    }

    /// Round to the given precision, staying inside [0, 360)
    pub fn round(self, precision: Precision) -> Self {
        Bearing::from_degrees(precision.apply(self.0))
    }
}

impl From<f64> for Bearing {
    fn from(degrees: f64) -> Self {
        Bearing::from_degrees(degrees)
    }
}

impl From<Bearing> for f64 {
    fn from(bearing: Bearing) -> Self {
        bearing.0
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

fn wrap_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(FULL_TURN_DEG);
    // Tiny negative inputs round up to a full turn
    if wrapped >= FULL_TURN_DEG {
        0.0
    } else {
        wrapped
    }
}

/// Converts an angle in radians to a bearing in degrees
pub fn number_to_bearing(radians: f64) -> Bearing {
    Bearing::from_radians(radians)
}

/// Initial great-circle bearing from `start` toward `end`
///
/// ```text
/// y = sin(Δλ)·cos(φ2)
/// x = cos(φ1)·sin(φ2) − sin(φ1)·cos(φ2)·cos(Δλ)
/// θ = atan2(y, x)
/// ```
///
/// # Examples
///
/// ```rust
/// use geotools::{bearing_to, Position, Precision};
///
/// let origin = Position::new(0.0, 0.0);
/// let east = Position::new(1.0, 0.0);
/// assert_eq!(bearing_to(&origin, &east, Precision::Digits(0)).degrees(), 90.0);
/// ```
pub fn bearing_to(start: &Position, end: &Position, precision: Precision) -> Bearing {
    let phi_start = start.lat_radians();
    let phi_end = end.lat_radians();
    let delta_lambda = (end.lon - start.lon).to_radians();

    let y = delta_lambda.sin() * phi_end.cos();
    let x = phi_start.cos() * phi_end.sin() - phi_start.sin() * phi_end.cos() * delta_lambda.cos();

    Bearing::from_radians(y.atan2(x)).round(precision)
}

/// Constant bearing of the rhumb line from `start` to `end`
///
/// A longitude difference of more than 180° is taken the short way across
/// the antimeridian.
pub fn rhumb_bearing_to(start: &Position, end: &Position, precision: Precision) -> Bearing {
    let phi_start = start.lat_radians();
    let phi_end = end.lat_radians();
    let mut delta_lambda = (end.lon - start.lon).to_radians();

    if delta_lambda.abs() > PI {
        delta_lambda = if delta_lambda > 0.0 {
            -(2.0 * PI - delta_lambda)
        } else {
            2.0 * PI + delta_lambda
        };
    }

    // Difference in Mercator-projected latitude
    let delta_psi = ((phi_end / 2.0 + FRAC_PI_4).tan() / (phi_start / 2.0 + FRAC_PI_4).tan()).ln();

    Bearing::from_radians(delta_lambda.atan2(delta_psi)).round(precision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case::north(0.0, 1.0, 0.0)]
    #[case::north_east(0.1, 0.1, 45.0)]
    #[case::east(1.0, 0.0, 90.0)]
    #[case::south_east(1.0, -1.0, 135.0)]
    #[case::south(0.0, -1.0, 180.0)]
    #[case::south_west(-1.0, -1.0, 225.0)]
    #[case::west(-1.0, 0.0, 270.0)]
    #[case::north_west(-1.0, 1.0, 315.0)]
    fn test_cardinal_bearings(#[case] lon: f64, #[case] lat: f64, #[case] expected: f64) {
        let origin = Position::new(0.0, 0.0);
        let bearing = bearing_to(&origin, &Position::new(lon, lat), Precision::Digits(0));
        assert_eq!(bearing.degrees(), expected);
    }

    #[test]
    fn test_bearing_without_explicit_precision() {
        let bearing = bearing_to(
            &Position::new(0.0, 0.0),
            &Position::new(1.0, 0.0),
            Precision::Legacy,
        );
        assert_relative_eq!(bearing.degrees(), 90.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bearing_keeps_requested_decimals() {
        // London to Paris, roughly 148.1°
        let london = Position::new(-0.1278, 51.5074);
        let paris = Position::new(2.3522, 48.8566);

        let raw = bearing_to(&london, &paris, Precision::Legacy).degrees();
        let rounded = bearing_to(&london, &paris, Precision::Digits(2)).degrees();

        assert!((raw - 148.1).abs() < 0.5, "unexpected bearing {raw}");
        assert_eq!(rounded, precision::round_half_even(raw, 2));
    }

    #[test]
    fn test_rounding_to_full_turn_wraps() {
        let almost_north = Bearing::from_degrees(359.9999);
        assert_eq!(almost_north.round(Precision::Digits(0)).degrees(), 0.0);
    }

    #[rstest]
    #[case(Position::new(179.0, 0.0), Position::new(-179.0, 0.0), 90.0)]
    #[case(Position::new(-179.0, 0.0), Position::new(179.0, 0.0), 270.0)]
    #[case(Position::new(0.0, 0.0), Position::new(0.0, 10.0), 0.0)]
    #[case(Position::new(10.0, 0.0), Position::new(0.0, 0.0), 270.0)]
    fn test_rhumb_bearing(#[case] start: Position, #[case] end: Position, #[case] expected: f64) {
        let bearing = rhumb_bearing_to(&start, &end, Precision::Digits(6));
        assert_relative_eq!(bearing.degrees(), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_rhumb_bearing_across_antimeridian_is_short_way() {
        let start = Position::new(170.0, 10.0);
        let end = Position::new(-170.0, 20.0);

        let out = rhumb_bearing_to(&start, &end, Precision::Digits(6)).degrees();
        let back = rhumb_bearing_to(&end, &start, Precision::Digits(6)).degrees();

        // Heading north-east and returning south-west
        assert!(out > 0.0 && out < 90.0, "outbound {out}");
        assert!(back > 180.0 && back < 270.0, "return {back}");
        assert_relative_eq!((back - out).abs(), 180.0, epsilon = 1e-6);
    }

    #[test]
    fn test_number_to_bearing() {
        assert_relative_eq!(number_to_bearing(-PI / 2.0).degrees(), 270.0, epsilon = 1e-12);
        assert_relative_eq!(number_to_bearing(PI).degrees(), 180.0, epsilon = 1e-12);
        assert_eq!(number_to_bearing(0.0).degrees(), 0.0);
    }

    #[test]
    fn test_bearing_always_normalized() {
        for degrees in [-720.0, -90.0, -1e-20, 360.0, 725.5] {
            let bearing = Bearing::from_degrees(degrees);
            assert!((0.0..360.0).contains(&bearing.degrees()), "{degrees}");
        }
    }

    #[rstest]
    #[case("400.0", 40.0)]
    #[case("-90.0", 270.0)]
    #[case("360", 0.0)]
    fn test_deserialized_bearing_is_normalized(#[case] json: &str, #[case] expected: f64) {
        let bearing: Bearing = serde_json::from_str(json).unwrap();
        assert_relative_eq!(bearing.degrees(), expected, epsilon = 1e-12);
        assert_eq!(
            serde_json::to_string(&bearing).unwrap(),
            serde_json::to_string(&expected).unwrap()
        );
    }
}
