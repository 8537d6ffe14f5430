//! Destination points and distances along great circles
//!
//! Stepping along a great circle is delegated to a [`DestinationPoint`]
//! implementation so callers can plug in a different geodesy backend; the
//! default [`SphericalStepper`] uses the mean Earth radius.

use crate::constants::{EARTH_MEAN_RADIUS_M, RAD2DEG};
use crate::coordinates::{normalize_longitude, Position};

/// Something that can step along a great circle
pub trait DestinationPoint {
    /// Position reached from `origin` after `distance_m` meters on an
    /// initial bearing of `bearing_deg`
    fn destination_point(&self, origin: &Position, bearing_deg: f64, distance_m: f64) -> Position;
}

/// Great-circle stepping on a sphere of fixed radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalStepper {
    /// Sphere radius in meters
    pub radius_m: f64,
}

impl SphericalStepper {
    pub fn new(radius_m: f64) -> Self {
        SphericalStepper { radius_m }
    }
}

impl Default for SphericalStepper {
    fn default() -> Self {
        SphericalStepper::new(EARTH_MEAN_RADIUS_M)
    }
}

impl DestinationPoint for SphericalStepper {
    fn destination_point(&self, origin: &Position, bearing_deg: f64, distance_m: f64) -> Position {
        let phi1 = origin.lat_radians();
        let lambda1 = origin.lon_radians();
        let theta = bearing_deg.to_radians();
        // Angular distance travelled
        let delta = distance_m / self.radius_m;

        let phi2 = (phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos()).asin();
        let lambda2 = lambda1
            + (theta.sin() * delta.sin() * phi1.cos()).atan2(delta.cos() - phi1.sin() * phi2.sin());

        Position::new(lambda2 * RAD2DEG, phi2 * RAD2DEG)
    }
}

/// Destination from `origin` on `bearing_deg` after `distance_m` meters,
/// using the default spherical Earth
pub fn destination(origin: &Position, bearing_deg: f64, distance_m: f64) -> Position {
    destination_with(&SphericalStepper::default(), origin, bearing_deg, distance_m)
}

/// Destination computed by a caller-supplied stepper
///
/// The stepper's longitude is wrapped into [-180, 180) and the origin's
/// elevation is carried over.
pub fn destination_with<S: DestinationPoint + ?Sized>(
    stepper: &S,
    origin: &Position,
    bearing_deg: f64,
    distance_m: f64,
) -> Position {
    let reached = stepper.destination_point(origin, bearing_deg, distance_m);

    Position {
        lon: normalize_longitude(reached.lon),
        lat: reached.lat,
        elevation: origin.elevation,
    }
}

/// Great-circle distance in meters between two positions on the mean sphere
///
/// The central angle comes from the positions' unit vectors, so antipodal
/// and coincident points are equally well conditioned.
pub fn great_circle_distance(a: &Position, b: &Position) -> f64 {
    EARTH_MEAN_RADIUS_M * a.to_cartesian().angular_distance(&b.to_cartesian())
}
