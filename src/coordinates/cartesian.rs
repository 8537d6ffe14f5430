//! # Cartesian Vector Module
//!
//! Earth-centred Cartesian vectors used as the intermediate form for every
//! great-circle calculation in this crate.
//!
//! ## Axis Convention
//!
//! Right-handed, unit sphere:
//! - **X-axis**: Points toward 0°E, 0°N
//! - **Y-axis**: Points toward 90°E, 0°N
//! - **Z-axis**: Points toward the north pole (90°N)
//!
//! Positions become unit vectors; great circles are represented by their
//! (generally non-unit) normal vectors. Dot and cross products then answer
//! the geometric questions directly, without the singularities of
//! spherical coordinates.
//!
//! ## Examples
//!
//! ```rust
//! use geotools::coordinates::cartesian::Cartesian3;
//!
//! let greenwich_equator = Cartesian3::new(1.0, 0.0, 0.0);
//! let north_pole = Cartesian3::new(0.0, 0.0, 1.0);
//!
//! assert_eq!(greenwich_equator.dot(&north_pole), 0.0);
//! ```

use crate::constants::DEGENERATE_EPSILON;
use nalgebra::Vector3;

/// Three-dimensional Cartesian vector
///
/// Represents either a point on the unit sphere (magnitude 1.0) or the
/// normal of a great circle (any magnitude). Callers normally obtain these
/// from [`Position::to_cartesian`](crate::Position::to_cartesian) rather
/// than building them by hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cartesian3 {
    /// X-component (toward 0°E on the equator)
    pub x: f64,
    /// Y-component (toward 90°E on the equator)
    pub y: f64,
    /// Z-component (toward the north pole)
    pub z: f64,
}

impl Cartesian3 {
    /// Creates a new Cartesian vector
    ///
    /// # Examples
    ///
    /// ```rust
    /// use geotools::coordinates::cartesian::Cartesian3;
    ///
    /// let v = Cartesian3::new(1.0, 0.0, 0.0);
    /// assert_eq!(v.x, 1.0);
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Cartesian3 { x, y, z }
    }

    /// Euclidean length of the vector
    ///
    /// `magnitude = sqrt(x² + y² + z²)`
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// True when the vector is too short to define a direction
    ///
    /// Normals of degenerate paths and cross products of coincident great
    /// circles end up here.
    pub fn is_degenerate(&self) -> bool {
        !(self.magnitude() >= DEGENERATE_EPSILON)
    }

    /// Returns a unit vector in the same direction, or `None` for a zero vector
    pub fn normalize(&self) -> Option<Cartesian3> {
        let mag = self.magnitude();
        if mag == 0.0 {
            None
        } else {
            Some(*self / mag)
        }
    }

    /// Dot product with another vector
    ///
    /// `dot = x₁*x₂ + y₁*y₂ + z₁*z₂`
    pub fn dot(&self, other: &Cartesian3) -> f64 {
        self.to_vector3().dot(&other.to_vector3())
    }

    /// Cross product with another vector
    ///
    /// ```text
    /// cross = (y₁*z₂ - z₁*y₂, z₁*x₂ - x₁*z₂, x₁*y₂ - y₁*x₂)
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use geotools::coordinates::cartesian::Cartesian3;
    ///
    /// let x_axis = Cartesian3::new(1.0, 0.0, 0.0);
    /// let y_axis = Cartesian3::new(0.0, 1.0, 0.0);
    /// let z_axis = x_axis.cross(&y_axis);
    /// assert_eq!(z_axis, Cartesian3::new(0.0, 0.0, 1.0));
    /// ```
    pub fn cross(&self, other: &Cartesian3) -> Cartesian3 {
        self.to_vector3().cross(&other.to_vector3()).into()
    }

    /// Angle between two vectors in radians, in [0, π]
    ///
    /// For unit vectors this is the central angle of the great-circle arc
    /// joining the two points. `atan2(|a × b|, a · b)` stays accurate for
    /// nearly coincident and nearly antipodal points, where `acos` does not.
    /// A zero vector gives 0.
    pub fn angular_distance(&self, other: &Cartesian3) -> f64 {
        self.cross(other).magnitude().atan2(self.dot(other))
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Cartesian3 {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }
}

impl From<Vector3<f64>> for Cartesian3 {
    fn from(vec: Vector3<f64>) -> Self {
        Cartesian3::from_vector3(vec)
    }
}

// Arithmetic operations for convenience
impl std::ops::Add for Cartesian3 {
    type Output = Cartesian3;

    fn add(self, other: Cartesian3) -> Cartesian3 {
        Cartesian3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl std::ops::Neg for Cartesian3 {
    type Output = Cartesian3;

    fn neg(self) -> Cartesian3 {
        Cartesian3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl std::ops::Div<f64> for Cartesian3 {
    type Output = Cartesian3;

    fn div(self, scalar: f64) -> Cartesian3 {
        Cartesian3 {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const ZERO: Cartesian3 = Cartesian3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    #[test]
    fn test_magnitude_calculation() {
        let coord = Cartesian3::new(3.0, 4.0, 0.0);
        assert_eq!(coord.magnitude(), 5.0);

        assert_eq!(ZERO.magnitude(), 0.0);
    }

    #[test]
    fn test_degenerate_detection() {
        assert!(ZERO.is_degenerate());
        assert!(Cartesian3::new(1e-15, -1e-15, 0.0).is_degenerate());
        assert!(Cartesian3::new(f64::NAN, 0.0, 0.0).is_degenerate());
        assert!(!Cartesian3::new(0.0, 0.0, 1e-6).is_degenerate());
    }

    #[test]
    fn test_normalize() {
        let normalized = Cartesian3::new(3.0, 4.0, 0.0).normalize().unwrap();
        assert!((normalized.magnitude() - 1.0).abs() < 1e-15);
        assert!((normalized.x - 0.6).abs() < 1e-15);
        assert!((normalized.y - 0.8).abs() < 1e-15);

        assert!(ZERO.normalize().is_none());
    }

    #[test]
    fn test_cross_product_is_anticommutative() {
        let a = Cartesian3::new(0.3, -1.2, 0.7);
        let b = Cartesian3::new(-0.5, 0.4, 2.0);

        assert_eq!(a.cross(&b), -b.cross(&a));
        assert!(a.cross(&b).dot(&a).abs() < 1e-15);
        assert!(a.cross(&b).dot(&b).abs() < 1e-15);
    }

    #[test]
    fn test_cross_product_axes() {
        let x_axis = Cartesian3::new(1.0, 0.0, 0.0);
        let y_axis = Cartesian3::new(0.0, 1.0, 0.0);
        let z_axis = Cartesian3::new(0.0, 0.0, 1.0);

        assert_eq!(y_axis.cross(&z_axis), x_axis);
        assert_eq!(z_axis.cross(&x_axis), y_axis);
        assert!(x_axis.cross(&x_axis).is_degenerate());
    }

    #[test]
    fn test_angular_distance() {
        let x_axis = Cartesian3::new(1.0, 0.0, 0.0);
        let y_axis = Cartesian3::new(0.0, 1.0, 0.0);

        assert!((x_axis.angular_distance(&y_axis) - FRAC_PI_2).abs() < 1e-15);
        assert!((x_axis.angular_distance(&-x_axis) - PI).abs() < 1e-15);
        assert_eq!(x_axis.angular_distance(&Cartesian3::new(2.0, 0.0, 0.0)), 0.0);
        assert_eq!(x_axis.angular_distance(&ZERO), 0.0);
    }

    #[test]
    fn test_angular_distance_resolves_tiny_arcs() {
        // One micro-radian apart, where acos(dot) loses most of its digits
        let a = Cartesian3::new(1.0, 0.0, 0.0);
        let b = Cartesian3::new(1e-6f64.cos(), 1e-6f64.sin(), 0.0);

        assert!((a.angular_distance(&b) - 1e-6).abs() < 1e-15);
    }

    #[test]
    fn test_arithmetic_operations() {
        let a = Cartesian3::new(1.0, 2.0, 3.0);
        let b = Cartesian3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Cartesian3::new(5.0, 7.0, 9.0));
        assert_eq!(a / 2.0, Cartesian3::new(0.5, 1.0, 1.5));
        assert_eq!(-a, Cartesian3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_vector3_conversions() {
        let coord = Cartesian3::new(1.0, 2.0, 3.0);
        let vec = coord.to_vector3();

        assert_eq!(vec, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(Cartesian3::from(vec), coord);
        assert_eq!(coord.dot(&Cartesian3::new(-2.0, 0.5, 1.0)), 2.0);
    }
}
