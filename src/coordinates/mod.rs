//! Positions on the sphere and their Cartesian vector form

pub mod cartesian;
pub mod position;

pub use cartesian::Cartesian3;
pub use position::{normalize_longitude, Position};

/// Unit vector for a position
pub fn to_vector(position: &Position) -> Cartesian3 {
    position.to_cartesian()
}

/// Position a vector points at
pub fn to_point(vector: Cartesian3) -> Position {
    Position::from_cartesian(vector)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::Rng;
    use rand::SeedableRng;

    #[test]
    fn test_position_to_vector_roundtrip() {
        let mut rng = StdRng::seed_from_u64(424242);
        for _ in 0..1000 {
            let lon = rng.gen_range(-180.0..180.0);
            // Longitude is undefined at the poles, so stay just off them
            let lat = rng.gen_range(-89.999..89.999);
            let original = Position::new(lon, lat);

            let vector = to_vector(&original);
            assert_relative_eq!(vector.magnitude(), 1.0, epsilon = 1e-12);

            let roundtrip = to_point(vector);
            assert_relative_eq!(roundtrip.lat, lat, epsilon = 1e-9);
            assert_relative_eq!(roundtrip.lon, lon, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_pole_roundtrip_keeps_latitude() {
        for lat in [90.0, -90.0] {
            let roundtrip = to_point(to_vector(&Position::new(45.0, lat)));
            assert_relative_eq!(roundtrip.lat, lat, epsilon = 1e-9);
        }
    }
}
