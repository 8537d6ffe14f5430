//! # Great-Circle Intersection Module
//!
//! Two distinct great circles always cross at exactly two antipodal points.
//! If `c1` and `c2` are the circle normals, the candidates are `c1 × c2` and
//! `c2 × c1`. Finding them is trivial; almost all of the work here is
//! deciding which of the two a pair of paths actually meets at.
//!
//! ## Candidate Selection
//!
//! For a bearing path, `c × p` is the initial direction of travel from the
//! start `p`, so the sign of `(c × p) · i1` says whether the path heads
//! toward `i1` or toward its antipode. Endpoint paths carry no direction of
//! travel beyond their own extent, so they fall back to proximity: the
//! crossing closest to the centroid of the points involved.
//!
//! | path 1   | path 2   | rule                                              |
//! |----------|----------|---------------------------------------------------|
//! | bearing  | bearing  | both headings agree → that candidate; they       |
//! |          |          | disagree → the candidate away from the starts     |
//! | bearing  | endpoint | heading of path 1                                 |
//! | endpoint | bearing  | heading of path 2                                 |
//! | endpoint | endpoint | candidate nearer the centroid of all four points  |
//!
//! A start point lying exactly on the crossing has no heading toward either
//! candidate; in that case the other path decides, and when neither can,
//! the candidate nearest the starts is used.
//!
//! ## Examples
//!
//! ```rust
//! use geotools::{intersection, Path, Position};
//!
//! let eastward = Path::from_bearing(Position::new(0.0, 0.0), 90.0);
//! let southward = Path::from_bearing(Position::new(10.0, 10.0), 180.0);
//!
//! let crossing = intersection(&eastward, &southward).unwrap();
//! assert!((crossing.lon - 10.0).abs() < 1e-9);
//! assert!(crossing.lat.abs() < 1e-9);
//! ```

use crate::constants::DEGENERATE_EPSILON;
use crate::coordinates::{Cartesian3, Position};
use crate::greatcircle::{normal, Path, PathDefinition};
use crate::{GeoError, Result};
use log::{debug, warn};

/// The two antipodal points where two great circles cross
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidates {
    /// `c1 × c2`
    pub i1: Cartesian3,
    /// `c2 × c1`, always `-i1`
    pub i2: Cartesian3,
}

/// Which candidate a bearing path is heading toward from its start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Heading {
    TowardI1,
    TowardI2,
    /// The start lies on the crossing itself
    Through,
}

impl Heading {
    fn of(normal: &Cartesian3, start: &Cartesian3, i1: &Cartesian3) -> Self {
        // Compared as unit vectors
        let projection = normal.cross(start).dot(i1) / (normal.magnitude() * i1.magnitude());
        if projection > DEGENERATE_EPSILON {
            Heading::TowardI1
        } else if projection < -DEGENERATE_EPSILON {
            Heading::TowardI2
        } else {
            Heading::Through
        }
    }
}

impl Candidates {
    /// Candidate crossings of the circles with normals `c1` and `c2`
    ///
    /// Fails when either normal is degenerate or the circles coincide.
    pub fn from_normals(c1: Cartesian3, c2: Cartesian3) -> Result<Self> {
        if c1.is_degenerate() || c2.is_degenerate() {
            return Err(GeoError::IndeterminateGeometry(
                "path does not define a great circle".to_string(),
            ));
        }

        let i1 = c1.cross(&c2);
        let i2 = c2.cross(&c1);

        // Normals of unit-ish length: a short cross product means the
        // circles are the same (or antipodal) and cross everywhere
        let scale = c1.magnitude() * c2.magnitude();
        if (i1 / scale).is_degenerate() || (i2 / scale).is_degenerate() {
            return Err(GeoError::IndeterminateGeometry(
                "paths lie on the same great circle".to_string(),
            ));
        }

        Ok(Candidates { i1, i2 })
    }

    /// The candidate whose direction lies closer to `reference`
    fn nearest(&self, reference: &Cartesian3) -> Cartesian3 {
        if reference.dot(&self.i1) > 0.0 {
            self.i1
        } else {
            self.i2
        }
    }

    fn toward(&self, heading: Heading) -> Option<Cartesian3> {
        match heading {
            Heading::TowardI1 => Some(self.i1),
            Heading::TowardI2 => Some(self.i2),
            Heading::Through => None,
        }
    }
}

/// Point where two great-circle paths intersect
///
/// Each path is defined either by an initial bearing or by an end point.
/// Returns [`GeoError::IndeterminateGeometry`] when a path is degenerate
/// (end equal to start) or both paths run along the same great circle.
pub fn intersection(path1: &Path, path2: &Path) -> Result<Position> {
    let p1 = path1.start.to_cartesian();
    let p2 = path2.start.to_cartesian();

    let c1 = normal(path1);
    let c2 = normal(path2);

    let candidates = Candidates::from_normals(c1, c2).inspect_err(|e| {
        warn!(
            "no intersection for {:?} and {:?}: {}",
            path1.definition.kind(),
            path2.definition.kind(),
            e
        );
    })?;

    let chosen = match (&path1.definition, &path2.definition) {
        (PathDefinition::Bearing(_), PathDefinition::Bearing(_)) => {
            let dir1 = Heading::of(&c1, &p1, &candidates.i1);
            let dir2 = Heading::of(&c2, &p2, &candidates.i1);
            debug!("bearing/bearing headings {:?} {:?}", dir1, dir2);

            match (dir1, dir2) {
                (Heading::TowardI1, Heading::TowardI1) => candidates.i1,
                (Heading::TowardI2, Heading::TowardI2) => candidates.i2,
                // Heading apart: the paths meet on the far side
                (Heading::TowardI1, Heading::TowardI2) | (Heading::TowardI2, Heading::TowardI1) => {
                    -candidates.nearest(&(p1 + p2))
                }
                (Heading::Through, other) | (other, Heading::Through) => candidates
                    .toward(other)
                    .unwrap_or_else(|| candidates.nearest(&(p1 + p2))),
            }
        }
        (PathDefinition::Bearing(_), PathDefinition::Endpoint(_)) => {
            let dir1 = Heading::of(&c1, &p1, &candidates.i1);
            candidates
                .toward(dir1)
                .unwrap_or_else(|| candidates.nearest(&p1))
        }
        (PathDefinition::Endpoint(_), PathDefinition::Bearing(_)) => {
            let dir2 = Heading::of(&c2, &p2, &candidates.i1);
            candidates
                .toward(dir2)
                .unwrap_or_else(|| candidates.nearest(&p2))
        }
        (PathDefinition::Endpoint(end1), PathDefinition::Endpoint(end2)) => {
            let mid = p1 + p2 + end1.to_cartesian() + end2.to_cartesian();
            candidates.nearest(&mid)
        }
    };

    let crossing = Position::from_cartesian(chosen);
    debug!(
        "{:?}/{:?} paths from {} and {} cross at {}",
        path1.kind(),
        path2.kind(),
        path1.start,
        path2.start,
        crossing
    );

    Ok(crossing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    fn assert_position_eq(actual: Position, lon: f64, lat: f64, tolerance: f64) {
        assert_abs_diff_eq!(actual.lon, lon, epsilon = tolerance);
        assert_abs_diff_eq!(actual.lat, lat, epsilon = tolerance);
    }

    #[test]
    fn test_bearing_bearing_heading_to_i2() {
        let path1 = Path::from_bearing(Position::new(0.0, 0.0), 90.0);
        let path2 = Path::from_bearing(Position::new(10.0, 10.0), 180.0);

        assert_position_eq(intersection(&path1, &path2).unwrap(), 10.0, 0.0, 1e-3);
    }

    #[test]
    fn test_bearing_bearing_start_on_crossing() {
        // Path 2 runs down the prime meridian onto path 1's start
        let path1 = Path::from_bearing(Position::new(0.0, 0.0), 90.0);
        let path2 = Path::from_bearing(Position::new(0.0, 10.0), 180.0);

        assert_position_eq(intersection(&path1, &path2).unwrap(), 0.0, 0.0, 1e-9);
    }

    #[test]
    fn test_bearing_bearing_both_toward_same_candidate() {
        // Two ships converging on the 20°E meridian
        let path1 = Path::from_bearing(Position::new(10.0, 10.0), 135.0);
        let path2 = Path::from_bearing(Position::new(30.0, 10.0), 225.0);

        let crossing = intersection(&path1, &path2).unwrap();
        assert_abs_diff_eq!(crossing.lon, 20.0, epsilon = 1e-9);
        assert!(crossing.lat.abs() < 10.0);
    }

    #[test]
    fn test_bearing_bearing_diverging_meet_far_side() {
        // Path 1 heads for the crossing near (5°E, 5°S), path 2 leaves it
        // behind, so the answer is the antipodal crossing
        let path1 = Path::from_bearing(Position::new(0.0, 0.0), 135.0);
        let path2 = Path::from_bearing(Position::new(10.0, 0.0), 45.0);

        let crossing = intersection(&path1, &path2).unwrap();
        assert_abs_diff_eq!(crossing.lon, -175.0, epsilon = 1e-9);
        assert!(crossing.lat > 0.0);
    }

    #[test]
    fn test_bearing_endpoint() {
        let path1 = Path::from_bearing(Position::new(5.0, -20.0), 0.0);
        let path2 = Path::from_endpoint(Position::new(-10.0, 0.0), Position::new(10.0, 0.0));

        assert_position_eq(intersection(&path1, &path2).unwrap(), 5.0, 0.0, 1e-9);

        // Heading away from the segment picks the antipodal crossing
        let away = Path::from_bearing(Position::new(5.0, -20.0), 180.0);
        assert_position_eq(intersection(&away, &path2).unwrap(), -175.0, 0.0, 1e-9);
    }

    #[test]
    fn test_endpoint_bearing() {
        let path1 = Path::from_endpoint(Position::new(-10.0, 0.0), Position::new(10.0, 0.0));
        let path2 = Path::from_bearing(Position::new(5.0, 20.0), 180.0);

        assert_position_eq(intersection(&path1, &path2).unwrap(), 5.0, 0.0, 1e-9);
    }

    #[rstest]
    #[case(
        Path::from_endpoint(Position::new(-10.0, 0.0), Position::new(10.0, 0.0)),
        Path::from_endpoint(Position::new(3.0, -5.0), Position::new(3.0, 5.0))
    )]
    #[case(
        Path::from_endpoint(Position::new(51.0, 10.0), Position::new(55.0, 40.0)),
        Path::from_endpoint(Position::new(40.0, 30.0), Position::new(70.0, 20.0))
    )]
    fn test_endpoint_endpoint_is_symmetric(#[case] path1: Path, #[case] path2: Path) {
        let forward = intersection(&path1, &path2).unwrap();
        let swapped = intersection(&path2, &path1).unwrap();

        assert_position_eq(swapped, forward.lon, forward.lat, 1e-9);
    }

    #[test]
    fn test_endpoint_endpoint_picks_near_crossing() {
        let path1 = Path::from_endpoint(Position::new(-10.0, 0.0), Position::new(10.0, 0.0));
        let path2 = Path::from_endpoint(Position::new(3.0, -5.0), Position::new(3.0, 5.0));

        assert_position_eq(intersection(&path1, &path2).unwrap(), 3.0, 0.0, 1e-9);
    }

    #[test]
    fn test_same_start_and_bearing_is_indeterminate() {
        let path = Path::from_bearing(Position::new(12.0, 34.0), 56.0);
        let result = intersection(&path, &path);
        assert!(matches!(result, Err(GeoError::IndeterminateGeometry(_))));
    }

    #[test]
    fn test_same_circle_opposite_direction_is_indeterminate() {
        let path1 = Path::from_bearing(Position::new(0.0, 0.0), 90.0);
        let path2 = Path::from_bearing(Position::new(40.0, 0.0), 270.0);
        assert!(matches!(
            intersection(&path1, &path2),
            Err(GeoError::IndeterminateGeometry(_))
        ));
    }

    #[test]
    fn test_degenerate_endpoint_path_is_indeterminate() {
        let p = Position::new(1.0, 1.0);
        let path1 = Path::from_endpoint(p, p);
        let path2 = Path::from_bearing(Position::new(0.0, 0.0), 45.0);
        assert!(matches!(
            intersection(&path1, &path2),
            Err(GeoError::IndeterminateGeometry(_))
        ));
    }

    #[test]
    fn test_candidates_are_antipodal() {
        let c1 = Cartesian3::new(0.0, 0.0, 1.0);
        let c2 = Cartesian3::new(0.0, 1.0, 0.0);
        let candidates = Candidates::from_normals(c1, c2).unwrap();
        assert_eq!(candidates.i2, -candidates.i1);
    }
}
