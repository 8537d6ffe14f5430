//! Longitude/latitude bounding boxes

use super::geojson::Geometry;
use super::validation::{position_precision, round_to};
use crate::constants::{
    DEFAULT_COORDINATE_PRECISION, DEFAULT_RESOLUTION_PIXELS, LAT_MAX, LAT_MIN, LON_MAX, LON_MIN,
};
use crate::coordinates::Position;
use crate::destination::great_circle_distance;
use serde::{Deserialize, Serialize};

/// Axis-aligned box in degrees, serialized as `[west, south, east, north]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl BoundingBox {
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        BoundingBox {
            west,
            south,
            east,
            north,
        }
    }

    /// An inverted world box that any position will extend
    pub fn empty() -> Self {
        BoundingBox::new(LON_MAX, LAT_MAX, LON_MIN, LAT_MIN)
    }

    /// Smallest box containing every vertex, each rounded to 4 decimals
    ///
    /// No vertices yields [`BoundingBox::empty`].
    pub fn from_vertices<'a, I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = &'a Position>,
    {
        vertices
            .into_iter()
            .fold(BoundingBox::empty(), |bbox, vertex| bbox.extend(vertex))
    }

    /// This box grown to contain `position` (rounded to 4 decimals)
    pub fn extend(self, position: &Position) -> Self {
        let p = position_precision(position, DEFAULT_COORDINATE_PRECISION);

        BoundingBox {
            west: self.west.min(p.lon),
            south: self.south.min(p.lat),
            east: self.east.max(p.lon),
            north: self.north.max(p.lat),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.west > self.east || self.south > self.north
    }

    pub fn south_west(&self) -> Position {
        Position::new(self.west, self.south)
    }

    pub fn north_east(&self) -> Position {
        Position::new(self.east, self.north)
    }

    /// Midpoint of the box in plain degree arithmetic
    pub fn center(&self) -> Position {
        Position::new(
            self.west + (self.east - self.west) / 2.0,
            self.south + (self.north - self.south) / 2.0,
        )
    }

    /// Meters per pixel when the box diagonal spans `pixels` (900 by default)
    pub fn resolution(&self, pixels: Option<u32>) -> f64 {
        let pixels = pixels.unwrap_or(DEFAULT_RESOLUTION_PIXELS).max(1);
        let meters = great_circle_distance(&self.south_west(), &self.north_east()).ceil();

        (meters / pixels as f64).round()
    }

    /// Closed polygon ring tracing the box, coordinates at 4 decimals
    pub fn to_polygon(&self) -> Geometry {
        let ring = vec![
            Position::new(self.west, self.south),
            Position::new(self.west, self.north),
            Position::new(self.east, self.north),
            Position::new(self.east, self.south),
            Position::new(self.west, self.south),
        ];

        Geometry::Polygon {
            coordinates: vec![ring],
            bbox: Some(*self),
        }
        .with_precision(DEFAULT_COORDINATE_PRECISION)
    }

    /// Every edge rounded to `digits` decimals
    pub fn with_precision(self, digits: u32) -> Self {
        BoundingBox {
            west: round_to(self.west, digits),
            south: round_to(self.south, digits),
            east: round_to(self.east, digits),
            north: round_to(self.north, digits),
        }
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from([west, south, east, north]: [f64; 4]) -> Self {
        BoundingBox::new(west, south, east, north)
    }
}

impl From<BoundingBox> for [f64; 4] {
    fn from(bbox: BoundingBox) -> Self {
        [bbox.west, bbox.south, bbox.east, bbox.north]
    }
}
