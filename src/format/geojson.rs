//! GeoJSON geometry envelopes

use super::bbox::BoundingBox;
use super::validation::position_precision;
use crate::constants::DEFAULT_COORDINATE_PRECISION;
use crate::coordinates::Position;
use crate::{GeoError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// GeoJSON geometry types this crate emits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    Point,
    LineString,
    Polygon,
}

impl GeometryKind {
    pub const ALL: [GeometryKind; 3] = [
        GeometryKind::Point,
        GeometryKind::LineString,
        GeometryKind::Polygon,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GeometryKind::Point => "Point",
            GeometryKind::LineString => "LineString",
            GeometryKind::Polygon => "Polygon",
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GeometryKind {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self> {
        GeometryKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = GeometryKind::ALL.iter().map(|k| k.name()).collect();
                GeoError::UnsupportedGeometry(format!(
                    "{s:?}; valid GeoJSON types are: {}",
                    valid.join(", ")
                ))
            })
    }
}

/// A GeoJSON geometry object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point {
        coordinates: Position,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bbox: Option<BoundingBox>,
    },
    LineString {
        coordinates: Vec<Position>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bbox: Option<BoundingBox>,
    },
    Polygon {
        coordinates: Vec<Vec<Position>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bbox: Option<BoundingBox>,
    },
}

/// Whether and how a geometry gets a `bbox` member
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BboxRequest {
    #[default]
    None,
    /// Derive the box from the geometry's vertices
    Computed,
    Explicit(BoundingBox),
}

impl Geometry {
    pub fn point(position: Position) -> Self {
        Geometry::Point {
            coordinates: position,
            bbox: None,
        }
    }

    pub fn line_string(positions: Vec<Position>) -> Self {
        Geometry::LineString {
            coordinates: positions,
            bbox: None,
        }
    }

    pub fn polygon(rings: Vec<Vec<Position>>) -> Self {
        Geometry::Polygon {
            coordinates: rings,
            bbox: None,
        }
    }

    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point { .. } => GeometryKind::Point,
            Geometry::LineString { .. } => GeometryKind::LineString,
            Geometry::Polygon { .. } => GeometryKind::Polygon,
        }
    }

    /// Every position in the geometry, in order
    pub fn vertices(&self) -> Vec<Position> {
        match self {
            Geometry::Point { coordinates, .. } => vec![*coordinates],
            Geometry::LineString { coordinates, .. } => coordinates.clone(),
            Geometry::Polygon { coordinates, .. } => coordinates.concat(),
        }
    }

    pub fn bbox(&self) -> Option<BoundingBox> {
        match self {
            Geometry::Point { bbox, .. }
            | Geometry::LineString { bbox, .. }
            | Geometry::Polygon { bbox, .. } => *bbox,
        }
    }

    fn bbox_mut(&mut self) -> &mut Option<BoundingBox> {
        match self {
            Geometry::Point { bbox, .. }
            | Geometry::LineString { bbox, .. }
            | Geometry::Polygon { bbox, .. } => bbox,
        }
    }

    /// Sets, derives or clears the `bbox` member
    pub fn with_bbox(mut self, request: BboxRequest) -> Self {
        let bbox = match request {
            BboxRequest::None => None,
            BboxRequest::Computed => Some(BoundingBox::from_vertices(&self.vertices())),
            BboxRequest::Explicit(bbox) => Some(bbox),
        };
        *self.bbox_mut() = bbox;
        self
    }

    /// Rounds every coordinate and the bbox to `digits` decimals
    pub fn with_precision(self, digits: u32) -> Self {
        let round = |p: &Position| position_precision(p, digits);
        let round_bbox = |b: Option<BoundingBox>| b.map(|b| b.with_precision(digits));

        match self {
            Geometry::Point { coordinates, bbox } => Geometry::Point {
                coordinates: round(&coordinates),
                bbox: round_bbox(bbox),
            },
            Geometry::LineString { coordinates, bbox } => Geometry::LineString {
                coordinates: coordinates.iter().map(round).collect(),
                bbox: round_bbox(bbox),
            },
            Geometry::Polygon { coordinates, bbox } => Geometry::Polygon {
                coordinates: coordinates
                    .iter()
                    .map(|ring| ring.iter().map(round).collect())
                    .collect(),
                bbox: round_bbox(bbox),
            },
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Builds a geometry of the named GeoJSON type from a flat vertex list
///
/// A `Point` takes exactly one vertex; a `Polygon` treats the vertices as
/// its single outer ring. Coordinates are rounded to `precision` decimals
/// (4 by default).
pub fn get_geojson(
    kind: &str,
    vertices: Vec<Position>,
    bbox: BboxRequest,
    precision: Option<u32>,
) -> Result<Geometry> {
    let geometry = match kind.parse::<GeometryKind>()? {
        GeometryKind::Point => match vertices.as_slice() {
            [position] => Geometry::point(*position),
            other => {
                return Err(GeoError::UnsupportedGeometry(format!(
                    "Point needs exactly one position, got {}",
                    other.len()
                )))
            }
        },
        GeometryKind::LineString => Geometry::line_string(vertices),
        GeometryKind::Polygon => Geometry::polygon(vec![vertices]),
    };

    Ok(geometry
        .with_bbox(bbox)
        .with_precision(precision.unwrap_or(DEFAULT_COORDINATE_PRECISION)))
}
