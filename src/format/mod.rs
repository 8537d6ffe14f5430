//! Formatting layer in front of the geometry core
//!
//! Range validation, coordinate rounding, bounding boxes and GeoJSON
//! envelopes. The geometry modules assume their inputs already passed
//! through here.

pub mod bbox;
pub mod geojson;
pub mod validation;

pub use bbox::BoundingBox;
pub use geojson::{get_geojson, BboxRequest, Geometry, GeometryKind};
pub use validation::{
    destination_position, get_position, position_precision, round_to, validate_position,
};
