//! Great-circle calculator
//!
//! Command line front end for bearings, path intersections, destinations
//! and bounding boxes on a spherical Earth.
//!
//! Usage:
//!   cargo run --bin geotool -- bearing 0,0 1,1 --precision 2
//!   cargo run --bin geotool -- intersect 0,0 90 10,10 180
//!   cargo run --bin geotool -- destination 0,0 45 100000 --json

use clap::{Parser, Subcommand};
use geotools::format::{get_geojson, validate_position, BboxRequest, BoundingBox};
use geotools::{
    bearing_to, destination, intersection, normal, rhumb_bearing_to, Bearing, Path,
    PathDefinition, Position, Precision,
};
use serde::Serialize;

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Great-circle calculator
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Bearings, destinations and path intersections on a spherical Earth",
    long_about = None
)]
struct Args {
    /// Emit results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Print intermediate vectors
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initial great-circle bearing from one position to another
    Bearing {
        /// Start as lon,lat
        #[arg(allow_hyphen_values = true)]
        start: Position,
        /// End as lon,lat
        #[arg(allow_hyphen_values = true)]
        end: Position,
        /// Decimal places; omitted keeps the computed value as is
        #[arg(short, long)]
        precision: Option<u32>,
    },

    /// Constant rhumb-line bearing from one position to another
    Rhumb {
        #[arg(allow_hyphen_values = true)]
        start: Position,
        #[arg(allow_hyphen_values = true)]
        end: Position,
        #[arg(short, long)]
        precision: Option<u32>,
    },

    /// Intersection of two paths, each continuing by bearing or to an end point
    Intersect {
        /// Start of path 1 as lon,lat
        #[arg(allow_hyphen_values = true)]
        start1: Position,
        /// Bearing in degrees or end point as lon,lat
        #[arg(allow_hyphen_values = true)]
        path1: PathDefinition,
        /// Start of path 2 as lon,lat
        #[arg(allow_hyphen_values = true)]
        start2: Position,
        /// Bearing in degrees or end point as lon,lat
        #[arg(allow_hyphen_values = true)]
        path2: PathDefinition,
    },

    /// Point reached after travelling a distance on an initial bearing
    Destination {
        #[arg(allow_hyphen_values = true)]
        origin: Position,
        /// Initial bearing in degrees
        #[arg(allow_hyphen_values = true)]
        bearing: f64,
        /// Distance in meters
        distance: f64,
    },

    /// Bounding box of a set of positions
    Bbox {
        /// Positions as lon,lat
        #[arg(required = true, allow_hyphen_values = true)]
        positions: Vec<Position>,
        /// Pixel width used for the resolution estimate
        #[arg(long, default_value_t = 900)]
        pixels: u32,
    },
}

#[derive(Serialize)]
struct BearingOutput {
    start: Position,
    end: Position,
    bearing: Bearing,
}

#[derive(Serialize)]
struct BboxOutput {
    bbox: BoundingBox,
    center: Position,
    meters_per_pixel: f64,
}

/// Prints either the JSON form or the plain-text form of a result
fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", text());
    }
    Ok(())
}

fn validated(position: Position) -> Result<Position> {
    validate_position(&position)?;
    Ok(position)
}

fn run_bearing(args: &Args, start: Position, end: Position, precision: Precision, rhumb: bool) -> Result<()> {
    let (start, end) = (validated(start)?, validated(end)?);
    let bearing = if rhumb {
        rhumb_bearing_to(&start, &end, precision)
    } else {
        bearing_to(&start, &end, precision)
    };

    let output = BearingOutput {
        start,
        end,
        bearing,
    };
    emit(args.json, &output, || bearing.degrees().to_string())
}

fn run_intersect(args: &Args, path1: Path, path2: Path) -> Result<()> {
    for path in [&path1, &path2] {
        validated(path.start)?;
        if let PathDefinition::Endpoint(end) = path.definition {
            validated(end)?;
        }
    }

    if args.debug {
        println!("c1 = {:?}", normal(&path1));
        println!("c2 = {:?}", normal(&path2));
    }

    let crossing = intersection(&path1, &path2)?;
    let geometry = get_geojson("Point", vec![crossing], BboxRequest::None, Some(6))?;
    emit(args.json, &geometry, || crossing.to_string())
}

fn run_destination(args: &Args, origin: Position, bearing: f64, distance: f64) -> Result<()> {
    let origin = validated(origin)?;
    let reached = destination(&origin, bearing, distance);

    if args.debug {
        println!("origin vector = {:?}", origin.to_cartesian());
        println!("reached vector = {:?}", reached.to_cartesian());
    }

    let geometry = get_geojson(
        "LineString",
        vec![origin, reached],
        BboxRequest::Computed,
        Some(6),
    )?;
    emit(args.json, &geometry, || reached.to_string())
}

fn run_bbox(args: &Args, positions: &[Position], pixels: u32) -> Result<()> {
    for position in positions {
        validate_position(position)?;
    }

    let bbox = BoundingBox::from_vertices(positions);
    let output = BboxOutput {
        bbox,
        center: bbox.center(),
        meters_per_pixel: bbox.resolution(Some(pixels)),
    };

    emit(args.json, &output, || {
        format!(
            "{},{},{},{} ({} m/px)",
            bbox.west, bbox.south, bbox.east, bbox.north, output.meters_per_pixel
        )
    })
}

fn main() -> Result<()> {
    let args = Args::parse();

    match &args.command {
        Command::Bearing {
            start,
            end,
            precision,
        } => run_bearing(&args, *start, *end, Precision::from(*precision), false),
        Command::Rhumb {
            start,
            end,
            precision,
        } => run_bearing(&args, *start, *end, Precision::from(*precision), true),
        Command::Intersect {
            start1,
            path1,
            start2,
            path2,
        } => run_intersect(
            &args,
            Path {
                start: *start1,
                definition: *path1,
            },
            Path {
                start: *start2,
                definition: *path2,
            },
        ),
        Command::Destination {
            origin,
            bearing,
            distance,
        } => run_destination(&args, *origin, *bearing, *distance),
        Command::Bbox { positions, pixels } => run_bbox(&args, positions, *pixels),
    }
}
