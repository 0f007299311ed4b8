pub mod io;
pub mod shapefile;
pub mod utils;
pub mod coordinate;
pub mod gpx;
pub mod converter;
pub mod commands;

pub use crate::converter::{ConversionSummary, ConvertOptions, Converter};

pub use shapefile::{Shapefile, ShapeError, ShapeResult, ShapeType};
pub use coordinate::{LatLonBounds, Waypoint};
