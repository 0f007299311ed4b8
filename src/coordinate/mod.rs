//! Geographic records and their bounds
//!
//! This module provides the waypoint record read from a shapefile and the
//! accumulator computing the bounding box written to the document header.

mod bbox;
mod point;

// Re-export key types
pub use self::bbox::{
    LatLonBounds, SENTINEL_MAX_LAT, SENTINEL_MAX_LON, SENTINEL_MIN_LAT, SENTINEL_MIN_LON,
};
pub use self::point::Waypoint;
