//! Shapefile decoding module
//!
//! This module provides decoders for the geometry (`.shp`) and attribute
//! (`.dbf`) resources of an ESRI shapefile, and the paired reader that
//! turns a point dataset into waypoints.

pub mod errors;
pub(crate) mod constants;
pub mod types;
pub mod shp;
pub mod dbf;
pub mod reader;
#[cfg(test)]
mod tests;

pub use errors::{ShapeError, ShapeResult};
pub use types::ShapeType;
pub use shp::{Extent, RecordEntry, ShpFile};
pub use dbf::{DbfField, DbfFile};
pub use reader::Shapefile;
