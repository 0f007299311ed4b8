//! Custom error types for shapefile conversion

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::shapefile::types::ShapeType;

/// Shapefile conversion error types
#[derive(Debug)]
pub enum ShapeError {
    /// I/O error
    IoError(io::Error),
    /// Geometry resource (`.shp`) could not be found or opened
    GeometrySourceMissing(PathBuf),
    /// Attribute resource (`.dbf`) could not be found or opened
    AttributeSourceMissing(PathBuf),
    /// Geometry resource is not of point type
    UnsupportedGeometryType(ShapeType),
    /// Geometry and attribute resources disagree on record count
    RecordCountMismatch { geometry: usize, attributes: usize },
    /// Header of either resource is not recognised
    InvalidHeader(String),
    /// A single record could not be decoded
    MalformedRecord { index: usize, reason: String },
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::IoError(e) => write!(f, "I/O error: {}", e),
            ShapeError::GeometrySourceMissing(p) => write!(f, "Geometry file not found: {}", p.display()),
            ShapeError::AttributeSourceMissing(p) => write!(f, "Attribute file not found: {}", p.display()),
            ShapeError::UnsupportedGeometryType(t) => write!(f, "Unsupported geometry type: {}, only points can be converted", t),
            ShapeError::RecordCountMismatch { geometry, attributes } => write!(
                f, "Record count mismatch: {} geometries but {} attribute rows", geometry, attributes
            ),
            ShapeError::InvalidHeader(msg) => write!(f, "Invalid header: {}", msg),
            ShapeError::MalformedRecord { index, reason } => write!(f, "Malformed record #{}: {}", index, reason),
            ShapeError::GenericError(msg) => write!(f, "Shapefile error: {}", msg),
        }
    }
}

impl std::error::Error for ShapeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShapeError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ShapeError {
    fn from(error: io::Error) -> Self {
        ShapeError::IoError(error)
    }
}

/// Result type for shapefile operations
pub type ShapeResult<T> = Result<T, ShapeError>;

impl From<String> for ShapeError {
    fn from(msg: String) -> Self {
        ShapeError::GenericError(msg)
    }
}
