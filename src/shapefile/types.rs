//! Shape type definitions

use std::fmt;

/// Geometry type declared in a shapefile header or record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeType {
    Null,
    Point,
    PolyLine,
    Polygon,
    MultiPoint,
    PointZ,
    PolyLineZ,
    PolygonZ,
    MultiPointZ,
    PointM,
    PolyLineM,
    PolygonM,
    MultiPointM,
    MultiPatch,
    /// Code outside the ESRI table
    Unknown(i32),
}

impl ShapeType {
    /// Map a raw shape type code to its variant
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => ShapeType::Null,
            1 => ShapeType::Point,
            3 => ShapeType::PolyLine,
            5 => ShapeType::Polygon,
            8 => ShapeType::MultiPoint,
            11 => ShapeType::PointZ,
            13 => ShapeType::PolyLineZ,
            15 => ShapeType::PolygonZ,
            18 => ShapeType::MultiPointZ,
            21 => ShapeType::PointM,
            23 => ShapeType::PolyLineM,
            25 => ShapeType::PolygonM,
            28 => ShapeType::MultiPointM,
            31 => ShapeType::MultiPatch,
            other => ShapeType::Unknown(other),
        }
    }

    /// Raw code as written in the file
    pub fn code(&self) -> i32 {
        match self {
            ShapeType::Null => 0,
            ShapeType::Point => 1,
            ShapeType::PolyLine => 3,
            ShapeType::Polygon => 5,
            ShapeType::MultiPoint => 8,
            ShapeType::PointZ => 11,
            ShapeType::PolyLineZ => 13,
            ShapeType::PolygonZ => 15,
            ShapeType::MultiPointZ => 18,
            ShapeType::PointM => 21,
            ShapeType::PolyLineM => 23,
            ShapeType::PolygonM => 25,
            ShapeType::MultiPointM => 28,
            ShapeType::MultiPatch => 31,
            ShapeType::Unknown(code) => *code,
        }
    }

    /// Whether every record of this type is a single X/Y point
    ///
    /// Z and M variants still start with X then Y, so they qualify.
    pub fn is_point(&self) -> bool {
        matches!(self, ShapeType::Point | ShapeType::PointZ | ShapeType::PointM)
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeType::Unknown(code) => write!(f, "Unknown ({})", code),
            other => write!(f, "{:?} ({})", other, other.code()),
        }
    }
}
