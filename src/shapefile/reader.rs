//! Paired geometry/attribute reader
//!
//! A `Shapefile` value only exists once both resources have been opened
//! and checked against each other. Dropping it closes both files, on the
//! success path and on every early return alike.

use log::Level;
use std::path::Path;

use crate::coordinate::Waypoint;
use crate::shapefile::constants::{extensions, NAME_FIELDS};
use crate::shapefile::dbf::DbfFile;
use crate::shapefile::errors::{ShapeError, ShapeResult};
use crate::shapefile::shp::ShpFile;
use crate::shapefile::types::ShapeType;
use crate::utils::logger::Diagnostics;
use crate::utils::path_utils;
use crate::utils::progress::ProgressTracker;

/// Validated pair of geometry and attribute resources
pub struct Shapefile {
    geometry: ShpFile,
    attributes: DbfFile,
    diagnostics: Diagnostics,
}

impl Shapefile {
    /// Opens `<base>.shp` and `<base>.dbf`
    ///
    /// # Arguments
    /// * `base` - Path of the dataset without extension
    /// * `diagnostics` - Level-gated reporting for this dataset
    ///
    /// # Returns
    /// The validated pair, or the first failure encountered
    pub fn open(base: &Path, diagnostics: Diagnostics) -> ShapeResult<Self> {
        let geometry_path = path_utils::locate_resource(base, extensions::GEOMETRY)
            .ok_or_else(|| ShapeError::GeometrySourceMissing(
                path_utils::append_extension(base, extensions::GEOMETRY)))?;
        let attribute_path = path_utils::locate_resource(base, extensions::ATTRIBUTES)
            .ok_or_else(|| ShapeError::AttributeSourceMissing(
                path_utils::append_extension(base, extensions::ATTRIBUTES)))?;

        Self::open_files(&geometry_path, &attribute_path, diagnostics)
    }

    /// Opens an explicit geometry/attribute file pair
    pub fn open_files(geometry_path: &Path, attribute_path: &Path, diagnostics: Diagnostics) -> ShapeResult<Self> {
        diagnostics.info(format_args!("Opening shapefile {}", geometry_path.display()));
        let geometry = ShpFile::open(geometry_path, diagnostics)?;
        let attributes = DbfFile::open(attribute_path, diagnostics)?;
        Self::from_parts(geometry, attributes, diagnostics)
    }

    /// Validates an already decoded pair
    ///
    /// Rejects non-point geometry and record-count disagreement. On error
    /// both parts are dropped here.
    pub fn from_parts(geometry: ShpFile, attributes: DbfFile, diagnostics: Diagnostics) -> ShapeResult<Self> {
        let shape_type = geometry.shape_type();
        if !shape_type.is_point() {
            return Err(ShapeError::UnsupportedGeometryType(shape_type));
        }

        if geometry.record_count() != attributes.record_count() {
            return Err(ShapeError::RecordCountMismatch {
                geometry: geometry.record_count(),
                attributes: attributes.record_count(),
            });
        }

        Ok(Shapefile { geometry, attributes, diagnostics })
    }

    pub fn shape_type(&self) -> ShapeType {
        self.geometry.shape_type()
    }

    pub fn record_count(&self) -> usize {
        self.geometry.record_count()
    }

    /// Column holding waypoint names, if the table has one
    ///
    /// `nome` wins over `name`; both are matched exactly.
    pub fn name_field(&self) -> Option<usize> {
        NAME_FIELDS.iter().find_map(|candidate| self.attributes.field_index(candidate))
    }

    /// Reads every record as a waypoint, in file order
    ///
    /// X becomes the longitude and Y the latitude. Rows without a name
    /// column are named after their 1-based position.
    ///
    /// # Arguments
    /// * `progress` - Optional tracker advanced once per record
    pub fn data(&mut self, progress: Option<&ProgressTracker>) -> ShapeResult<Vec<Waypoint>> {
        let count = self.record_count();
        let name_field = self.name_field();
        match name_field {
            Some(index) => self.diagnostics.debug(format_args!(
                "Using attribute field '{}' for names", self.attributes.fields()[index].name
            )),
            None => self.diagnostics.debug(format_args!("No name field found, numbering waypoints")),
        }

        let mut waypoints = Vec::with_capacity(count);
        for index in 0..count {
            let (x, y) = self.geometry.point_at(index)?;
            let name = match name_field {
                Some(field) => self.attributes.read_string(index, field)?,
                None => (index + 1).to_string(),
            };

            if self.diagnostics.enabled(Level::Debug) {
                if self.attributes.is_deleted(index)? {
                    self.diagnostics.debug(format_args!("Row #{} is flagged deleted", index + 1));
                }
                self.diagnostics.debug(format_args!("\t{}\t{}\t{}", name, y, x));
            }
            waypoints.push(Waypoint::new(y, x, name));

            if let Some(tracker) = progress {
                tracker.increment(1);
            }
        }

        if let Some(tracker) = progress {
            tracker.finish();
        }

        Ok(waypoints)
    }
}
