//! Shapefile to GPX conversion driver
//!
//! Runs the reader, the bounds accumulator and the GPX writer for one
//! input/output pair. The output file is only created once the whole
//! document has been rendered, so every failure leaves it untouched.

use log::LevelFilter;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::coordinate::{LatLonBounds, Waypoint};
use crate::gpx;
use crate::shapefile::errors::ShapeResult;
use crate::shapefile::Shapefile;
use crate::utils::logger::Diagnostics;
use crate::utils::progress::ProgressTracker;

/// Settings for a conversion run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Most detailed level the driver reports at; `Off` silences diagnostics
    pub log_level: LevelFilter,
    /// Show a progress bar while records are read
    pub show_progress: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            log_level: LevelFilter::Info,
            show_progress: false,
        }
    }
}

/// Outcome of a successful conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionSummary {
    /// Number of waypoints written
    pub waypoints: usize,
    /// Bounds written to the document header
    pub bounds: LatLonBounds,
}

/// Converts point shapefiles into GPX waypoint files
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        Converter { options }
    }

    /// Converts `<input_base>.shp`/`.dbf` into the document at `output_path`
    ///
    /// An existing output file is overwritten. Failures are reported at
    /// error level (unless silenced) and returned to the caller. Every
    /// message of the run, including the reader's, honours
    /// `ConvertOptions::log_level`.
    ///
    /// # Arguments
    /// * `input_base` - Dataset path without extension
    /// * `output_path` - Full path of the GPX file to write
    pub fn convert(&self, input_base: &Path, output_path: &Path) -> ShapeResult<ConversionSummary> {
        let diagnostics = Diagnostics::new(self.options.log_level);

        match self.run(input_base, output_path, diagnostics) {
            Ok(summary) => {
                diagnostics.info(format_args!(
                    "Wrote {} waypoints to {}", summary.waypoints, output_path.display()
                ));
                Ok(summary)
            },
            Err(e) => {
                diagnostics.error(format_args!("Conversion of {} failed: {}", input_base.display(), e));
                Err(e)
            }
        }
    }

    fn run(&self, input_base: &Path, output_path: &Path, diagnostics: Diagnostics) -> ShapeResult<ConversionSummary> {
        let waypoints = self.read_waypoints(input_base, diagnostics)?;

        let bounds = LatLonBounds::from_waypoints(&waypoints);
        if bounds.is_empty() {
            diagnostics.debug(format_args!("No records, header keeps the initial bounds"));
        } else {
            diagnostics.debug(format_args!("Bounds: lat [{}, {}], lon [{}, {}]",
                                           bounds.min_lat, bounds.max_lat, bounds.min_lon, bounds.max_lon));
        }

        let file = File::create(output_path)?;
        let mut writer = BufWriter::new(file);
        gpx::write_document(&mut writer, &waypoints)?;

        Ok(ConversionSummary {
            waypoints: waypoints.len(),
            bounds,
        })
    }

    /// Reads the dataset; both input files are closed when this returns
    fn read_waypoints(&self, input_base: &Path, diagnostics: Diagnostics) -> ShapeResult<Vec<Waypoint>> {
        let mut shapefile = Shapefile::open(input_base, diagnostics)?;

        let tracker = if self.options.show_progress {
            Some(ProgressTracker::new(shapefile.record_count() as u64, "Reading records"))
        } else {
            None
        };

        shapefile.data(tracker.as_ref())
    }
}
