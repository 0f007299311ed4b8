//! Shapefile to GPX conversion command
//!
//! Resolves the file names given on the command line and hands them to
//! the conversion driver.

use clap::ArgMatches;
use std::path::PathBuf;

use crate::commands::command_traits::Command;
use crate::converter::{ConvertOptions, Converter};
use crate::shapefile::errors::{ShapeError, ShapeResult};
use crate::utils::logger;
use crate::utils::path_utils;

/// Command converting one shapefile into one GPX file
pub struct ConvertCommand {
    /// Dataset path without extension
    input_base: PathBuf,
    /// Output path with the `.gpx` extension
    output_file: PathBuf,
    /// Driver settings
    options: ConvertOptions,
}

impl ConvertCommand {
    /// Create a new convert command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// A new ConvertCommand instance or an error
    pub fn new(args: &ArgMatches) -> ShapeResult<Self> {
        let input = args.get_one::<String>("shp")
            .ok_or_else(|| ShapeError::GenericError("Missing input shapefile".to_string()))?;

        let output = args.get_one::<String>("gpx")
            .ok_or_else(|| ShapeError::GenericError("Missing output GPX file".to_string()))?;

        let options = ConvertOptions {
            log_level: logger::level_from_flags(args.get_flag("verbose"), args.get_flag("quiet")),
            show_progress: args.get_flag("progress"),
        };

        Ok(Self::from_paths(input, output, options))
    }

    /// Create a command from raw file names
    ///
    /// The input loses its extension; the output loses its extension and
    /// gets `.gpx` appended.
    pub fn from_paths(input: &str, output: &str, options: ConvertOptions) -> Self {
        ConvertCommand {
            input_base: path_utils::strip_extension(input),
            output_file: path_utils::gpx_output_path(output),
            options,
        }
    }

    pub fn input_base(&self) -> &PathBuf {
        &self.input_base
    }

    pub fn output_file(&self) -> &PathBuf {
        &self.output_file
    }
}

impl Command for ConvertCommand {
    fn execute(&self) -> ShapeResult<()> {
        let converter = Converter::new(self.options);
        converter.convert(&self.input_base, &self.output_file)?;
        Ok(())
    }
}
