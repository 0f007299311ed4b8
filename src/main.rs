use clap::{Arg, ArgAction, Command as ClapCommand};
use std::process;

use shp2gpx::commands::{Command, ConvertCommand};
use shp2gpx::utils::logger;

fn main() {
    let matches = ClapCommand::new("shp2gpx")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Conversion from SHP to GPX")
        .arg(
            Arg::new("shp")
                .long("shp")
                .help("ESRI shapefile name")
                .value_name("SHAPE FILE")
                .required(true),
        )
        .arg(
            Arg::new("gpx")
                .long("gpx")
                .help("GPX file name")
                .value_name("GPX FILE")
                .required(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Suppress all diagnostics")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose"),
        )
        .arg(
            Arg::new("progress")
                .long("progress")
                .help("Show a progress bar while reading records")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    logger::init_logger(logger::level_from_flags(
        matches.get_flag("verbose"),
        matches.get_flag("quiet"),
    ));

    let command = match ConvertCommand::new(&matches) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // The driver has already reported the failure on the log
    if command.execute().is_err() {
        process::exit(1);
    }
}
