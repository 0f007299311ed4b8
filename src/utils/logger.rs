//! Logger setup for the command line tool
//!
//! Installs `env_logger` behind the `log` facade. The level chosen on the
//! command line is the default; `RUST_LOG` still takes precedence.
//!
//! Library code does not call the `log` macros directly. It reports through
//! a `Diagnostics` value carrying the level its caller asked for, so a
//! silenced conversion stays silent even when the global logger is verbose.

use log::{Level, LevelFilter};
use std::fmt;
use std::io::Write;

/// Logging verbosity derived from command line flags
pub fn level_from_flags(verbose: bool, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Off
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initializes the global logger
///
/// Messages go to stderr as `[LEVEL] message`. Calling this twice only
/// prints a warning, the first logger stays installed.
pub fn init_logger(level: LevelFilter) {
    let result = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .try_init();

    if result.is_err() {
        eprintln!("Warning: Global logger was already initialized");
    }
}

/// Level-gated reporting handle passed down from the conversion driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostics {
    level: LevelFilter,
}

impl Diagnostics {
    pub fn new(level: LevelFilter) -> Self {
        Diagnostics { level }
    }

    /// Reports nothing at all
    pub fn silent() -> Self {
        Diagnostics::new(LevelFilter::Off)
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// Whether a message at `level` would be forwarded to the logger
    pub fn enabled(&self, level: Level) -> bool {
        level <= self.level
    }

    /// Forwards a message to the `log` facade if `level` is enabled
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        if self.enabled(level) {
            log::log!(level, "{}", args);
        }
    }

    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Error, args);
    }

    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, args);
    }

    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, args);
    }

    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, args);
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Diagnostics::new(LevelFilter::Info)
    }
}
