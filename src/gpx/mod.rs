//! GPX waypoint document output
//!
//! Renders waypoints into the fixed text layout downstream GPX consumers
//! expect from this tool.

pub mod writer;

pub use writer::{render, render_header, render_waypoint, write_document};
