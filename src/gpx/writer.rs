//! GPX text rendering
//!
//! The layout is reproduced byte for byte from the historical output,
//! including the double space before `xmlns` and the missing closing
//! `</gpx>` tag. The result is therefore not well-formed XML; consumers of
//! this tool rely on that exact text. Names are written unescaped.

use std::io::Write;

use crate::coordinate::{LatLonBounds, Waypoint};
use crate::shapefile::errors::ShapeResult;
use crate::utils::format_utils::format_coordinate;

pub const XML_DECLARATION: &str = "<?xml version=\"1.0\"?>";

pub const GPX_OPEN_TAG: &str = concat!(
    "<gpx version=\"1.1\" creator=\"GDAL 3.0.4\" ",
    "xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" ",
    " xmlns=\"http://www.topografix.com/GPX/1/1\" ",
    "xsi:schemaLocation=\"http://www.topografix.com/GPX/1/1 http://www.topografix.com/GPX/1/1/gpx.xsd\">"
);

/// Symbol attached to every waypoint
pub const WAYPOINT_SYMBOL: &str = "Flag, Blue";

/// Renders the declaration, root tag and metadata bounds
pub fn render_header(bounds: &LatLonBounds) -> String {
    format!(
        "{}\n{}\n<metadata><bounds minlat=\"{}\" minlon=\"{}\" maxlat=\"{}\" maxlon=\"{}\" /></metadata>\n",
        XML_DECLARATION,
        GPX_OPEN_TAG,
        format_coordinate(bounds.min_lat),
        format_coordinate(bounds.min_lon),
        format_coordinate(bounds.max_lat),
        format_coordinate(bounds.max_lon),
    )
}

/// Renders one `<wpt>` block
pub fn render_waypoint(waypoint: &Waypoint) -> String {
    format!(
        "<wpt lat=\"{}\" lon=\"{}\">\n  <name>{}</name>\n  <sym>{}</sym>\n</wpt>\n",
        format_coordinate(waypoint.latitude()),
        format_coordinate(waypoint.longitude()),
        waypoint.name(),
        WAYPOINT_SYMBOL,
    )
}

/// Renders the whole document
///
/// Bounds are computed over all waypoints first since the header precedes
/// the body.
pub fn render(waypoints: &[Waypoint]) -> String {
    let bounds = LatLonBounds::from_waypoints(waypoints);
    let mut document = render_header(&bounds);
    for waypoint in waypoints {
        document.push_str(&render_waypoint(waypoint));
    }
    document
}

/// Writes the rendered document to `writer`
pub fn write_document(writer: &mut impl Write, waypoints: &[Waypoint]) -> ShapeResult<()> {
    writer.write_all(render(waypoints).as_bytes())?;
    writer.flush()?;
    Ok(())
}
