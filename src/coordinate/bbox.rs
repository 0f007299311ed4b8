//! Latitude/longitude bounds accumulated over a set of waypoints

use super::point::Waypoint;

/// Initial minimum latitude, above any valid latitude
pub const SENTINEL_MIN_LAT: f64 = 100.0;
/// Initial minimum longitude, above any valid longitude
pub const SENTINEL_MIN_LON: f64 = 400.0;
/// Initial maximum latitude, below any valid latitude
pub const SENTINEL_MAX_LAT: f64 = -100.0;
/// Initial maximum longitude, below any valid longitude
pub const SENTINEL_MAX_LON: f64 = -400.0;

/// Running min/max of observed coordinates
///
/// Starts from sentinel values outside the valid range so the first
/// observed point always replaces them. With no points observed the
/// sentinels are kept and end up in the document header as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLonBounds {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl LatLonBounds {
    /// Create bounds in the sentinel state
    pub fn new() -> Self {
        LatLonBounds {
            min_lat: SENTINEL_MIN_LAT,
            min_lon: SENTINEL_MIN_LON,
            max_lat: SENTINEL_MAX_LAT,
            max_lon: SENTINEL_MAX_LON,
        }
    }

    /// Compute the bounds of every waypoint in `waypoints`
    pub fn from_waypoints(waypoints: &[Waypoint]) -> Self {
        let mut bounds = LatLonBounds::new();
        for waypoint in waypoints {
            bounds.update(waypoint.latitude(), waypoint.longitude());
        }
        bounds
    }

    /// Return to the sentinel state
    pub fn reset(&mut self) {
        *self = LatLonBounds::new();
    }

    /// Widen the bounds to include a point
    pub fn update(&mut self, lat: f64, lon: f64) {
        self.min_lat = self.min_lat.min(lat);
        self.max_lat = self.max_lat.max(lat);
        self.min_lon = self.min_lon.min(lon);
        self.max_lon = self.max_lon.max(lon);
    }

    /// True while no point has been observed
    pub fn is_empty(&self) -> bool {
        self.min_lat > self.max_lat
    }
}

impl Default for LatLonBounds {
    fn default() -> Self {
        LatLonBounds::new()
    }
}
