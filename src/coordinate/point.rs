//! Waypoint record produced from one shapefile row

/// A named geographic point
///
/// Built once by the shapefile reader and never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    latitude: f64,
    longitude: f64,
    name: String,
}

impl Waypoint {
    /// Create a new waypoint
    pub fn new(latitude: f64, longitude: f64, name: impl Into<String>) -> Self {
        Waypoint {
            latitude,
            longitude,
            name: name.into(),
        }
    }

    /// Latitude (the shapefile Y coordinate)
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude (the shapefile X coordinate)
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
