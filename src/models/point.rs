use serde::{Deserialize, Serialize};

/// A single heatmap sample: coordinates, simulated crowd density and a
/// human-readable label for the map popup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
    pub intensity: f64,
    pub location: String,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64, intensity: f64, location: impl Into<String>) -> Self {
        Self {
            lat,
            lng,
            intensity,
            location: location.into(),
        }
    }
}

/// A fixed named reference coordinate. The landmark table is static
/// configuration; nothing mutates it at runtime.
#[derive(Debug, Clone, Copy)]
pub struct Landmark {
    pub lat: f64,
    pub lng: f64,
    pub name: &'static str,
}
