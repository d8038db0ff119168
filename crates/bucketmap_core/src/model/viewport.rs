//! Map viewport model.
//!
//! # Responsibility
//! - Describe the visible map region used to position new places.
//!
//! # Invariants
//! - Purely presentational; the store never validates coordinate bounds
//!   because centers always originate from the host map camera.

/// WGS84 latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Visible map region: center plus latitude/longitude span in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: Coordinate,
    pub latitude_span: f64,
    pub longitude_span: f64,
}

impl Viewport {
    pub fn new(center: Coordinate, latitude_span: f64, longitude_span: f64) -> Self {
        Self {
            center,
            latitude_span,
            longitude_span,
        }
    }
}

impl Default for Viewport {
    /// Initial region shown before the host camera reports anything: a
    /// wide view over western Europe.
    fn default() -> Self {
        Self::new(Coordinate::new(50.0, 0.0), 25.0, 25.0)
    }
}
