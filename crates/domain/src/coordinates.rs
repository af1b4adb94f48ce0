//! Geographic coordinate pair.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair attached to a clock.
///
/// Carried through from the saved record unmodified; the board does not
/// interpret or validate it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl Coordinates {
    /// Creates a new coordinate pair.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}
