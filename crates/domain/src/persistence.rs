//! On-disk board formats.
//!
//! These types define the JSON shape of a saved board. Runtime behavior
//! lives on [`crate::Clock`], which is constructed from a [`SavedClock`].

use serde::{Deserialize, Serialize};

use crate::coordinates::Coordinates;

/// Current schema version for the board file format.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// A UUID string type for stable identifiers.
/// Using String instead of uuid::Uuid keeps externally supplied ids opaque.
pub type Id = String;

/// One clock entry as stored in the board file.
///
/// This is the raw record a [`crate::Clock`] is constructed from. Every
/// field except `timezone` is optional; `primary` defaults to `false` when
/// absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedClock {
    /// Stable identifier; assigned at construction when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,

    /// City or place name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Country name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// IANA timezone identifier, e.g. `Europe/Paris`.
    pub timezone: String,

    /// Geographic position, passed through unmodified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,

    /// Whether this is the board's primary clock.
    #[serde(default)]
    pub primary: bool,

    /// User-supplied override name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl SavedClock {
    /// Creates a record with only a timezone set.
    #[must_use]
    pub fn new(timezone: impl Into<String>) -> Self {
        Self {
            id: None,
            location: None,
            country: None,
            timezone: timezone.into(),
            coordinates: None,
            primary: false,
            name: None,
        }
    }

    /// Set the location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the country.
    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Set the override name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the coordinates.
    #[must_use]
    pub const fn with_coordinates(mut self, coordinates: Coordinates) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    /// Mark the record primary.
    #[must_use]
    pub const fn with_primary(mut self, primary: bool) -> Self {
        self.primary = primary;
        self
    }
}

/// The board document: schema version plus the saved clock entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardManifest {
    /// Schema version of the file format.
    pub schema_version: u32,

    /// Clock entries in stored order.
    #[serde(default)]
    pub clocks: Vec<SavedClock>,
}

impl BoardManifest {
    /// Creates an empty board at the current schema version.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            clocks: Vec::new(),
        }
    }
}

impl Default for BoardManifest {
    fn default() -> Self {
        Self::new()
    }
}
