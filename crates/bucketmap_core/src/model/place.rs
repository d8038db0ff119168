//! Saved place domain model.
//!
//! # Responsibility
//! - Define the canonical record for a user-saved point of interest.
//! - Keep identity (stable id) separate from editable content.
//!
//! # Invariants
//! - `id` is stable and never reused for another place.
//! - Equality compares `id` only; an edited copy of a place is still the
//!   same entry for selection matching and list lookup.

use crate::model::viewport::Coordinate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every saved place.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type PlaceId = Uuid;

/// Placeholder title given to a freshly dropped pin.
pub const NEW_PLACE_NAME: &str = "New location";

/// A user-saved point of interest on the map.
///
/// Edits go through full replacement in the store, so this stays a plain
/// value with public fields. Serialized as one element of the on-disk
/// JSON array; the id travels as its canonical UUID string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    /// Stable global ID used for selection matching and persistence.
    pub id: PlaceId,
    /// User-visible title.
    pub name: String,
    /// Free-form notes about the place.
    pub description: String,
    /// WGS84 latitude in degrees.
    pub latitude: f64,
    /// WGS84 longitude in degrees.
    pub longitude: f64,
}

impl Place {
    /// Creates a new place with a generated stable ID at `coordinate`.
    ///
    /// # Invariants
    /// - Title starts as the placeholder, description starts empty.
    pub fn new(coordinate: Coordinate) -> Self {
        Self::with_id(Uuid::new_v4(), coordinate)
    }

    /// Creates a new place with a caller-provided stable ID.
    ///
    /// Used by tests and import paths where identity already exists.
    pub fn with_id(id: PlaceId, coordinate: Coordinate) -> Self {
        Self {
            id,
            name: NEW_PLACE_NAME.to_string(),
            description: String::new(),
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
        }
    }

    /// Returns the place position as a coordinate value.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

impl PartialEq for Place {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Place {}
