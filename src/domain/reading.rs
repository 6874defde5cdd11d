//! City reading domain model.
//!
//! This module defines the core [`CityReading`] type representing one city's
//! current air-quality reading. The severity status and its color are not
//! stored on the entry: they are derived from the reading on demand via
//! [`AqiLevel::classify`], so an entry can never hold a status that
//! disagrees with its AQI value.

use super::aqi::AqiLevel;

/// One city's current air-quality reading.
///
/// # Fields
///
/// - `id`: stable identifier assigned by the registry, never reused
/// - `city`: display name as entered by the user; duplicates are allowed
/// - `aqi`: integer reading, unbounded beyond numeric validity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityReading {
    pub id: u64,
    pub city: String,
    pub aqi: i64,
}

impl CityReading {
    /// Creates a reading with the given identifier, name, and value.
    #[must_use]
    pub fn new(id: u64, city: impl Into<String>, aqi: i64) -> Self {
        Self {
            id,
            city: city.into(),
            aqi,
        }
    }

    /// Severity band for this reading.
    ///
    /// Recomputed from `aqi` on every call, keeping the derived pair
    /// consistent with the reading by construction.
    #[must_use]
    pub fn level(&self) -> AqiLevel {
        AqiLevel::classify(self.aqi as f64)
    }

    /// Status label for this reading (e.g. "Moderate").
    #[must_use]
    pub fn status(&self) -> &'static str {
        self.level().label()
    }

    /// Hex color token for this reading's band.
    #[must_use]
    pub fn color(&self) -> &'static str {
        self.level().color()
    }
}
