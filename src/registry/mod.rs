//! In-memory city registry.
//!
//! This module owns the ordered collection of city readings and its only
//! mutation path: a validated, atomic append. The registry stands where a
//! storage layer normally would, but the dashboard keeps its dataset
//! strictly in process memory; nothing is persisted between runs.
//!
//! # Identifier assignment
//!
//! Identifiers come from a counter owned by the registry, not from the
//! current collection size. The counter only moves forward, so an id is
//! never reused even if a removal operation is ever added.

use crate::domain::{CityReading, ValidationError};

/// Ordered, append-only collection of city readings.
///
/// Insertion order is preserved and existing entries are never reordered or
/// mutated. The registry grows by one entry per successful [`add`] and never
/// shrinks; there is no edit or delete operation.
///
/// [`add`]: CityRegistry::add
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityRegistry {
    entries: Vec<CityReading>,
    next_id: u64,
}

impl CityRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a registry seeded with the five built-in city readings.
    ///
    /// The dashboard starts from this fixed dataset on every launch:
    /// Kathmandu 158, Pokhara 65, Lalitpur 42, Bhaktapur 92 and
    /// Biratnagar 120, with identifiers 1 through 5.
    #[must_use]
    pub fn with_seed() -> Self {
        let entries = vec![
            CityReading::new(1, "Kathmandu", 158),
            CityReading::new(2, "Pokhara", 65),
            CityReading::new(3, "Lalitpur", 42),
            CityReading::new(4, "Bhaktapur", 92),
            CityReading::new(5, "Biratnagar", 120),
        ];
        let next_id = entries.len() as u64 + 1;
        Self { entries, next_id }
    }

    /// Validates a draft reading and appends it to the registry.
    ///
    /// Validation runs in order: the city name first (trimmed, must be
    /// non-empty), then the AQI text (trimmed, must parse as a whole
    /// number). The add is atomic: on any failure nothing changes, not
    /// even the identifier counter. The city is stored as entered; only
    /// the validation looks at the trimmed form.
    ///
    /// On success, returns a clone of the newly appended reading.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::EmptyCityName`] when the trimmed name is empty
    /// - [`ValidationError::InvalidAqiValue`] when the AQI text is empty or
    ///   not a whole number
    ///
    /// # Example
    ///
    /// ```
    /// use airwatch::registry::CityRegistry;
    ///
    /// let mut registry = CityRegistry::with_seed();
    /// let added = registry.add("Jumla", "310")?;
    /// assert_eq!(added.status(), "Hazardous");
    /// assert_eq!(registry.len(), 6);
    /// # Ok::<(), airwatch::domain::ValidationError>(())
    /// ```
    pub fn add(&mut self, city: &str, raw_aqi: &str) -> Result<CityReading, ValidationError> {
        if city.trim().is_empty() {
            tracing::debug!("rejected draft: empty city name");
            return Err(ValidationError::EmptyCityName);
        }

        let aqi: i64 = raw_aqi
            .trim()
            .parse()
            .map_err(|_| {
                tracing::debug!(raw_aqi, "rejected draft: AQI text is not a whole number");
                ValidationError::InvalidAqiValue
            })?;

        let reading = CityReading::new(self.next_id, city, aqi);
        self.next_id += 1;
        self.entries.push(reading.clone());

        tracing::debug!(
            id = reading.id,
            city = %reading.city,
            aqi = reading.aqi,
            status = reading.status(),
            "reading added"
        );

        Ok(reading)
    }

    /// The ordered readings, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[CityReading] {
        &self.entries
    }

    /// Number of readings in the registry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no readings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_contents_and_order() {
        let registry = CityRegistry::with_seed();
        let cities: Vec<_> = registry.entries().iter().map(|r| r.city.as_str()).collect();
        assert_eq!(
            cities,
            vec!["Kathmandu", "Pokhara", "Lalitpur", "Bhaktapur", "Biratnagar"]
        );

        let ids: Vec<_> = registry.entries().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_seed_statuses_match_readings() {
        let registry = CityRegistry::with_seed();
        let statuses: Vec<_> = registry.entries().iter().map(|r| r.status()).collect();
        assert_eq!(
            statuses,
            vec![
                "Unhealthy",
                "Moderate",
                "Good",
                "Moderate",
                "Unhealthy for Sensitive Groups",
            ]
        );
    }

    #[test]
    fn test_add_appends_and_classifies() {
        let mut registry = CityRegistry::with_seed();
        let before = registry.entries().to_vec();

        let added = registry.add("Pokhara", "65").expect("valid draft");
        assert_eq!(added.city, "Pokhara");
        assert_eq!(added.aqi, 65);
        assert_eq!(added.status(), "Moderate");

        assert_eq!(registry.len(), 6);
        assert_eq!(&registry.entries()[..5], &before[..]);
        assert_eq!(registry.entries()[5], added);
    }

    #[test]
    fn test_duplicate_city_names_are_allowed() {
        let mut registry = CityRegistry::with_seed();
        registry.add("Kathmandu", "90").expect("valid draft");
        let count = registry
            .entries()
            .iter()
            .filter(|r| r.city == "Kathmandu")
            .count();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_empty_city_name_is_rejected_first() {
        let mut registry = CityRegistry::with_seed();
        let before = registry.clone();

        assert_eq!(registry.add("", "30"), Err(ValidationError::EmptyCityName));
        assert_eq!(
            registry.add("   ", "abc"),
            Err(ValidationError::EmptyCityName)
        );
        assert_eq!(registry, before);
    }

    #[test]
    fn test_non_numeric_aqi_is_rejected() {
        let mut registry = CityRegistry::with_seed();
        let before = registry.clone();

        assert_eq!(
            registry.add("X", "abc"),
            Err(ValidationError::InvalidAqiValue)
        );
        assert_eq!(registry.add("X", ""), Err(ValidationError::InvalidAqiValue));
        assert_eq!(
            registry.add("X", "65.5"),
            Err(ValidationError::InvalidAqiValue)
        );
        assert_eq!(registry, before);
    }

    #[test]
    fn test_aqi_text_is_trimmed_before_parsing() {
        let mut registry = CityRegistry::with_seed();
        let added = registry.add("Jumla", " 310 ").expect("valid draft");
        assert_eq!(added.aqi, 310);
        assert_eq!(added.status(), "Hazardous");
    }

    #[test]
    fn test_negative_aqi_is_accepted_and_good() {
        let mut registry = CityRegistry::with_seed();
        let added = registry.add("Valley", "-3").expect("valid draft");
        assert_eq!(added.status(), "Good");
    }

    #[test]
    fn test_city_stored_as_entered() {
        let mut registry = CityRegistry::with_seed();
        let added = registry.add(" Jumla ", "12").expect("valid draft");
        assert_eq!(added.city, " Jumla ");
    }

    #[test]
    fn test_ids_stay_monotonic_across_failures() {
        let mut registry = CityRegistry::with_seed();
        let first = registry.add("A", "10").expect("valid draft");
        let _ = registry.add("", "20");
        let _ = registry.add("B", "oops");
        let second = registry.add("C", "30").expect("valid draft");

        assert_eq!(first.id, 6);
        assert_eq!(second.id, 7);
    }

    #[test]
    fn test_empty_registry() {
        let registry = CityRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }
}
