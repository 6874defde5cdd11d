//! Search filtering over city readings.
//!
//! This module implements the filter predicate applied to the registry's
//! entries: a case-insensitive substring match against the city name. The
//! match semantics are part of the contract: deliberately a plain substring
//! test, not a fuzzy or tokenized match.

use super::reading::CityReading;

/// Filters readings whose city name contains `query`, case-insensitively.
///
/// An empty query returns every reading unchanged. Relative order is always
/// preserved (a stable filter, never a re-sort), and the input slice is
/// never modified, so applying the filter twice with the same query yields
/// the same result.
///
/// # Example
///
/// ```
/// use airwatch::domain::{filter_readings, CityReading};
///
/// let readings = vec![
///     CityReading::new(1, "Kathmandu", 158),
///     CityReading::new(2, "Pokhara", 65),
/// ];
///
/// let hits = filter_readings(&readings, "KA");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].city, "Kathmandu");
/// ```
#[must_use]
pub fn filter_readings(readings: &[CityReading], query: &str) -> Vec<CityReading> {
    let _span = tracing::debug_span!(
        "filter_readings",
        total = readings.len(),
        query_len = query.len()
    )
    .entered();

    if query.is_empty() {
        return readings.to_vec();
    }

    let needle = query.to_lowercase();
    let filtered: Vec<CityReading> = readings
        .iter()
        .filter(|reading| reading.city.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    tracing::debug!(matched = filtered.len(), "search filter applied");

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed() -> Vec<CityReading> {
        vec![
            CityReading::new(1, "Kathmandu", 158),
            CityReading::new(2, "Pokhara", 65),
            CityReading::new(3, "Lalitpur", 42),
            CityReading::new(4, "Bhaktapur", 92),
            CityReading::new(5, "Biratnagar", 120),
        ]
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let readings = seed();
        let filtered = filter_readings(&readings, "");
        assert_eq!(filtered, readings);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let readings = seed();
        let filtered = filter_readings(&readings, "KA");
        let cities: Vec<_> = filtered.iter().map(|r| r.city.as_str()).collect();
        assert_eq!(cities, vec!["Kathmandu"]);

        let filtered = filter_readings(&readings, "kA");
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_substring_match_preserves_relative_order() {
        let readings = seed();
        let filtered = filter_readings(&readings, "pur");
        let cities: Vec<_> = filtered.iter().map(|r| r.city.as_str()).collect();
        assert_eq!(cities, vec!["Lalitpur", "Bhaktapur"]);
    }

    #[test]
    fn test_unique_match() {
        let readings = seed();
        let filtered = filter_readings(&readings, "kath");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].city, "Kathmandu");
    }

    #[test]
    fn test_no_match_yields_empty() {
        let readings = seed();
        assert!(filter_readings(&readings, "zurich").is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let readings = seed();
        let once = filter_readings(&readings, "a");
        let twice = filter_readings(&once, "");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_input_is_unchanged() {
        let readings = seed();
        let _ = filter_readings(&readings, "pur");
        assert_eq!(readings, seed());
    }
}
