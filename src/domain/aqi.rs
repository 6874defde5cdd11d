//! AQI classification bands.
//!
//! This module defines [`AqiLevel`], the fixed six-band severity scale for
//! air-quality readings, and the classification rule mapping a numeric
//! reading onto it. Each band carries a display label and a color token in a
//! fixed one-to-one pairing; nothing outside this module ever chooses a
//! status or color independently.

/// Severity band for an air-quality reading.
///
/// Bands are ordered from least to most severe. The classification rule is
/// pure and total: every real number maps to exactly one band, with band
/// edges belonging to the lower band (`<=` semantics).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AqiLevel {
    /// Reading at or below 50 (including zero and negative values).
    Good,
    /// Reading above 50, at or below 100.
    Moderate,
    /// Reading above 100, at or below 150.
    UnhealthyForSensitiveGroups,
    /// Reading above 150, at or below 200.
    Unhealthy,
    /// Reading above 200, at or below 300.
    VeryUnhealthy,
    /// Reading above 300.
    Hazardous,
}

impl AqiLevel {
    /// All bands in ascending severity order, for legend rendering.
    pub const ALL: [Self; 6] = [
        Self::Good,
        Self::Moderate,
        Self::UnhealthyForSensitiveGroups,
        Self::Unhealthy,
        Self::VeryUnhealthy,
        Self::Hazardous,
    ];

    /// Classifies a numeric reading into its severity band.
    ///
    /// Deterministic and total over the reals. Band edges (50, 100, 150,
    /// 200, 300) resolve to the lower band; values at or below 50 are
    /// [`AqiLevel::Good`], including negative readings.
    ///
    /// # Example
    ///
    /// ```
    /// use airwatch::domain::AqiLevel;
    ///
    /// assert_eq!(AqiLevel::classify(42.0), AqiLevel::Good);
    /// assert_eq!(AqiLevel::classify(50.0), AqiLevel::Good);
    /// assert_eq!(AqiLevel::classify(310.0), AqiLevel::Hazardous);
    /// ```
    #[must_use]
    pub fn classify(value: f64) -> Self {
        if value <= 50.0 {
            Self::Good
        } else if value <= 100.0 {
            Self::Moderate
        } else if value <= 150.0 {
            Self::UnhealthyForSensitiveGroups
        } else if value <= 200.0 {
            Self::Unhealthy
        } else if value <= 300.0 {
            Self::VeryUnhealthy
        } else {
            Self::Hazardous
        }
    }

    /// Full status label shown in the reading list.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very Unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }

    /// Hex color token paired with this band.
    ///
    /// The pairing is fixed: a band always renders with the same color, and
    /// no color is shared between bands.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Good => "#7BBD00",
            Self::Moderate => "#FFBF00",
            Self::UnhealthyForSensitiveGroups => "#FF9E01",
            Self::Unhealthy => "#FF5252",
            Self::VeryUnhealthy => "#8F3F97",
            Self::Hazardous => "#7E0023",
        }
    }

    /// Numeric range label for the scale legend (e.g. "51-100").
    #[must_use]
    pub const fn range_label(self) -> &'static str {
        match self {
            Self::Good => "0-50",
            Self::Moderate => "51-100",
            Self::UnhealthyForSensitiveGroups => "101-150",
            Self::Unhealthy => "151-200",
            Self::VeryUnhealthy => "201-300",
            Self::Hazardous => "300+",
        }
    }

    /// Abbreviated label for the scale legend, where the full label is too
    /// wide for a one-line strip.
    #[must_use]
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::UnhealthyForSensitiveGroups => "Sensitive",
            other => other.label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_band_membership() {
        assert_eq!(AqiLevel::classify(42.0), AqiLevel::Good);
        assert_eq!(AqiLevel::classify(65.0), AqiLevel::Moderate);
        assert_eq!(AqiLevel::classify(120.0), AqiLevel::UnhealthyForSensitiveGroups);
        assert_eq!(AqiLevel::classify(158.0), AqiLevel::Unhealthy);
        assert_eq!(AqiLevel::classify(250.0), AqiLevel::VeryUnhealthy);
        assert_eq!(AqiLevel::classify(310.0), AqiLevel::Hazardous);
    }

    #[test]
    fn test_band_edges_resolve_to_lower_band() {
        assert_eq!(AqiLevel::classify(50.0), AqiLevel::Good);
        assert_eq!(AqiLevel::classify(100.0), AqiLevel::Moderate);
        assert_eq!(AqiLevel::classify(150.0), AqiLevel::UnhealthyForSensitiveGroups);
        assert_eq!(AqiLevel::classify(200.0), AqiLevel::Unhealthy);
        assert_eq!(AqiLevel::classify(300.0), AqiLevel::VeryUnhealthy);
        assert_eq!(AqiLevel::classify(300.1), AqiLevel::Hazardous);
    }

    #[test]
    fn test_zero_and_negative_are_good() {
        assert_eq!(AqiLevel::classify(0.0), AqiLevel::Good);
        assert_eq!(AqiLevel::classify(-17.0), AqiLevel::Good);
    }

    #[test]
    fn test_fractional_values_classify() {
        assert_eq!(AqiLevel::classify(50.5), AqiLevel::Moderate);
        assert_eq!(AqiLevel::classify(200.0001), AqiLevel::VeryUnhealthy);
    }

    #[test]
    fn test_classify_is_deterministic() {
        for value in [-3.0, 0.0, 50.0, 99.9, 151.0, 300.0, 1000.0] {
            assert_eq!(AqiLevel::classify(value), AqiLevel::classify(value));
        }
    }

    #[test]
    fn test_labels_and_colors_pair_one_to_one() {
        let labels: Vec<_> = AqiLevel::ALL.iter().map(|l| l.label()).collect();
        let colors: Vec<_> = AqiLevel::ALL.iter().map(|l| l.color()).collect();

        for (i, label) in labels.iter().enumerate() {
            for (j, other) in labels.iter().enumerate() {
                if i != j {
                    assert_ne!(label, other);
                    assert_ne!(colors[i], colors[j]);
                }
            }
        }
    }

    #[test]
    fn test_hazardous_color_token() {
        assert_eq!(AqiLevel::Hazardous.color(), "#7E0023");
        assert_eq!(AqiLevel::Hazardous.label(), "Hazardous");
    }
}
