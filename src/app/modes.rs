//! Input and display mode state types.
//!
//! This module defines the state machine enums that control user
//! interaction: which keybindings are active, which dialog field receives
//! typed characters, and which of the two color schemes the UI renders
//! with.

/// Focus state within search mode.
///
/// Determines whether search input is being typed or the filtered results
/// are being navigated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    Typing,

    /// User is navigating through filtered results.
    Navigating,
}

/// Focused field of the add-entry dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    /// The city name input.
    City,

    /// The AQI value input.
    Aqi,
}

impl DraftField {
    /// The other dialog field, for Tab cycling.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::City => Self::Aqi,
            Self::Aqi => Self::City,
        }
    }
}

/// Current input handling mode.
///
/// Controls which keybindings are active and where typed characters land.
/// Determines the displayed footer text and whether the search bar or the
/// add dialog is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    Normal,

    /// Active search mode with focus state.
    Search(SearchFocus),

    /// Add-entry dialog open, with the focused draft field.
    AddEntry(DraftField),
}

/// Display color scheme.
///
/// A presentation-only switch: toggling it swaps which theme the view is
/// rendered with and has no effect on the registry, the classifier, or the
/// search filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Light color scheme.
    Light,

    /// Dark color scheme.
    Dark,
}

impl DisplayMode {
    /// The opposite display mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mode_toggles_both_ways() {
        assert_eq!(DisplayMode::Light.toggled(), DisplayMode::Dark);
        assert_eq!(DisplayMode::Dark.toggled(), DisplayMode::Light);
        assert_eq!(DisplayMode::Light.toggled().toggled(), DisplayMode::Light);
    }

    #[test]
    fn test_draft_field_cycles() {
        assert_eq!(DraftField::City.next(), DraftField::Aqi);
        assert_eq!(DraftField::Aqi.next(), DraftField::City);
    }
}
