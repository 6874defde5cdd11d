//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application
//! state. View models are created via `AppState::compute_viewmodel()` and
//! consumed by the renderer; they contain no business logic, only
//! display-ready data such as pre-computed highlight ranges and the band
//! color each row should carry.

use crate::app::modes::DraftField;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Rows to display in the reading table.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    /// Header information (title, count).
    pub header: HeaderInfo,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,

    /// Empty state message when no rows are visible.
    pub empty_state: Option<EmptyState>,

    /// Search bar state when search mode is active.
    pub search_bar: Option<SearchBarInfo>,

    /// Add-dialog state when the dialog is open.
    pub dialog: Option<DialogInfo>,
}

/// Display information for a single reading row.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    /// City name, truncated to the column width if necessary.
    pub city: String,

    /// The AQI value as display text.
    pub aqi_text: String,

    /// Status label for the reading's band.
    pub status: String,

    /// Hex color token of the reading's band.
    pub color: String,

    /// Whether this row is currently selected.
    pub is_selected: bool,

    /// Character ranges of the city name to highlight while searching.
    ///
    /// Each tuple is `(start, end)` in character indices, exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header bar.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the active mode.
    pub keybindings: String,
}

/// Empty state message, shown when the filtered view has no rows.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g. "No cities match \"xyz\"").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
}

/// Add-dialog display information.
#[derive(Debug, Clone)]
pub struct DialogInfo {
    /// Draft city name text.
    pub city: String,

    /// Draft AQI value text.
    pub aqi: String,

    /// Which dialog field holds focus.
    pub focus: DraftField,
}
