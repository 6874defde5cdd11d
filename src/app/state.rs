//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! dashboard, along with methods for filtering, selection management, and
//! UI view model generation. It is the single source of truth for all
//! transient UI state.
//!
//! # State components
//!
//! - **Registry**: the ordered city readings (the only non-transient data)
//! - **Filtered readings**: subset after applying the search query
//! - **Selection**: cursor position within the filtered results
//! - **Input mode**: controls keybinding interpretation and UI layout
//! - **Draft**: unvalidated add-dialog text, pending submission
//! - **Display mode**: which of the two themes the view renders with
//!
//! The draft, the query, and the display mode are plain values owned here
//! in one explicit struct; none of the core operations keep hidden state.

use super::modes::{DisplayMode, DraftField, InputMode, SearchFocus};
use crate::domain::{filter_readings, CityReading};
use crate::registry::CityRegistry;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DialogInfo, DisplayItem, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, UIViewModel,
};

/// City column width in the reading table.
const CITY_COLUMN_WIDTH: usize = 22;

/// Pending, unvalidated add-dialog input.
///
/// Both fields hold raw text exactly as typed. Cleared only after a
/// successful add; cancelling the dialog keeps the draft for the next time
/// it opens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    /// Draft city name text.
    pub city: String,

    /// Draft AQI value text.
    pub aqi: String,
}

impl EntryDraft {
    /// Resets both fields to empty.
    pub fn clear(&mut self) {
        self.city.clear();
        self.aqi.clear();
    }

    /// Mutable access to the field currently holding focus.
    pub fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::City => &mut self.city,
            DraftField::Aqi => &mut self.aqi,
        }
    }
}

/// Central application state container.
///
/// Holds the registry plus all transient UI state. Mutated by the event
/// handler in response to user input; view models are computed on demand
/// from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The ordered city readings.
    pub registry: CityRegistry,

    /// Readings matching the current search query.
    ///
    /// Recomputed by [`apply_search_filter`](Self::apply_search_filter)
    /// after every state change that can affect it. Used for rendering and
    /// selection bounds checking.
    pub filtered_readings: Vec<CityReading>,

    /// Zero-based index of the selected reading within `filtered_readings`.
    ///
    /// Clamped to valid bounds when the filter changes; wraps around during
    /// navigation.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Current search query string.
    pub search_query: String,

    /// Pending add-dialog input.
    pub draft: EntryDraft,

    /// Which of the two themes the view renders with.
    pub display_mode: DisplayMode,

    /// Color scheme for light display mode.
    pub light_theme: Theme,

    /// Color scheme for dark display mode.
    pub dark_theme: Theme,
}

impl AppState {
    /// Creates application state around a registry and a theme pair.
    ///
    /// The filtered view starts out equal to the full registry (empty
    /// query), with the cursor on the first reading and Normal input mode.
    #[must_use]
    pub fn new(
        registry: CityRegistry,
        light_theme: Theme,
        dark_theme: Theme,
        display_mode: DisplayMode,
    ) -> Self {
        let mut state = Self {
            registry,
            filtered_readings: vec![],
            selected_index: 0,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            draft: EntryDraft::default(),
            display_mode,
            light_theme,
            dark_theme,
        };
        state.apply_search_filter();
        state
    }

    /// The theme selected by the current display mode.
    #[must_use]
    pub fn theme(&self) -> &Theme {
        match self.display_mode {
            DisplayMode::Light => &self.light_theme,
            DisplayMode::Dark => &self.dark_theme,
        }
    }

    /// Moves the cursor down one position, wrapping to the top at the end.
    ///
    /// No-op when the filtered list is empty.
    pub fn move_selection_down(&mut self) {
        if self.filtered_readings.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.filtered_readings.len();
    }

    /// Moves the cursor up one position, wrapping to the bottom at the top.
    ///
    /// No-op when the filtered list is empty.
    pub fn move_selection_up(&mut self) {
        if self.filtered_readings.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.filtered_readings.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// The currently selected reading, if any is visible.
    #[must_use]
    pub fn selected_reading(&self) -> Option<&CityReading> {
        self.filtered_readings.get(self.selected_index)
    }

    /// Re-applies the search query to the registry's readings.
    ///
    /// Updates `filtered_readings` from the registry through
    /// [`filter_readings`] and clamps `selected_index` back into bounds.
    /// Relative order always matches the registry.
    pub fn apply_search_filter(&mut self) {
        self.filtered_readings = filter_readings(self.registry.entries(), &self.search_query);

        if self.filtered_readings.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.filtered_readings.len() - 1);
        }
    }

    /// Computes a renderable view model from current state and terminal
    /// dimensions.
    ///
    /// Handles windowing (showing the subset of results around the cursor),
    /// match highlighting while searching, dialog state, and the empty
    /// state for a query with no hits.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, _cols: usize) -> UIViewModel {
        if self.filtered_readings.is_empty() {
            return UIViewModel {
                display_items: vec![],
                selected_index: 0,
                header: self.compute_header(),
                footer: self.compute_footer(),
                empty_state: Some(self.compute_empty_state()),
                search_bar: self.compute_search_bar(),
                dialog: self.compute_dialog(),
            };
        }

        let available_rows = self.calculate_available_rows(rows).max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.filtered_readings.len());

        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && self.filtered_readings.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let display_items: Vec<DisplayItem> = self.filtered_readings[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, reading)| {
                self.compute_display_item(reading, visible_start + relative_idx)
            })
            .collect();

        UIViewModel {
            display_items,
            selected_index: self.selected_index.saturating_sub(visible_start),
            header: self.compute_header(),
            footer: self.compute_footer(),
            empty_state: None,
            search_bar: self.compute_search_bar(),
            dialog: self.compute_dialog(),
        }
    }

    /// Computes a display item for one reading within the visible window.
    fn compute_display_item(&self, reading: &CityReading, absolute_idx: usize) -> DisplayItem {
        let city = if reading.city.chars().count() > CITY_COLUMN_WIDTH - 2 {
            let kept: String = reading.city.chars().take(CITY_COLUMN_WIDTH - 5).collect();
            format!("{kept}...")
        } else {
            reading.city.clone()
        };

        let highlight_ranges = if matches!(self.input_mode, InputMode::Search(_)) {
            substring_ranges(&city, &self.search_query)
        } else {
            vec![]
        };

        DisplayItem {
            city,
            aqi_text: reading.aqi.to_string(),
            status: reading.status().to_string(),
            color: reading.color().to_string(),
            is_selected: absolute_idx == self.selected_index,
            highlight_ranges,
        }
    }

    /// Computes header information: title plus visible reading count.
    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(" Air Quality Index ({}) ", self.filtered_readings.len()),
        }
    }

    /// Computes footer keybinding hints for the current input mode.
    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                "ESC: exit search  Enter: results  Ctrl+n/p: navigate  Type to filter".to_string()
            }
            InputMode::Search(SearchFocus::Navigating) => {
                "ESC: exit search  /: edit query  j/k or Ctrl+n/p: navigate  Enter: details"
                    .to_string()
            }
            InputMode::AddEntry(_) => "Tab: switch field  Enter: add  ESC: cancel".to_string(),
            InputMode::Normal => {
                "j/k or Ctrl+n/p: navigate  /: search  a: add city  d: dark mode  Enter: details  q: quit"
                    .to_string()
            }
        };

        FooterInfo { keybindings }
    }

    /// Computes the empty state message for a filter with no hits.
    fn compute_empty_state(&self) -> EmptyState {
        if self.search_query.is_empty() {
            EmptyState {
                message: "No readings yet".to_string(),
                subtitle: "Press 'a' to add a city".to_string(),
            }
        } else {
            EmptyState {
                message: format!("No cities match \"{}\"", self.search_query),
                subtitle: "Press ESC to clear the search".to_string(),
            }
        }
    }

    /// Computes search bar state when search mode is active.
    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        if matches!(self.input_mode, InputMode::Search(_)) {
            Some(SearchBarInfo {
                query: self.search_query.clone(),
            })
        } else {
            None
        }
    }

    /// Computes add-dialog state when the dialog is open.
    fn compute_dialog(&self) -> Option<DialogInfo> {
        if let InputMode::AddEntry(focus) = self.input_mode {
            Some(DialogInfo {
                city: self.draft.city.clone(),
                aqi: self.draft.aqi.clone(),
                focus,
            })
        } else {
            None
        }
    }

    /// Rows available for the reading table after subtracting UI chrome.
    ///
    /// Chrome is the blank top line, header, two borders, the scale legend,
    /// the column header row and the footer; search mode adds the 3-line
    /// search box.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Search(_) => total_rows.saturating_sub(10),
            InputMode::Normal | InputMode::AddEntry(_) => total_rows.saturating_sub(7),
        }
    }
}

/// Finds the first case-insensitive occurrence of `query` in `text`.
///
/// Returns at most one `(start, end)` character-index range (exclusive
/// end), or an empty vector when the query is empty or absent. Character
/// indices keep the range aligned with how the renderer slices the text.
fn substring_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    if query.is_empty() {
        return vec![];
    }

    let haystack: Vec<char> = text
        .chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect();
    let needle: Vec<char> = query
        .chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect();

    if needle.len() > haystack.len() {
        return vec![];
    }

    haystack
        .windows(needle.len())
        .position(|window| window == needle.as_slice())
        .map_or_else(Vec::new, |start| vec![(start, start + needle.len())])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(
            CityRegistry::with_seed(),
            Theme::default(),
            Theme::dark_default(),
            DisplayMode::Light,
        )
    }

    #[test]
    fn test_new_state_shows_all_readings() {
        let state = state();
        assert_eq!(state.filtered_readings.len(), 5);
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_selection_wraps_in_both_directions() {
        let mut state = state();
        state.move_selection_up();
        assert_eq!(state.selected_index, 4);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn test_filter_clamps_selection() {
        let mut state = state();
        state.selected_index = 4;
        state.search_query = "pur".to_string();
        state.apply_search_filter();
        assert_eq!(state.filtered_readings.len(), 2);
        assert_eq!(state.selected_index, 1);
    }

    #[test]
    fn test_theme_follows_display_mode() {
        let mut state = state();
        let light_name = state.theme().name.clone();
        state.display_mode = state.display_mode.toggled();
        assert_ne!(state.theme().name, light_name);
    }

    #[test]
    fn test_viewmodel_marks_selected_item() {
        let mut state = state();
        state.move_selection_down();
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.display_items.len(), 5);
        assert!(vm.display_items[1].is_selected);
        assert_eq!(vm.display_items[1].city, "Pokhara");
    }

    #[test]
    fn test_viewmodel_windows_around_selection() {
        let mut state = state();
        // 10 total rows leaves 3 for the table in normal mode.
        state.selected_index = 4;
        let vm = state.compute_viewmodel(10, 80);
        assert_eq!(vm.display_items.len(), 3);
        let cities: Vec<_> = vm.display_items.iter().map(|i| i.city.as_str()).collect();
        assert_eq!(cities, vec!["Lalitpur", "Bhaktapur", "Biratnagar"]);
        assert_eq!(vm.selected_index, 2);
    }

    #[test]
    fn test_viewmodel_empty_state_for_missed_query() {
        let mut state = state();
        state.search_query = "zzz".to_string();
        state.apply_search_filter();
        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.display_items.is_empty());
        let empty = vm.empty_state.expect("empty state");
        assert!(empty.message.contains("zzz"));
    }

    #[test]
    fn test_viewmodel_header_counts_filtered() {
        let mut state = state();
        state.search_query = "pur".to_string();
        state.apply_search_filter();
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.header.title, " Air Quality Index (2) ");
    }

    #[test]
    fn test_viewmodel_dialog_reflects_draft() {
        let mut state = state();
        state.input_mode = InputMode::AddEntry(DraftField::Aqi);
        state.draft.city = "Jumla".to_string();
        state.draft.aqi = "310".to_string();
        let vm = state.compute_viewmodel(24, 80);
        let dialog = vm.dialog.expect("dialog info");
        assert_eq!(dialog.city, "Jumla");
        assert_eq!(dialog.aqi, "310");
        assert_eq!(dialog.focus, DraftField::Aqi);
    }

    #[test]
    fn test_search_highlight_range() {
        assert_eq!(substring_ranges("Kathmandu", "KA"), vec![(0, 2)]);
        assert_eq!(substring_ranges("Bhaktapur", "pur"), vec![(6, 9)]);
        assert!(substring_ranges("Pokhara", "zzz").is_empty());
        assert!(substring_ranges("Pokhara", "").is_empty());
    }

    #[test]
    fn test_draft_field_access_and_clear() {
        let mut draft = EntryDraft::default();
        draft.field_mut(DraftField::City).push('J');
        draft.field_mut(DraftField::Aqi).push('9');
        assert_eq!(draft.city, "J");
        assert_eq!(draft.aqi, "9");
        draft.clear();
        assert_eq!(draft, EntryDraft::default());
    }
}
