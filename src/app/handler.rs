//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input,
//! translating it into state changes and action sequences. It is the
//! primary control flow coordinator of the dashboard.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow:
//! 1. The shim maps raw key presses to [`Event`] values
//! 2. [`handle_event`] pattern-matches the event
//! 3. State mutations occur via [`AppState`] methods
//! 4. Actions are collected and returned for the shim to execute
//!
//! Validation failures on submit never escape this layer: they become a
//! [`Action::Notify`] and leave every piece of state untouched.

use super::actions::{Action, NoticeKind};
use super::modes::{DraftField, InputMode, SearchFocus};
use super::state::AppState;
use crate::domain::error::Result;

/// Events triggered by user input.
///
/// Each event is a discrete occurrence that may cause state changes and
/// action emissions. The handler processes them sequentially, so state
/// transitions are deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor down one position (wraps to top).
    KeyDown,
    /// Moves the cursor up one position (wraps to bottom).
    KeyUp,
    /// Leaves the application.
    Quit,
    /// Shows the selected reading's detail notice.
    ShowDetail,
    /// Enters search mode with typing focus.
    SearchMode,
    /// Focuses the search input field (from navigating focus).
    FocusSearchBar,
    /// Focuses the filtered results list (from typing focus).
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,
    /// Appends a character to the query or the focused draft field.
    Char(char),
    /// Removes the last character from the query or draft field.
    Backspace,
    /// Clears the search query and returns to normal mode.
    Escape,
    /// Opens the add-entry dialog, focusing the city field.
    OpenAddDialog,
    /// Moves dialog focus to the other field.
    NextDraftField,
    /// Validates the draft and appends it to the registry.
    SubmitAdd,
    /// Closes the dialog, keeping the draft for next time.
    CancelAdd,
    /// Swaps between the light and dark display themes.
    ToggleDisplayMode,
}

/// Processes an event, mutates application state, and returns actions.
///
/// Returns `(should_render, actions)`: the bool says whether the UI needs
/// repainting, the actions are side effects for the shim to execute. The
/// vector may be empty when an event requires no side effects.
///
/// # Errors
///
/// Currently none of the transitions fail; the `Result` carries the crate
/// error type so callers handle this layer uniformly with the rest of the
/// application.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::Quit => Ok((false, vec![Action::Quit])),
        Event::ShowDetail => {
            let Some(reading) = state.selected_reading() else {
                tracing::debug!("no reading selected");
                return Ok((false, vec![]));
            };

            let message = format!(
                "{}: AQI {}, {}",
                reading.city,
                reading.aqi,
                reading.status()
            );

            Ok((
                true,
                vec![Action::Notify {
                    kind: NoticeKind::Info,
                    message,
                }],
            ))
        }
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.search_query = String::new();
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.search_query.is_empty() {
                state.input_mode = InputMode::Normal;
                state.apply_search_filter();
                return Ok((true, vec![]));
            }

            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.search_query, "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.search_query = String::new();
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::Char(c) => match state.input_mode {
            InputMode::Search(_) => {
                state.search_query.push(*c);
                tracing::trace!(query = %state.search_query, "search query updated");
                state.apply_search_filter();
                Ok((true, vec![]))
            }
            InputMode::AddEntry(field) => {
                state.draft.field_mut(field).push(*c);
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::Backspace => match state.input_mode {
            InputMode::Search(_) => {
                state.search_query.pop();
                state.apply_search_filter();
                Ok((true, vec![]))
            }
            InputMode::AddEntry(field) => {
                state.draft.field_mut(field).pop();
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::Escape => {
            state.input_mode = InputMode::Normal;
            state.search_query = String::new();
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::OpenAddDialog => {
            tracing::debug!("opening add dialog");
            state.input_mode = InputMode::AddEntry(DraftField::City);
            Ok((true, vec![]))
        }
        Event::NextDraftField => {
            if let InputMode::AddEntry(field) = state.input_mode {
                state.input_mode = InputMode::AddEntry(field.next());
                Ok((true, vec![]))
            } else {
                Ok((false, vec![]))
            }
        }
        Event::SubmitAdd => {
            if !matches!(state.input_mode, InputMode::AddEntry(_)) {
                return Ok((false, vec![]));
            }

            match state.registry.add(&state.draft.city, &state.draft.aqi) {
                Ok(reading) => {
                    let message = format!("{} has been added to the list.", reading.city);
                    state.draft.clear();
                    state.input_mode = InputMode::Normal;
                    state.apply_search_filter();
                    Ok((
                        true,
                        vec![Action::Notify {
                            kind: NoticeKind::Success,
                            message,
                        }],
                    ))
                }
                Err(err) => {
                    tracing::debug!(error = %err, "draft rejected");
                    Ok((
                        true,
                        vec![Action::Notify {
                            kind: NoticeKind::Error,
                            message: err.to_string(),
                        }],
                    ))
                }
            }
        }
        Event::CancelAdd => {
            if matches!(state.input_mode, InputMode::AddEntry(_)) {
                state.input_mode = InputMode::Normal;
                Ok((true, vec![]))
            } else {
                Ok((false, vec![]))
            }
        }
        Event::ToggleDisplayMode => {
            state.display_mode = state.display_mode.toggled();
            tracing::debug!(display_mode = ?state.display_mode, "display mode toggled");
            Ok((true, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::DisplayMode;
    use crate::registry::CityRegistry;
    use crate::ui::theme::Theme;

    fn state() -> AppState {
        AppState::new(
            CityRegistry::with_seed(),
            Theme::default(),
            Theme::dark_default(),
            DisplayMode::Light,
        )
    }

    fn dispatch(state: &mut AppState, event: Event) -> Vec<Action> {
        handle_event(state, &event).expect("handler never fails").1
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            dispatch(state, Event::Char(c));
        }
    }

    #[test]
    fn test_chars_are_ignored_in_normal_mode() {
        let mut state = state();
        let (rendered, actions) = handle_event(&mut state, &Event::Char('x')).expect("ok");
        assert!(!rendered);
        assert!(actions.is_empty());
        assert!(state.search_query.is_empty());
        assert!(state.draft.city.is_empty());
    }

    #[test]
    fn test_search_typing_filters_incrementally() {
        let mut state = state();
        dispatch(&mut state, Event::SearchMode);
        type_text(&mut state, "pur");

        let cities: Vec<_> = state
            .filtered_readings
            .iter()
            .map(|r| r.city.as_str())
            .collect();
        assert_eq!(cities, vec!["Lalitpur", "Bhaktapur"]);

        dispatch(&mut state, Event::Backspace);
        assert_eq!(state.search_query, "pu");
    }

    #[test]
    fn test_exit_search_restores_full_list() {
        let mut state = state();
        dispatch(&mut state, Event::SearchMode);
        type_text(&mut state, "ka");
        dispatch(&mut state, Event::ExitSearch);

        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.search_query.is_empty());
        assert_eq!(state.filtered_readings.len(), 5);
    }

    #[test]
    fn test_focus_results_with_empty_query_leaves_search() {
        let mut state = state();
        dispatch(&mut state, Event::SearchMode);
        dispatch(&mut state, Event::FocusResults);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_successful_add_clears_draft_and_closes_dialog() {
        let mut state = state();
        dispatch(&mut state, Event::OpenAddDialog);
        type_text(&mut state, "Jumla");
        dispatch(&mut state, Event::NextDraftField);
        type_text(&mut state, "310");

        let actions = dispatch(&mut state, Event::SubmitAdd);

        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.draft.city.is_empty());
        assert!(state.draft.aqi.is_empty());
        assert_eq!(state.registry.len(), 6);
        assert_eq!(state.registry.entries()[5].status(), "Hazardous");

        assert_eq!(
            actions,
            vec![Action::Notify {
                kind: NoticeKind::Success,
                message: "Jumla has been added to the list.".to_string(),
            }]
        );
    }

    #[test]
    fn test_failed_add_preserves_draft_and_dialog() {
        let mut state = state();
        dispatch(&mut state, Event::OpenAddDialog);
        type_text(&mut state, "Jumla");
        dispatch(&mut state, Event::NextDraftField);
        type_text(&mut state, "abc");

        let actions = dispatch(&mut state, Event::SubmitAdd);

        assert_eq!(state.input_mode, InputMode::AddEntry(DraftField::Aqi));
        assert_eq!(state.draft.city, "Jumla");
        assert_eq!(state.draft.aqi, "abc");
        assert_eq!(state.registry.len(), 5);

        assert_eq!(
            actions,
            vec![Action::Notify {
                kind: NoticeKind::Error,
                message: "Please enter a valid AQI value.".to_string(),
            }]
        );
    }

    #[test]
    fn test_empty_city_rejection_names_the_city_field() {
        let mut state = state();
        dispatch(&mut state, Event::OpenAddDialog);
        dispatch(&mut state, Event::NextDraftField);
        type_text(&mut state, "30");

        let actions = dispatch(&mut state, Event::SubmitAdd);

        assert_eq!(state.registry.len(), 5);
        assert_eq!(
            actions,
            vec![Action::Notify {
                kind: NoticeKind::Error,
                message: "Please enter a city name.".to_string(),
            }]
        );
    }

    #[test]
    fn test_cancel_add_keeps_draft() {
        let mut state = state();
        dispatch(&mut state, Event::OpenAddDialog);
        type_text(&mut state, "Jum");
        dispatch(&mut state, Event::CancelAdd);

        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.draft.city, "Jum");

        dispatch(&mut state, Event::OpenAddDialog);
        assert_eq!(state.input_mode, InputMode::AddEntry(DraftField::City));
        assert_eq!(state.draft.city, "Jum");
    }

    #[test]
    fn test_toggle_display_mode_leaves_data_untouched() {
        let mut state = state();
        dispatch(&mut state, Event::SearchMode);
        type_text(&mut state, "pur");
        let filtered_before = state.filtered_readings.clone();
        let entries_before = state.registry.entries().to_vec();

        dispatch(&mut state, Event::ToggleDisplayMode);
        assert_eq!(state.display_mode, DisplayMode::Dark);
        assert_eq!(state.filtered_readings, filtered_before);
        assert_eq!(state.registry.entries(), &entries_before[..]);

        dispatch(&mut state, Event::ToggleDisplayMode);
        assert_eq!(state.display_mode, DisplayMode::Light);
    }

    #[test]
    fn test_show_detail_reports_selected_reading() {
        let mut state = state();
        let actions = dispatch(&mut state, Event::ShowDetail);
        assert_eq!(
            actions,
            vec![Action::Notify {
                kind: NoticeKind::Info,
                message: "Kathmandu: AQI 158, Unhealthy".to_string(),
            }]
        );
    }

    #[test]
    fn test_quit_emits_quit_action() {
        let mut state = state();
        let (rendered, actions) = handle_event(&mut state, &Event::Quit).expect("ok");
        assert!(!rendered);
        assert_eq!(actions, vec![Action::Quit]);
    }

    #[test]
    fn test_end_to_end_search_and_add_scenario() {
        let mut state = state();

        // Filter down to the two "pur" cities.
        dispatch(&mut state, Event::SearchMode);
        type_text(&mut state, "pur");
        let cities: Vec<_> = state
            .filtered_readings
            .iter()
            .map(|r| r.city.as_str())
            .collect();
        assert_eq!(cities, vec!["Lalitpur", "Bhaktapur"]);

        // Add Jumla 310 through the dialog while the query stays active.
        dispatch(&mut state, Event::OpenAddDialog);
        type_text(&mut state, "Jumla");
        dispatch(&mut state, Event::NextDraftField);
        type_text(&mut state, "310");
        dispatch(&mut state, Event::SubmitAdd);

        let added = state.registry.entries().last().expect("new entry");
        assert_eq!(added.status(), "Hazardous");
        assert_eq!(added.color(), "#7E0023");

        // The query stays active across the add: Jumla does not match it.
        assert_eq!(state.search_query, "pur");
        let cities: Vec<_> = state
            .filtered_readings
            .iter()
            .map(|r| r.city.as_str())
            .collect();
        assert_eq!(cities, vec!["Lalitpur", "Bhaktapur"]);

        // Clearing the query makes it visible again.
        dispatch(&mut state, Event::ExitSearch);
        assert_eq!(state.filtered_readings.len(), 6);
        assert!(state.filtered_readings.iter().any(|r| r.city == "Jumla"));
    }
}
