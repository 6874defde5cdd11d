//! Top-level rendering coordinator.
//!
//! Provides the main rendering entry point: it computes the view model
//! from application state and delegates to the layout matching the active
//! input mode (normal, search, or add dialog).

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the dashboard to stdout.
///
/// Prints ANSI-styled output using `print!`; the caller owns screen
/// clearing, cursor visibility, and flushing.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, state.theme(), rows, cols);
}

/// Renders a view model with the layout its state calls for.
fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    if let Some(dialog) = &vm.dialog {
        components::render_add_mode(vm, dialog, theme, cols, rows);
        return;
    }

    if let Some(search) = &vm.search_bar {
        components::render_search_mode(vm, search, theme, cols, rows);
    } else {
        components::render_normal_mode(vm, theme, cols, rows);
    }
}
