//! Composable UI component renderers.
//!
//! Each component renders one part of the interface and returns the next
//! free row, so layouts compose by threading the row position through.
//!
//! # Components
//!
//! - [`header`]: title bar with reading count
//! - [`scale`]: the AQI band legend strip
//! - [`search`]: search input box
//! - [`table`]: reading list (CITY, AQI, STATUS)
//! - [`dialog`]: add-entry modal
//! - [`notice`]: one-line result/detail messages
//! - [`footer`]: keybinding hints
//! - [`empty`]: message for a search with no hits
//!
//! # Layout modes
//!
//! Three high-level layouts cover the input modes: [`render_normal_mode`],
//! [`render_search_mode`] (adds the search box), and [`render_add_mode`]
//! (replaces the table with the dialog).

mod dialog;
mod empty;
mod footer;
mod header;
mod notice;
mod scale;
mod search;
mod table;

pub use notice::render_notice;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DialogInfo, SearchBarInfo, UIViewModel};

use dialog::render_dialog;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use scale::render_scale;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at the specified row.
///
/// Returns the next available row position.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the footer block (separator border plus keybinding bar).
fn render_footer_block(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Renders the body: the reading table, or the empty state when the
/// filtered view has no rows.
fn render_body(row: usize, vm: &UIViewModel, theme: &Theme, cols: usize) {
    if let Some(empty) = &vm.empty_state {
        render_empty_state(row + 1, empty, theme, cols);
        return;
    }

    let current_row = render_table_headers(row, theme);
    render_table_rows(current_row, &vm.display_items, theme, cols);
}

/// Renders the normal mode layout.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Scale legend]
/// [Table headers + rows | empty state]
/// [Border]
/// [Footer]
/// ```
pub fn render_normal_mode(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_scale(current_row, theme, cols);
    render_body(current_row, vm, theme, cols);

    render_footer_block(vm, theme, cols, rows);
}

/// Renders the search mode layout: normal layout with the 3-line search
/// box between the legend and the table.
pub fn render_search_mode(
    vm: &UIViewModel,
    search: &SearchBarInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_scale(current_row, theme, cols);
    current_row = render_search_bar(current_row, search, theme, cols);
    render_body(current_row, vm, theme, cols);

    render_footer_block(vm, theme, cols, rows);
}

/// Renders the add-entry layout: header chrome with the dialog in place of
/// the table.
pub fn render_add_mode(
    vm: &UIViewModel,
    dialog: &DialogInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_scale(current_row, theme, cols);
    render_dialog(current_row + 1, dialog, theme, cols);

    render_footer_block(vm, theme, cols, rows);
}
