//! Reading table component renderer.
//!
//! Renders the city list as a three-column table (CITY, AQI, STATUS). The
//! AQI value is drawn as a chip over its band color (the terminal
//! equivalent of the colored circle next to each city) and the status text
//! takes the band color as foreground.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// City column width, matching the truncation applied by the view model.
const CITY_COLUMN_WIDTH: usize = 22;

/// Minimum width of the AQI chip, including its surrounding spaces.
const AQI_CHIP_WIDTH: usize = 6;

/// Renders the table column headers at the specified row.
///
/// Returns the next available row position.
pub fn render_table_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!(
        "{:<city$} {:<chip$} {}",
        "CITY",
        "AQI",
        "STATUS",
        city = CITY_COLUMN_WIDTH,
        chip = AQI_CHIP_WIDTH
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all table rows starting at the specified row.
///
/// Returns the next available row position.
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single reading row.
///
/// Styling precedence: the selection background covers the whole row; the
/// AQI chip always keeps its band color so severity stays readable on a
/// selected row; match highlighting applies to the city cell only when the
/// row is not selected.
fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    helpers::render_highlighted_text(&item.city, &item.highlight_ranges, theme, item.is_selected);
    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    }

    let city_len = item.city.chars().count();
    print!("{}", " ".repeat(CITY_COLUMN_WIDTH.saturating_sub(city_len)));
    print!(" ");

    let chip = format!(" {:>width$} ", item.aqi_text, width = AQI_CHIP_WIDTH - 2);
    print!("{}", Theme::fg(&theme.colors.badge_fg));
    print!("{}", Theme::bg(&item.color));
    print!("{chip}");
    print!("{}", Theme::reset());

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&item.color));
    }

    print!(" {}", item.status);

    let line_len = CITY_COLUMN_WIDTH + 1 + chip.chars().count() + 1 + item.status.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
