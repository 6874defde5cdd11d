//! AQI scale legend component renderer.
//!
//! Renders the horizontal band strip showing every severity range with its
//! color, e.g. `0-50 Good`, `51-100 Moderate`, up to `300+ Hazardous`.

use crate::domain::AqiLevel;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;

/// Renders the one-line scale legend at the specified row.
///
/// Each band is drawn as a chip over its own color. Chips that would
/// overflow the terminal width are skipped, so narrow terminals show a
/// truncated but well-formed legend.
///
/// Returns the next available row position.
pub fn render_scale(row: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let mut used = 0;
    for level in AqiLevel::ALL {
        let chip = format!(" {} {} ", level.range_label(), level.short_label());
        let chip_len = chip.chars().count() + 1;
        if used + chip_len > cols {
            break;
        }

        print!("{}", Theme::fg(&theme.colors.badge_fg));
        print!("{}", Theme::bg(level.color()));
        print!("{chip}");
        print!("{}", Theme::reset());
        print!(" ");
        used += chip_len;
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}
