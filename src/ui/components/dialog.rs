//! Add-entry dialog component renderer.
//!
//! Renders the modal box for entering a new city reading: a city name
//! field, an AQI value field, and a hint line. The focused field carries a
//! `▸` marker.

use crate::app::modes::DraftField;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DialogInfo;

/// Total dialog width including borders.
const DIALOG_WIDTH: usize = 40;

/// Renders the add-entry dialog starting at the specified row.
///
/// Layout:
///
/// ```text
/// ┌─ Add New City ────────────────┐
/// │ ▸ City: Jumla                 │
/// │   AQI:  310                   │
/// │   Enter: add    ESC: cancel   │
/// └───────────────────────────────┘
/// ```
///
/// The box is horizontally centered. Returns the next available row
/// position (`row + 5`).
pub fn render_dialog(row: usize, dialog: &DialogInfo, theme: &Theme, cols: usize) -> usize {
    let width = DIALOG_WIDTH.min(cols);
    let inner = width.saturating_sub(2);
    let left = cols.saturating_sub(width) / 2;

    let border = &theme.colors.dialog_border;

    position_cursor(row, 1);
    print!("{}", " ".repeat(left));
    print!("{}", Theme::fg(border));
    let title = "─ Add New City ";
    print!("┌{title}{}┐", "─".repeat(inner.saturating_sub(title.chars().count())));
    print!("{}", Theme::reset());

    render_field_line(
        row + 1,
        left,
        inner,
        "City:",
        &dialog.city,
        dialog.focus == DraftField::City,
        theme,
    );
    render_field_line(
        row + 2,
        left,
        inner,
        "AQI: ",
        &dialog.aqi,
        dialog.focus == DraftField::Aqi,
        theme,
    );

    let hint = "Enter: add    ESC: cancel";
    let hint_padding = inner.saturating_sub(hint.chars().count() + 3);
    position_cursor(row + 3, 1);
    print!("{}", " ".repeat(left));
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("   {hint}{}", " ".repeat(hint_padding));
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 4, 1);
    print!("{}", " ".repeat(left));
    print!("{}", Theme::fg(border));
    print!("└{}┘", "─".repeat(inner));
    print!("{}", Theme::reset());

    row + 5
}

/// Renders one input line of the dialog.
fn render_field_line(
    row: usize,
    left: usize,
    inner: usize,
    label: &str,
    text: &str,
    focused: bool,
    theme: &Theme,
) {
    let border = &theme.colors.dialog_border;
    let marker = if focused { "▸ " } else { "  " };

    // marker + label + space + text, truncated from the front so the tail
    // the user is typing stays visible
    let budget = inner.saturating_sub(marker.chars().count() + label.chars().count() + 2);
    let shown: String = if text.chars().count() > budget {
        let skip = text.chars().count() - budget;
        text.chars().skip(skip).collect()
    } else {
        text.to_string()
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(left));
    print!("{}", Theme::fg(border));
    print!("│");

    if focused {
        print!("{}", Theme::bold());
    }
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!(" {marker}{label} {shown}");
    let used = 1 + marker.chars().count() + label.chars().count() + 1 + shown.chars().count();
    print!("{}", " ".repeat(inner.saturating_sub(used)));
    print!("{}", Theme::reset());

    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::reset());
}
