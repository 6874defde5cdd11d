//! Notice line component renderer.
//!
//! Renders the one-line message the shim shows after an add attempt or a
//! detail request: success, error, or informational text.

use crate::app::actions::NoticeKind;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;

/// Renders a one-line notice at the specified row, centered.
///
/// The color follows the notice kind: info, success, or error.
pub fn render_notice(row: usize, kind: NoticeKind, message: &str, theme: &Theme, cols: usize) {
    let color = match kind {
        NoticeKind::Info => &theme.colors.notice_info_fg,
        NoticeKind::Success => &theme.colors.notice_success_fg,
        NoticeKind::Error => &theme.colors.notice_error_fg,
    };

    let text: String = message.chars().take(cols).collect();
    let text_len = text.chars().count();
    let padding = (cols.saturating_sub(text_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(color));
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
}
