//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system for the dashboard,
//! supporting the two built-in themes (one per display mode) and custom
//! themes loaded from TOML files. It also provides the helpers that turn
//! hex colors into ANSI 24-bit escape sequences.
//!
//! # Built-in themes
//!
//! - `daylight`: light scheme (default for light display mode)
//! - `midnight`: dark scheme (default for dark display mode)
//!
//! # TOML format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#ffffff"
//! header_bg = "#4169e1"
//! selection_fg = "#1a1a2e"
//! selection_bg = "#cdd9f7"
//! text_normal = "#2e2e2e"
//! text_dim = "#767577"
//! border = "#b8c4de"
//! search_bar_border = "#4169e1"
//! dialog_border = "#4169e1"
//! match_highlight_fg = "#1a1a2e"
//! match_highlight_bg = "#ffe9a8"
//! empty_state_fg = "#4169e1"
//! badge_fg = "#ffffff"
//! notice_info_fg = "#4169e1"
//! notice_success_fg = "#7bbd00"
//! notice_error_fg = "#ff5252"
//! ```

use crate::domain::{AirwatchError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are hex strings (e.g. "#4169e1"). The AQI band colors are
/// deliberately absent: they belong to the domain and never vary by theme.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected row foreground color.
    pub selection_fg: String,
    /// Selected row background color.
    pub selection_bg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Search bar border color.
    pub search_bar_border: String,
    /// Add-dialog border color.
    pub dialog_border: String,

    /// Search match highlight foreground.
    pub match_highlight_fg: String,
    /// Search match highlight background.
    pub match_highlight_bg: String,

    /// Empty state message color.
    pub empty_state_fg: String,

    /// Text color on AQI value chips (over the band color).
    pub badge_fg: String,

    /// Info notice color.
    pub notice_info_fg: String,
    /// Success notice color.
    pub notice_success_fg: String,
    /// Error notice color.
    pub notice_error_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `daylight`, `midnight`. Returns `None` for unknown
    /// names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "daylight" => include_str!("../../themes/daylight.toml"),
            "midnight" => include_str!("../../themes/midnight.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`AirwatchError::Theme`] if the file cannot be read or its
    /// TOML content cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| AirwatchError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| AirwatchError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// The built-in dark theme (`midnight`).
    ///
    /// # Panics
    ///
    /// Panics if the embedded theme fails to parse, which cannot happen for
    /// a shipped build.
    #[must_use]
    pub fn dark_default() -> Self {
        Self::from_name("midnight").expect("built-in midnight theme should always parse")
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Strips a `#` prefix if present and falls back to white on any parse
    /// problem, so a malformed custom theme degrades instead of failing a
    /// render.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground color escape sequence for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color escape sequence for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// The ANSI bold escape sequence.
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// The ANSI dim escape sequence.
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// The ANSI reset escape sequence, clearing all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default light theme (`daylight`).
    fn default() -> Self {
        Self::from_name("daylight").expect("built-in daylight theme should always parse")
    }
}
