//! Airwatch: a terminal dashboard for city air-quality readings.
//!
//! Airwatch displays a fixed set of city AQI readings and lets the user:
//! - Search and filter the list by city name (case-insensitive substring)
//! - Add new readings through a validated entry dialog
//! - Toggle between light and dark display themes
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Shim (main.rs)                            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Registry      │   │ Domain        │
//! │ (ui/)         │   │ (registry/)   │   │ (domain/)     │
//! │ - Rendering   │   │ - Seed data   │   │ - AQI bands   │
//! │ - Theming     │   │ - Atomic add  │   │ - Validation  │
//! │ - Components  │   │ - Ordering    │   │ - Search      │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Observability                     │
//! │  - Data directory paths (infrastructure/)           │
//! │  - File-backed tracing (observability/)             │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: application state machine with event/action model
//! - [`domain`]: core domain types (AQI bands, readings, errors, search)
//! - [`registry`]: the ordered in-memory reading collection
//! - [`ui`]: terminal rendering with theme support
//! - [`infrastructure`]: platform utilities (paths)
//! - [`observability`]: tracing setup
//!
//! # Configuration
//!
//! Configuration is read from `AIRWATCH_*` environment variables:
//!
//! | Variable | Meaning |
//! |---|---|
//! | `AIRWATCH_LIGHT_THEME` | Built-in theme name for light mode |
//! | `AIRWATCH_DARK_THEME` | Built-in theme name for dark mode |
//! | `AIRWATCH_LIGHT_THEME_FILE` | TOML theme file for light mode |
//! | `AIRWATCH_DARK_THEME_FILE` | TOML theme file for dark mode |
//! | `AIRWATCH_START_DARK` | Start in dark mode (`1`/`true`) |
//! | `AIRWATCH_TRACE_LEVEL` | Tracing filter (e.g. `debug`) |
//!
//! # Example
//!
//! ```
//! use airwatch::{handle_event, initialize, Config, Event};
//!
//! let config = Config::default();
//! let mut state = initialize(&config);
//! assert_eq!(state.registry.len(), 5);
//!
//! let (should_render, actions) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), airwatch::AirwatchError>(())
//! ```
//!
//! # Dataset lifetime
//!
//! The registry lives only in process memory: it is seeded with five
//! readings at startup, grows by one per accepted entry, and is discarded
//! on exit. Nothing is persisted and nothing is fetched from the network.

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod registry;
pub mod ui;

pub use app::{handle_event, Action, AppState, DisplayMode, Event, InputMode, NoticeKind};
pub use domain::{AirwatchError, AqiLevel, CityReading, Result, ValidationError};
pub use registry::CityRegistry;
pub use ui::Theme;

use std::collections::BTreeMap;

/// Runtime configuration parsed from the environment.
///
/// All values are optional; an empty environment yields the built-in
/// `daylight`/`midnight` theme pair, light display mode, and `info`-level
/// tracing into the data directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Built-in theme name for light display mode.
    pub light_theme: Option<String>,

    /// Built-in theme name for dark display mode.
    pub dark_theme: Option<String>,

    /// Path to a TOML theme file for light mode; takes precedence over
    /// `light_theme`. A leading `~` expands to the home directory.
    pub light_theme_file: Option<String>,

    /// Path to a TOML theme file for dark mode; takes precedence over
    /// `dark_theme`.
    pub dark_theme_file: Option<String>,

    /// Whether the dashboard starts in dark display mode.
    pub start_dark: bool,

    /// Tracing filter directive (e.g. `debug`, `airwatch=trace`).
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from a key/value map.
    ///
    /// Keys are the lowercase variable names without the `AIRWATCH_`
    /// prefix. Empty values are treated as unset; `start_dark` accepts
    /// `1`, `true`, `yes` (case-insensitive).
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(String::as_str)
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let start_dark = config
            .get("start_dark")
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            light_theme: get("light_theme"),
            dark_theme: get("dark_theme"),
            light_theme_file: get("light_theme_file"),
            dark_theme_file: get("dark_theme_file"),
            start_dark,
            trace_level: get("trace_level"),
        }
    }

    /// Reads configuration from `AIRWATCH_*` environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let vars: BTreeMap<String, String> = std::env::vars()
            .filter_map(|(key, value)| {
                key.strip_prefix("AIRWATCH_")
                    .map(|rest| (rest.to_lowercase(), value))
            })
            .collect();

        Self::from_map(&vars)
    }
}

/// Initializes the dashboard state from configuration.
///
/// Loads the light and dark themes (file first, then built-in name, then
/// the shipped default; failures fall back with a debug log), seeds the
/// registry with the five built-in city readings, and returns an
/// [`AppState`] ready for event processing.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing airwatch");

    let light = resolve_theme(
        config.light_theme_file.as_deref(),
        config.light_theme.as_deref(),
        Theme::default(),
    );
    let dark = resolve_theme(
        config.dark_theme_file.as_deref(),
        config.dark_theme.as_deref(),
        Theme::dark_default(),
    );

    let display_mode = if config.start_dark {
        DisplayMode::Dark
    } else {
        DisplayMode::Light
    };

    AppState::new(CityRegistry::with_seed(), light, dark, display_mode)
}

/// Resolves one theme through the file → name → fallback chain.
fn resolve_theme(file: Option<&str>, name: Option<&str>, fallback: Theme) -> Theme {
    if let Some(file) = file {
        let path = infrastructure::expand_tilde(file);
        match Theme::from_file(&path) {
            Ok(theme) => return theme,
            Err(e) => {
                tracing::debug!(theme_file = %file, error = %e, "failed to load theme from file, using fallback");
            }
        }
    }

    if let Some(name) = name {
        match Theme::from_name(name) {
            Some(theme) => return theme,
            None => {
                tracing::debug!(theme_name = %name, "unknown theme name, using fallback");
            }
        }
    }

    fallback
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_empty_map() {
        let config = Config::from_map(&BTreeMap::new());
        assert_eq!(config, Config::default());
        assert!(!config.start_dark);
    }

    #[test]
    fn test_config_from_map_parses_values() {
        let mut map = BTreeMap::new();
        map.insert("dark_theme".to_string(), "midnight".to_string());
        map.insert("start_dark".to_string(), "TRUE".to_string());
        map.insert("trace_level".to_string(), "debug".to_string());
        map.insert("light_theme".to_string(), String::new());

        let config = Config::from_map(&map);
        assert_eq!(config.dark_theme.as_deref(), Some("midnight"));
        assert!(config.start_dark);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert!(config.light_theme.is_none());
    }

    #[test]
    fn test_initialize_seeds_five_readings() {
        let state = initialize(&Config::default());
        assert_eq!(state.registry.len(), 5);
        assert_eq!(state.filtered_readings.len(), 5);
        assert_eq!(state.display_mode, DisplayMode::Light);
    }

    #[test]
    fn test_initialize_honors_start_dark() {
        let config = Config {
            start_dark: true,
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.display_mode, DisplayMode::Dark);
        assert_eq!(state.theme().name, "midnight");
    }

    #[test]
    fn test_resolve_theme_falls_back_on_bad_inputs() {
        let theme = resolve_theme(
            Some("/nonexistent/theme.toml"),
            Some("no-such-theme"),
            Theme::default(),
        );
        assert_eq!(theme.name, "daylight");
    }
}
