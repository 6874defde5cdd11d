//! User interface rendering layer with component-based architecture.
//!
//! This module turns application state into ANSI-styled terminal output
//! through composable rendering components, with light/dark theme support.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: view model types representing renderable UI state
//! - [`renderer`]: top-level rendering coordinator
//! - [`components`]: composable UI component renderers
//! - [`helpers`]: shared rendering utilities
//! - [`theme`]: color schemes and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use components::render_notice;
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    DialogInfo, DisplayItem, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, UIViewModel,
};
