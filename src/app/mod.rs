//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between
//! the terminal shim (main.rs) and the domain/registry layers. It
//! implements the event-driven state machine that powers the interactive
//! UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Key Input → Events → Event Handler → State Mutations → Actions → Side Effects
//! ```
//!
//! # Modules
//!
//! - [`actions`]: side effect commands emitted by the event handler
//! - [`handler`]: event processing and state transition coordinator
//! - [`modes`]: input and display mode state machine types
//! - [`state`]: central state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::{Action, NoticeKind};
pub use handler::{handle_event, Event};
pub use modes::{DisplayMode, DraftField, InputMode, SearchFocus};
pub use state::{AppState, EntryDraft};
