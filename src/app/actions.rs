//! Actions representing side effects to be executed by the shim.
//!
//! This module defines the [`Action`] type, the imperative commands produced
//! by the event handler after processing user input. Actions bridge pure
//! state transformations and effectful operations: the handler never quits
//! the process or shows a message itself, it only asks the terminal shim to.

/// Category of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Informational detail (e.g. a reading's full status line).
    Info,

    /// A draft reading was accepted.
    Success,

    /// A draft reading was rejected.
    Error,
}

/// Commands representing side effects to be executed by the shim.
///
/// Produced by the event handler, executed by the terminal runtime in
/// `main.rs`. Notification display in particular is deliberately the
/// caller's job: the core only reports what happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Leaves the event loop and restores the terminal.
    Quit,

    /// Shows a one-line notice to the user.
    Notify {
        /// Severity of the notice, controlling its color.
        kind: NoticeKind,
        /// Message text to display.
        message: String,
    },
}
