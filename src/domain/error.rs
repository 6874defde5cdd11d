//! Error types for airwatch.
//!
//! This module defines the two error layers of the crate: [`ValidationError`],
//! the recoverable rejection reasons for a new reading, and the crate-wide
//! [`AirwatchError`] with its [`Result`] alias. Both are implemented with the
//! `thiserror` crate.

use thiserror::Error;

/// Reasons a draft reading is rejected by the registry.
///
/// Validation failures are always recovered locally: the registry stays
/// untouched and the reason is surfaced to the user as a notice. They are
/// never fatal and never propagate past the event handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The city name was empty (or whitespace only) after trimming.
    #[error("Please enter a city name.")]
    EmptyCityName,

    /// The AQI text was empty or did not parse as a whole number.
    #[error("Please enter a valid AQI value.")]
    InvalidAqiValue,
}

/// The main error type for airwatch operations.
///
/// Consolidates the failure conditions of the surrounding application:
/// theme loading, terminal I/O, and reading validation. The I/O and
/// validation variants convert automatically via `#[from]`.
#[derive(Debug, Error)]
pub enum AirwatchError {
    /// Theme parsing or loading failed.
    ///
    /// Occurs when a theme file cannot be read or its TOML content cannot
    /// be parsed. The string describes what went wrong.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Terminal or filesystem I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A draft reading failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// A specialized `Result` type for airwatch operations.
pub type Result<T> = std::result::Result<T, AirwatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages_name_the_field() {
        assert_eq!(
            ValidationError::EmptyCityName.to_string(),
            "Please enter a city name."
        );
        assert_eq!(
            ValidationError::InvalidAqiValue.to_string(),
            "Please enter a valid AQI value."
        );
    }

    #[test]
    fn test_validation_error_converts_into_crate_error() {
        let err: AirwatchError = ValidationError::EmptyCityName.into();
        assert!(matches!(
            err,
            AirwatchError::Validation(ValidationError::EmptyCityName)
        ));
    }
}
