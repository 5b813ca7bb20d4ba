//! Core error types for jjricks-core.
//!
//! Every user-facing failure in this crate is a validation error: it is
//! returned to the caller, nothing is mutated, and the caller re-prompts.
//! Display strings are the messages shown to the end user.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for jjricks-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Validation errors
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One of the three RGB input boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        })
    }
}

/// Which configured duration failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationField {
    Study,
    Break,
}

impl fmt::Display for DurationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DurationField::Study => "study",
            DurationField::Break => "break",
        })
    }
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Hex text is not 3 or 6 hex digits after stripping `#` and whitespace.
    #[error("Invalid hex. Use #RGB or #RRGGBB (e.g. #FA3 or #FFAA33).")]
    InvalidHex { input: String },

    /// An RGB field does not parse as a base-10 integer.
    #[error("RGB must be numbers in all three boxes.")]
    NotANumber { channel: Channel, input: String },

    /// A parsed RGB integer is outside 0..=255.
    #[error("RGB values must be between 0 and 255.")]
    OutOfRange { channel: Channel, input: String },

    /// Neither the hex box nor any RGB box has content.
    #[error("Enter a hex value or all three RGB values.")]
    NoInput,

    /// Both the hex box and at least one RGB box have content.
    #[error("Enter either a hex value OR RGB values, not both.")]
    AmbiguousInput,

    /// A study or break duration is not a positive integer.
    #[error("Please enter a valid positive number for {field} minutes.")]
    InvalidDuration { field: DurationField, input: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to determine or create the config directory
    #[error("Failed to prepare config directory {path}: {source}")]
    DirectoryFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown dot-path key
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_message_names_the_field() {
        let err = ValidationError::InvalidDuration {
            field: DurationField::Break,
            input: "0".into(),
        };
        assert_eq!(
            err.to_string(),
            "Please enter a valid positive number for break minutes."
        );
    }

    #[test]
    fn validation_converts_into_core_error() {
        let err: CoreError = ValidationError::NoInput.into();
        assert_eq!(err.to_string(), "Enter a hex value or all three RGB values.");
    }
}
