//! Error types for connectkit-core

use thiserror::Error;

/// Result type alias for connectkit-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in connectkit-core
#[derive(Error, Debug)]
pub enum Error {
    /// Settings file could not be found
    #[error("settings file not found: {path}")]
    SettingsNotFound {
        /// Path that was searched
        path: String,
    },

    /// Failed to parse YAML settings
    #[error("failed to parse settings: {0}")]
    SettingsParse(#[from] serde_yaml::Error),

    /// A selector pattern failed to compile
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern that failed
        pattern: String,
        /// Underlying regex error
        source: regex::Error,
    },

    /// A value has no mapping to something the connector framework understands
    #[error("unsupported value '{value}' for '{key}'")]
    UnsupportedValue {
        /// Configuration key carrying the value
        key: String,
        /// The rejected value
        value: String,
    },

    /// A configuration value has the wrong JSON type
    #[error("invalid value for '{key}': expected {expected}")]
    InvalidValueType {
        /// Configuration key carrying the value
        key: String,
        /// Description of the expected type
        expected: &'static str,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the error was caused by user input rather than process setup.
    ///
    /// Callers surface these as client errors.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedValue { .. } | Self::InvalidValueType { .. }
        )
    }
}
