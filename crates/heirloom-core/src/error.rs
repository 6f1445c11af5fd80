//! Error types for the formatting library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all formatting operations.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Raw value is not a date-only or timestamp string
    #[error("Invalid date input '{input}': {reason}")]
    InvalidInputFormat { input: String, reason: String },
    /// Locale tag names a language without formatting conventions
    #[error("Unsupported locale '{locale}'")]
    UnsupportedLocale { locale: String },
    /// Timezone name is not in the IANA database
    #[error("Unsupported timezone '{timezone}': {reason}")]
    UnsupportedTimezone { timezone: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating invalid input errors.
pub struct InvalidInputBuilder {
    input: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a raw value.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> FormatError {
        FormatError::InvalidInputFormat {
            input: self.input,
            reason: reason.into(),
        }
    }
}

impl FormatError {
    /// Creates a builder for invalid input errors.
    pub fn invalid_input(input: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(input)
    }

    /// Returns true when the error comes from the region rather than the
    /// value being formatted.
    pub fn is_region_error(&self) -> bool {
        matches!(
            self,
            FormatError::UnsupportedLocale { .. } | FormatError::UnsupportedTimezone { .. }
        )
    }
}

/// Result type alias for formatting operations
pub type Result<T> = std::result::Result<T, FormatError>;
