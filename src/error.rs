//! Error types for country-names
//!
//! This module defines custom error types using thiserror for better error handling.
//! A missing translation is not an error: lookups return `None` for that case.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for country-names
#[derive(Error, Debug)]
pub enum CountryNamesError {
    /// Start-up resource (code table or dataset) is missing
    #[error("Resource not found: {}", .0.display())]
    ResourceNotFound(PathBuf),

    /// A selection that is neither a known label nor a known code
    #[error("Unknown {kind}: {input}")]
    UnknownSelection { kind: &'static str, input: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Encoding error
    #[error("Encoding conversion error: {0}")]
    EncodingError(String),

    /// YAML parsing error
    #[error("YAML parse error: {0}")]
    YamlError(String),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for country-names
pub type Result<T> = std::result::Result<T, CountryNamesError>;

impl CountryNamesError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        CountryNamesError::ConfigError(msg.into())
    }

    /// Create an encoding error
    pub fn encoding<S: Into<String>>(msg: S) -> Self {
        CountryNamesError::EncodingError(msg.into())
    }

    /// Create an unknown-selection error
    pub fn unknown_selection<S: Into<String>>(kind: &'static str, input: S) -> Self {
        CountryNamesError::UnknownSelection {
            kind,
            input: input.into(),
        }
    }

    /// Whether this error aborts start-up
    pub fn is_fatal(&self) -> bool {
        !matches!(self, CountryNamesError::UnknownSelection { .. })
    }
}

/// Convert from serde_yaml::Error
impl From<serde_yaml::Error> for CountryNamesError {
    fn from(err: serde_yaml::Error) -> Self {
        CountryNamesError::YamlError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_not_found_message() {
        let err = CountryNamesError::ResourceNotFound(PathBuf::from("missing/country-codes.txt"));
        assert_eq!(
            err.to_string(),
            "Resource not found: missing/country-codes.txt"
        );
        assert!(err.is_fatal());
    }

    #[test]
    fn test_unknown_selection_is_not_fatal() {
        let err = CountryNamesError::unknown_selection("language", "klingon");
        assert_eq!(err.to_string(), "Unknown language: klingon");
        assert!(!err.is_fatal());
    }
}
