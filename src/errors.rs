/*!
 * Error types for the vardnica crate.
 *
 * This module contains custom error types for the POS tag tables and the
 * front-end build configuration, using the thiserror crate.
 */

use thiserror::Error;

/// Errors that can occur when building or loading POS tag tables
#[derive(Error, Debug)]
pub enum PosTagError {
    /// A language table was keyed by an empty string
    #[error("Language code must not be empty")]
    EmptyLanguage,

    /// An entry was keyed by an empty POS code
    #[error("POS code must not be empty (language '{language}')")]
    EmptyCode {
        /// Language table containing the entry
        language: String,
    },

    /// An entry has an empty `long` or `desc` value
    #[error("Field '{field}' is empty for POS '{code}' in language '{language}'")]
    EmptyField {
        /// Language table containing the entry
        language: String,
        /// POS code of the entry
        code: String,
        /// Name of the empty field
        field: &'static str,
    },

    /// The table file could not be parsed
    #[error("Failed to parse POS tags: {0}")]
    Parse(#[from] serde_json::Error),

    /// The table file could not be read
    #[error("Failed to read POS tags: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when validating the build configuration
#[derive(Error, Debug)]
pub enum BuildConfigError {
    /// A suppressed warning prefix is empty and would silence everything
    #[error("Suppressed warning prefix at index {0} is empty")]
    EmptyPrefix(usize),

    /// A preprocessing step has no name
    #[error("Preprocessing step at index {0} has an empty name")]
    EmptyPreprocessor(usize),

    /// The adapter needs a server runtime the desktop shell does not have
    #[error("Adapter '{0}' requires a server runtime; use the static adapter")]
    ServerAdapter(String),

    /// A static adapter output directory is empty
    #[error("Static adapter output directory '{0}' is empty")]
    EmptyOutputDir(&'static str),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the POS tag tables
    #[error("POS tag error: {0}")]
    PosTag(#[from] PosTagError),

    /// Error from the build configuration
    #[error("Build config error: {0}")]
    BuildConfig(#[from] BuildConfigError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
