//! Error types for loading combobox configuration.
//!
//! Interaction with a live combobox never fails; only reading definitions
//! from JSON and checking them against the configured fields can.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or validating a combobox definition.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// I/O error while reading a definition file
    #[error("IO error reading {path:?}: {source}")]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An option record lacks one of the configured fields
    #[error("Option {index} has no field '{field}'")]
    MissingField {
        /// Position of the option in the list
        index: usize,
        /// The configured field that is missing
        field: String,
    },

    /// Two options share the same unique key
    #[error("Duplicate option key: {key}")]
    DuplicateKey {
        /// The repeated key
        key: String,
    },

    /// The initial value names no option
    #[error("Initial value '{value}' does not match any option")]
    UnknownValue {
        /// The unmatched value
        value: String,
    },

    /// Definition was written by a newer, incompatible format
    #[error("Unsupported definition version {found} (expected at most {supported})")]
    UnsupportedVersion {
        /// Version found in the file
        found: u32,
        /// Newest version this build understands
        supported: u32,
    },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
