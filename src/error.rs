//! Error types for Etrack.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or validating a building layout.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Failed to read the layout file from disk.
    #[error("failed to read layout '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The layout document is not valid TOML or has the wrong shape.
    #[error("invalid layout document: {source}")]
    Parse {
        #[from]
        source: toml::de::Error,
    },

    /// The layout parsed but describes an impossible building.
    #[error("invalid layout: {message}")]
    Invalid { message: String },
}

/// Errors returned when editing a property.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    /// No property in the building carries this id.
    #[error("property '{id}' not found")]
    PropertyNotFound { id: String },
}

/// Errors that can occur when reading or writing the stored session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Failed to read the session file.
    #[error("failed to read session '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write or remove the session file.
    #[error("failed to write session '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The stored session is not a valid user record.
    #[error("corrupt session data: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

/// Errors that can occur when exporting data.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// Failed to serialize data to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },
}

/// A string that names no variant of a closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownValue {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
