// Error types shared by the storage and shell layers
use std::path::PathBuf;

use thiserror::Error;

/// Failure while reaching or writing the bouquet database
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to create database directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// A form field that could not be read as a number
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("{field} must be a whole number (got {value:?})")]
    NotAnInteger { field: &'static str, value: String },

    #[error("{field} must be a number (got {value:?})")]
    NotANumber { field: &'static str, value: String },
}

/// Anything that can abort a button action
#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ShellError {
    /// Dialog title shown to the user for this failure
    pub fn title(&self) -> &'static str {
        match self {
            ShellError::Parse(_) => "Invalid Input",
            ShellError::Storage(_) => "Database Error",
        }
    }
}
