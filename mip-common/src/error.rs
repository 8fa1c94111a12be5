//! Common error types for MIP

use thiserror::Error;

/// Common result type for MIP operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across MIP modules
#[derive(Error, Debug)]
pub enum Error {
    /// CSV parsing error (wraps csv::Error)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset file failed to load
    #[error("Failed to load {file}: {reason}")]
    DataLoad { file: String, reason: String },

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Construct a DataLoad error for a named dataset file
    pub fn data_load(file: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Error::DataLoad {
            file: file.into(),
            reason: reason.to_string(),
        }
    }
}
