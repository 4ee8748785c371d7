//! Common error types used throughout renomiq.
//!
//! This module provides a unified error type covering the failure cases the
//! workspace actually has: missing files or folders, invalid input such as a
//! bad template or config value, I/O failures, and persistence problems.

/// Common error type for renomiq.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested file or folder was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid input was provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Loading or saving persisted state failed.
    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl Error {
    /// Create a new NotFound error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a new InvalidInput error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new Persistence error.
    pub fn persistence<S: Into<String>>(msg: S) -> Self {
        Self::Persistence(msg.into())
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
