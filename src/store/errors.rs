//! # Store Errors
//!
//! Error types for the data store capability.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Data store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Could not reach the store (connection refused, timeout, TLS, ...)
    #[error("Store transport error: {0}")]
    Transport(String),

    /// The store answered with a non-success status
    #[error("Store returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The store answered with a body we could not read
    #[error("Store response could not be decoded: {0}")]
    Decode(String),

    /// A lock around in-process tables was poisoned
    #[error("Store lock poisoned")]
    Poisoned,
}

impl StoreError {
    /// Build a status error from a response code and body
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        StoreError::Status {
            status,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            StoreError::Decode(err.to_string())
        } else {
            StoreError::Transport(err.to_string())
        }
    }
}
