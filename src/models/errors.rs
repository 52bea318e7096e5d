//! # Model Errors
//!
//! Validation and row-mapping errors for dashboard records.

use thiserror::Error;

/// Result type for model operations
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised while validating payloads or mapping store rows
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A required string field was empty
    #[error("Field '{0}' must not be empty")]
    EmptyField(&'static str),

    /// A partial update named no fields
    #[error("Update must set at least one field")]
    EmptyUpdate,

    /// A payload could not be turned into a row
    #[error("Could not encode row: {0}")]
    Encode(String),

    /// A store row did not match the record shape
    #[error("Could not decode row: {0}")]
    Decode(String),
}

impl ModelError {
    /// True for errors caused by the caller's input
    pub fn is_validation(&self) -> bool {
        matches!(self, ModelError::EmptyField(_) | ModelError::EmptyUpdate)
    }
}
