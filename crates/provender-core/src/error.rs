//! Error types for provender-core

use thiserror::Error;

/// Result type alias using provender-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for Provender
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed constraint expression term
    #[error("Invalid constraint '{term}': {reason}")]
    InvalidConstraint { term: String, reason: String },
}

impl Error {
    /// Create an invalid constraint error
    pub fn invalid_constraint(term: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConstraint {
            term: term.into(),
            reason: reason.into(),
        }
    }
}
