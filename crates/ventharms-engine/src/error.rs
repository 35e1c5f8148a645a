//! Evaluation errors
//!
//! Unrecognized coded values are not errors: cascades log and fall
//! through. Errors are reserved for facts whose shape makes evaluation
//! impossible, such as a text value where a quantity is required.

use thiserror::Error;

/// Result type for evaluation operations.
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors that can occur during indicator evaluation.
#[derive(Debug, Error, Clone)]
pub enum EvalError {
    /// A fact carried a value of the wrong shape for its code.
    #[error("Malformed fact for {code}: {detail}")]
    MalformedFact { code: String, detail: String },

    /// Internal error (should not happen).
    #[error("Internal evaluation error: {message}")]
    Internal { message: String },
}

impl EvalError {
    /// Create a malformed-fact error.
    pub fn malformed_fact(code: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::MalformedFact {
            code: code.into(),
            detail: detail.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
