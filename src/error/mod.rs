//! Error types for selector-driven traversal.
//!
//! Traversal itself never fails: missing parents, out-of-range indices and
//! empty inputs all produce empty sets. The only errors are the ones raised
//! by the [`Matcher`](crate::select::Matcher) plugged into a set, and those
//! travel back to the caller unchanged.

use thiserror::Error;

/// The error type returned by a selector engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The selector string could not be understood by the engine.
    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector {
        /// The selector as passed by the caller.
        selector: String,
        /// Why the engine rejected it.
        reason: String,
    },

    /// The engine failed for a reason unrelated to selector syntax.
    #[error("selector engine error: {message}")]
    Engine {
        /// Human-readable description of the failure.
        message: String,
    },
}

impl SelectError {
    /// Creates an [`InvalidSelector`](SelectError::InvalidSelector) error.
    pub fn invalid(selector: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSelector {
            selector: selector.into(),
            reason: reason.into(),
        }
    }

    /// Creates an [`Engine`](SelectError::Engine) error.
    pub fn engine(message: impl Into<String>) -> Self {
        Self::Engine {
            message: message.into(),
        }
    }
}
