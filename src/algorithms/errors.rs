//! Error types for the algorithm engines
//!
//! This module defines [`AlgoError`], raised synchronously by an engine before
//! it records anything. Engines never retry; the caller decides what to do.
//!
//! Conditions such as a duplicate BST insert or a DFS re-pop are not errors:
//! they are recorded as ordinary steps.

use thiserror::Error;

/// Broad category of an [`AlgoError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    InvalidReference,
    UnknownAlgorithm,
}

/// Errors an engine can raise
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlgoError {
    /// Input has the wrong shape (non-finite target, malformed graph, bad option)
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Traversal start vertex is not part of the graph
    #[error("Invalid start vertex '{start}': not present in the graph")]
    InvalidStartVertex { start: String },

    /// Name does not match any registered engine
    #[error("Unknown algorithm '{name}'")]
    UnknownAlgorithm { name: String },
}

impl AlgoError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        AlgoError::InvalidInput {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AlgoError::InvalidInput { .. } => ErrorKind::InvalidInput,
            AlgoError::InvalidStartVertex { .. } => ErrorKind::InvalidReference,
            AlgoError::UnknownAlgorithm { .. } => ErrorKind::UnknownAlgorithm,
        }
    }
}
