//! Engine error module.
//!
//! This module defines the domain errors of the matching engine. Every one of
//! them is recovered at the request boundary and reported to the client as an
//! `{"error": ...}` body rather than a transport failure.

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while validating or running a match request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A required input (text or pattern) is missing or unusable.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The algorithm identifier is missing or names no known algorithm.
    #[error("Invalid algorithm: {0}")]
    InvalidAlgorithm(String),

    /// An input exceeds its configured size limit.
    #[error("Invalid input: {field} is {len} bytes, the limit is {max} bytes")]
    InputTooLarge {
        /// Name of the offending field
        field: &'static str,
        /// Actual length in bytes
        len: usize,
        /// Configured maximum in bytes
        max: usize,
    },

    /// The computation did not finish within the configured budget.
    #[error("Computation timed out after {} ms", .0.as_millis())]
    ComputationTimeout(Duration),

    /// The computation failed unexpectedly.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl EngineError {
    /// Whether the error was caused by the request itself rather than by the
    /// service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidInput(_)
                | EngineError::InvalidAlgorithm(_)
                | EngineError::InputTooLarge { .. }
        )
    }
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
