//! Custom error types for NestEgg
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Every variant maps onto one of the four
//! [`ErrorKind`]s that the response envelope understands.

use thiserror::Error;

/// The main error type for NestEgg operations
#[derive(Error, Debug)]
pub enum NestEggError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Rejected input or a forbidden state transition.
    /// The message is shown to the caller verbatim.
    #[error("{0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} with id {identifier} not found")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} with the same name already exists")]
    Duplicate {
        entity_type: &'static str,
        name: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Closed classification of failures, as seen by the transport layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    Conflict,
    NotFound,
    Internal,
}

impl ErrorKind {
    /// HTTP status code reported for this kind
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput => 400,
            Self::Conflict => 409,
            Self::NotFound => 404,
            Self::Internal => 500,
        }
    }
}

impl NestEggError {
    /// Create a "not found" error for any entity kind
    pub fn not_found(entity_type: &'static str, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            identifier: identifier.into(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::InvalidInput,
            Self::Duplicate { .. } => ErrorKind::Conflict,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Config(_) | Self::Io(_) | Self::Json(_) | Self::Storage(_) => {
                ErrorKind::Internal
            }
        }
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for NestEggError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for NestEggError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for NestEgg operations
pub type NestEggResult<T> = Result<T, NestEggError>;
