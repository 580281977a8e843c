//! Error handling for PanelCut
//!
//! Provides the shared error type used by the request data model and by
//! crates that do not need their own structured errors.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Request data error type
///
/// Represents problems reading or interpreting a cutting request before
/// it reaches validation.
#[derive(Error, Debug, Clone)]
pub enum RequestError {
    /// The supply mode description is contradictory
    #[error("Invalid supply mode: {reason}")]
    InvalidSupplyMode {
        /// Why the supply mode was rejected.
        reason: String,
    },
}

/// Main error type for PanelCut
///
/// A unified error type that can represent any error from the core layer.
#[derive(Error, Debug)]
pub enum Error {
    /// Request data error
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a request data error
    pub fn is_request_error(&self) -> bool {
        matches!(self, Error::Request(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
