//! Error types for the optimizer crate.
//!
//! This module provides structured error types for board configuration,
//! request validation, and result serialization.

use thiserror::Error;

/// Errors that can occur while preparing or running an optimization.
#[derive(Error, Debug)]
pub enum OptimizerError {
    /// Board parameters violate the optimizer's invariants.
    #[error("Invalid board parameters: {0}")]
    InvalidBoard(String),

    /// A parameter validation error occurred.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Errors related to request and parameter validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A parameter value is out of the valid range.
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A parameter value is invalid.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },

    /// Both panel dimensions exceed the board width.
    #[error("Panel {panel_number} ({width}x{length}mm) too wide for board {board_width}mm")]
    PanelTooWide {
        panel_number: usize,
        width: f64,
        length: f64,
        board_width: f64,
    },

    /// Both panel dimensions exceed the board length.
    #[error("Panel {panel_number} ({width}x{length}mm) too long for board {board_length}mm")]
    PanelTooLong {
        panel_number: usize,
        width: f64,
        length: f64,
        board_length: f64,
    },
}

/// Result type alias for optimizer operations.
pub type OptimizerResult<T> = Result<T, OptimizerError>;

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;
