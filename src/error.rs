//! Error types for the non-conformance analysis engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while analyzing records.

use thiserror::Error;

/// The main error type for the analysis engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use nonconformance_engine::error::EngineError;
///
/// let error = EngineError::InvalidRecord {
///     row: 3,
///     message: "labor cost is negative: -5".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid record at row 3: labor cost is negative: -5");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// An input record carried a missing, negative or non-numeric labor cost.
    #[error("Invalid record at row {row}: {message}")]
    InvalidRecord {
        /// Zero-based position of the record in the input sequence.
        row: usize,
        /// A description of what made the record invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds an unusable value.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// A description of the problem.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
