//! Unified error types for the jido ecosystem
//!
//! This module provides a common error type [`JidoError`] that can represent
//! errors from any part of the system. Domain-specific error types can be
//! converted to `JidoError` for uniform error handling at API boundaries.
//!
//! Note that the resolution pipeline itself absorbs bad data as nulls
//! (unresolved points, duplicate keys, non-finite coordinates); `JidoError`
//! is for genuinely fatal conditions such as unreadable files, malformed
//! geometries, or missing required columns.

use thiserror::Error;

/// Unified error type for all jido operations.
#[derive(Error, Debug)]
pub enum JidoError {
    /// I/O errors (file access, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parsing/deserialization errors (CSV records, WKT text)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Data validation errors (missing columns, malformed schema)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Geometry errors (unsupported geometry types, bad coordinates)
    #[error("Geometry error: {0}")]
    Geometry(String),

    /// Configuration errors (bad hex resolution level, bad column names)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic errors (for wrapping external errors)
    #[error("{0}")]
    Other(String),
}

/// Convenience type alias for Results using JidoError.
pub type JidoResult<T> = Result<T, JidoError>;

// Conversion from anyhow::Error
impl From<anyhow::Error> for JidoError {
    fn from(err: anyhow::Error) -> Self {
        JidoError::Other(err.to_string())
    }
}

// Conversion from string-like types for convenience
impl From<String> for JidoError {
    fn from(s: String) -> Self {
        JidoError::Other(s)
    }
}

impl From<&str> for JidoError {
    fn from(s: &str) -> Self {
        JidoError::Other(s.to_string())
    }
}
