//! Error types for the urania renderer.
//!
//! This module defines a single error enum covering every fatal condition in
//! the pipeline. Row-level data problems (missing or non-finite values) are
//! deliberately not represented here: they are skipped by the render loop,
//! not raised.

use thiserror::Error;

/// The main error type for urania operations.
#[derive(Error, Debug)]
pub enum UraniaError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Image load/save errors
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Schema validation errors (empty input set, unreadable file, ...)
    #[error("Schema error: {message}")]
    Schema { message: String },

    /// A required catalog column is absent from a file's header
    #[error("Missing column '{column}' in {file}")]
    MissingColumn { column: String, file: String },

    /// Invalid parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// Fixed-order decoder received the wrong number of values
    #[error("Decoder arity mismatch: expected {expected} values, got {got}")]
    Arity { expected: usize, got: usize },
}

/// Convenience type alias for Results with UraniaError
pub type Result<T> = std::result::Result<T, UraniaError>;
