//! Custom error types for SpendLens
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for SpendLens operations
#[derive(Error, Debug)]
pub enum LensError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV read/write errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for CLI arguments and data
    #[error("Validation error: {0}")]
    Validation(String),

    /// Ledger ingestion errors (malformed rows)
    #[error("Ingest error: {0}")]
    Ingest(String),

    /// Report export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl LensError {
    /// Create an ingest error for a specific ledger row
    pub fn bad_row(row: usize, message: impl Into<String>) -> Self {
        Self::Ingest(format!("row {}: {}", row, message.into()))
    }

    /// Check if this is an ingest error
    pub fn is_ingest(&self) -> bool {
        matches!(self, Self::Ingest(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for LensError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for LensError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for LensError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for SpendLens operations
pub type LensResult<T> = Result<T, LensError>;
