//! Unified application error type.
//! Row-local validation failures use RowError; everything the host surface can
//! hit (io, config, export) is folded into AppError.

use std::io;
use thiserror::Error;

/// Validation failure local to a single row. Never fatal: the confirm
/// operation collects these per row and reports them together.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("Missing entry/exit time.")]
    MissingField,

    #[error("Time must be HH:MM.")]
    FormatError,

    #[error("Time outside 00:00-23:59.")]
    RangeError,

    #[error("Exit must be after Entry (same day).")]
    OrderError,
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Row validation
    // ---------------------------
    #[error("{0}")]
    Row(#[from] RowError),

    /// Combined message for a failed confirmation (one line per bad row).
    #[error("Please fix the following:\n{0}")]
    Validation(String),

    #[error("Invalid row spec '{0}': expected IN,OUT,LABEL")]
    InvalidRowSpec(String),

    #[error("Invalid row index: {0}")]
    InvalidRowIndex(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::Export(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Export(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
