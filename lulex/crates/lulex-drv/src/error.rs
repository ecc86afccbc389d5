//! Error handling for the lulex driver.
//!
//! Lexical problems inside a file are diagnostics, not errors. This type
//! covers what stops the driver itself: unreadable inputs, bad configuration,
//! output failures, and `check --deny-unknown` finding lexical errors.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the lulex driver.
#[derive(Error, Debug)]
pub enum LulexError {
    /// Configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A source file could not be read.
    #[error("cannot read {}", .path.display())]
    Read {
        /// Path as given on the command line.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Lexical errors were reported and the run was asked to fail on them.
    #[error("{errors} lexical error(s) in {files} file(s)")]
    Lexical {
        /// Number of error diagnostics across all files.
        errors: usize,
        /// Number of files with at least one error.
        files: usize,
    },
}

/// Result type alias using LulexError.
pub type Result<T> = std::result::Result<T, LulexError>;
