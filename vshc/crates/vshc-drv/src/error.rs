//! Error handling module for the vshc driver.
//!
//! Lexical problems are diagnostics, not errors. The only error they turn
//! into is [`DriverError::LexicalErrors`], raised once every file has been
//! tokenized and reported.

use thiserror::Error;
use vshc_util::SourceMapError;

/// Main error type for the vshc driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// Configuration could not be found, parsed or applied.
    #[error("configuration error: {0}")]
    Config(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A source file could not be loaded.
    #[error(transparent)]
    Source(#[from] SourceMapError),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Tokenization finished but reported lexical errors.
    #[error("aborting due to {count} lexical error{}", plural_suffix(.count))]
    LexicalErrors {
        /// Number of error diagnostics reported across all files
        count: usize,
    },
}

fn plural_suffix(count: &usize) -> &'static str {
    if *count == 1 {
        ""
    } else {
        "s"
    }
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
