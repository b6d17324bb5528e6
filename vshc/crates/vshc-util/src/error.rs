//! Core error types for vshc-util crate
//!
//! Lexical problems are never errors in this sense; they are reported as
//! [`Diagnostic`](crate::Diagnostic)s. The types here cover the fallible
//! operations around them: loading source text and looking up its lines.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for source map operations
#[derive(Debug, Error)]
pub enum SourceMapError {
    /// Reading a source file from disk failed
    #[error("failed to read `{}`: {source}", path.display())]
    Io {
        /// Path that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid line number
    #[error("invalid line number: {line} (file has {max_lines} lines)")]
    InvalidLineNumber {
        /// Requested line (1-based)
        line: usize,
        /// Number of lines in the file
        max_lines: usize,
    },
}

/// Result type alias for source map operations
pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;
