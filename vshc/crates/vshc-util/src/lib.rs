//! vshc-util - Foundation types for the V# toolchain
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! This crate holds the pieces every other vshc crate leans on:
//!
//! - [`span`]: scalar-offset spans, file ids and the [`SourceMap`] that
//!   loads source text from disk.
//! - [`diagnostic`]: positioned diagnostics, their codes and the
//!   [`Handler`] that collects them during a run.
//! - [`error`]: error types for the fallible operations above.
//!
//! The lexer itself never performs I/O. A driver loads text through
//! [`SourceMap`], hands it to the lexer together with a [`Handler`], and
//! decides afterwards what to do with the collected diagnostics.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{
    Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet,
};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{FileId, SourceFile, SourceMap, Span};
