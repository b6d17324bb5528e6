//! Diagnostic module - Error reporting infrastructure.
//!
//! This module provides the positioned diagnostics the lexer reports and
//! the [`Handler`] that collects them for one tokenization run. The lexer
//! never formats, logs or aborts on a diagnostic; that is left to whoever
//! owns the handler.
//!
//! # Examples
//!
//! ```
//! use vshc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use vshc_util::span::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("illegal character '@'")
//!     .code(DiagnosticCode::E_LEX_ILLEGAL_CHARACTER)
//!     .file("main.vs")
//!     .span(Span::new(0, 1, 1, 1))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! assert_eq!(
//!     handler.diagnostics()[0].to_string(),
//!     "main.vs:1:1: error[E0101]: illegal character '@'"
//! );
//! ```

mod builder;
mod codes;
mod level;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;
pub use codes::{
    E_LEX_EXPECTED_QUOTE, E_LEX_EXTRA_CHARS_IN_CHAR, E_LEX_ILLEGAL_CHARACTER,
    E_LEX_INVALID_ESCAPE, E_LEX_MULTIPLE_DECIMAL_POINTS, E_LEX_UNTERMINATED_CHAR,
    E_LEX_UNTERMINATED_ESCAPE, E_LEX_UNTERMINATED_STRING,
};
pub use level::Level;

use crate::span::Span;
use std::cell::RefCell;
use std::fmt;
use std::sync::Arc;

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Originating file identifier
    pub file: Arc<str>,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, file: impl Into<Arc<str>>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            file: file.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, file: impl Into<Arc<str>>, span: Span) -> Self {
        Self::new(Level::Error, message, file, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, file: impl Into<Arc<str>>, span: Span) -> Self {
        Self::new(Level::Warning, message, file, span)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a note to the diagnostic
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}: {}", self.file, self.span.line, self.span.column, self.level)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

/// Handler for collecting diagnostics
///
/// One handler serves one tokenization run. It uses interior mutability so
/// the lexer can report through a shared reference.
///
/// # Examples
///
/// ```
/// use vshc_util::diagnostic::{Diagnostic, Handler};
/// use vshc_util::span::Span;
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::error("unterminated string literal", "a.vs", Span::DUMMY));
///
/// if handler.has_errors() {
///     eprintln!("lexing failed with {} errors", handler.error_count());
/// }
/// ```
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
    /// Whether to panic on errors (for testing)
    panic_on_error: bool,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: false,
        }
    }

    /// Create a handler that panics on the first error (for testing)
    ///
    /// # Examples
    ///
    /// ```should_panic
    /// use vshc_util::diagnostic::{Diagnostic, Handler};
    /// use vshc_util::span::Span;
    ///
    /// let handler = Handler::new_panicking();
    /// handler.emit_diagnostic(Diagnostic::error("boom", "a.vs", Span::DUMMY));
    /// ```
    pub fn new_panicking() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: true,
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        if self.panic_on_error && diagnostic.level.is_error() {
            panic!("Diagnostic error: {}", diagnostic);
        }
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Create a diagnostic builder for an error at `span`
    pub fn build_error(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).span(span)
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(|d| d.level.is_error())
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level.is_error())
            .count()
    }

    /// Get a copy of all diagnostics, in report order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Move all diagnostics out of the handler, leaving it empty
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("diagnostics", &self.diagnostics.borrow().len())
            .field("panic_on_error", &self.panic_on_error)
            .finish()
    }
}
