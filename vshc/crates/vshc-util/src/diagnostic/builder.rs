//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type used by the lexer to
//! report errors, and the [`SourceSnippet`] type drivers use to underline
//! the offending source text.

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::span::Span;

/// One source line with a caret underline
///
/// Rendered through [`fmt::Display`] as a numbered line followed by the
/// underline row:
///
/// ```
/// use vshc_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("var s = \"abc", 1, 9..13).with_label("string starts here");
/// let text = snippet.to_string();
/// assert!(text.contains("var s = \"abc"));
/// assert!(text.ends_with("^^^^ string starts here"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// Text of the line, without its terminator
    pub text: String,
    /// 1-based line number shown in the gutter
    pub line: usize,
    /// 1-based columns to underline, end exclusive
    pub columns: Range<usize>,
    /// Text printed after the carets
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Underline `columns` of `text`
    pub fn new(text: impl Into<String>, line: usize, columns: Range<usize>) -> Self {
        Self {
            text: text.into(),
            line,
            columns,
            label: None,
        }
    }

    /// A single caret under `column`
    pub fn point(text: impl Into<String>, line: usize, column: usize) -> Self {
        Self::new(text, line, column..column + 1)
    }

    /// Underline `span` on `text`, the line the span starts on
    ///
    /// A span running past the end of the line, such as an unterminated
    /// string, is clipped so only its first line is underlined.
    pub fn for_span(text: impl Into<String>, span: Span) -> Self {
        let text = text.into();
        let first = span.column as usize;
        let past_line = text.chars().count() + 1;
        let last = (first + span.len()).min(past_line);
        Self::new(text, span.line as usize, first..last)
    }

    /// Attach a label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl fmt::Display for SourceSnippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let gutter = self.line.to_string().len().max(3);
        writeln!(f, "{:>gutter$} | {}", self.line, self.text)?;

        let width = self.columns.start.saturating_sub(1);
        let mut indent: String = self
            .text
            .chars()
            .take(width)
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        let padding = width - indent.chars().count();
        indent.extend(std::iter::repeat_n(' ', padding));

        let carets = self.columns.len().max(1);
        write!(f, "{:>gutter$} | {indent}{}", "", "^".repeat(carets))?;
        match &self.label {
            Some(label) => write!(f, " {label}"),
            None => Ok(()),
        }
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use vshc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
/// use vshc_util::span::Span;
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error("unterminated string literal")
///     .code(DiagnosticCode::E_LEX_UNTERMINATED_STRING)
///     .file("main.vs")
///     .span(Span::new(8, 12, 1, 9))
///     .emit(&handler);
///
/// assert_eq!(handler.error_count(), 1);
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    file: Arc<str>,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            file: Arc::from(""),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning builder
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the originating file identifier
    pub fn file(mut self, file: impl Into<Arc<str>>) -> Self {
        self.file = file.into();
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a note to the diagnostic
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion to the diagnostic
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            file: self.file,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
        }
    }

    /// Build and emit the diagnostic to the given handler
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
