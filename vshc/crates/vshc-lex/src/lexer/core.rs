//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and the `next_token`
//! dispatch.

use std::sync::Arc;

use tracing::trace;
use vshc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};
use crate::unicode::{is_digit, is_ident_start};

/// Lexer for V# source text.
///
/// One lexer serves one tokenization run. Lexical errors never stop it:
/// each is reported to the handler when detected and scanning resumes at
/// the cursor.
pub struct Lexer<'a> {
    /// Scalar cursor for source traversal.
    pub(crate) cursor: Cursor,

    /// Sink for lexical errors.
    handler: &'a Handler,

    /// Scalar offset where the current token starts.
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,

    /// Whether the iterator has yielded EOF.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for `source`, attributing tokens to `file`.
    pub fn new(source: &str, file: impl Into<Arc<str>>, handler: &'a Handler) -> Self {
        Self::with_cursor(Cursor::new(source, file), handler)
    }

    /// Creates a lexer over an already decoded scalar buffer.
    pub fn from_chars(source: Arc<[char]>, file: impl Into<Arc<str>>, handler: &'a Handler) -> Self {
        Self::with_cursor(Cursor::from_chars(source, file), handler)
    }

    fn with_cursor(cursor: Cursor, handler: &'a Handler) -> Self {
        Self {
            cursor,
            handler,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            finished: false,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Skips whitespace, records the position of the first significant
    /// scalar and dispatches on it. At end of input this returns EOF with an
    /// empty lexeme, and keeps returning EOF on every further call.
    pub fn next_token(&mut self) -> Token {
        self.cursor.skip_whitespace();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        let Some(c) = self.cursor.current() else {
            return self.make_token(TokenKind::Eof);
        };

        match c {
            c if is_ident_start(c) => self.lex_identifier(),
            c if is_digit(c) => self.lex_number(),
            '"' => self.lex_string(),
            '\'' => self.lex_byte(),
            '/' if self.cursor.peek(1) == Some('/') => self.lex_line_comment(),
            c => self.lex_operator(c),
        }
    }

    /// Builds a token of `kind` from the token start to the cursor.
    pub(crate) fn make_token(&self, kind: TokenKind) -> Token {
        self.make_token_until(kind, self.cursor.position())
    }

    /// Builds a token of `kind` from the token start to `end`.
    pub(crate) fn make_token_until(&self, kind: TokenKind, end: usize) -> Token {
        Token::new(
            kind,
            self.cursor.slice(self.token_start, end),
            self.token_span(end),
            Arc::clone(self.cursor.file()),
            Arc::clone(self.cursor.source()),
        )
    }

    fn token_span(&self, end: usize) -> Span {
        Span::new(
            self.token_start,
            end,
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Reports a lexical error covering the current token so far.
    pub(crate) fn report_error(&self, code: DiagnosticCode, message: String) {
        self.error_builder(code, message).emit(self.handler);
    }

    /// Like [`Lexer::report_error`], with a `help` line attached.
    pub(crate) fn report_error_with_help(&self, code: DiagnosticCode, message: String, help: &str) {
        self.error_builder(code, message).help(help).emit(self.handler);
    }

    fn error_builder(&self, code: DiagnosticCode, message: String) -> DiagnosticBuilder {
        let span = self.token_span(self.cursor.position());
        trace!(
            file = %self.cursor.file(),
            line = span.line,
            column = span.column,
            %code,
            "{message}"
        );
        self.handler
            .build_error(span, message)
            .code(code)
            .file(Arc::clone(self.cursor.file()))
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current scalar offset in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the originating file identifier.
    pub fn file(&self) -> &str {
        self.cursor.file()
    }
}

/// Yields every token up to and including the single EOF, then `None`.
impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is_eof() {
            self.finished = true;
        }
        Some(token)
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eof_is_idempotent() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("x", "t.vs", &handler);
        assert_eq!(lexer.next_token().kind(), TokenKind::Identifier);
        for _ in 0..3 {
            let eof = lexer.next_token();
            assert_eq!(eof.kind(), TokenKind::Eof);
            assert_eq!(eof.lexeme(), "");
            assert_eq!((eof.line(), eof.column()), (1, 2));
        }
    }

    #[test]
    fn test_iterator_ends_after_eof() {
        let handler = Handler::new();
        let kinds: Vec<_> = Lexer::new("a b", "t.vs", &handler).map(|t| t.kind()).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::Eof]
        );
    }

    #[test]
    fn test_empty_input_iterator() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("", "t.vs", &handler);
        assert!(lexer.next().is_some_and(|t| t.is_eof()));
        assert!(lexer.next().is_none());
        assert!(lexer.next().is_none());
    }

    #[test]
    fn test_token_position_after_whitespace() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("  \n\t  var", "t.vs", &handler);
        let token = lexer.next_token();
        assert_eq!(token.kind(), TokenKind::KwVar);
        assert_eq!((token.line(), token.column()), (2, 4));
        assert_eq!(token.span(), Span::new(6, 9, 2, 4));
    }

    #[test]
    fn test_tokens_share_file_and_source() {
        let handler = Handler::new();
        let tokens: Vec<_> = Lexer::new("a b", "shared.vs", &handler).collect();
        assert!(tokens.iter().all(|t| t.file() == "shared.vs"));
        assert!(Arc::ptr_eq(tokens[0].source(), tokens[1].source()));
    }

    #[test]
    fn test_report_error_location() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("\n  \"abc", "err.vs", &handler);
        let token = lexer.next_token();
        assert_eq!(token.kind(), TokenKind::String);

        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(&*diags[0].file, "err.vs");
        assert_eq!((diags[0].span.line, diags[0].span.column), (2, 3));
        assert_eq!(diags[0].span.len(), 4);
    }

    #[test]
    fn test_accessors_follow_cursor() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("ab\ncd", "t.vs", &handler);
        lexer.next_token();
        assert_eq!((lexer.line(), lexer.column(), lexer.position()), (1, 3, 2));
        assert_eq!(lexer.file(), "t.vs");
    }
}
