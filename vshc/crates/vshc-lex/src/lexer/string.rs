//! String and character literal lexing.
//!
//! Lexemes keep their quotes and escape sequences verbatim; decoding is
//! left to later stages. On any error the literal is cut at the cursor and
//! returned with its intended kind, so each malformed literal produces one
//! diagnostic.

use vshc_util::DiagnosticCode;

use crate::token::{Token, TokenKind};
use crate::unicode::is_escape_target;
use crate::Lexer;

/// Outcome of scanning the scalar after a backslash.
enum Escape {
    /// A legal escape target, now consumed
    Valid,
    /// End of input right after the backslash
    Unterminated,
    /// An illegal escape target, left unconsumed
    Invalid(char),
}

impl<'a> Lexer<'a> {
    /// Lexes a string literal.
    ///
    /// Scans from the opening `"` to the matching unescaped `"`. Newlines
    /// inside the literal are allowed.
    pub fn lex_string(&mut self) -> Token {
        if !self.expect_opening_quote('"') {
            return self.make_token(TokenKind::String);
        }

        loop {
            match self.cursor.current() {
                None => {
                    self.report_error(
                        DiagnosticCode::E_LEX_UNTERMINATED_STRING,
                        "unterminated string literal".to_string(),
                    );
                    break;
                },
                Some('\\') => match self.lex_escape() {
                    Escape::Valid => {},
                    Escape::Unterminated => {
                        self.report_error(
                            DiagnosticCode::E_LEX_UNTERMINATED_ESCAPE,
                            "unterminated escape sequence in string literal".to_string(),
                        );
                        break;
                    },
                    Escape::Invalid(c) => {
                        self.report_invalid_escape(c);
                        break;
                    },
                },
                Some('"') => {
                    self.cursor.advance();
                    break;
                },
                Some(_) => {
                    self.cursor.advance();
                },
            }
        }

        self.make_token(TokenKind::String)
    }

    /// Lexes a character literal.
    ///
    /// Exactly one unit, a scalar or an escape sequence, must sit between
    /// the quotes.
    pub fn lex_byte(&mut self) -> Token {
        if !self.expect_opening_quote('\'') {
            return self.make_token(TokenKind::Byte);
        }

        match self.cursor.current() {
            None => {
                self.report_unterminated_char();
                return self.make_token(TokenKind::Byte);
            },
            Some('\\') => match self.lex_escape() {
                Escape::Valid => {},
                Escape::Unterminated => {
                    self.report_error(
                        DiagnosticCode::E_LEX_UNTERMINATED_ESCAPE,
                        "unterminated escape sequence in character literal".to_string(),
                    );
                    return self.make_token(TokenKind::Byte);
                },
                Escape::Invalid(c) => {
                    self.report_invalid_escape(c);
                    return self.make_token(TokenKind::Byte);
                },
            },
            Some(_) => {
                self.cursor.advance();
            },
        }

        match self.cursor.current() {
            None => self.report_unterminated_char(),
            Some('\'') => {
                self.cursor.advance();
            },
            Some(_) => self.report_error(
                DiagnosticCode::E_LEX_EXTRA_CHARS_IN_CHAR,
                "extra characters in character literal (expected closing ')".to_string(),
            ),
        }

        self.make_token(TokenKind::Byte)
    }

    /// Consumes the opening quote.
    ///
    /// Without it, one scalar is consumed so the caller still makes
    /// progress, and the error is reported.
    fn expect_opening_quote(&mut self, quote: char) -> bool {
        if self.cursor.match_char(quote) {
            return true;
        }
        self.cursor.advance();
        self.report_error(
            DiagnosticCode::E_LEX_EXPECTED_QUOTE,
            "expected opening quote".to_string(),
        );
        false
    }

    /// Scans a backslash and its escape target.
    fn lex_escape(&mut self) -> Escape {
        match self.cursor.advance() {
            None => Escape::Unterminated,
            Some(c) if is_escape_target(c) => {
                self.cursor.advance();
                Escape::Valid
            },
            Some(c) => Escape::Invalid(c),
        }
    }

    fn report_invalid_escape(&self, c: char) {
        self.report_error_with_help(
            DiagnosticCode::E_LEX_INVALID_ESCAPE,
            format!("invalid escape character: \\{}", c.escape_debug()),
            r#"valid escapes are \n \t \r \\ \' \" \0"#,
        );
    }

    fn report_unterminated_char(&self) {
        self.report_error(
            DiagnosticCode::E_LEX_UNTERMINATED_CHAR,
            "unterminated character literal".to_string(),
        );
    }
}
