//! Number literal lexing.
//!
//! Numeric literals are classified by shape only. No value is parsed and no
//! range is checked; leading zeros stay in the lexeme.

use vshc_util::DiagnosticCode;

use crate::token::{Token, TokenKind};
use crate::unicode::is_digit;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal.
    ///
    /// Consumes a run of digits and `.`, then an optional trailing `u`.
    /// The kind is `Unsigned` if the `u` is present, else `Float` if a `.`
    /// was seen, else `Integer`. A second `.` is reported once and the run
    /// is still consumed to its end.
    pub fn lex_number(&mut self) -> Token {
        let mut seen_dot = false;
        let mut reported = false;

        while let Some(c) = self.cursor.current() {
            if c == '.' {
                if seen_dot && !reported {
                    self.report_error(
                        DiagnosticCode::E_LEX_MULTIPLE_DECIMAL_POINTS,
                        "invalid number format: multiple decimal points".to_string(),
                    );
                    reported = true;
                }
                seen_dot = true;
            } else if !is_digit(c) {
                break;
            }
            self.cursor.advance();
        }

        let kind = if self.cursor.match_char('u') {
            TokenKind::Unsigned
        } else if seen_dot {
            TokenKind::Float
        } else {
            TokenKind::Integer
        };
        self.make_token(kind)
    }
}

#[cfg(test)]
mod tests {
    use crate::token::TokenKind;
    use vshc_util::{DiagnosticCode, Handler};

    fn lex_num(source: &str) -> (TokenKind, String, usize) {
        let handler = Handler::new();
        let mut lexer = crate::Lexer::new(source, "t.vs", &handler);
        let token = lexer.lex_number();
        (token.kind(), token.lexeme().to_string(), handler.error_count())
    }

    #[test]
    fn test_integer() {
        assert_eq!(lex_num("123"), (TokenKind::Integer, "123".into(), 0));
        assert_eq!(lex_num("0"), (TokenKind::Integer, "0".into(), 0));
        assert_eq!(lex_num("42;"), (TokenKind::Integer, "42".into(), 0));
    }

    #[test]
    fn test_leading_zeros_preserved() {
        assert_eq!(lex_num("00123"), (TokenKind::Integer, "00123".into(), 0));
        assert_eq!(lex_num("00045.67"), (TokenKind::Float, "00045.67".into(), 0));
    }

    #[test]
    fn test_float() {
        assert_eq!(lex_num("45.67"), (TokenKind::Float, "45.67".into(), 0));
        assert_eq!(lex_num("0.0001"), (TokenKind::Float, "0.0001".into(), 0));
        assert_eq!(lex_num("1."), (TokenKind::Float, "1.".into(), 0));
    }

    #[test]
    fn test_unsigned() {
        assert_eq!(lex_num("0u"), (TokenKind::Unsigned, "0u".into(), 0));
        assert_eq!(lex_num("255u"), (TokenKind::Unsigned, "255u".into(), 0));
        assert_eq!(lex_num("7uu"), (TokenKind::Unsigned, "7u".into(), 0));
    }

    #[test]
    fn test_unsigned_overrides_float() {
        assert_eq!(lex_num("1.5u"), (TokenKind::Unsigned, "1.5u".into(), 0));
    }

    #[test]
    fn test_multiple_decimal_points() {
        let handler = Handler::new();
        let mut lexer = crate::Lexer::new("1.2.3.4 x", "t.vs", &handler);
        let token = lexer.lex_number();
        assert_eq!(token.kind(), TokenKind::Float);
        assert_eq!(token.lexeme(), "1.2.3.4");

        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, Some(DiagnosticCode::E_LEX_MULTIPLE_DECIMAL_POINTS));
        assert_eq!(diags[0].message, "invalid number format: multiple decimal points");
    }

    #[test]
    fn test_stops_at_letters() {
        assert_eq!(lex_num("12abc"), (TokenKind::Integer, "12".into(), 0));
        assert_eq!(lex_num("3e5"), (TokenKind::Integer, "3".into(), 0));
    }
}
