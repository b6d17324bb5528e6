//! Operator and punctuation lexing.
//!
//! Two-scalar operators are matched greedily before their one-scalar
//! prefix. There are no bitwise operators, so a lone `&` or `|` is
//! illegal.

use vshc_util::DiagnosticCode;

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes the operator, delimiter or illegal scalar starting with `c`.
    pub fn lex_operator(&mut self, c: char) -> Token {
        let kind = match c {
            '=' => self.lex_pair('=', TokenKind::Equal, TokenKind::Assign),
            '!' => self.lex_pair('=', TokenKind::NotEqual, TokenKind::Not),
            '<' => self.lex_pair('=', TokenKind::LessEqual, TokenKind::LessThan),
            '>' => self.lex_pair('=', TokenKind::GreaterEqual, TokenKind::GreaterThan),
            '&' => self.lex_pair('&', TokenKind::And, TokenKind::Illegal),
            '|' => self.lex_pair('|', TokenKind::Or, TokenKind::Illegal),
            _ => {
                self.cursor.advance();
                single_char_kind(c).unwrap_or(TokenKind::Illegal)
            },
        };

        if kind == TokenKind::Illegal {
            let message = format!("illegal character '{}'", c.escape_debug());
            match c {
                '&' => self.report_error_with_help(
                    DiagnosticCode::E_LEX_ILLEGAL_CHARACTER,
                    message,
                    "logical and is written `&&`",
                ),
                '|' => self.report_error_with_help(
                    DiagnosticCode::E_LEX_ILLEGAL_CHARACTER,
                    message,
                    "logical or is written `||`",
                ),
                _ => self.report_error(DiagnosticCode::E_LEX_ILLEGAL_CHARACTER, message),
            }
        }
        self.make_token(kind)
    }

    /// Consumes the current scalar, then `second` if it follows.
    ///
    /// Returns `double` when both matched and `single` otherwise.
    fn lex_pair(&mut self, second: char, double: TokenKind, single: TokenKind) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char(second) {
            double
        } else {
            single
        }
    }
}

/// Kind of a one-scalar operator or delimiter without a two-scalar form.
fn single_char_kind(c: char) -> Option<TokenKind> {
    let kind = match c {
        '+' => TokenKind::Plus,
        '-' => TokenKind::Minus,
        '*' => TokenKind::Asterisk,
        '/' => TokenKind::Slash,
        '%' => TokenKind::Percent,
        '(' => TokenKind::LeftParen,
        ')' => TokenKind::RightParen,
        '{' => TokenKind::LeftBrace,
        '}' => TokenKind::RightBrace,
        '[' => TokenKind::LeftBracket,
        ']' => TokenKind::RightBracket,
        ',' => TokenKind::Comma,
        ';' => TokenKind::Semicolon,
        ':' => TokenKind::Colon,
        '.' => TokenKind::Dot,
        _ => return None,
    };
    Some(kind)
}
