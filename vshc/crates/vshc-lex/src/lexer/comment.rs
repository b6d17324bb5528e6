//! Line comment lexing.
//!
//! Comments are tokens, not whitespace, so tooling downstream can keep or
//! drop them.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a `//` comment up to, but not including, the line break.
    ///
    /// Trailing spaces, tabs and carriage returns are trimmed from the
    /// lexeme; interior whitespace is kept.
    pub fn lex_line_comment(&mut self) -> Token {
        self.cursor.advance();
        self.cursor.advance();

        while self.cursor.current().is_some_and(|c| c != '\n') {
            self.cursor.advance();
        }

        let mut end = self.cursor.position();
        while end > self.token_start
            && matches!(self.cursor.char_at(end - 1), Some(' ' | '\t' | '\r'))
        {
            end -= 1;
        }

        self.make_token_until(TokenKind::Comment, end)
    }
}
