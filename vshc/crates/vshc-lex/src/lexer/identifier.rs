//! Identifier and keyword lexing.

use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::unicode::is_ident_continue;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Consumes letters, digits, underscores and apostrophes, then looks the
    /// lexeme up in the keyword table. Only exact matches are keywords.
    pub fn lex_identifier(&mut self) -> Token {
        while self.cursor.current().is_some_and(is_ident_continue) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        let kind = keyword_from_ident(&text).unwrap_or(TokenKind::Identifier);
        self.make_token(kind)
    }
}
