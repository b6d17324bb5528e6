//! vshc-lex - Lexical Analyzer for the V# Programming Language
//!
//! This crate turns V# source text into a flat sequence of tokens. Every
//! token carries its kind, its exact lexeme, and the line and column where
//! it starts. Lexical errors are reported to a [`Handler`] and never stop
//! the scan, so one run surfaces every problem in a file.
//!
//! # Example Usage
//!
//! ```
//! use vshc_util::Handler;
//! use vshc_lex::{tokenize, Lexer, TokenKind};
//!
//! let handler = Handler::new();
//! let tokens = tokenize("var x: int32;", "main.vs", &handler);
//! assert_eq!(tokens[0].kind(), TokenKind::KwVar);
//! assert_eq!(tokens.last().map(|t| t.kind()), Some(TokenKind::Eof));
//!
//! // Or pull tokens one at a time
//! let mut lexer = Lexer::new("a + b", "main.vs", &handler);
//! assert_eq!(lexer.next_token().lexeme(), "a");
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, keyword and precedence tables
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Scalar cursor with line and column tracking
//! - [`unicode`] - Character classification
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! **Declarations**: `public`, `private`, `virtual`, `override`, `static`,
//! `const`, `var`, `structure`, `enumeration`, `define`, `typedef`, `class`
//!
//! **Control Flow**: `if`, `else`, `match`, `for`, `return`
//!
//! **Types**: `int8` to `int64`, `uint8` to `uint64`, `float32`, `float64`,
//! `boolean`, `string`, `byte`, `void`
//!
//! ## Literals
//!
//! - **Integer**: `42`, `007`
//! - **Float**: `3.14`, `1.`
//! - **Unsigned**: `255u`
//! - **String**: `"hello\n"` (escapes kept verbatim)
//! - **Byte**: `'b'`, `'\n'`
//!
//! ## Operators and Delimiters
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`, `%`
//! - **Comparison**: `==`, `!=`, `<`, `>`, `<=`, `>=`
//! - **Logical**: `&&`, `||`, `!`
//! - **Assignment**: `=`
//! - **Delimiters**: `()`, `{}`, `[]`, `,`, `;`, `:`, `.`
//!
//! ## Comments
//!
//! `//` line comments are emitted as `Comment` tokens.
//!
//! # Error Codes
//!
//! | Code  | Condition                                  |
//! |-------|--------------------------------------------|
//! | E0101 | Illegal character                          |
//! | E0102 | Multiple decimal points in a number        |
//! | E0103 | Unterminated string literal                |
//! | E0104 | Invalid escape character                   |
//! | E0105 | Unterminated escape sequence               |
//! | E0106 | Unterminated character literal             |
//! | E0107 | Extra characters in character literal      |
//! | E0108 | Expected opening quote                     |

#![warn(missing_docs)]

pub mod cursor;
pub mod lexer;
pub mod token;
pub mod unicode;

mod edge_cases;

pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{keyword_from_ident, keywords, precedence, precedence_table, Token, TokenKind};

use tracing::debug;
use vshc_util::Handler;

/// Tokenizes `source` in full.
///
/// The result always ends with exactly one EOF token. Lexical errors go to
/// `handler`; callers check [`Handler::has_errors`] to decide whether the
/// tokens are usable.
pub fn tokenize(source: &str, file: &str, handler: &Handler) -> Vec<Token> {
    let errors_before = handler.error_count();
    let tokens: Vec<Token> = Lexer::new(source, file, handler).collect();
    debug!(
        file,
        tokens = tokens.len(),
        errors = handler.error_count() - errors_before,
        "tokenized source"
    );
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use vshc_util::DiagnosticCode;

    fn kinds_and_lexemes(source: &str) -> Vec<(TokenKind, String)> {
        let handler = Handler::new();
        tokenize(source, "test.vs", &handler)
            .into_iter()
            .map(|t| (t.kind(), t.lexeme().to_string()))
            .collect()
    }

    fn expect(source: &str, expected: &[(TokenKind, &str)]) {
        let actual = kinds_and_lexemes(source);
        let expected: Vec<_> = expected.iter().map(|(k, l)| (*k, l.to_string())).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_class_program() {
        let source = "var x: int16; \n\tconst y: float32;\n\t// This is a comment\t\n\t\
// Another comment\n\tprivate add(int32 a, int32 b) int32 {\n\t\treturn a + b;\n\t}\n\t\t\n\t\
class MyClass {\n\t\tprivate field1: int32;\n\t\tpublic field2: float64;\n\t\
public get() int32 {\n\t\t\treturn field1;\n\t\t}\n\t}\n\t\"Hello, World!\"\n\t'b'";

        use TokenKind::*;
        expect(
            source,
            &[
                (KwVar, "var"),
                (Identifier, "x"),
                (Colon, ":"),
                (KwInt16, "int16"),
                (Semicolon, ";"),
                (KwConst, "const"),
                (Identifier, "y"),
                (Colon, ":"),
                (KwFloat32, "float32"),
                (Semicolon, ";"),
                (Comment, "// This is a comment"),
                (Comment, "// Another comment"),
                (KwPrivate, "private"),
                (Identifier, "add"),
                (LeftParen, "("),
                (KwInt32, "int32"),
                (Identifier, "a"),
                (Comma, ","),
                (KwInt32, "int32"),
                (Identifier, "b"),
                (RightParen, ")"),
                (KwInt32, "int32"),
                (LeftBrace, "{"),
                (KwReturn, "return"),
                (Identifier, "a"),
                (Plus, "+"),
                (Identifier, "b"),
                (Semicolon, ";"),
                (RightBrace, "}"),
                (KwClass, "class"),
                (Identifier, "MyClass"),
                (LeftBrace, "{"),
                (KwPrivate, "private"),
                (Identifier, "field1"),
                (Colon, ":"),
                (KwInt32, "int32"),
                (Semicolon, ";"),
                (KwPublic, "public"),
                (Identifier, "field2"),
                (Colon, ":"),
                (KwFloat64, "float64"),
                (Semicolon, ";"),
                (KwPublic, "public"),
                (Identifier, "get"),
                (LeftParen, "("),
                (RightParen, ")"),
                (KwInt32, "int32"),
                (LeftBrace, "{"),
                (KwReturn, "return"),
                (Identifier, "field1"),
                (Semicolon, ";"),
                (RightBrace, "}"),
                (RightBrace, "}"),
                (String, "\"Hello, World!\""),
                (Byte, "'b'"),
                (Eof, ""),
            ],
        );
    }

    #[test]
    fn test_adjacent_operators() {
        use TokenKind::*;
        expect(
            "a+++b--*c",
            &[
                (Identifier, "a"),
                (Plus, "+"),
                (Plus, "+"),
                (Plus, "+"),
                (Identifier, "b"),
                (Minus, "-"),
                (Minus, "-"),
                (Asterisk, "*"),
                (Identifier, "c"),
                (Eof, ""),
            ],
        );
    }

    #[test]
    fn test_leading_zeros() {
        use TokenKind::*;
        expect("00123 00045.67", &[(Integer, "00123"), (Float, "00045.67"), (Eof, "")]);
    }

    #[test]
    fn test_unusual_whitespace() {
        use TokenKind::*;
        expect(
            "var\t x \n= 10 ;",
            &[
                (KwVar, "var"),
                (Identifier, "x"),
                (Assign, "="),
                (Integer, "10"),
                (Semicolon, ";"),
                (Eof, ""),
            ],
        );
    }

    #[test]
    fn test_number_edge_cases() {
        use TokenKind::*;
        expect(
            "0 0.0 0u 0.0001",
            &[
                (Integer, "0"),
                (Float, "0.0"),
                (Unsigned, "0u"),
                (Float, "0.0001"),
                (Eof, ""),
            ],
        );
    }

    #[test]
    fn test_mixed_program_has_no_errors() {
        let source = "var count: int32 = 10; // Initialize count\n\
                      count = count + 1;\n\
                      println(\"Count is: \" + count);";
        let handler = Handler::new();
        let tokens = tokenize(source, "test.vs", &handler);
        assert!(!handler.has_errors());
        assert!(tokens.iter().all(|t| t.kind() != TokenKind::Illegal));
        assert!(tokens.iter().any(|t| t.lexeme() == "// Initialize count"));
    }

    #[test]
    fn test_empty_and_blank_input() {
        expect("", &[(TokenKind::Eof, "")]);
        expect(" \t\r\n  \n", &[(TokenKind::Eof, "")]);
    }

    #[test]
    fn test_positions() {
        let handler = Handler::new();
        let tokens = tokenize("var x\n  = 10;", "test.vs", &handler);
        let positions: Vec<_> = tokens.iter().map(|t| (t.line(), t.column())).collect();
        assert_eq!(positions, vec![(1, 1), (1, 5), (2, 3), (2, 5), (2, 7), (2, 8)]);
    }

    #[test]
    fn test_errors_do_not_stop_scanning() {
        let handler = Handler::new();
        let tokens = tokenize("a @ 1.2.3 \"open", "bad.vs", &handler);
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::Illegal,
                TokenKind::Float,
                TokenKind::String,
                TokenKind::Eof,
            ]
        );

        let codes: Vec<_> = handler.diagnostics().iter().filter_map(|d| d.code).collect();
        assert_eq!(
            codes,
            vec![
                DiagnosticCode::E_LEX_ILLEGAL_CHARACTER,
                DiagnosticCode::E_LEX_MULTIPLE_DECIMAL_POINTS,
                DiagnosticCode::E_LEX_UNTERMINATED_STRING,
            ]
        );
    }

    #[test]
    fn test_numeric_symbols_are_illegal() {
        let handler = Handler::new();
        let tokens = tokenize("½ 1½ x²", "num.vs", &handler);
        let lexed: Vec<_> = tokens.iter().map(|t| (t.kind(), t.lexeme())).collect();
        assert_eq!(
            lexed,
            vec![
                (TokenKind::Illegal, "½"),
                (TokenKind::Integer, "1"),
                (TokenKind::Illegal, "½"),
                (TokenKind::Identifier, "x"),
                (TokenKind::Illegal, "²"),
                (TokenKind::Eof, ""),
            ]
        );
        assert!(handler
            .diagnostics()
            .iter()
            .all(|d| d.code == Some(DiagnosticCode::E_LEX_ILLEGAL_CHARACTER)));
        assert_eq!(handler.error_count(), 3);
    }

    #[test]
    fn test_non_ascii_decimal_digits_form_numbers() {
        expect("٣٤", &[(TokenKind::Integer, "٣٤"), (TokenKind::Eof, "")]);
    }

    #[test]
    fn test_kind_names_for_listing() {
        let handler = Handler::new();
        let names: Vec<_> = tokenize("x = 1;", "test.vs", &handler)
            .iter()
            .map(|t| t.kind().to_string())
            .collect();
        assert_eq!(names, vec!["Identifier", "Assign", "Integer", "Semicolon", "EOF"]);
    }
}
