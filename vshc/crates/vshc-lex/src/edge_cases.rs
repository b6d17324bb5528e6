//! Edge case tests for vshc-lex

#[cfg(test)]
mod tests {
    use crate::{keyword_from_ident, tokenize, Token, TokenKind};
    use vshc_util::{DiagnosticCode, Handler};

    fn lex_all(source: &str) -> (Vec<Token>, Handler) {
        let handler = Handler::new();
        let tokens = tokenize(source, "edge.vs", &handler);
        (tokens, handler)
    }

    /// Line and column of scalar `index`, counted independently of the cursor.
    fn position_of(source: &str, index: usize) -> (u32, u32) {
        let mut line = 1;
        let mut column = 1;
        for c in source.chars().take(index) {
            if c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        (line, column)
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10_000);
        let (tokens, _) = lex_all(&format!("var {name} = 1;"));
        assert_eq!(tokens[1].kind(), TokenKind::Identifier);
        assert_eq!(tokens[1].lexeme().len(), 10_000);
    }

    #[test]
    fn test_edge_embedded_nul_is_illegal() {
        let (tokens, handler) = lex_all("a\0b");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::Illegal,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_edge_illegal_reported_once() {
        let (_, handler) = lex_all("$ # `");
        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 3);
        assert!(diags
            .iter()
            .all(|d| d.code == Some(DiagnosticCode::E_LEX_ILLEGAL_CHARACTER)));
    }

    #[test]
    fn test_edge_slash_before_comment() {
        let (tokens, _) = lex_all("a / b // c");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::Slash,
                TokenKind::Identifier,
                TokenKind::Comment,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_edge_dot_after_identifier() {
        let (tokens, _) = lex_all("t.setValue(42)");
        let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme()).collect();
        assert_eq!(lexemes, vec!["t", ".", "setValue", "(", "42", ")", ""]);
    }

    #[test]
    fn test_edge_leading_dot_is_not_a_number() {
        let (tokens, _) = lex_all(".5");
        assert_eq!(tokens[0].kind(), TokenKind::Dot);
        assert_eq!(tokens[1].kind(), TokenKind::Integer);
    }

    #[test]
    fn test_edge_position_after_newline() {
        let (tokens, _) = lex_all("a\nb\r\n  c");
        let positions: Vec<_> = tokens.iter().map(|t| (t.line(), t.column())).collect();
        assert_eq!(positions, vec![(1, 1), (2, 1), (3, 3), (3, 4)]);
    }

    #[test]
    fn test_edge_crlf_comment() {
        let (tokens, _) = lex_all("// note\r\nx");
        assert_eq!(tokens[0].lexeme(), "// note");
        assert_eq!((tokens[1].line(), tokens[1].column()), (2, 1));
    }

    #[test]
    fn test_edge_multiline_string_moves_line() {
        let (tokens, _) = lex_all("\"a\nb\" x");
        assert_eq!((tokens[1].line(), tokens[1].column()), (2, 4));
    }

    // ==================== PROPERTIES ====================

    #[test]
    fn test_property_arbitrary_input_terminates_with_single_eof() {
        use proptest::prelude::*;

        proptest!(|(source in "(?s).{0,200}")| {
            let (tokens, _) = lex_all(&source);
            prop_assert!(tokens.last().is_some_and(|t| t.is_eof()));
            prop_assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
        });
    }

    #[test]
    fn test_property_lexemes_match_source() {
        use proptest::prelude::*;

        proptest!(|(source in "(?s).{0,200}")| {
            let (tokens, _) = lex_all(&source);
            let mut previous_end = 0;
            for token in tokens.iter().filter(|t| !t.is_eof()) {
                prop_assert!(!token.lexeme().is_empty());
                prop_assert_eq!(token.source_text(), token.lexeme());
                prop_assert!(token.span().start >= previous_end);
                prop_assert_eq!(
                    (token.line(), token.column()),
                    position_of(&source, token.span().start)
                );
                previous_end = token.span().end;
            }
        });
    }

    #[test]
    fn test_property_identifier_shapes() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-zA-Z_][a-zA-Z0-9_']{0,50}")| {
            let (tokens, handler) = lex_all(&input);
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].lexeme(), input.as_str());
            let expected = keyword_from_ident(&input).unwrap_or(TokenKind::Identifier);
            prop_assert_eq!(tokens[0].kind(), expected);
            prop_assert!(!handler.has_errors());
        });
    }

    #[test]
    fn test_property_number_shapes() {
        use proptest::prelude::*;

        proptest!(|(int in "[0-9]{1,20}", frac in "(\\.[0-9]{0,10})?", suffix in "u?")| {
            let input = format!("{int}{frac}{suffix}");
            let (tokens, handler) = lex_all(&input);
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].lexeme(), input.as_str());
            let expected = if !suffix.is_empty() {
                TokenKind::Unsigned
            } else if !frac.is_empty() {
                TokenKind::Float
            } else {
                TokenKind::Integer
            };
            prop_assert_eq!(tokens[0].kind(), expected);
            prop_assert!(!handler.has_errors());
        });
    }

    #[test]
    fn test_property_plain_string_literals() {
        use proptest::prelude::*;

        proptest!(|(body in "[^\"\\\\]{0,100}")| {
            let source = format!("\"{body}\"");
            let (tokens, handler) = lex_all(&source);
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].kind(), TokenKind::String);
            prop_assert_eq!(tokens[0].lexeme(), source.as_str());
            prop_assert!(!handler.has_errors());
        });
    }

    #[test]
    fn test_property_whitespace_only_yields_eof() {
        use proptest::prelude::*;

        proptest!(|(source in "[ \t\r\n]{0,50}")| {
            let (tokens, _) = lex_all(&source);
            prop_assert_eq!(tokens.len(), 1);
            prop_assert!(tokens[0].is_eof());
        });
    }
}
