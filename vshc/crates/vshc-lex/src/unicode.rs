//! Unicode character classes used by the lexer.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Checks if a character can start an identifier.
///
/// Any Unicode letter or `_`.
///
/// # Example
///
/// ```
/// use vshc_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('α'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('\''));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Checks if a character can continue an identifier.
///
/// Letters, digits, `_` and the apostrophe, so `x'` and `x''` are names.
///
/// # Example
///
/// ```
/// use vshc_lex::unicode::is_ident_continue;
///
/// assert!(is_ident_continue('1'));
/// assert!(is_ident_continue('\''));
/// assert!(!is_ident_continue('-'));
/// ```
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || is_digit(c) || c == '\''
}

/// Checks if a character is a Unicode decimal digit (category `Nd`).
///
/// Fractions, superscripts and other numeric symbols are not digits.
///
/// # Example
///
/// ```
/// use vshc_lex::unicode::is_digit;
///
/// assert!(is_digit('7'));
/// assert!(is_digit('٣'));
/// assert!(!is_digit('½'));
/// ```
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
        || (!c.is_ascii() && get_general_category(c) == GeneralCategory::DecimalNumber)
}

/// Checks if a character is skipped between tokens.
///
/// Only space, tab, carriage return and line feed; other Unicode spacing is
/// lexed as an illegal character.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Checks if a character is a legal escape target after `\`.
///
/// # Example
///
/// ```
/// use vshc_lex::unicode::is_escape_target;
///
/// assert!(is_escape_target('n'));
/// assert!(is_escape_target('0'));
/// assert!(!is_escape_target('x'));
/// ```
#[inline]
pub fn is_escape_target(c: char) -> bool {
    matches!(c, 'n' | 't' | 'r' | '\\' | '\'' | '"' | '0')
}
