//! Token definitions and the published keyword and precedence tables.
//!
//! Tokens carry the verbatim lexeme and the 1-based position of its first
//! scalar, together with shared handles to the file name and the decoded
//! source buffer so later stages can re-slice context without reading the
//! file again.

use std::fmt;
use std::sync::{Arc, LazyLock};

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use vshc_util::Span;

/// The kind of a lexical token.
///
/// Variants are declared family by family; the range checks in
/// [`TokenKind::is_keyword`] and [`TokenKind::is_operator`] rely on that
/// order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    // ===== Meta =====
    /// Unrecognised character, or a lone `&` / `|`
    Illegal,
    /// Line comment, `//` up to the end of the line
    Comment,
    /// End of input
    Eof,

    // ===== Literal-class =====
    /// Identifier that is not a reserved word
    Identifier,
    /// Untyped integer literal, e.g. `42`
    Integer,
    /// Untyped floating-point literal, e.g. `4.5`
    Float,
    /// Untyped unsigned literal, e.g. `255u`
    Unsigned,
    /// String literal including its quotes
    String,
    /// Character literal including its quotes
    Byte,

    // ===== Operators / delimiters =====
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `.`
    Dot,
    /// `=`
    Assign,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    LessThan,
    /// `>`
    GreaterThan,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `!`
    Not,
    /// `&&`
    And,
    /// `||`
    Or,

    // ===== Control / declaration keywords =====
    /// `public`
    KwPublic,
    /// `private`
    KwPrivate,
    /// `virtual`
    KwVirtual,
    /// `override`
    KwOverride,
    /// `static`
    KwStatic,
    /// `const`
    KwConst,
    /// `var`
    KwVar,
    /// `if`
    KwIf,
    /// `else`
    KwElse,
    /// `match`
    KwMatch,
    /// `for`
    KwFor,
    /// `return`
    KwReturn,
    /// `structure`
    KwStructure,
    /// `enumeration`
    KwEnumeration,
    /// `define`
    KwDefine,
    /// `typedef`
    KwTypedef,
    /// `class`
    KwClass,

    // ===== Type keywords =====
    /// `int8`
    KwInt8,
    /// `int16`
    KwInt16,
    /// `int32`
    KwInt32,
    /// `int64`
    KwInt64,
    /// `uint8`
    KwUInt8,
    /// `uint16`
    KwUInt16,
    /// `uint32`
    KwUInt32,
    /// `uint64`
    KwUInt64,
    /// `float32`
    KwFloat32,
    /// `float64`
    KwFloat64,
    /// `boolean`
    KwBoolean,
    /// `string`
    KwString,
    /// `byte`
    KwByte,
    /// `void`
    KwVoid,
}

impl TokenKind {
    /// Returns the canonical display name of this kind.
    ///
    /// # Example
    ///
    /// ```
    /// use vshc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::KwVar.name(), "KwVar");
    /// assert_eq!(TokenKind::Eof.name(), "EOF");
    /// ```
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Illegal => "Illegal",
            TokenKind::Comment => "Comment",
            TokenKind::Eof => "EOF",
            TokenKind::Identifier => "Identifier",
            TokenKind::Integer => "Integer",
            TokenKind::Float => "Float",
            TokenKind::Unsigned => "Unsigned",
            TokenKind::String => "String",
            TokenKind::Byte => "Byte",
            TokenKind::Plus => "Plus",
            TokenKind::Minus => "Minus",
            TokenKind::Asterisk => "Asterisk",
            TokenKind::Slash => "Slash",
            TokenKind::Percent => "Percent",
            TokenKind::LeftParen => "LeftParen",
            TokenKind::RightParen => "RightParen",
            TokenKind::LeftBrace => "LeftBrace",
            TokenKind::RightBrace => "RightBrace",
            TokenKind::LeftBracket => "LeftBracket",
            TokenKind::RightBracket => "RightBracket",
            TokenKind::Comma => "Comma",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::Colon => "Colon",
            TokenKind::Dot => "Dot",
            TokenKind::Assign => "Assign",
            TokenKind::Equal => "Equal",
            TokenKind::NotEqual => "NotEqual",
            TokenKind::LessThan => "LessThan",
            TokenKind::GreaterThan => "GreaterThan",
            TokenKind::LessEqual => "LessEqual",
            TokenKind::GreaterEqual => "GreaterEqual",
            TokenKind::Not => "Not",
            TokenKind::And => "And",
            TokenKind::Or => "Or",
            TokenKind::KwPublic => "KwPublic",
            TokenKind::KwPrivate => "KwPrivate",
            TokenKind::KwVirtual => "KwVirtual",
            TokenKind::KwOverride => "KwOverride",
            TokenKind::KwStatic => "KwStatic",
            TokenKind::KwConst => "KwConst",
            TokenKind::KwVar => "KwVar",
            TokenKind::KwIf => "KwIf",
            TokenKind::KwElse => "KwElse",
            TokenKind::KwMatch => "KwMatch",
            TokenKind::KwFor => "KwFor",
            TokenKind::KwReturn => "KwReturn",
            TokenKind::KwStructure => "KwStructure",
            TokenKind::KwEnumeration => "KwEnumeration",
            TokenKind::KwDefine => "KwDefine",
            TokenKind::KwTypedef => "KwTypedef",
            TokenKind::KwClass => "KwClass",
            TokenKind::KwInt8 => "KwInt8",
            TokenKind::KwInt16 => "KwInt16",
            TokenKind::KwInt32 => "KwInt32",
            TokenKind::KwInt64 => "KwInt64",
            TokenKind::KwUInt8 => "KwUInt8",
            TokenKind::KwUInt16 => "KwUInt16",
            TokenKind::KwUInt32 => "KwUInt32",
            TokenKind::KwUInt64 => "KwUInt64",
            TokenKind::KwFloat32 => "KwFloat32",
            TokenKind::KwFloat64 => "KwFloat64",
            TokenKind::KwBoolean => "KwBoolean",
            TokenKind::KwString => "KwString",
            TokenKind::KwByte => "KwByte",
            TokenKind::KwVoid => "KwVoid",
        }
    }

    /// Returns true for reserved words, including the type keywords.
    pub fn is_keyword(self) -> bool {
        (TokenKind::KwPublic..=TokenKind::KwVoid).contains(&self)
    }

    /// Returns true for the type keywords (`int8` through `void`).
    pub fn is_type_keyword(self) -> bool {
        (TokenKind::KwInt8..=TokenKind::KwVoid).contains(&self)
    }

    /// Returns true for numeric, string and character literals.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Integer
                | TokenKind::Float
                | TokenKind::Unsigned
                | TokenKind::String
                | TokenKind::Byte
        )
    }

    /// Returns true for operators and delimiters.
    pub fn is_operator(self) -> bool {
        (TokenKind::Plus..=TokenKind::Or).contains(&self)
    }

    /// Binding power of this kind for expression parsing, if it has one.
    ///
    /// # Example
    ///
    /// ```
    /// use vshc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::Asterisk.precedence(), Some(6));
    /// assert_eq!(TokenKind::Assign.precedence(), None);
    /// ```
    pub fn precedence(self) -> Option<u8> {
        precedence(self)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A lexical token.
///
/// `lexeme` is the exact source text matched, including quote and comment
/// markers. `line` and `column` are 1-based and locate its first scalar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    span: Span,
    file: Arc<str>,
    source: Arc<[char]>,
}

impl Token {
    /// Creates a new token.
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        span: Span,
        file: Arc<str>,
        source: Arc<[char]>,
    ) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
            file,
            source,
        }
    }

    /// The token kind.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The exact source text matched.
    #[inline]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// 1-based line of the first scalar.
    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// 1-based column of the first scalar.
    #[inline]
    pub fn column(&self) -> u32 {
        self.span.column
    }

    /// Scalar-offset span of the lexeme in the source buffer.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Originating file identifier.
    #[inline]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// The full decoded source buffer the token was cut from.
    #[inline]
    pub fn source(&self) -> &Arc<[char]> {
        &self.source
    }

    /// Returns true if this is the end-of-input token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Re-slices the source buffer at this token's span.
    ///
    /// For every token the lexer produces this equals [`Token::lexeme`].
    pub fn source_text(&self) -> String {
        let end = self.span.end.min(self.source.len());
        let start = self.span.start.min(end);
        self.source[start..end].iter().collect()
    }
}

/// Reserved words in declaration order.
static KEYWORDS: LazyLock<IndexMap<&'static str, TokenKind>> = LazyLock::new(|| {
    IndexMap::from([
        ("public", TokenKind::KwPublic),
        ("private", TokenKind::KwPrivate),
        ("virtual", TokenKind::KwVirtual),
        ("override", TokenKind::KwOverride),
        ("static", TokenKind::KwStatic),
        ("const", TokenKind::KwConst),
        ("var", TokenKind::KwVar),
        ("if", TokenKind::KwIf),
        ("else", TokenKind::KwElse),
        ("match", TokenKind::KwMatch),
        ("for", TokenKind::KwFor),
        ("return", TokenKind::KwReturn),
        ("structure", TokenKind::KwStructure),
        ("enumeration", TokenKind::KwEnumeration),
        ("define", TokenKind::KwDefine),
        ("typedef", TokenKind::KwTypedef),
        ("class", TokenKind::KwClass),
        ("int8", TokenKind::KwInt8),
        ("int16", TokenKind::KwInt16),
        ("int32", TokenKind::KwInt32),
        ("int64", TokenKind::KwInt64),
        ("uint8", TokenKind::KwUInt8),
        ("uint16", TokenKind::KwUInt16),
        ("uint32", TokenKind::KwUInt32),
        ("uint64", TokenKind::KwUInt64),
        ("float32", TokenKind::KwFloat32),
        ("float64", TokenKind::KwFloat64),
        ("boolean", TokenKind::KwBoolean),
        ("string", TokenKind::KwString),
        ("byte", TokenKind::KwByte),
        ("void", TokenKind::KwVoid),
    ])
});

/// Operator binding powers; higher binds tighter.
static PRECEDENCE: LazyLock<FxHashMap<TokenKind, u8>> = LazyLock::new(|| {
    [
        (TokenKind::Or, 1),
        (TokenKind::And, 2),
        (TokenKind::Equal, 3),
        (TokenKind::NotEqual, 3),
        (TokenKind::LessThan, 4),
        (TokenKind::GreaterThan, 4),
        (TokenKind::LessEqual, 4),
        (TokenKind::GreaterEqual, 4),
        (TokenKind::Plus, 5),
        (TokenKind::Minus, 5),
        (TokenKind::Asterisk, 6),
        (TokenKind::Slash, 6),
        (TokenKind::Percent, 6),
    ]
    .into_iter()
    .collect()
});

/// Looks up an identifier-shaped lexeme in the keyword table.
///
/// Matching is exact and case-sensitive.
///
/// # Example
///
/// ```
/// use vshc_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("class"), Some(TokenKind::KwClass));
/// assert_eq!(keyword_from_ident("Class"), None);
/// assert_eq!(keyword_from_ident("varName"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    KEYWORDS.get(ident).copied()
}

/// Iterates over the keyword table as `(spelling, kind)` pairs, in
/// declaration order.
pub fn keywords() -> impl Iterator<Item = (&'static str, TokenKind)> {
    KEYWORDS.iter().map(|(spelling, kind)| (*spelling, *kind))
}

/// Binding power of `kind`, or `None` if it is not a binary operator.
pub fn precedence(kind: TokenKind) -> Option<u8> {
    PRECEDENCE.get(&kind).copied()
}

/// The precedence table, loosest binding first.
pub fn precedence_table() -> Vec<(TokenKind, u8)> {
    let mut table: Vec<_> = PRECEDENCE.iter().map(|(kind, power)| (*kind, *power)).collect();
    table.sort_by_key(|(kind, power)| (*power, *kind));
    table
}
