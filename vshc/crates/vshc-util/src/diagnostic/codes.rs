//! Diagnostic codes for lexical errors.
//!
//! Every lexical error class has its own code so tooling can match on it
//! without parsing messages.
//!
//! # Examples
//!
//! ```
//! use vshc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEX_UNTERMINATED_STRING;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 103);
//! assert_eq!(code.as_str(), "E0103");
//! ```

/// A unique code identifying a diagnostic message
///
/// Codes render as `{prefix}{number:04}`, e.g. `E0101`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    ///
    /// # Examples
    ///
    /// ```
    /// use vshc_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("W", 7);
    /// assert_eq!(code.as_str(), "W0007");
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E0101")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXICAL ERROR CODES (E0101-E0199)
    // =========================================================================

    /// E0101: Unrecognised character, or a lone `&` / `|`
    pub const E_LEX_ILLEGAL_CHARACTER: Self = Self::new("E", 101);
    /// E0102: Second decimal point in a numeric literal
    pub const E_LEX_MULTIPLE_DECIMAL_POINTS: Self = Self::new("E", 102);
    /// E0103: End of input inside a string literal
    pub const E_LEX_UNTERMINATED_STRING: Self = Self::new("E", 103);
    /// E0104: Escape target outside `n t r \ ' " 0`
    pub const E_LEX_INVALID_ESCAPE: Self = Self::new("E", 104);
    /// E0105: End of input directly after a backslash
    pub const E_LEX_UNTERMINATED_ESCAPE: Self = Self::new("E", 105);
    /// E0106: End of input inside a character literal
    pub const E_LEX_UNTERMINATED_CHAR: Self = Self::new("E", 106);
    /// E0107: More than one unit inside a character literal
    pub const E_LEX_EXTRA_CHARS_IN_CHAR: Self = Self::new("E", 107);
    /// E0108: Quoted-literal scanner entered without its opening quote
    pub const E_LEX_EXPECTED_QUOTE: Self = Self::new("E", 108);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub const E_LEX_ILLEGAL_CHARACTER: DiagnosticCode = DiagnosticCode::E_LEX_ILLEGAL_CHARACTER;
pub const E_LEX_MULTIPLE_DECIMAL_POINTS: DiagnosticCode =
    DiagnosticCode::E_LEX_MULTIPLE_DECIMAL_POINTS;
pub const E_LEX_UNTERMINATED_STRING: DiagnosticCode = DiagnosticCode::E_LEX_UNTERMINATED_STRING;
pub const E_LEX_INVALID_ESCAPE: DiagnosticCode = DiagnosticCode::E_LEX_INVALID_ESCAPE;
pub const E_LEX_UNTERMINATED_ESCAPE: DiagnosticCode = DiagnosticCode::E_LEX_UNTERMINATED_ESCAPE;
pub const E_LEX_UNTERMINATED_CHAR: DiagnosticCode = DiagnosticCode::E_LEX_UNTERMINATED_CHAR;
pub const E_LEX_EXTRA_CHARS_IN_CHAR: DiagnosticCode = DiagnosticCode::E_LEX_EXTRA_CHARS_IN_CHAR;
pub const E_LEX_EXPECTED_QUOTE: DiagnosticCode = DiagnosticCode::E_LEX_EXPECTED_QUOTE;
