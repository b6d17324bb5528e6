//! Diagnostic severity levels.
//!
//! # Examples
//!
//! ```
//! use vshc_util::diagnostic::Level;
//!
//! assert!(Level::Error.is_error());
//! assert!(!Level::Warning.is_error());
//! ```

use std::fmt;

/// Diagnostic severity level
///
/// Lexical errors are always [`Level::Error`]; the other levels exist for
/// drivers that attach their own remarks to a run.
///
/// # Examples
///
/// ```
/// use vshc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// A problem in the source text
    Error,
    /// Suspicious but valid source text
    Warning,
    /// Additional information
    Note,
}

impl Level {
    /// Returns true if this level represents an error
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }

    /// Returns the canonical name for this level
    ///
    /// # Examples
    ///
    /// ```
    /// use vshc_util::diagnostic::Level;
    ///
    /// assert_eq!(Level::Note.name(), "note");
    /// ```
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Note => "note",
        }
    }

    /// Returns the ANSI color code for this level
    #[inline]
    pub const fn color_code(&self) -> &'static str {
        match self {
            Level::Error => "31",   // Red
            Level::Warning => "33", // Yellow
            Level::Note => "36",    // Cyan
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
