//! Scalar cursor for traversing decoded source text.
//!
//! The cursor owns the source as a shared buffer of Unicode scalar values.
//! `position` is the index of the scalar the cursor is sitting on, so
//! `peek(0)` always describes the scalar about to be classified. Line and
//! column describe that same scalar.

use std::sync::Arc;

use crate::unicode::is_whitespace;

/// A cursor over a buffer of Unicode scalar values.
///
/// # Example
///
/// ```
/// use vshc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("var x", "main.vs");
///
/// assert_eq!(cursor.current(), Some('v'));
/// assert_eq!(cursor.advance(), Some('a'));
/// assert_eq!(cursor.column(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor {
    /// The decoded source, never mutated after construction.
    source: Arc<[char]>,

    /// Index of the current scalar.
    position: usize,

    /// Line of the current scalar (1-based).
    line: u32,

    /// Column of the current scalar (1-based, in scalars).
    column: u32,

    /// Originating file identifier.
    file: Arc<str>,
}

impl Cursor {
    /// Creates a cursor over `source`, decoding it into scalars.
    pub fn new(source: &str, file: impl Into<Arc<str>>) -> Self {
        Self::from_chars(source.chars().collect(), file)
    }

    /// Creates a cursor over an already decoded buffer.
    pub fn from_chars(source: Arc<[char]>, file: impl Into<Arc<str>>) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
            file: file.into(),
        }
    }

    /// Returns the scalar at `position + offset`, or `None` past the end.
    ///
    /// # Example
    ///
    /// ```
    /// use vshc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("ab", "t.vs");
    /// assert_eq!(cursor.peek(0), Some('a'));
    /// assert_eq!(cursor.peek(1), Some('b'));
    /// assert_eq!(cursor.peek(2), None);
    /// ```
    #[inline]
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.source.get(self.position + offset).copied()
    }

    /// Returns the scalar under the cursor.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.peek(0)
    }

    /// Moves forward one scalar and returns the scalar now under the cursor.
    ///
    /// Stepping past a newline moves to column 1 of the next line. Once the
    /// end of the buffer is reached the cursor stays there and every further
    /// call returns `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use vshc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\nb", "t.vs");
    /// assert_eq!(cursor.advance(), Some('\n'));
    /// assert_eq!(cursor.advance(), Some('b'));
    /// assert_eq!((cursor.line(), cursor.column()), (2, 1));
    /// assert_eq!(cursor.advance(), None);
    /// assert_eq!(cursor.advance(), None);
    /// ```
    pub fn advance(&mut self) -> Option<char> {
        let current = self.current()?;
        self.position += 1;
        if current == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.current()
    }

    /// Returns true if the cursor is past the last scalar.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consumes `expected` if it is the current scalar.
    ///
    /// # Example
    ///
    /// ```
    /// use vshc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("==", "t.vs");
    /// assert!(cursor.match_char('='));
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skips space, tab, carriage return and newline.
    ///
    /// Comments are not whitespace; they are tokenized.
    pub fn skip_whitespace(&mut self) {
        while self.current().is_some_and(is_whitespace) {
            self.advance();
        }
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the index of the current scalar.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Collects the scalars in `start..end` into a string.
    pub fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.source.len());
        let start = start.min(end);
        self.source[start..end].iter().collect()
    }

    /// Collects the scalars from `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> String {
        self.slice(start, self.position)
    }

    /// Returns the scalar at an absolute index.
    #[inline]
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.source.get(index).copied()
    }

    /// Returns a shared handle to the source buffer.
    #[inline]
    pub fn source(&self) -> &Arc<[char]> {
        &self.source
    }

    /// Returns the originating file identifier.
    #[inline]
    pub fn file(&self) -> &Arc<str> {
        &self.file
    }
}
