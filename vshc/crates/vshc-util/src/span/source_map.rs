//! Source map for managing source files.
//!
//! This module provides the [`SourceMap`] type, the file-loading side of the
//! toolchain. It reads and decodes source text so the lexer never performs
//! I/O, and it answers line lookups for diagnostic snippets.

use std::path::Path;
use std::sync::Arc;

use super::FileId;
use crate::error::{SourceMapError, SourceMapResult};

/// UTF-8 byte order mark, stripped from loaded text.
const BOM: char = '\u{FEFF}';

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use vshc_util::span::SourceFile;
///
/// let file = SourceFile::new(0, "main.vs", "var x: int32;");
/// assert_eq!(file.name(), "main.vs");
/// assert_eq!(file.content(), "var x: int32;");
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// Unique file identifier
    id: FileId,
    /// File name (path or display name)
    name: Arc<str>,
    /// File content
    content: Arc<str>,
    /// Precomputed line start offsets (bytes)
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(id: usize, name: impl Into<Arc<str>>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            id: FileId(id),
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Compute line start offsets from content
    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];

        for (i, ch) in content.char_indices() {
            if ch == '\n' {
                line_starts.push(i + 1);
            }
        }

        line_starts.into()
    }

    /// Get the file identifier
    #[inline]
    pub fn id(&self) -> FileId {
        self.id
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    ///
    /// # Examples
    ///
    /// ```
    /// use vshc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new(0, "main.vs", "line1\nline2\nline3");
    /// assert_eq!(file.line_count(), 3);
    /// ```
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get a specific source line (1-indexed), without its line terminator
    ///
    /// # Examples
    ///
    /// ```
    /// use vshc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new(0, "main.vs", "line1\r\nline2\nline3");
    /// assert_eq!(file.line_at(1), Some("line1"));
    /// assert_eq!(file.line_at(3), Some("line3"));
    /// assert_eq!(file.line_at(4), None);
    /// ```
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = *self.line_starts.get(line - 1)?;
        let end = self
            .line_starts
            .get(line)
            .copied()
            .unwrap_or(self.content.len());

        Some(self.content[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Like [`SourceFile::line_at`], but reports out-of-range lines as an error
    pub fn line_text(&self, line: usize) -> SourceMapResult<&str> {
        self.line_at(line).ok_or(SourceMapError::InvalidLineNumber {
            line,
            max_lines: self.line_count(),
        })
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}

/// A source map managing multiple source files
///
/// # Examples
///
/// ```
/// use vshc_util::span::SourceMap;
///
/// let mut map = SourceMap::new();
/// let file_id = map.add_file("main.vs", "class Point {}");
/// let file = map.get(file_id).unwrap();
/// assert_eq!(file.name(), "main.vs");
/// ```
#[derive(Default)]
pub struct SourceMap {
    files: Vec<Arc<SourceFile>>,
}

impl SourceMap {
    /// Create a new empty source map
    #[inline]
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Add a new source file from in-memory text
    ///
    /// A leading byte order mark is dropped. Returns the [`FileId`] for the
    /// added file.
    pub fn add_file(&mut self, name: impl Into<Arc<str>>, content: impl AsRef<str>) -> FileId {
        let content = content.as_ref();
        let content = content.strip_prefix(BOM).unwrap_or(content);
        let id = self.files.len();
        let file = SourceFile::new(id, name, content);
        let file_id = file.id();
        self.files.push(Arc::new(file));
        file_id
    }

    /// Read a UTF-8 source file from disk and register it under its path
    pub fn load(&mut self, path: impl AsRef<Path>) -> SourceMapResult<FileId> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SourceMapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.add_file(path.display().to_string(), content))
    }

    /// Get a source file by its ID
    #[inline]
    pub fn get(&self, id: FileId) -> Option<Arc<SourceFile>> {
        self.files.get(id.0).cloned()
    }

    /// Iterate over the registered files in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<SourceFile>> {
        self.files.iter()
    }
}
