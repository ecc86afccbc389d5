//! Source files with precomputed line tables.
//!
//! [`SourceFile`] keeps the text of one loaded file together with the byte
//! offset of every line start, so diagnostics can quote the offending line.

use std::sync::Arc;

use super::Span;
use crate::diagnostic::SourceSnippet;
use crate::error::{SourceError, SourceResult};

/// One loaded file: display name, text and line table.
///
/// # Examples
///
/// ```
/// use lulex_util::span::SourceFile;
///
/// let file = SourceFile::new("init.lua", "local x = 1");
/// assert_eq!(file.name(), "init.lua");
/// assert_eq!(file.content(), "local x = 1");
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// Shown in `-->` locations
    name: String,
    /// File content
    content: Arc<str>,
    /// Byte offset of each line's first character
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Indexes `content` under `name`.
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        line_starts.into()
    }

    /// Display name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full text
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of lines; a trailing newline opens an empty last line
    ///
    /// ```
    /// use lulex_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.lua", "a\nb\nc");
    /// assert_eq!(file.line_count(), 3);
    /// ```
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offset of 0-based `line`
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Get a specific source line (1-indexed), without its line terminator
    ///
    /// ```
    /// use lulex_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.lua", "line1\r\nline2\nline3");
    /// assert_eq!(file.line_at(1), Some("line1"));
    /// assert_eq!(file.line_at(3), Some("line3"));
    /// assert_eq!(file.line_at(4), None);
    /// ```
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = self.line_start(line - 1)?;
        let end = self.line_start(line).unwrap_or(self.content.len());

        Some(self.content[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Like [`SourceFile::line_at`], but reports an out-of-range line as an error
    pub fn line_text(&self, line: usize) -> SourceResult<&str> {
        self.line_at(line).ok_or(SourceError::InvalidLineNumber {
            line,
            max_lines: self.line_count(),
        })
    }

    /// Text of `start..end`, checked against bounds and char boundaries
    ///
    /// ```
    /// use lulex_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.lua", "local x");
    /// assert_eq!(file.extract_range(0, 5).unwrap(), "local");
    /// assert!(file.extract_range(4, 2).is_err());
    /// ```
    pub fn extract_range(&self, start: usize, end: usize) -> SourceResult<&str> {
        if start > end {
            return Err(SourceError::InvalidSpan { start, end });
        }
        if end > self.content.len() {
            return Err(SourceError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: start,
                span_end: end,
            });
        }
        for offset in [start, end] {
            if !self.content.is_char_boundary(offset) {
                return Err(SourceError::NotCharBoundary { offset });
            }
        }

        Ok(&self.content[start..end])
    }

    /// Build a caret snippet for `span`, clipped to the span's first line.
    ///
    /// The underline covers the characters of the span that lie on that line
    /// (at least one caret).
    pub fn snippet(&self, span: Span) -> SourceResult<SourceSnippet> {
        let line = self.line_text(span.line as usize)?;
        let text = self.extract_range(span.start, span.end)?;
        let width = text.lines().next().map_or(0, |first| first.chars().count());
        let start_column = span.column as usize;

        Ok(SourceSnippet::new(
            line,
            span.line as usize,
            start_column,
            start_column + width,
        ))
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}
