//! Source locations.
//!
//! A [`Span`] is a byte range plus the line and column where it begins;
//! [`SourceFile`] maps spans back to the text they cover.
//!
//! # Examples
//!
//! ```
//! use lulex_util::span::Span;
//!
//! let span = Span::new(10, 20, 1, 5);
//! assert_eq!(span.len(), 10);
//! ```

mod source_file;

pub use source_file::SourceFile;

/// A byte range in a source buffer and the position of its first character.
///
/// Columns count characters, not bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// First byte
    pub start: usize,
    /// One past the last byte
    pub end: usize,
    /// 1-based line of `start`
    pub line: u32,
    /// 1-based column of `start`
    pub column: u32,
}

impl Span {
    /// Placeholder for diagnostics without a location; line 0 never occurs in source.
    ///
    /// ```
    /// use lulex_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.end, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Span over `start..end` beginning at `line`:`column`.
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Zero-length span at `offset`.
    ///
    /// ```
    /// use lulex_util::span::Span;
    ///
    /// let point = Span::point(42, 3, 7);
    /// assert!(point.is_empty());
    /// assert_eq!(point.line, 3);
    /// ```
    #[inline]
    pub fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Whether the span covers no bytes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Width in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether `offset` falls inside `start..end`
    ///
    /// ```
    /// use lulex_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 5);
    /// assert!(span.contains(15));
    /// assert!(!span.contains(20));
    /// ```
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Returns true if this span begins strictly after `other` begins,
    /// comparing line first and column second.
    #[inline]
    pub fn starts_after(&self, other: Span) -> bool {
        (self.line, self.column) > (other.line, other.column)
    }
}
