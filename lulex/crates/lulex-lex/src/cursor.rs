//! Position-tracking reader over a source buffer.
//!
//! Offsets are bytes, columns are characters. The scanner backtracks by
//! taking a [`CursorSnapshot`] and restoring it.

/// Reads a `&str` one `char` at a time while counting lines and columns.
///
/// `\n` starts a new line; every other character, `\r` included, moves one
/// column to the right.
///
/// # Example
///
/// ```
/// use lulex_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("local x");
///
/// assert_eq!(cursor.current_char(), 'l');
/// assert_eq!(cursor.advance(), 'l');
/// assert_eq!(cursor.current_char(), 'o');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// Whole input.
    source: &'a str,

    /// Byte offset of the next character.
    position: usize,

    /// 1-based line of the next character.
    line: u32,

    /// 1-based column of the next character.
    column: u32,
}

/// A saved cursor state for backtracking.
///
/// Produced by [`Cursor::snapshot`] and consumed by [`Cursor::restore`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    /// Byte position.
    pub position: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based).
    pub column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source` (line 1, column 1).
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// The next character, or `'\0'` past the end. Use
    /// [`Cursor::is_at_end`] to tell a literal NUL apart from the end.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters ahead (0 = current).
    ///
    /// # Example
    ///
    /// ```
    /// use lulex_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("aé;");
    /// assert_eq!(cursor.peek_char(0), 'a');
    /// assert_eq!(cursor.peek_char(1), 'é');
    /// assert_eq!(cursor.peek_char(2), ';');
    /// assert_eq!(cursor.peek_char(3), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let rest = self.remaining().as_bytes();

        // ASCII needs no decoding
        if offset < rest.len() && rest[..=offset].is_ascii() {
            return rest[offset] as char;
        }

        self.remaining().chars().nth(offset).unwrap_or('\0')
    }

    /// Consumes the current character and returns it.
    ///
    /// A newline moves to the next line and resets the column to 1; any other
    /// character advances the column by one. At the end of the source this
    /// returns '\0' and leaves the cursor unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use lulex_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\nb");
    /// cursor.advance();
    /// cursor.advance();
    /// assert_eq!((cursor.line(), cursor.column()), (2, 1));
    /// ```
    #[inline]
    pub fn advance(&mut self) -> char {
        let Some(c) = self.remaining().chars().next() else {
            return '\0';
        };

        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }

    /// Advances the cursor by `n` characters.
    pub fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Returns true if the cursor has consumed the whole source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consumes the current character if it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use lulex_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("==");
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('~'));
    /// assert_eq!(cursor.position(), 1);
    /// ```
    #[inline]
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes characters while `predicate` holds and returns how many were consumed.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> usize {
        let mut count = 0;
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
            count += 1;
        }
        count
    }

    /// Line of the next character.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based, in characters).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Byte offset of the next character.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source text from `start` up to the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use lulex_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("0x1F + 1");
    /// cursor.advance_n(4);
    /// assert_eq!(cursor.slice_from(0), "0x1F");
    /// ```
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the unconsumed rest of the source.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Saves the current position, line and column.
    #[inline]
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Restores a state previously saved with [`Cursor::snapshot`].
    ///
    /// # Example
    ///
    /// ```
    /// use lulex_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("[=x");
    /// let saved = cursor.snapshot();
    /// cursor.advance_n(2);
    /// cursor.restore(saved);
    /// assert_eq!(cursor.current_char(), '[');
    /// ```
    #[inline]
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.column = snapshot.column;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_starts_at_origin() {
        let cursor = Cursor::new("hello");
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.column(), 1);
        assert!(!cursor.is_at_end());
    }

    #[test]
    fn test_cursor_over_empty_input() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current_char(), '\0');
        assert_eq!(cursor.advance(), '\0');
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_advance_returns_char() {
        let mut cursor = Cursor::new("ab");
        assert_eq!(cursor.advance(), 'a');
        assert_eq!(cursor.advance(), 'b');
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_line_tracking() {
        let mut cursor = Cursor::new("a\nb\n\nc");
        cursor.advance_n(2);
        assert_eq!((cursor.line(), cursor.column()), (2, 1));
        cursor.advance_n(3);
        assert_eq!((cursor.line(), cursor.column()), (4, 1));
        assert_eq!(cursor.current_char(), 'c');
    }

    #[test]
    fn test_carriage_return_is_a_column() {
        let mut cursor = Cursor::new("\r\nx");
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (1, 2));
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (2, 1));
    }

    #[test]
    fn test_utf8_columns_count_chars() {
        let mut cursor = Cursor::new("привет!");
        cursor.advance_n(6);
        assert_eq!(cursor.column(), 7);
        assert_eq!(cursor.position(), 12);
        assert_eq!(cursor.current_char(), '!');
    }

    #[test]
    fn test_peek_past_multibyte() {
        let cursor = Cursor::new("ü=");
        assert_eq!(cursor.peek_char(1), '=');
        assert_eq!(cursor.peek_char(2), '\0');
    }

    #[test]
    fn test_literal_nul_is_not_end() {
        let cursor = Cursor::new("\0x");
        assert_eq!(cursor.current_char(), '\0');
        assert!(!cursor.is_at_end());
    }

    #[test]
    fn test_eat_while() {
        let mut cursor = Cursor::new("abc123");
        assert_eq!(cursor.eat_while(|c| c.is_ascii_alphabetic()), 3);
        assert_eq!(cursor.slice_from(0), "abc");
        assert_eq!(cursor.remaining(), "123");
    }

    #[test]
    fn test_snapshot_restore_line_and_column() {
        let mut cursor = Cursor::new("x\n[==\ny");
        cursor.advance_n(2);
        let saved = cursor.snapshot();
        cursor.advance_n(5);
        assert_eq!(cursor.line(), 3);
        cursor.restore(saved);
        assert_eq!(cursor.snapshot(), saved);
        assert_eq!((cursor.line(), cursor.column()), (2, 1));
        assert_eq!(cursor.remaining(), "[==\ny");
    }
}
