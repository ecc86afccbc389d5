//! Long-bracket scanning.
//!
//! Block comments and long strings share the same delimiters: `[` followed by
//! any number of `=` and a second `[`, closed by `]`, the same number of `=`,
//! and `]`. The body is raw text; nothing inside it is interpreted.

use tracing::trace;

use crate::Lexer;

/// The closing delimiter of a long bracket of the given level, e.g. `]==]`.
pub(crate) fn long_bracket_close(level: usize) -> String {
    format!("]{}]", "=".repeat(level))
}

/// The body of a long bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LongBracket<'a> {
    /// Text between the opening and closing delimiters.
    pub content: &'a str,
    /// False when end of input came before the closing delimiter.
    pub terminated: bool,
}

impl<'a> Lexer<'a> {
    /// Consumes a long-bracket opener at the cursor and returns its level
    /// (the number of `=`).
    ///
    /// If the `=` run is not followed by a second `[`, the cursor is restored
    /// to the first `[` and `None` is returned.
    pub(crate) fn long_bracket_level(&mut self) -> Option<usize> {
        let start = self.cursor.snapshot();
        self.cursor.advance();
        let level = self.cursor.eat_while(|c| c == '=');

        if self.cursor.match_char('[') {
            Some(level)
        } else {
            trace!(
                line = start.line,
                column = start.column,
                level,
                "no long bracket opener, rolling back"
            );
            self.cursor.restore(start);
            None
        }
    }

    /// Reads a long-bracket body of the given level, consuming the closing
    /// delimiter if present.
    pub(crate) fn long_bracket_body(&mut self, level: usize) -> LongBracket<'a> {
        let close = long_bracket_close(level);
        let body_start = self.cursor.position();

        loop {
            if self.cursor.is_at_end() {
                return LongBracket {
                    content: self.cursor.slice_from(body_start),
                    terminated: false,
                };
            }
            if self.cursor.remaining().starts_with(&close) {
                let content = self.cursor.slice_from(body_start);
                self.cursor.advance_n(close.len());
                return LongBracket {
                    content,
                    terminated: true,
                };
            }
            self.cursor.advance();
        }
    }
}
