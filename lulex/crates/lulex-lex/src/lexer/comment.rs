//! Comment lexing.
//!
//! This module handles skipping whitespace, line comments and block comments,
//! plus the byte-order mark that may open a file.

use lulex_util::DiagnosticCode;

use crate::chars::is_whitespace;
use crate::lexer::bracket::long_bracket_close;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace and comments.
    ///
    /// Called before lexing each token. Repeats until the cursor sits on a
    /// character that is neither whitespace nor the start of a comment.
    pub fn skip_whitespace_and_comments(&mut self) {
        if !self.bom_checked {
            self.bom_checked = true;
            self.skip_byte_order_mark();
        }

        loop {
            self.cursor.eat_while(is_whitespace);

            if self.cursor.current_char() == '-' && self.cursor.peek_char(1) == '-' {
                self.skip_comment();
            } else {
                return;
            }
        }
    }

    /// Skips a UTF-8 byte-order mark at the start of the buffer.
    fn skip_byte_order_mark(&mut self) {
        if self.cursor.remaining().starts_with('\u{FEFF}') {
            // The mark occupies no column.
            let mut state = self.cursor.snapshot();
            state.position += '\u{FEFF}'.len_utf8();
            self.cursor.restore(state);
        }
    }

    /// Skips a comment starting at `--`.
    ///
    /// `--` followed by a long-bracket opener is a block comment; anything
    /// else, including `--[` or `--[==` without the second `[`, runs to the
    /// end of the line.
    fn skip_comment(&mut self) {
        let start = self.cursor.snapshot();
        self.cursor.advance_n(2);

        if self.cursor.current_char() == '[' {
            if let Some(level) = self.long_bracket_level() {
                let body = self.long_bracket_body(level);
                if !body.terminated {
                    self.report_error(
                        self.span_from(start),
                        DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT,
                        "unterminated block comment".to_string(),
                        Some(format!("add the closing `{}`", long_bracket_close(level))),
                    );
                }
                return;
            }
        }

        self.skip_to_line_end();
    }

    /// Consumes everything up to, but not including, the next newline.
    fn skip_to_line_end(&mut self) {
        self.cursor.eat_while(|c| c != '\n');
    }
}
