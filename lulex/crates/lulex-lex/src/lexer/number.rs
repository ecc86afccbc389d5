//! Number literal lexing.
//!
//! Numbers are kept as source text; nothing is converted or range-checked
//! here. Malformed numerals such as `0x` or `1e` are still single tokens.

use crate::chars::is_digit_in_base;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal starting at a decimal digit.
    ///
    /// # Number Formats
    ///
    /// - Decimal: `42`, `3.14`, `1e10`, `2.5E-3`, `5.`
    /// - Hexadecimal: `0xFF`, `0x1.8`, `0x1p4`, `0XA.Bp-2`
    ///
    /// # Returns
    ///
    /// `TokenKind::Number` with the raw source text
    pub fn lex_number(&mut self) -> Token {
        if self.cursor.current_char() == '0' && matches!(self.cursor.peek_char(1), 'x' | 'X') {
            self.cursor.advance_n(2);
            self.lex_numeral_tail(16, 'p');
        } else {
            self.lex_numeral_tail(10, 'e');
        }

        self.make_source_token(TokenKind::Number)
    }

    /// Lexes `.`, `..`, `...`, or a number written with a leading dot.
    ///
    /// # Returns
    ///
    /// `TokenKind::Dots`, `TokenKind::Concat`, `TokenKind::Number` or `TokenKind::Dot`
    pub fn lex_dot(&mut self) -> Token {
        self.cursor.advance();

        let kind = if self.cursor.match_char('.') {
            if self.cursor.match_char('.') {
                TokenKind::Dots
            } else {
                TokenKind::Concat
            }
        } else if self.cursor.current_char().is_ascii_digit() {
            self.lex_numeral_tail(10, 'e');
            TokenKind::Number
        } else {
            TokenKind::Dot
        };

        self.make_source_token(kind)
    }

    /// Consumes digits, an optional fraction and an optional exponent.
    ///
    /// Mantissa digits are in `base`; the exponent (introduced by `exponent`
    /// in either case) always has an optional sign and decimal digits.
    fn lex_numeral_tail(&mut self, base: u32, exponent: char) {
        self.cursor.eat_while(|c| is_digit_in_base(c, base));

        if self.cursor.match_char('.') {
            self.cursor.eat_while(|c| is_digit_in_base(c, base));
        }

        if self.cursor.current_char().to_ascii_lowercase() == exponent {
            self.cursor.advance();
            if matches!(self.cursor.current_char(), '+' | '-') {
                self.cursor.advance();
            }
            self.cursor.eat_while(|c| c.is_ascii_digit());
        }
    }
}
