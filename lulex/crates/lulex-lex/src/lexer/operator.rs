//! Operator and punctuation lexing.
//!
//! This module handles lexing of operators, delimiters, and punctuation.
//! `[` and the dot family are dispatched elsewhere because they may start
//! long strings and numbers.

use lulex_util::DiagnosticCode;

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an operator or punctuation token by maximal munch.
    ///
    /// Any character that starts no token becomes a one-character
    /// `TokenKind::Unknown` and is reported as unexpected.
    pub fn lex_operator(&mut self) -> Token {
        let c = self.cursor.advance();

        let kind = match c {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Mul,
            '%' => TokenKind::Mod,
            '^' => TokenKind::Pow,
            '#' => TokenKind::Len,
            '&' => TokenKind::BitAnd,
            '|' => TokenKind::BitOr,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            ']' => TokenKind::RBracket,
            ';' => TokenKind::Semi,
            ',' => TokenKind::Comma,
            '/' => self.either('/', TokenKind::IDiv, TokenKind::Div),
            '~' => self.either('=', TokenKind::Neq, TokenKind::BitNot),
            '=' => self.either('=', TokenKind::Eq, TokenKind::Assign),
            ':' => self.either(':', TokenKind::Label, TokenKind::Colon),
            '<' => self.lex_angle('<', TokenKind::BitShl, TokenKind::Lte, TokenKind::Lt),
            '>' => self.lex_angle('>', TokenKind::BitShr, TokenKind::Gte, TokenKind::Gt),
            _ => {
                self.report_error(
                    self.token_span(),
                    DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
                    format!("unexpected character '{}'", c.escape_debug()),
                    None,
                );
                TokenKind::Unknown
            },
        };

        self.make_source_token(kind)
    }

    /// Returns `matched` and consumes `next` if it follows, else `single`.
    fn either(&mut self, next: char, matched: TokenKind, single: TokenKind) -> TokenKind {
        if self.cursor.match_char(next) {
            matched
        } else {
            single
        }
    }

    /// Lexes the rest of `<`/`>`: a doubled character shifts, `=` compares.
    ///
    /// Handles: `<<`, `<=`, `<`, `>>`, `>=`, `>`
    fn lex_angle(
        &mut self,
        same: char,
        shift: TokenKind,
        or_equal: TokenKind,
        single: TokenKind,
    ) -> TokenKind {
        if self.cursor.match_char(same) {
            shift
        } else if self.cursor.match_char('=') {
            or_equal
        } else {
            single
        }
    }
}
