//! Identifier and keyword lexing.

use crate::chars::is_ident_continue;
use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier, keyword, or label.
    ///
    /// A name directly followed by `::` becomes a `Label` whose lexeme is the
    /// name alone; this applies to reserved words too (`end::`).
    ///
    /// # Returns
    ///
    /// A keyword kind, `TokenKind::Identifier`, or `TokenKind::Label`
    pub fn lex_identifier(&mut self) -> Token {
        self.cursor.eat_while(is_ident_continue);
        let name = self.cursor.slice_from(self.token_start.position);

        if self.cursor.current_char() == ':' && self.cursor.peek_char(1) == ':' {
            self.cursor.advance_n(2);
            return self.make_token(TokenKind::Label, name);
        }

        let kind = keyword_from_ident(name).unwrap_or(TokenKind::Identifier);
        self.make_token(kind, name)
    }
}
