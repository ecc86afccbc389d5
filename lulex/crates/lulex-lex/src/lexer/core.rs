//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the per-token dispatch and the
//! helpers the specialised readers share for building tokens and reporting
//! diagnostics.

use lulex_util::{DiagnosticCode, Handler, Span};
use tracing::debug;

use crate::chars::is_ident_start;
use crate::cursor::{Cursor, CursorSnapshot};
use crate::token::{Token, TokenKind};

/// Lexer for Lua source text.
///
/// The lexer transforms source code text into a stream of tokens. It never
/// fails: malformed input still produces tokens, and each irregularity is
/// reported to the [`Handler`] it was created with.
///
/// # Example
///
/// ```
/// use lulex_lex::{Lexer, TokenKind};
/// use lulex_util::Handler;
///
/// let handler = Handler::new();
/// let mut lexer = Lexer::new("local x = 1", &handler);
///
/// assert_eq!(lexer.next_token().kind, TokenKind::Local);
/// assert_eq!(lexer.next_token().lexeme, "x");
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Collector for lexical diagnostics.
    handler: &'a Handler,

    /// Cursor state at the first character of the current token.
    pub(crate) token_start: CursorSnapshot,

    /// Whether a start-of-buffer BOM has been looked for.
    pub(crate) bom_checked: bool,

    /// Number of tokens produced before end of input.
    tokens_emitted: usize,

    /// Whether end of input has been reported once already.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        let cursor = Cursor::new(source);
        let token_start = cursor.snapshot();
        Self {
            cursor,
            handler,
            token_start,
            bom_checked: false,
            tokens_emitted: 0,
            finished: false,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Skips whitespace and comments, then dispatches on the current
    /// character. At end of input this returns an `Eof` token, and keeps
    /// returning one on every later call.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();
        self.token_start = self.cursor.snapshot();

        if self.cursor.is_at_end() {
            if !self.finished {
                self.finished = true;
                debug!(
                    tokens = self.tokens_emitted,
                    line = self.cursor.line(),
                    "reached end of input"
                );
            }
            return Token::new(TokenKind::Eof, "", self.token_span());
        }

        let token = match self.cursor.current_char() {
            '[' => self.lex_open_bracket(),
            '"' | '\'' => self.lex_string(),
            '.' => self.lex_dot(),
            c if c.is_ascii_digit() => self.lex_number(),
            c if is_ident_start(c) => self.lex_identifier(),
            _ => self.lex_operator(),
        };

        self.tokens_emitted += 1;
        token
    }

    /// Consumes the rest of the input and returns every token, ending with `Eof`.
    ///
    /// # Example
    ///
    /// ```
    /// use lulex_lex::{Lexer, TokenKind};
    /// use lulex_util::Handler;
    ///
    /// let handler = Handler::new();
    /// let kinds: Vec<_> = Lexer::new("a..b", &handler)
    ///     .tokenize()
    ///     .into_iter()
    ///     .map(|t| t.kind)
    ///     .collect();
    ///
    /// assert_eq!(
    ///     kinds,
    ///     [TokenKind::Identifier, TokenKind::Concat, TokenKind::Identifier, TokenKind::Eof]
    /// );
    /// ```
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is_eof();
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    /// Span from `start` up to the current cursor position.
    pub(crate) fn span_from(&self, start: CursorSnapshot) -> Span {
        Span::new(
            start.position,
            self.cursor.position(),
            start.line,
            start.column,
        )
    }

    /// Span of the token being scanned.
    #[inline]
    pub(crate) fn token_span(&self) -> Span {
        self.span_from(self.token_start)
    }

    /// Builds a token of `kind` covering everything consumed since the token start.
    pub(crate) fn make_token(&self, kind: TokenKind, lexeme: impl Into<String>) -> Token {
        Token::new(kind, lexeme, self.token_span())
    }

    /// Builds a token whose lexeme is the source text consumed for it.
    pub(crate) fn make_source_token(&self, kind: TokenKind) -> Token {
        let text = self.cursor.slice_from(self.token_start.position);
        self.make_token(kind, text)
    }

    /// Reports a lexical error covering `span`, with an optional `= help:` line.
    pub(crate) fn report_error(
        &self,
        span: Span,
        code: DiagnosticCode,
        message: String,
        help: Option<String>,
    ) {
        let mut builder = self.handler.build_error(span, message).code(code);
        if let Some(help) = help {
            builder = builder.help(help);
        }
        builder.emit(self.handler);
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}
