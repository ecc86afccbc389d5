//! lulex-lex - Lexical Analyzer for Lua
//!
//! This crate turns Lua source text into a stream of tokens for a parser,
//! formatter or static analyser to consume. It does no I/O: callers hand it a
//! `&str` and a [`Handler`](lulex_util::Handler) that collects diagnostics.
//!
//! # Example Usage
//!
//! ```
//! use lulex_lex::{Lexer, TokenKind};
//! use lulex_util::Handler;
//!
//! let handler = Handler::new();
//! let mut lexer = Lexer::new("::top:: x = x .. [[!]]", &handler);
//!
//! assert_eq!(lexer.next_token().kind, TokenKind::Label);
//! let label = lexer.next_token();
//! assert_eq!((label.kind, label.lexeme.as_str()), (TokenKind::Label, "top"));
//!
//! // The rest of the stream, without the final Eof
//! let rest: Vec<_> = lexer.map(|t| t.kind).collect();
//! assert_eq!(rest.last(), Some(&TokenKind::LongString));
//! assert!(!handler.has_errors());
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token kind definitions, keyword table
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor with snapshot/restore
//! - [`chars`] - Character classes
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `and break do else elseif end false for function goto if in local nil not
//! or repeat return then true until while`
//!
//! ## Names and literals
//!
//! - **Identifier**: `[A-Za-z_][A-Za-z0-9_]*` that is not a keyword
//! - **Number**: `42`, `3.14`, `.5`, `1e-3`, `0xFF`, `0x1p4` (kept as source text)
//! - **String**: `"a\nb"`, `'x'` (escapes `\n \t \r \" \' \\` decoded)
//! - **LongString**: `[[...]]`, `[==[...]==]` (raw content)
//! - **Label**: `name::` (lexeme `name`) or a bare `::`
//!
//! ## Operators
//!
//! `+ - * / // % ^ # & | ~ << >> == ~= <= >= < > =`
//!
//! ## Punctuation
//!
//! `( ) { } [ ] ; : , .. ... .`
//!
//! ## Special
//!
//! - **Eof**: End of input, returned again on every later call
//! - **Unknown**: Any other character, one per token, reported as `E1001`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use lulex_util::Handler;

pub mod chars;
pub mod cursor;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;
#[cfg(test)]
mod properties;

// Re-export main types for convenience
pub use cursor::{Cursor, CursorSnapshot};
pub use lexer::Lexer;
pub use token::{keyword_from_ident, Token, TokenKind};

/// Lexes a whole buffer, returning every token including the final `Eof`.
///
/// # Example
///
/// ```
/// use lulex_util::Handler;
///
/// let handler = Handler::new();
/// let tokens = lulex_lex::tokenize("return 1", &handler);
/// assert_eq!(tokens.len(), 3);
/// ```
pub fn tokenize(source: &str, handler: &Handler) -> Vec<Token> {
    Lexer::new(source, handler).tokenize()
}
