//! lulex-util - Core Utilities and Foundation Types
//!
//! Shared infrastructure for the lulex crates:
//!
//! - [`span`] - source locations ([`Span`]) and loaded source text ([`SourceFile`])
//! - [`diagnostic`] - lexical diagnostics, their codes, and the [`Handler`] that
//!   collects them
//! - [`error`] - error types for fallible source lookups
//!
//! The scanner never fails: every irregularity it meets is turned into a token
//! plus a [`Diagnostic`] emitted into a [`Handler`]. Callers decide afterwards
//! whether any of those diagnostics should be treated as fatal.
//!
//! ```
//! use lulex_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '@'")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(0, 1, 1, 1))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{
    Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet,
};
pub use error::{SourceError, SourceResult};
pub use span::{SourceFile, Span};
