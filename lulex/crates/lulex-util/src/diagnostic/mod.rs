//! Diagnostics reported while scanning Lua source.
//!
//! The scanner never fails; it records what it could not make sense of in a
//! [`Handler`] and keeps going.
//!
//! # Examples
//!
//! ```
//! use lulex_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use lulex_util::span::Span;
//!
//! let handler = Handler::new();
//! handler
//!     .build_error(Span::new(0, 3, 1, 1), "unterminated string")
//!     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
//!     .help("add the closing `\"`")
//!     .emit(&handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::span::{SourceFile, Span};
use std::cell::RefCell;
use std::fmt;

/// Severity of a diagnostic.
///
/// ```
/// use lulex_util::diagnostic::Level;
///
/// assert_eq!(Level::Error.to_string(), "error");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    /// Malformed input
    Error,
}

impl Level {
    /// Name used in rendered headers
    pub const fn as_str(&self) -> &'static str {
        match self {
            Level::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message tied to a source location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity
    pub level: Level,
    /// Header text
    pub message: String,
    /// Offending source range
    pub span: Span,
    /// Stable code, e.g. `E1002`
    pub code: Option<DiagnosticCode>,
    /// `= help:` lines
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// A diagnostic with no code or attachments.
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            helps: Vec::new(),
        }
    }

    /// An error at `span`.
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Attaches `code`.
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Renders the diagnostic against the file it was reported in.
    ///
    /// Like the `Display` form, but the location names the file and a caret
    /// snippet of the span is shown when the span lies inside `source`.
    ///
    /// ```
    /// use lulex_util::diagnostic::Diagnostic;
    /// use lulex_util::span::{SourceFile, Span};
    ///
    /// let file = SourceFile::new("init.lua", "x = @");
    /// let diag = Diagnostic::error("unexpected character '@'", Span::new(4, 5, 1, 5));
    /// assert_eq!(
    ///     diag.render(&file),
    ///     "error: unexpected character '@'\n  --> init.lua:1:5\n  1 | x = @\n    |     ^"
    /// );
    /// ```
    pub fn render(&self, source: &SourceFile) -> String {
        let mut rendered = self.header();
        rendered.push_str(&format!(
            "\n  --> {}:{}:{}",
            source.name(),
            self.span.line,
            self.span.column
        ));
        if let Ok(snippet) = source.snippet(self.span) {
            rendered.push('\n');
            rendered.push_str(&snippet.format());
        }
        for help in &self.helps {
            rendered.push_str(&format!("\n  = help: {}", help));
        }
        rendered
    }

    fn header(&self) -> String {
        match self.code {
            Some(code) => format!("{}[{}]: {}", self.level, code, self.message),
            None => format!("{}: {}", self.level, self.message),
        }
    }
}

/// Renders the header line, the position and any help lines:
///
/// ```text
/// error[E1002]: unterminated string literal
///   --> 3:7
///   = help: add the closing `"`
/// ```
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.header())?;
        if self.span != Span::DUMMY {
            write!(f, "\n  --> {}:{}", self.span.line, self.span.column)?;
        }
        for help in &self.helps {
            write!(f, "\n  = help: {}", help)?;
        }
        Ok(())
    }
}

/// Collects diagnostics in the order they are reported.
///
/// Reporting goes through `&self`, so a lexer can borrow the handler while
/// its owner inspects it between tokens.
///
/// # Examples
///
/// ```
/// use lulex_util::diagnostic::{Diagnostic, Handler};
/// use lulex_util::span::Span;
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::error("unexpected character '$'", Span::DUMMY));
///
/// assert!(handler.has_errors());
/// assert_eq!(handler.error_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// An empty handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `diagnostic`.
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Starts an error at `span`; finish it with [`DiagnosticBuilder::emit`].
    pub fn build_error(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).span(span)
    }

    /// Whether any error-level diagnostic was recorded
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Number of error-level diagnostics
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Number of diagnostics carrying `code`
    ///
    /// ```
    /// use lulex_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
    ///
    /// let handler = Handler::new();
    /// DiagnosticBuilder::error("unexpected character '@'")
    ///     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
    ///     .emit(&handler);
    ///
    /// assert_eq!(handler.count_code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR), 1);
    /// assert_eq!(handler.count_code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING), 0);
    /// ```
    pub fn count_code(&self, code: DiagnosticCode) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.code == Some(code))
            .count()
    }

    /// Copy of everything recorded so far
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Moves the recorded diagnostics out, leaving the handler empty
    pub fn take(&self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }

    /// Drops everything recorded so far
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}
