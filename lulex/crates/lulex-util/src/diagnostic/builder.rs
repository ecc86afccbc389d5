//! Chained construction of diagnostics, and the caret snippets `render` prints.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::span::Span;

/// One source line with a highlighted column range.
///
/// # Examples
///
/// ```
/// use lulex_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("local s = 'abc", 1, 11, 15);
/// assert!(snippet.format().ends_with("|           ^^^^"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// Text of the line, without its terminator
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// First highlighted column (1-based)
    pub start_column: usize,
    /// Column after the last highlighted one
    pub end_column: usize,
}

impl SourceSnippet {
    /// Snippet over `start_column..end_column`.
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
        }
    }

    /// Renders the numbered line followed by a caret line.
    ///
    /// The gutter is at least three columns wide; an empty range still gets
    /// one caret.
    ///
    /// ```
    /// use lulex_util::diagnostic::SourceSnippet;
    ///
    /// let snippet = SourceSnippet::new("x = @", 12, 5, 5);
    /// assert_eq!(snippet.format(), " 12 | x = @\n    |     ^");
    /// ```
    pub fn format(&self) -> String {
        let width = self.line_number.to_string().len().max(3);
        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);

        let mut result = format!("{:>width$} | {}\n", self.line_number, self.line);
        result.push_str(&format!("{:>width$} | ", ""));
        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));
        result
    }
}

/// Accumulates the parts of a [`Diagnostic`] before it is emitted.
///
/// # Examples
///
/// ```
/// use lulex_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
/// use lulex_util::span::Span;
///
/// let diag = DiagnosticBuilder::new(Level::Error, "unterminated string")
///     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
///     .span(Span::new(4, 9, 1, 5))
///     .help("add the closing `'`")
///     .build();
///
/// assert_eq!(diag.helps.len(), 1);
/// ```
#[must_use = "a diagnostic builder does nothing until built or emitted"]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Starts a diagnostic with no span, code or attachments.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            helps: Vec::new(),
        }
    }

    /// Shorthand for `new(Level::Error, ..)`.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Attaches a stable code.
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Sets where the diagnostic points.
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Appends a `= help:` line.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Finishes the diagnostic without emitting it.
    pub fn build(self) -> Diagnostic {
        let mut diagnostic = Diagnostic::new(self.level, self.message, self.span);
        if let Some(code) = self.code {
            diagnostic = diagnostic.with_code(code);
        }
        diagnostic.helps = self.helps;
        diagnostic
    }

    /// Builds the diagnostic and hands it to `handler`.
    ///
    /// ```
    /// use lulex_util::diagnostic::{DiagnosticBuilder, Handler};
    ///
    /// let handler = Handler::new();
    /// DiagnosticBuilder::error("unexpected character '$'").emit(&handler);
    ///
    /// assert!(handler.has_errors());
    /// ```
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_fields() {
        let snippet = SourceSnippet::new("local x = 42", 1, 7, 8);
        assert_eq!(snippet.line, "local x = 42");
        assert_eq!(snippet.line_number, 1);
        assert_eq!(snippet.start_column, 7);
        assert_eq!(snippet.end_column, 8);
    }

    #[test]
    fn test_snippet_render_range() {
        let snippet = SourceSnippet::new("s = [[abc", 3, 5, 10);
        assert_eq!(snippet.format(), "  3 | s = [[abc\n    |     ^^^^^");
    }

    #[test]
    fn test_snippet_render_wide_gutter() {
        let snippet = SourceSnippet::new("@", 1234, 1, 2);
        assert_eq!(snippet.format(), "1234 | @\n     | ^");
    }

    #[test]
    fn test_snippet_render_empty_range_has_one_caret() {
        let snippet = SourceSnippet::new("abc", 1, 3, 3);
        assert!(snippet.format().ends_with("|   ^"));
    }

    #[test]
    fn test_snippet_render_inverted_columns() {
        let snippet = SourceSnippet::new("abc", 1, 3, 1);
        assert!(snippet.format().ends_with("  ^"));
    }

    #[test]
    fn test_error_builder_defaults() {
        let diag = DiagnosticBuilder::error("unterminated long string").build();
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.message, "unterminated long string");
        assert_eq!(diag.code, None);
        assert_eq!(diag.span, Span::DUMMY);
        assert!(diag.helps.is_empty());
    }

    #[test]
    fn test_builder_collects_attachments() {
        let diag = DiagnosticBuilder::error("unterminated block comment")
            .code(DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT)
            .span(Span::new(4, 9, 1, 5))
            .help("add the closing `]]`")
            .build();

        assert_eq!(diag.code, Some(DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT));
        assert_eq!(diag.span.column, 5);
        assert_eq!(diag.helps, vec!["add the closing `]]`"]);
    }

    #[test]
    fn test_emit_reaches_handler() {
        let handler = Handler::new();
        DiagnosticBuilder::error("unterminated comment")
            .code(DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT)
            .emit(&handler);

        let emitted = handler.take();
        assert_eq!(emitted.len(), 1);
        assert_eq!(
            emitted[0].code,
            Some(DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT)
        );
    }
}
