//! Diagnostic codes for categorizing lexical errors.
//!
//! Every diagnostic the scanner emits carries one of the codes defined here,
//! so tools can filter or count them without matching on message text.
//!
//! # Examples
//!
//! ```
//! use lulex_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_UNTERMINATED_STRING;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1002);
//! assert_eq!(code.as_str(), "E1002");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where:
/// - `prefix` is "E" for errors
/// - `number` is a 4-digit number (padded with zeros)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    ///
    /// ```
    /// use lulex_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("E", 1001);
    /// assert_eq!(code, DiagnosticCode::E_LEXER_UNEXPECTED_CHAR);
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    /// Short kebab-case name, used in JSON output and config keys
    ///
    /// ```
    /// use lulex_util::diagnostic::DiagnosticCode;
    ///
    /// assert_eq!(
    ///     DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT.name(),
    ///     "unterminated-comment"
    /// );
    /// ```
    pub const fn name(&self) -> &'static str {
        match self.number {
            1001 => "unexpected-char",
            1002 => "unterminated-string",
            1003 => "unterminated-long-string",
            1004 => "unterminated-comment",
            _ => "unknown",
        }
    }

    // =========================================================================
    // LEXER ERROR CODES (E1001-E1004)
    // =========================================================================

    /// E1001: Character that starts no token
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
    /// E1002: Quoted string reaches end of input without its closing quote
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self::new("E", 1002);
    /// E1003: Long-bracket string reaches end of input without its closing bracket
    pub const E_LEXER_UNTERMINATED_LONG_STRING: Self = Self::new("E", 1003);
    /// E1004: Block comment reaches end of input without its closing bracket
    pub const E_LEXER_UNTERMINATED_COMMENT: Self = Self::new("E", 1004);

    /// All codes the lexer can emit, in numeric order
    pub const ALL: [Self; 4] = [
        Self::E_LEXER_UNEXPECTED_CHAR,
        Self::E_LEXER_UNTERMINATED_STRING,
        Self::E_LEXER_UNTERMINATED_LONG_STRING,
        Self::E_LEXER_UNTERMINATED_COMMENT,
    ];
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}
