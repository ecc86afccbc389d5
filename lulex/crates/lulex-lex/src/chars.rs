//! Character classes used by the Lua lexer.
//!
//! Lua names and numbers are ASCII-only; any other character outside a string
//! or comment becomes an unknown token.

/// Checks if a character is Lua whitespace.
///
/// Matches the C `isspace` set: space, tab, newline, carriage return,
/// vertical tab and form feed.
///
/// # Example
///
/// ```
/// use lulex_lex::chars::is_whitespace;
///
/// assert!(is_whitespace('\x0B'));
/// assert!(is_whitespace('\x0C'));
/// assert!(!is_whitespace('\u{00A0}'));
/// ```
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// Checks if a character can start a name: an ASCII letter or underscore.
///
/// # Example
///
/// ```
/// use lulex_lex::chars::is_ident_start;
///
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('Z'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('α'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character can continue a name: an ASCII letter, digit or underscore.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a character is a digit in the given base (10 or 16).
///
/// # Example
///
/// ```
/// use lulex_lex::chars::is_digit_in_base;
///
/// assert!(is_digit_in_base('f', 16));
/// assert!(!is_digit_in_base('f', 10));
/// ```
#[inline]
pub fn is_digit_in_base(c: char, base: u32) -> bool {
    c.is_digit(base)
}

/// Decodes the character following a backslash in a quoted string.
///
/// Returns `None` for escapes that are passed through unchanged.
#[inline]
pub fn simple_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '"' | '\'' | '\\' => Some(c),
        _ => None,
    }
}
