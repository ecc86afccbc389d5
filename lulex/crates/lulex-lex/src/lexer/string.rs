//! String literal lexing.
//!
//! This module handles quoted strings (`'...'`, `"..."`) and long-bracket
//! strings (`[[...]]`, `[==[...]==]`), plus the `[` that turns out not to
//! open one.

use lulex_util::DiagnosticCode;

use crate::chars::simple_escape;
use crate::lexer::bracket::long_bracket_close;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a quoted string literal.
    ///
    /// The string runs to the matching quote or to end of input; newlines are
    /// kept as they are. `\n`, `\t`, `\r`, `\"`, `\'` and `\\` are decoded,
    /// any other escape is kept as backslash plus character.
    ///
    /// # Returns
    ///
    /// `TokenKind::String` with the decoded content
    pub fn lex_string(&mut self) -> Token {
        let quote = self.cursor.advance();
        let mut content = String::new();

        loop {
            if self.cursor.is_at_end() {
                self.report_error(
                    self.token_span(),
                    DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
                    "unterminated string literal".to_string(),
                    Some(format!("add the closing `{}`", quote)),
                );
                break;
            }

            let c = self.cursor.advance();
            if c == quote {
                break;
            }

            if c != '\\' {
                content.push(c);
                continue;
            }

            if self.cursor.is_at_end() {
                content.push('\\');
                continue;
            }

            let escaped = self.cursor.advance();
            match simple_escape(escaped) {
                Some(decoded) => content.push(decoded),
                None => {
                    content.push('\\');
                    content.push(escaped);
                },
            }
        }

        self.make_token(TokenKind::String, content)
    }

    /// Lexes a long string, or a plain `[` when no long bracket opens here.
    ///
    /// # Returns
    ///
    /// `TokenKind::LongString` with the raw content, or `TokenKind::LBracket`
    pub fn lex_open_bracket(&mut self) -> Token {
        let Some(level) = self.long_bracket_level() else {
            self.cursor.advance();
            return self.make_source_token(TokenKind::LBracket);
        };

        let body = self.long_bracket_body(level);
        if !body.terminated {
            self.report_error(
                self.token_span(),
                DiagnosticCode::E_LEXER_UNTERMINATED_LONG_STRING,
                "unterminated long string".to_string(),
                Some(format!("add the closing `{}`", long_bracket_close(level))),
            );
        }

        self.make_token(TokenKind::LongString, body.content)
    }
}

#[cfg(test)]
mod tests {
    use lulex_util::DiagnosticCode;

    use crate::lexer::test_util::{kinds, lex_all, lex_with_diagnostics};
    use crate::token::TokenKind;

    #[test]
    fn test_double_and_single_quotes() {
        let tokens = lex_all(r#""hello" 'world'"#);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].lexeme, "hello");
        assert_eq!(tokens[1].lexeme, "world");
        assert_eq!(tokens[1].column(), 9);
    }

    #[test]
    fn test_other_quote_inside() {
        let tokens = lex_all(r#""it's" '"q"'"#);
        assert_eq!(tokens[0].lexeme, "it's");
        assert_eq!(tokens[1].lexeme, "\"q\"");
    }

    #[test]
    fn test_empty_string() {
        let tokens = lex_all("''");
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].lexeme, "");
    }

    #[test]
    fn test_escape_newline_is_decoded() {
        let tokens = lex_all(r#""a\nb""#);
        assert_eq!(tokens[0].lexeme, "a\nb");
        assert_eq!(tokens[0].lexeme.len(), 3);
    }

    #[test]
    fn test_simple_escapes() {
        let tokens = lex_all(r#""\t\r\"\'\\""#);
        assert_eq!(tokens[0].lexeme, "\t\r\"'\\");
    }

    #[test]
    fn test_unknown_escapes_pass_through() {
        let tokens = lex_all(r#""\x41\z\065\u{48}""#);
        assert_eq!(tokens[0].lexeme, r"\x41\z\065\u{48}");
    }

    #[test]
    fn test_escaped_quote_does_not_close() {
        let tokens = lex_all(r#"'don\'t' x"#);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].lexeme, "don't");
    }

    #[test]
    fn test_raw_newline_kept() {
        let tokens = lex_all("\"line1\nline2\" x");
        assert_eq!(tokens[0].lexeme, "line1\nline2");
        assert_eq!((tokens[1].line(), tokens[1].column()), (2, 8));
    }

    #[test]
    fn test_unterminated_string() {
        let (tokens, diagnostics) = lex_with_diagnostics("x = 'abc");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2].kind, TokenKind::String);
        assert_eq!(tokens[2].lexeme, "abc");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].code,
            Some(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
        );
        assert_eq!(diagnostics[0].span.column, 5);
        assert_eq!(diagnostics[0].helps, vec!["add the closing `'`"]);
    }

    #[test]
    fn test_backslash_at_end_of_input() {
        let (tokens, diagnostics) = lex_with_diagnostics("'ab\\");
        assert_eq!(tokens[0].lexeme, "ab\\");
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_long_string() {
        let tokens = lex_all("[[hello\nworld]]");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::LongString);
        assert_eq!(tokens[0].lexeme, "hello\nworld");
    }

    #[test]
    fn test_long_string_levels() {
        let tokens = lex_all("[==[ text ]=] still ]==]");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::LongString);
        assert_eq!(tokens[0].lexeme, " text ]=] still ");
    }

    #[test]
    fn test_long_string_is_verbatim() {
        let tokens = lex_all(r"[[\n 'q' -- not a comment]]");
        assert_eq!(tokens[0].lexeme, r"\n 'q' -- not a comment");
    }

    #[test]
    fn test_empty_long_string() {
        let tokens = lex_all("[[]]");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::LongString);
        assert_eq!(tokens[0].lexeme, "");
    }

    #[test]
    fn test_bracket_rollback() {
        assert_eq!(
            kinds("t[=x"),
            vec![
                TokenKind::Identifier,
                TokenKind::LBracket,
                TokenKind::Assign,
                TokenKind::Identifier
            ]
        );
        let tokens = lex_all("a[1]");
        assert_eq!(tokens[1].lexeme, "[");
        assert_eq!(tokens[1].column(), 2);
        assert_eq!(tokens[3].kind, TokenKind::RBracket);
    }

    #[test]
    fn test_unterminated_long_string() {
        let (tokens, diagnostics) = lex_with_diagnostics("[=[ abc ]]");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::LongString);
        assert_eq!(tokens[0].lexeme, " abc ]]");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].code,
            Some(DiagnosticCode::E_LEXER_UNTERMINATED_LONG_STRING)
        );
        assert_eq!(diagnostics[0].helps, vec!["add the closing `]=]`"]);
    }
}
