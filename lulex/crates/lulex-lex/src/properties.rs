//! Property-based tests for the lexer, using proptest for arbitrary inputs.

use lulex_util::Handler;
use proptest::prelude::*;

use crate::lexer::test_util::lex_all;
use crate::{Lexer, TokenKind};

/// Fixed-text operator and punctuation kinds, except `[` which may open a long string.
fn fixed_kinds() -> Vec<TokenKind> {
    TokenKind::ALL
        .iter()
        .copied()
        .filter(|k| k.symbol().is_some() && *k != TokenKind::LBracket)
        .collect()
}

proptest! {
    #[test]
    fn prop_any_input_terminates_with_eof(input in any::<String>()) {
        let handler = Handler::new();
        let tokens = Lexer::new(&input, &handler).tokenize();
        prop_assert!(tokens.len() <= input.chars().count() + 1);
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        prop_assert_eq!(
            tokens.iter().filter(|t| t.is_eof()).count(),
            1
        );
    }

    #[test]
    fn prop_positions_strictly_increase(input in "[ -~\n\t]{0,200}") {
        let tokens = lex_all(&input);
        for pair in tokens.windows(2) {
            prop_assert!(pair[1].span.starts_after(pair[0].span));
            prop_assert!(pair[1].span.start >= pair[0].span.end);
        }
    }

    #[test]
    fn prop_eof_is_idempotent(input in "[ -~\n]{0,80}", extra in 1usize..5) {
        let handler = Handler::new();
        let mut lexer = Lexer::new(&input, &handler);
        let eof = loop {
            let token = lexer.next_token();
            if token.is_eof() {
                break token;
            }
        };
        for _ in 0..extra {
            prop_assert_eq!(&lexer.next_token(), &eof);
        }
    }

    #[test]
    fn prop_identifier_round_trip(input in "[a-zA-Z_][a-zA-Z0-9_]{0,40}") {
        let tokens = lex_all(&input);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(&tokens[0].lexeme, &input);
        let expected = crate::keyword_from_ident(&input).unwrap_or(TokenKind::Identifier);
        prop_assert_eq!(tokens[0].kind, expected);
    }

    #[test]
    fn prop_operator_round_trip(index in 0usize..31) {
        let kinds = fixed_kinds();
        let kind = kinds[index % kinds.len()];
        let text = kind.symbol().unwrap_or_default();
        let tokens = lex_all(text);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, kind);
        prop_assert_eq!(tokens[0].lexeme.as_str(), text);
    }

    #[test]
    fn prop_decimal_numbers_are_single_tokens(input in "[0-9]{1,12}(\\.[0-9]{0,6})?([eE][+-]?[0-9]{1,3})?") {
        let tokens = lex_all(&input);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Number);
        prop_assert_eq!(&tokens[0].lexeme, &input);
    }

    #[test]
    fn prop_hex_numbers_are_single_tokens(digits in "[0-9a-fA-F]{1,16}", exp in "([pP][+-]?[0-9]{1,3})?") {
        let input = format!("0x{digits}{exp}");
        let tokens = lex_all(&input);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(&tokens[0].lexeme, &input);
    }

    #[test]
    fn prop_plain_strings_keep_content(body in "[^\"\\\\]{0,60}") {
        let source = format!("\"{body}\"");
        let handler = Handler::new();
        let tokens: Vec<_> = Lexer::new(&source, &handler).collect();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::String);
        prop_assert_eq!(&tokens[0].lexeme, &body);
        prop_assert!(!handler.has_errors());
    }

    #[test]
    fn prop_long_strings_are_verbatim(body in "[^\\]]{0,60}", level in 0usize..4) {
        let eq = "=".repeat(level);
        let source = format!("[{eq}[{body}]{eq}]");
        let tokens = lex_all(&source);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::LongString);
        prop_assert_eq!(&tokens[0].lexeme, &body);
    }
}

#[test]
fn test_fixed_kinds_cover_operators_and_punctuation() {
    assert_eq!(fixed_kinds().len(), 31);
}
