//! Edge case tests for lulex-lex

use lulex_util::{DiagnosticCode, Handler};

use crate::lexer::test_util::{kinds, lex_all, lex_with_diagnostics};
use crate::{Lexer, TokenKind};

// ==================== WHOLE PROGRAMS ====================

#[test]
fn test_edge_small_program() {
    let source = r#"
local function greet(name)
  -- say hello
  return "Hello, " .. name .. "!"
end

print(greet("Lua"))
"#;
    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Local,
            TokenKind::Function,
            TokenKind::Identifier,
            TokenKind::LParen,
            TokenKind::Identifier,
            TokenKind::RParen,
            TokenKind::Return,
            TokenKind::String,
            TokenKind::Concat,
            TokenKind::Identifier,
            TokenKind::Concat,
            TokenKind::String,
            TokenKind::End,
            TokenKind::Identifier,
            TokenKind::LParen,
            TokenKind::Identifier,
            TokenKind::LParen,
            TokenKind::String,
            TokenKind::RParen,
            TokenKind::RParen,
        ]
    );
}

#[test]
fn test_edge_goto_loop() {
    let tokens = lex_all("::continue:: i = i + 1 if i < 10 then goto continue end");
    assert_eq!(tokens[0].kind, TokenKind::Label);
    assert_eq!(tokens[0].lexeme, "::");
    assert_eq!(tokens[1].kind, TokenKind::Label);
    assert_eq!(tokens[1].lexeme, "continue");
    assert!(tokens.iter().any(|t| t.kind == TokenKind::Goto));
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::End));
}

#[test]
fn test_edge_varargs_and_methods() {
    assert_eq!(
        kinds("function t:m(...) return select('#', ...) end"),
        vec![
            TokenKind::Function,
            TokenKind::Identifier,
            TokenKind::Colon,
            TokenKind::Identifier,
            TokenKind::LParen,
            TokenKind::Dots,
            TokenKind::RParen,
            TokenKind::Return,
            TokenKind::Identifier,
            TokenKind::LParen,
            TokenKind::String,
            TokenKind::Comma,
            TokenKind::Dots,
            TokenKind::RParen,
            TokenKind::End,
        ]
    );
}

#[test]
fn test_edge_table_constructor_with_long_string_key() {
    let tokens = lex_all("t = { [ [[k]] ] = 1, [2] = [=[v]=] }");
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::LBrace,
            TokenKind::LBracket,
            TokenKind::LongString,
            TokenKind::RBracket,
            TokenKind::Assign,
            TokenKind::Number,
            TokenKind::Comma,
            TokenKind::LBracket,
            TokenKind::Number,
            TokenKind::RBracket,
            TokenKind::Assign,
            TokenKind::LongString,
            TokenKind::RBrace,
        ]
    );
    assert_eq!(tokens[4].lexeme, "k");
    assert_eq!(tokens[13].lexeme, "v");
}

// ==================== BOUNDARIES ====================

#[test]
fn test_edge_only_trivia() {
    assert!(lex_all("").is_empty());
    assert!(lex_all("  \n\t  \r\n").is_empty());
    assert!(lex_all("-- a\n--[[ b ]]\n--[==[\n c ]==]").is_empty());
}

#[test]
fn test_edge_long_identifier() {
    let name = "a".repeat(10_000);
    let tokens = lex_all(&format!("local {} = 1", name));
    assert_eq!(tokens[1].lexeme, name);
}

#[test]
fn test_edge_deep_long_bracket_level() {
    let eq = "=".repeat(64);
    let source = format!("[{eq}[ ]] ]=] ]{eq}]");
    let tokens = lex_all(&source);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].lexeme, " ]] ]=] ");
}

#[test]
fn test_edge_token_at_end_without_newline() {
    let tokens = lex_all("x =");
    assert_eq!(tokens[1].kind, TokenKind::Assign);
}

#[test]
fn test_edge_comment_right_after_token() {
    assert_eq!(
        kinds("x--comment\ny"),
        vec![TokenKind::Identifier, TokenKind::Identifier]
    );
    assert_eq!(
        kinds("1--[[c]]+2"),
        vec![TokenKind::Number, TokenKind::Plus, TokenKind::Number]
    );
}

#[test]
fn test_edge_crlf_line_endings() {
    let tokens = lex_all("a\r\nb\r\n  c");
    let positions: Vec<_> = tokens.iter().map(|t| (t.line(), t.column())).collect();
    assert_eq!(positions, vec![(1, 1), (2, 1), (3, 3)]);
}

#[test]
fn test_edge_position_after_multiline_string() {
    let tokens = lex_all("[[a\nb\nc]] x 'd\ne' y");
    assert_eq!((tokens[1].line(), tokens[1].column()), (3, 5));
    assert_eq!((tokens[3].line(), tokens[3].column()), (4, 4));
}

// ==================== DIAGNOSTICS ====================

#[test]
fn test_edge_diagnostics_in_source_order() {
    let (_, diagnostics) = lex_with_diagnostics("@ 'open\n$ [[never");
    let codes: Vec<_> = diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(
        codes,
        vec![
            Some(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR),
            Some(DiagnosticCode::E_LEXER_UNTERMINATED_STRING),
        ]
    );
}

#[test]
fn test_edge_clean_source_has_no_diagnostics() {
    let handler = Handler::new();
    let count = Lexer::new("local t = {1, 2; x = 'y'} -- ok", &handler).count();
    assert_eq!(count, 12);
    assert!(!handler.has_errors());
}

#[test]
fn test_edge_every_unterminated_form() {
    for (source, code) in [
        ("'x", DiagnosticCode::E_LEXER_UNTERMINATED_STRING),
        ("\"x", DiagnosticCode::E_LEXER_UNTERMINATED_STRING),
        ("[[x", DiagnosticCode::E_LEXER_UNTERMINATED_LONG_STRING),
        ("[==[x]=]", DiagnosticCode::E_LEXER_UNTERMINATED_LONG_STRING),
        ("--[[x", DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT),
    ] {
        let handler = Handler::new();
        let tokens = Lexer::new(source, &handler).tokenize();
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof), "{source}");
        assert_eq!(handler.count_code(code), 1, "{source}");
        assert_eq!(handler.error_count(), 1, "{source}");
    }
}

// ==================== DOCUMENTED EXAMPLES ====================

#[test]
fn test_edge_documented_examples() {
    assert_eq!(kinds("local"), vec![TokenKind::Local]);

    let tokens = lex_all("localx");
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme, "localx");

    let tokens = lex_all("::foo::");
    assert!(tokens
        .iter()
        .any(|t| t.kind == TokenKind::Label && t.lexeme == "foo"));

    assert_eq!(lex_all(r#""a\nb""#)[0].lexeme, "a\nb");

    let tokens = lex_all("[==[ text ]=] still ]==]");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].lexeme, " text ]=] still ");

    assert_eq!(kinds("0x1p4"), vec![TokenKind::Number]);

    let tokens = lex_all("@");
    assert_eq!(tokens[0].kind, TokenKind::Unknown);
    assert_eq!(tokens[0].lexeme, "@");
}
