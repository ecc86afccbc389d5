//! Token definitions for Lua source.
//!
//! A [`Token`] pairs a [`TokenKind`] with the text it was scanned from and the
//! [`Span`] it covers. The kind set is closed: every character sequence the
//! lexer sees ends up in exactly one of these kinds.

use std::fmt;

use lulex_util::Span;

/// The closed set of token categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    // Keywords
    /// `and`
    And,
    /// `break`
    Break,
    /// `do`
    Do,
    /// `else`
    Else,
    /// `elseif`
    Elseif,
    /// `end`
    End,
    /// `false`
    False,
    /// `for`
    For,
    /// `function`
    Function,
    /// `goto`
    Goto,
    /// `if`
    If,
    /// `in`
    In,
    /// `local`
    Local,
    /// `nil`
    Nil,
    /// `not`
    Not,
    /// `or`
    Or,
    /// `repeat`
    Repeat,
    /// `return`
    Return,
    /// `then`
    Then,
    /// `true`
    True,
    /// `until`
    Until,
    /// `while`
    While,

    // Names and literals
    /// A name that is not a keyword.
    Identifier,
    /// A numeric literal, kept as its source text.
    Number,
    /// A quoted string; the lexeme holds the decoded content.
    String,
    /// A long-bracket string; the lexeme holds the raw content.
    LongString,

    // Operators
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `^`
    Pow,
    /// `#`
    Len,
    /// `&`
    BitAnd,
    /// `|`
    BitOr,
    /// `~`
    BitNot,
    /// `<<`
    BitShl,
    /// `>>`
    BitShr,
    /// `//`
    IDiv,
    /// `==`
    Eq,
    /// `~=`
    Neq,
    /// `<=`
    Lte,
    /// `>=`
    Gte,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `=`
    Assign,

    // Punctuation
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `;`
    Semi,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `..`
    Concat,
    /// `...`
    Dots,
    /// `.`
    Dot,

    // Special
    /// `name::`, or a bare `::`.
    Label,
    /// End of input.
    Eof,
    /// A character that starts no other token.
    Unknown,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 61] = [
        TokenKind::And,
        TokenKind::Break,
        TokenKind::Do,
        TokenKind::Else,
        TokenKind::Elseif,
        TokenKind::End,
        TokenKind::False,
        TokenKind::For,
        TokenKind::Function,
        TokenKind::Goto,
        TokenKind::If,
        TokenKind::In,
        TokenKind::Local,
        TokenKind::Nil,
        TokenKind::Not,
        TokenKind::Or,
        TokenKind::Repeat,
        TokenKind::Return,
        TokenKind::Then,
        TokenKind::True,
        TokenKind::Until,
        TokenKind::While,
        TokenKind::Identifier,
        TokenKind::Number,
        TokenKind::String,
        TokenKind::LongString,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Mul,
        TokenKind::Div,
        TokenKind::Mod,
        TokenKind::Pow,
        TokenKind::Len,
        TokenKind::BitAnd,
        TokenKind::BitOr,
        TokenKind::BitNot,
        TokenKind::BitShl,
        TokenKind::BitShr,
        TokenKind::IDiv,
        TokenKind::Eq,
        TokenKind::Neq,
        TokenKind::Lte,
        TokenKind::Gte,
        TokenKind::Lt,
        TokenKind::Gt,
        TokenKind::Assign,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::LBracket,
        TokenKind::RBracket,
        TokenKind::Semi,
        TokenKind::Colon,
        TokenKind::Comma,
        TokenKind::Concat,
        TokenKind::Dots,
        TokenKind::Dot,
        TokenKind::Label,
        TokenKind::Eof,
        TokenKind::Unknown,
    ];

    /// Upper-case diagnostic name, e.g. `LONG_STRING` or `EOF_TOKEN`.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::And => "AND",
            TokenKind::Break => "BREAK",
            TokenKind::Do => "DO",
            TokenKind::Else => "ELSE",
            TokenKind::Elseif => "ELSEIF",
            TokenKind::End => "END",
            TokenKind::False => "FALSE",
            TokenKind::For => "FOR",
            TokenKind::Function => "FUNCTION",
            TokenKind::Goto => "GOTO",
            TokenKind::If => "IF",
            TokenKind::In => "IN",
            TokenKind::Local => "LOCAL",
            TokenKind::Nil => "NIL",
            TokenKind::Not => "NOT",
            TokenKind::Or => "OR",
            TokenKind::Repeat => "REPEAT",
            TokenKind::Return => "RETURN",
            TokenKind::Then => "THEN",
            TokenKind::True => "TRUE",
            TokenKind::Until => "UNTIL",
            TokenKind::While => "WHILE",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::LongString => "LONG_STRING",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Mul => "MUL",
            TokenKind::Div => "DIV",
            TokenKind::Mod => "MOD",
            TokenKind::Pow => "POW",
            TokenKind::Len => "LEN",
            TokenKind::BitAnd => "BITAND",
            TokenKind::BitOr => "BITOR",
            TokenKind::BitNot => "BITNOT",
            TokenKind::BitShl => "BITSHL",
            TokenKind::BitShr => "BITSHR",
            TokenKind::IDiv => "IDIV",
            TokenKind::Eq => "EQ",
            TokenKind::Neq => "NEQ",
            TokenKind::Lte => "LTE",
            TokenKind::Gte => "GTE",
            TokenKind::Lt => "LT",
            TokenKind::Gt => "GT",
            TokenKind::Assign => "ASSIGN",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::Semi => "SEMI",
            TokenKind::Colon => "COLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Concat => "CONCAT",
            TokenKind::Dots => "DOTS",
            TokenKind::Dot => "DOT",
            TokenKind::Label => "LABEL",
            TokenKind::Eof => "EOF_TOKEN",
            TokenKind::Unknown => "UNKNOWN",
        }
    }

    /// Fixed source text of an operator or punctuation kind.
    ///
    /// Returns `None` for kinds whose text varies (names, literals, labels,
    /// unknown characters) and for end of input.
    pub const fn symbol(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Mul => "*",
            TokenKind::Div => "/",
            TokenKind::Mod => "%",
            TokenKind::Pow => "^",
            TokenKind::Len => "#",
            TokenKind::BitAnd => "&",
            TokenKind::BitOr => "|",
            TokenKind::BitNot => "~",
            TokenKind::BitShl => "<<",
            TokenKind::BitShr => ">>",
            TokenKind::IDiv => "//",
            TokenKind::Eq => "==",
            TokenKind::Neq => "~=",
            TokenKind::Lte => "<=",
            TokenKind::Gte => ">=",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Assign => "=",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Semi => ";",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::Concat => "..",
            TokenKind::Dots => "...",
            TokenKind::Dot => ".",
            _ => return None,
        };
        Some(text)
    }

    /// Returns true for the 22 reserved words.
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::And
                | TokenKind::Break
                | TokenKind::Do
                | TokenKind::Else
                | TokenKind::Elseif
                | TokenKind::End
                | TokenKind::False
                | TokenKind::For
                | TokenKind::Function
                | TokenKind::Goto
                | TokenKind::If
                | TokenKind::In
                | TokenKind::Local
                | TokenKind::Nil
                | TokenKind::Not
                | TokenKind::Or
                | TokenKind::Repeat
                | TokenKind::Return
                | TokenKind::Then
                | TokenKind::True
                | TokenKind::Until
                | TokenKind::While
        )
    }

    /// Returns true for arithmetic, bitwise, comparison and assignment operators.
    pub const fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Mul
                | TokenKind::Div
                | TokenKind::Mod
                | TokenKind::Pow
                | TokenKind::Len
                | TokenKind::BitAnd
                | TokenKind::BitOr
                | TokenKind::BitNot
                | TokenKind::BitShl
                | TokenKind::BitShr
                | TokenKind::IDiv
                | TokenKind::Eq
                | TokenKind::Neq
                | TokenKind::Lte
                | TokenKind::Gte
                | TokenKind::Lt
                | TokenKind::Gt
                | TokenKind::Assign
        )
    }

    /// Returns true for brackets, separators and the dot family.
    pub const fn is_punctuation(self) -> bool {
        matches!(
            self,
            TokenKind::LParen
                | TokenKind::RParen
                | TokenKind::LBrace
                | TokenKind::RBrace
                | TokenKind::LBracket
                | TokenKind::RBracket
                | TokenKind::Semi
                | TokenKind::Colon
                | TokenKind::Comma
                | TokenKind::Concat
                | TokenKind::Dots
                | TokenKind::Dot
        )
    }

    /// Returns true for numbers and both string forms.
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Number | TokenKind::String | TokenKind::LongString
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Looks up a reserved word.
///
/// # Example
///
/// ```
/// use lulex_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("local"), Some(TokenKind::Local));
/// assert_eq!(keyword_from_ident("localx"), None);
/// assert_eq!(keyword_from_ident("Local"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    let kind = match ident {
        "and" => TokenKind::And,
        "break" => TokenKind::Break,
        "do" => TokenKind::Do,
        "else" => TokenKind::Else,
        "elseif" => TokenKind::Elseif,
        "end" => TokenKind::End,
        "false" => TokenKind::False,
        "for" => TokenKind::For,
        "function" => TokenKind::Function,
        "goto" => TokenKind::Goto,
        "if" => TokenKind::If,
        "in" => TokenKind::In,
        "local" => TokenKind::Local,
        "nil" => TokenKind::Nil,
        "not" => TokenKind::Not,
        "or" => TokenKind::Or,
        "repeat" => TokenKind::Repeat,
        "return" => TokenKind::Return,
        "then" => TokenKind::Then,
        "true" => TokenKind::True,
        "until" => TokenKind::Until,
        "while" => TokenKind::While,
        _ => return None,
    };
    Some(kind)
}

/// A scanned token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// Token category.
    pub kind: TokenKind,
    /// Decoded content for quoted strings, raw content for long strings, the
    /// name for labels, the source text otherwise. Empty for end of input.
    pub lexeme: String,
    /// Everything consumed for this token; line and column of its first character.
    pub span: Span,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// Line of the first character (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// Column of the first character (1-based, in characters).
    #[inline]
    pub fn column(&self) -> u32 {
        self.span.column
    }

    /// Returns true for the end-of-input token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line {}:{} \tType: {} \tValue: {}",
            self.line(),
            self.column(),
            self.kind,
            self.lexeme
        )
    }
}
