//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and dispatch
//! - `comment` - Whitespace, comment and BOM skipping
//! - `bracket` - Long-bracket openers and bodies, shared by comments and strings
//! - `string` - Quoted and long string lexing
//! - `number` - Number literal lexing
//! - `identifier` - Identifier, keyword and label lexing
//! - `operator` - Operator, punctuation and unknown-character lexing

mod bracket;
mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::Lexer;
