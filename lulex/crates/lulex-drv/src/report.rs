//! Rendering of token listings and kind statistics.
//!
//! Writers take `&mut dyn Write` so the binary can print to stdout and tests
//! can capture into a `Vec<u8>`. Callers pass
//! [`LexedFile::significant_tokens`](crate::session::LexedFile::significant_tokens),
//! so `Eof` is never listed or counted.

use std::collections::BTreeMap;
use std::io::{self, Write};

use lulex_lex::Token;
use serde::Serialize;

use crate::error::Result;

/// A token as emitted in JSON output.
#[derive(Debug, Serialize, PartialEq)]
pub struct TokenRecord<'a> {
    /// Upper-case kind name, e.g. `IDENTIFIER`.
    pub kind: &'static str,
    /// Token text.
    pub lexeme: &'a str,
    /// 1-based line.
    pub line: u32,
    /// 1-based column.
    pub column: u32,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        Self {
            kind: token.kind.name(),
            lexeme: &token.lexeme,
            line: token.line(),
            column: token.column(),
        }
    }
}

/// Occurrences of one token kind.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct KindCount {
    /// Lower-case kind name.
    pub kind: String,
    /// Number of tokens of this kind.
    pub count: usize,
    /// Share of all counted tokens, in percent.
    pub percent: f64,
}

/// Frequency table of token kinds, sorted by kind name.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct KindStats {
    /// Number of counted tokens.
    pub total: usize,
    /// One entry per kind that occurs.
    pub kinds: Vec<KindCount>,
}

impl KindStats {
    /// Counts the kinds of `tokens`.
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for token in tokens {
            *counts
                .entry(token.kind.name().to_ascii_lowercase())
                .or_default() += 1;
        }

        let total = counts.values().sum();
        let kinds = counts
            .into_iter()
            .map(|(kind, count)| KindCount {
                kind,
                count,
                percent: count as f64 / total as f64 * 100.0,
            })
            .collect();

        Self { total, kinds }
    }
}

/// Writes one `Line l:c \tType: KIND \tValue: lexeme` line per token.
pub fn write_tokens(out: &mut dyn Write, tokens: &[Token]) -> io::Result<()> {
    for token in tokens {
        writeln!(out, "{}", token)?;
    }
    Ok(())
}

/// Writes tokens as a pretty JSON array.
pub fn write_tokens_json(out: &mut dyn Write, tokens: &[Token]) -> Result<()> {
    let records: Vec<TokenRecord<'_>> = tokens.iter().map(TokenRecord::from).collect();
    serde_json::to_writer_pretty(&mut *out, &records)?;
    writeln!(out)?;
    Ok(())
}

/// Writes `kind: count | pct%` lines.
pub fn write_stats(out: &mut dyn Write, stats: &KindStats) -> io::Result<()> {
    for entry in &stats.kinds {
        writeln!(out, "{}: {} | {:.2}%", entry.kind, entry.count, entry.percent)?;
    }
    Ok(())
}

/// Writes the statistics as a pretty JSON object.
pub fn write_stats_json(out: &mut dyn Write, stats: &KindStats) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, stats)?;
    writeln!(out)?;
    Ok(())
}

/// Writes the list of unknown tokens, or a line saying there are none.
pub fn write_unknown_report<'a>(
    out: &mut dyn Write,
    unknown: impl IntoIterator<Item = &'a Token>,
) -> io::Result<()> {
    let mut unknown = unknown.into_iter().peekable();

    if unknown.peek().is_none() {
        return writeln!(out, "No unknown tokens found.");
    }

    writeln!(out, "\nUnknown tokens found:")?;
    for token in unknown {
        writeln!(
            out,
            "Line {}:{} \tValue: '{}'",
            token.line(),
            token.column(),
            token.lexeme
        )?;
    }
    Ok(())
}
