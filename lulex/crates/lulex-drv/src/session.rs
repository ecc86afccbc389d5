//! Lexing sessions over source files.
//!
//! Each file gets its own [`Handler`], so files are lexed independently and
//! in parallel. Results keep the order the paths were given in.

use std::path::{Path, PathBuf};

use lulex_lex::{Lexer, Token, TokenKind};
use lulex_util::{Diagnostic, Handler, Level, SourceFile};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::error::{LulexError, Result};

/// Default input when no paths are given.
pub const DEFAULT_INPUT: &str = "init.lua";

/// One source file together with its token stream and diagnostics.
#[derive(Debug)]
pub struct LexedFile {
    /// The source text.
    pub source: SourceFile,
    /// Every token, ending with `Eof`.
    pub tokens: Vec<Token>,
    /// Diagnostics in source order.
    pub diagnostics: Vec<Diagnostic>,
}

impl LexedFile {
    /// Lexes a whole source file.
    pub fn lex(source: SourceFile) -> Self {
        let handler = Handler::new();
        let tokens = Lexer::new(source.content(), &handler).tokenize();
        let diagnostics = handler.take();

        debug!(
            file = source.name(),
            tokens = tokens.len(),
            diagnostics = diagnostics.len(),
            "lexed file"
        );

        Self {
            source,
            tokens,
            diagnostics,
        }
    }

    /// Tokens without the trailing `Eof`.
    pub fn significant_tokens(&self) -> &[Token] {
        match self.tokens.split_last() {
            Some((last, rest)) if last.is_eof() => rest,
            _ => &self.tokens,
        }
    }

    /// Tokens of kind `Unknown`, in source order.
    pub fn unknown_tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.kind == TokenKind::Unknown)
    }

    /// Number of error-level diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }
}

/// The results of lexing a set of files.
#[derive(Debug, Default)]
pub struct Session {
    files: Vec<LexedFile>,
}

impl Session {
    /// Reads every path and lexes the contents.
    ///
    /// Fails on the first path that cannot be read; nothing is lexed then.
    pub fn open(paths: &[PathBuf]) -> Result<Self> {
        let sources = paths
            .iter()
            .map(|path| read_source(path))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::lex(sources))
    }

    /// Lexes already loaded sources.
    pub fn lex(sources: Vec<SourceFile>) -> Self {
        let files = sources.into_par_iter().map(LexedFile::lex).collect();
        Self { files }
    }

    /// Lexed files in input order.
    pub fn files(&self) -> &[LexedFile] {
        &self.files
    }

    /// Total number of error-level diagnostics.
    pub fn error_count(&self) -> usize {
        self.files.iter().map(LexedFile::error_count).sum()
    }

    /// Number of files with at least one error.
    pub fn files_with_errors(&self) -> usize {
        self.files.iter().filter(|f| f.error_count() > 0).count()
    }
}

/// Reads a file, naming it by the path as given.
///
/// The bytes are not required to be UTF-8. Invalid sequences become
/// `U+FFFD`, each counting as one column, so a stray Latin-1 byte in a
/// comment or string does not stop the file from being lexed.
pub fn read_source(path: &Path) -> Result<SourceFile> {
    let bytes = std::fs::read(path).map_err(|source| LulexError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(err) => {
            warn!(
                file = %path.display(),
                offset = err.utf8_error().valid_up_to(),
                "invalid UTF-8, replacing undecodable bytes"
            );
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        },
    };
    Ok(SourceFile::new(path.display().to_string(), content))
}
