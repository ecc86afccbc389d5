//! Subcommand implementations.
//!
//! Each command works on an already lexed [`Session`] and writes its report
//! to `out`. Logging goes to stderr, so `out` only ever carries the report.

use std::io::Write;

use tracing::{debug, warn};

use crate::config::OutputFormat;
use crate::error::{LulexError, Result};
use crate::report::{self, KindStats};
use crate::session::{LexedFile, Session};

/// Lists every token of every file.
pub fn run_tokens(session: &Session, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    let many = session.files().len() > 1;
    for file in session.files() {
        warn_on_errors(file);
        match format {
            OutputFormat::Text => {
                write_header(out, file, many)?;
                report::write_tokens(out, file.significant_tokens())?;
                report::write_unknown_report(out, file.unknown_tokens())?;
            },
            OutputFormat::Json => report::write_tokens_json(out, file.significant_tokens())?,
        }
    }
    Ok(())
}

/// Prints the kind frequency table of every file.
pub fn run_stats(session: &Session, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    let many = session.files().len() > 1;
    for file in session.files() {
        warn_on_errors(file);
        let stats = KindStats::from_tokens(file.significant_tokens());
        debug!(file = file.source.name(), total = stats.total, "computed kind statistics");
        match format {
            OutputFormat::Text => {
                write_header(out, file, many)?;
                report::write_stats(out, &stats)?;
                report::write_unknown_report(out, file.unknown_tokens())?;
            },
            OutputFormat::Json => report::write_stats_json(out, &stats)?,
        }
    }
    Ok(())
}

/// Prints every diagnostic and a summary line.
///
/// With `deny` set, any error diagnostic turns into [`LulexError::Lexical`].
pub fn run_check(session: &Session, deny: bool, out: &mut dyn Write) -> Result<()> {
    for file in session.files() {
        for diagnostic in &file.diagnostics {
            writeln!(out, "{}\n", diagnostic.render(&file.source))?;
        }
    }

    let errors = session.error_count();
    writeln!(
        out,
        "checked {} file(s): {} error(s)",
        session.files().len(),
        errors
    )?;

    if deny && errors > 0 {
        return Err(LulexError::Lexical {
            errors,
            files: session.files_with_errors(),
        });
    }
    Ok(())
}

fn write_header(out: &mut dyn Write, file: &LexedFile, many: bool) -> Result<()> {
    if many {
        writeln!(out, "==> {} <==", file.source.name())?;
    }
    Ok(())
}

fn warn_on_errors(file: &LexedFile) {
    let errors = file.error_count();
    if errors > 0 {
        warn!(
            file = file.source.name(),
            errors, "lexical errors reported, run `lulex check` for details"
        );
    }
}
