//! lulex-drv - Command Line Driver
//!
//! Reads Lua files, lexes them with [`lulex_lex`] and prints token listings,
//! kind statistics or diagnostics. The `lulex` binary is a thin wrapper around
//! [`main`].
//!
//! ```text
//! lulex [--verbose] [--config <PATH>] [--no-color] <COMMAND>
//!   tokens [FILES...] [--format text|json]
//!   stats  [FILES...] [--format text|json]
//!   check  [FILES...] [--deny-unknown]
//! ```

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub mod commands;
pub mod config;
pub mod error;
pub mod report;
pub mod session;

pub use config::{Config, OutputFormat};
pub use error::{LulexError, Result};
pub use session::{LexedFile, Session};

/// Lulex - lexical analyzer for Lua source files
#[derive(Parser, Debug)]
#[command(name = "lulex")]
#[command(author = "Lulex Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexical analyzer for Lua source files", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "LULEX_VERBOSE")]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "LULEX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "LULEX_NO_COLOR")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every token with its position
    Tokens(ListArgs),

    /// Print how often each token kind occurs
    Stats(ListArgs),

    /// Report unknown characters and unterminated literals
    Check(CheckArgs),
}

/// Arguments for `tokens` and `stats`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Lua files to lex
    #[arg(value_name = "FILES", default_value = session::DEFAULT_INPUT)]
    pub files: Vec<PathBuf>,

    /// Output format (default: from config)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Arguments for `check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Lua files to lex
    #[arg(value_name = "FILES", default_value = session::DEFAULT_INPUT)]
    pub files: Vec<PathBuf>,

    /// Exit with an error when any lexical error is found
    #[arg(long)]
    pub deny_unknown: bool,
}

/// Entry point of the `lulex` binary.
///
/// Parses arguments, loads configuration, initializes logging and runs the
/// selected command against stdout.
pub fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::resolve(cli.config.as_deref()).context("invalid configuration")?;
    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute_command(cli.command, &config, &mut out)?;
    out.flush().context("failed to flush output")?;
    Ok(())
}

/// Initialize the logging system on stderr.
pub fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| LulexError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Execute the selected command, writing its report to `out`.
///
/// Flags given on the command line win over the configuration file.
pub fn execute_command(command: Commands, config: &Config, out: &mut dyn Write) -> Result<()> {
    match command {
        Commands::Tokens(args) => {
            let session = Session::open(&args.files)?;
            let format = args.format.unwrap_or(config.output.format);
            debug!(files = args.files.len(), ?format, "listing tokens");
            commands::run_tokens(&session, format, out)
        },
        Commands::Stats(args) => {
            let session = Session::open(&args.files)?;
            let format = args.format.unwrap_or(config.output.format);
            debug!(files = args.files.len(), ?format, "computing statistics");
            commands::run_stats(&session, format, out)
        },
        Commands::Check(args) => {
            let session = Session::open(&args.files)?;
            let deny = args.deny_unknown || config.check.deny_unknown;
            debug!(files = args.files.len(), deny, "checking");
            commands::run_check(&session, deny, out)
        },
    }
}
