//! vshc - command-line driver for the V# lexer.
//!
//! Parses arguments with clap, sets up logging, loads `vshc.toml` and
//! dispatches to a command handler.

mod commands;
mod config;
mod error;
mod output;
mod report;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_keywords, run_lex, run_precedence, LexArgs};
use config::Config;
use error::{DriverError, Result};
use output::OutputFormat;

/// vshc - the V# lexer
///
/// Tokenizes V# source files and prints the token stream.
#[derive(Parser, Debug)]
#[command(name = "vshc")]
#[command(author = "V# Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize V# source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "VSHC_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "VSHC_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "VSHC_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the vshc CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenize source files and print their tokens
    ///
    /// Files are tokenized in parallel; tokens are printed in argument
    /// order. Exits with status 1 if any lexical error was reported.
    Lex(LexCommand),

    /// Print the keyword table
    Keywords,

    /// Print the operator precedence table
    Precedence,
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    /// Source files to tokenize
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Leave comment tokens out of the listing
    #[arg(long)]
    no_comments: bool,

    /// Number of parallel jobs (0 = one per CPU)
    #[arg(short, long)]
    jobs: Option<usize>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        },
    }
}

/// Loads configuration, initializes logging and runs the command.
fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;

    let verbose = cli.verbose || config.verbose;
    let color = !cli.no_color && config.output.color;
    init_logging(verbose, !color)?;

    execute_command(cli.command, config, color)?;
    Ok(())
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with token output. `RUST_LOG`
/// overrides the level chosen by `verbose`.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DriverError::Config(format!("failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config, color: bool) -> Result<()> {
    match command {
        Commands::Lex(args) => execute_lex(args, config, color),
        Commands::Keywords => run_keywords(&mut io::stdout().lock()),
        Commands::Precedence => run_precedence(&mut io::stdout().lock()),
    }
}

/// Execute the lex command with flags layered over the config.
fn execute_lex(args: LexCommand, config: Config, color: bool) -> Result<()> {
    let lex_args = LexArgs {
        files: args.files,
        format: args.format.unwrap_or(config.output.format),
        emit_comments: config.lex.emit_comments && !args.no_comments,
        jobs: args.jobs.unwrap_or(config.lex.jobs),
        color,
    };
    run_lex(lex_args)
}
