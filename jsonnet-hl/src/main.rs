//! jsonnet-hl CLI - Jsonnet syntax highlighting from the command line.
//!
//! This is the main entry point for the jsonnet-hl CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jsonnet_lex::TokenClass;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    check::{run_check, CheckArgs},
    highlight::{run_highlight, HighlightArgs},
    tokens::{run_tokens, TokensArgs},
};
use config::Config;
use error::{HlError, Result};

/// jsonnet-hl - Jsonnet syntax highlighting
///
/// Classifies Jsonnet source into highlighting tokens, prints it in
/// colour, and reports malformed escapes, text blocks and unterminated
/// constructs.
#[derive(Parser, Debug)]
#[command(name = "jsonnet-hl")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Jsonnet syntax highlighting tools", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "JSONNET_HL_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "JSONNET_HL_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "JSONNET_HL_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the jsonnet-hl CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every highlighting token
    ///
    /// Writes one row per token with its line, byte range, class and text,
    /// or a JSON array of the same records.
    Tokens(TokensCommand),

    /// Print sources with ANSI colours
    Highlight(HighlightCommand),

    /// Report malformed and unterminated constructs
    ///
    /// Exits with a non-zero status when any problem is found.
    Check(CheckCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Input files (`-` for standard input)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Only print these token classes (comma-separated)
    #[arg(long, value_delimiter = ',')]
    only: Vec<TokenClass>,

    /// Merge adjacent tokens of the same class
    #[arg(long)]
    coalesce: bool,
}

/// Arguments for the highlight subcommand.
#[derive(Parser, Debug)]
struct HighlightCommand {
    /// Input files (`-` for standard input)
    #[arg(required = true)]
    input: Vec<PathBuf>,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Input files (`-` for standard input)
    #[arg(required = true)]
    input: Vec<PathBuf>,
}

/// Main entry point for the jsonnet-hl CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;

    execute_command(cli.command, cli.no_color, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with command output. `RUST_LOG`
/// overrides the level chosen by `verbose`.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

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
        .map_err(|e| HlError::Config(format!("Failed to initialize logging: {}", e)))?;

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
fn execute_command(command: Commands, no_color: bool, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, config),
        Commands::Highlight(args) => execute_highlight(args, no_color, config),
        Commands::Check(args) => execute_check(args, config),
    }
}

/// Execute the tokens command.
fn execute_tokens(args: TokensCommand, config: Config) -> Result<()> {
    let tokens_args = TokensArgs {
        inputs: args.input,
        format: args.format,
        only: args.only,
        coalesce: args.coalesce,
    };
    run_tokens(tokens_args, config)
}

/// Execute the highlight command.
fn execute_highlight(args: HighlightCommand, no_color: bool, config: Config) -> Result<()> {
    let highlight_args = HighlightArgs {
        inputs: args.input,
        no_color,
    };
    run_highlight(highlight_args, config)
}

/// Execute the check command.
fn execute_check(args: CheckCommand, config: Config) -> Result<()> {
    run_check(CheckArgs { inputs: args.input }, config)
}
