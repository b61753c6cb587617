//! seqc - lexical scanner for the sequence-generation language.
//!
//! This is the main entry point for the `seqc` binary. It parses arguments
//! with clap, merges them over the configuration file, sets up logging and
//! hands the input to a [`Session`].

use std::error::Error as _;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use seqc_drv::{Config, Result, SeqcError, Session};

/// seqc - scan a sequence-generation program into a token stream
///
/// Tokens are written one per line as `<TypeName, "lexeme">`. Warnings for
/// rejected input go to stderr; the exit status is 1 if any were raised.
#[derive(Parser, Debug)]
#[command(name = "seqc")]
#[command(author = "Seqc Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexical scanner for the sequence-generation language", long_about = None)]
struct Cli {
    /// Source file to scan (default: from config, `input1.hl`)
    input: Option<PathBuf>,

    /// Write the token stream to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", env = "SEQC_CONFIG")]
    config: Option<PathBuf>,

    /// Token stream format: text or json
    #[arg(short, long, value_name = "FMT")]
    format: Option<String>,

    /// Enable verbose output
    #[arg(short, long, env = "SEQC_VERBOSE")]
    verbose: bool,

    /// Disable color output
    #[arg(long, env = "SEQC_NO_COLOR")]
    no_color: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        },
    }
}

/// Loads configuration, scans the input and writes the token stream.
fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    let verbose = cli.verbose || config.verbose;
    let no_color = cli.no_color || !config.color;
    init_logging(verbose, no_color)?;
    debug!(?config, "configuration loaded");

    let input = match cli.input {
        Some(input) => input,
        None => {
            warn!(
                "input file not specified, using \"{}\" as default",
                config.default_input.display()
            );
            config.default_input.clone()
        },
    };

    let format = match cli.format.as_deref() {
        Some(name) => name.parse()?,
        None => config.format,
    };

    let output = cli.output.or(config.output);
    if output.is_none() {
        info!("output file not specified, writing tokens to stdout");
    }

    let session = Session::open(&input, format)?;
    let report = session.run(output.as_deref())?;
    info!(
        tokens = report.tokens,
        warnings = report.warnings,
        "scanned {}",
        input.display()
    );

    report.into_result().map(|_| ())
}

/// Initialize the logging system. Logs go to stderr.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
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
        .map_err(|e| SeqcError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Prints an error and its chain of causes to stderr.
fn report_error(err: &SeqcError) {
    eprintln!("Error: {}", err);
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {}", cause);
        source = cause.source();
    }
}
