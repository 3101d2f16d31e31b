//! Sigil CLI - sign and verify text artifacts for AI agent pipelines.
//!
//! A thin rendering layer over `sigil-engine`: each subcommand opens the
//! project containing the current directory, runs one engine operation and
//! prints the outcome, pretty by default or as JSON with `--format json`.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod files;
mod formatter;
mod theme;

use formatter::OutputFormat;

/// Sign and verify prompt templates for AI agent security.
#[derive(Parser)]
#[command(name = "sigil")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format: pretty (default) or json
    #[arg(long, global = true, default_value = "pretty")]
    format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the .sigil/ state directory with a default config
    Init {
        /// Template engine(s), comma-separated
        #[arg(long)]
        engine: Option<String>,

        /// Default signing identity
        #[arg(long = "as", value_name = "IDENTITY")]
        identity: Option<String>,
    },

    /// Sign file(s)
    Sign {
        /// Files or glob patterns to sign
        #[arg(required = true)]
        files: Vec<String>,

        /// Signing identity
        #[arg(long = "as", value_name = "IDENTITY")]
        identity: Option<String>,

        /// Template engine override
        #[arg(long)]
        engine: Option<String>,
    },

    /// Verify signed file(s) and print their content
    Verify {
        /// Files or glob patterns to verify
        #[arg(required = true)]
        files: Vec<String>,
    },

    /// Check signing status of file(s)
    Check {
        /// Files or glob patterns; checks every signed file when omitted
        files: Vec<String>,
    },

    /// List all signed files
    List,

    /// Summarize signed, modified and unsigned files
    Status,

    /// Remove signature(s)
    Unsign {
        /// Files or glob patterns to unsign
        #[arg(required = true)]
        files: Vec<String>,
    },

    /// Show the audit log
    Audit {
        /// Only entries for this file
        #[arg(long)]
        file: Option<String>,

        /// Only the most recent N entries
        #[arg(long)]
        limit: Option<usize>,
    },

    /// List the built-in template engines
    Engines,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let format = match cli.format.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Pretty,
    };

    match cli.command {
        Commands::Init { engine, identity } => {
            commands::init::run_init(engine.as_deref(), identity.as_deref(), format)
        },
        Commands::Sign {
            files,
            identity,
            engine,
        } => commands::sign::run_sign(&files, identity.as_deref(), engine.as_deref(), format),
        Commands::Verify { files } => commands::verify::run_verify(&files, format),
        Commands::Check { files } => commands::check::run_check(&files, format),
        Commands::List => commands::list::run_list(format),
        Commands::Status => commands::status::run_status(format),
        Commands::Unsign { files } => commands::unsign::run_unsign(&files, format),
        Commands::Audit { file, limit } => {
            commands::audit::run_audit(file.as_deref(), limit, format)
        },
        Commands::Engines => commands::engines::run_engines(format),
    }
}

/// Logs go to stderr so JSON output on stdout stays parseable.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
