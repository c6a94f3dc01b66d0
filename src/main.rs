//! Binary entry point for the jast CLI.
//!
//! ## Usage
//!
//! ```bash
//! # Print the representation of a tree
//! jast dump tree.json
//!
//! # Show the declared fields of a kind
//! jast schema MethodDeclaration
//!
//! # List every hook a traversal fires
//! jast trace tree.json --try-traversal complete
//!
//! # Count nodes per kind
//! jast stats tree.json --json
//! ```

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use jast::cli::{load_tree, run_dump, run_schema, run_stats, run_trace};
use jast::error::{JastError, OutputErrorCode};
use jast::output::{emit_response, ErrorResponse};
use jast::tree::{Strategy, TryTraversal, WalkOptions};

// ============================================================================
// CLI Structure
// ============================================================================

/// Inspect Java syntax trees serialized as JSON.
#[derive(Parser, Debug)]
#[command(name = "jast", version, about = "Inspect Java syntax trees serialized as JSON")]
struct Cli {
    /// Log level for tracing output (overridden by RUST_LOG).
    #[arg(long, global = true, value_enum, default_value = "warn")]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

/// Log level for tracing output.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn to_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Traversal rule for `try` statements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum TryMode {
    /// Statements of the main block, catch hooks, finally; no leave_Try.
    #[default]
    Legacy,
    /// Walk `try` like any other node.
    Complete,
}

impl From<TryMode> for TryTraversal {
    fn from(mode: TryMode) -> Self {
        match mode {
            TryMode::Legacy => TryTraversal::Legacy,
            TryMode::Complete => TryTraversal::Complete,
        }
    }
}

/// CLI subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print a tree's representation.
    Dump {
        /// Tree file (JSON).
        file: PathBuf,
        /// Print the tree as pretty JSON instead.
        #[arg(long)]
        json: bool,
    },
    /// Print the declared fields of one kind, or of every kind.
    Schema {
        /// Kind name, e.g. `IfThenElse`.
        kind: Option<String>,
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Print every hook a traversal fires, indented by depth.
    Trace {
        /// Tree file (JSON).
        file: PathBuf,
        /// Use the explicit-stack walker.
        #[arg(long)]
        iterative: bool,
        /// Traversal rule for `try` statements.
        #[arg(long, value_enum, default_value = "legacy")]
        try_traversal: TryMode,
        /// Append each node's representation.
        #[arg(long)]
        verbose: bool,
    },
    /// Count nodes per kind and per category.
    Stats {
        /// Tree file (JSON).
        file: PathBuf,
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

// ============================================================================
// Main
// ============================================================================

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.log_level);

    match execute(cli) {
        Ok(output) => {
            let mut stdout = io::stdout();
            let _ = stdout.write_all(output.as_bytes());
            if !output.ends_with('\n') {
                let _ = writeln!(stdout);
            }
            let _ = stdout.flush();
            ExitCode::SUCCESS
        }
        Err(err) => {
            let error_code = OutputErrorCode::from(&err);
            let _ = emit_response(&ErrorResponse::from_error(&err), &mut io::stdout());
            let _ = io::stdout().flush();
            ExitCode::from(error_code.code())
        }
    }
}

/// Initialize tracing subscriber.
fn init_tracing(level: LogLevel) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_tracing_level().to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Execute the CLI command, returning the text to print.
fn execute(cli: Cli) -> Result<String, JastError> {
    match cli.command {
        Command::Dump { file, json } => run_dump(&load_tree(&file)?, json),
        Command::Schema { kind, json } => run_schema(kind.as_deref(), json),
        Command::Trace {
            file,
            iterative,
            try_traversal,
            verbose,
        } => {
            let options = WalkOptions {
                strategy: if iterative {
                    Strategy::Iterative
                } else {
                    Strategy::Recursive
                },
                try_traversal: try_traversal.into(),
            };
            run_trace(&load_tree(&file)?, options, verbose)
        }
        Command::Stats { file, json } => run_stats(&load_tree(&file)?, json),
    }
}
