//! CLI module for the emugen type registry
//!
//! A thin driver that lets operators vet definition files before a generation run and inspect what names resolve
//! to.
//!
//! ## Commands
//!
//! - `check <FILE>...` - Load definition files and report errors and redefinitions
//! - `resolve [--types FILE]... <NAME>...` - Show the descriptor each name resolves to
//! - `list [--types FILE]... [--json]` - Print the whole registry in id order
//!
//! ## Design
//!
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use crate::types::LoadConfig;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Inspect and validate emugen type definition files
#[derive(Parser, Debug)]
#[command(name = "emugen-types")]
#[command(version = VERSION)]
#[command(about = "Inspect and validate emugen type definition files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub load: LoadArgs,
}

/// Options that shape how definition files are parsed.
#[derive(Args, Debug, Clone, Default)]
pub struct LoadArgs {
    /// Read a non-numeric width as its leading digits (0 if none) instead of rejecting the line
    #[arg(long, global = true)]
    pub lenient_width: bool,

    /// Do not log redefinition warnings
    #[arg(long, global = true)]
    pub quiet_redefinitions: bool,
}

impl LoadArgs {
    pub fn config(&self) -> LoadConfig {
        LoadConfig::new()
            .with_lenient_width(self.lenient_width)
            .with_warn_on_redefinition(!self.quiet_redefinitions)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load definition files and report problems
    Check {
        /// Definition files, loaded in order into one registry
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },

    /// Show what each type name resolves to
    Resolve {
        /// Definition file to load first (repeatable)
        #[arg(long = "types", short = 't', value_name = "FILE")]
        types: Vec<PathBuf>,
        /// Type names to resolve
        #[arg(value_name = "NAME", required = true)]
        names: Vec<String>,
    },

    /// Print every registered type in id order
    List {
        /// Definition file to load first (repeatable)
        #[arg(long = "types", short = 't', value_name = "FILE")]
        types: Vec<PathBuf>,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.load.config();
    match cli.command {
        Command::Check { files } => commands::check_files(&files, &config),
        Command::Resolve { types, names } => commands::resolve_names(&types, &names, &config),
        Command::List { types, json } => commands::list_types(&types, json, &config),
    }
}

// ============================================================================
// Tests
// ============================================================================
