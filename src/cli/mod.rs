//! CLI module for primcol
//!
//! ## Commands
//!
//! - `emit --kind <KIND> [--family <FAMILY>] <VALUES>...` - Print values as a JSON array
//! - `schema --kind <KIND>` - Print the array schema for a kind
//! - `kinds` - Print the element kind reference table
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::process;

use clap::{Parser, Subcommand};
use primcol_core::{ElementKind, Family, families, kinds};

use crate::config::EmitConfig;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
    /// Invalid input values
    pub const USAGE: ExitCode = ExitCode(2);
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

    /// Create a usage error (exit code 2).
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::USAGE)
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

/// Emit primitive-element containers as JSON arrays
#[derive(Parser, Debug)]
#[command(name = "primcol")]
#[command(version = VERSION)]
#[command(about = "Emit primitive-element containers as JSON arrays", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse values as one element kind and print them as a JSON array
    Emit {
        /// Element kind (e.g. int, long, char, double, or a Rust type name like i32)
        #[arg(short, long, value_parser = parse_kind, default_value = "int")]
        kind: ElementKind,
        /// Container capability to emit through
        #[arg(short, long, value_parser = parse_family, default_value = "indexed")]
        family: Family,
        /// Do not end output with a newline
        #[arg(long)]
        no_trailing_newline: bool,
        /// Values to emit, in order
        #[arg(value_name = "VALUES", allow_negative_numbers = true)]
        values: Vec<String>,
    },

    /// Print the JSON schema of arrays of one element kind
    Schema {
        /// Element kind
        #[arg(short, long, value_parser = parse_kind)]
        kind: ElementKind,
    },

    /// Print the element kind reference table
    Kinds,
}

fn parse_kind(name: &str) -> Result<ElementKind, String> {
    kinds::from_str(name).ok_or_else(|| {
        let known: Vec<&str> = ElementKind::ALL.iter().map(|&k| kinds::as_str(k)).collect();
        format!("unknown element kind `{name}` (expected one of: {})", known.join(", "))
    })
}

fn parse_family(name: &str) -> Result<Family, String> {
    families::from_str(name).ok_or_else(|| format!("unknown container family `{name}` (expected bulk or indexed)"))
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
        Ok(output) => print!("{output}"),
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return its rendered output.
pub fn execute(cli: Cli) -> CliResult<String> {
    match cli.command {
        Command::Emit {
            kind,
            family,
            no_trailing_newline,
            values,
        } => {
            let config = EmitConfig::new()
                .with_kind(kind)
                .with_family(family)
                .with_trailing_newline(!no_trailing_newline);
            commands::emit_values(&config, &values)
        }
        Command::Schema { kind } => commands::render_schema(kind).map(|schema| schema + "\n"),
        Command::Kinds => Ok(commands::render_kinds()),
    }
}

// ============================================================================
// Tests
// ============================================================================
