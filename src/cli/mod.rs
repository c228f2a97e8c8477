//! CLI module for webkit-patch
//!
//! ## Commands
//!
//! - `run-tests` - Run the checkout's test suites, stopping at the first failure
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
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::port::PortName;
use crate::version::WEBKIT_PATCH_VERSION;

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

    /// Create an error with a custom exit code.
    pub fn with_code(message: impl Into<String>, code: i32) -> Self {
        Self::new(message, ExitCode(code))
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

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Workflow tooling for WebKit checkouts
#[derive(Parser, Debug)]
#[command(name = "webkit-patch")]
#[command(version = WEBKIT_PATCH_VERSION)]
#[command(about = "Workflow tooling for WebKit checkouts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the bindings, unit and layout tests of a checkout
    RunTests {
        /// Checkout root (default: search upwards from the current directory, then $WEBKIT_CHECKOUT)
        #[arg(long, value_name = "DIR")]
        checkout: Option<PathBuf>,
        /// Port whose scripts to run (mac, gtk, efl, qt, win)
        #[arg(long, value_name = "NAME")]
        port: Option<PortName>,
        /// Host platform identifier (default: the platform this binary was built for)
        #[arg(long, value_name = "ID")]
        platform: Option<String>,
        /// Running unattended: pass CI flags to run-webkit-tests
        #[arg(long)]
        non_interactive: bool,
        /// Ask run-webkit-tests for less output
        #[arg(short, long)]
        quiet: bool,
        /// Skip running tests entirely
        #[arg(long)]
        no_test: bool,
        /// Capture sub-tool output and show it only when a tool fails
        #[arg(long)]
        capture_output: bool,
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
    match cli.command {
        command @ Command::RunTests { .. } => commands::run_tests(run_tests_args(command)),
    }
}

/// Translate the parsed `run-tests` flags into command arguments.
fn run_tests_args(command: Command) -> commands::RunTestsArgs {
    let Command::RunTests {
        checkout,
        port,
        platform,
        non_interactive,
        quiet,
        no_test,
        capture_output,
    } = command;

    commands::RunTestsArgs {
        checkout,
        port,
        platform,
        non_interactive,
        quiet,
        test: !no_test,
        capture_output,
    }
}

// ============================================================================
// Tests
// ============================================================================
