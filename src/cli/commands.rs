//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::env;
use std::path::PathBuf;

use webkit_system::{Executive, HostPlatform, ProcessExecutive};

use super::{CliError, CliResult, ExitCode};
use crate::port::{CHECKOUT_ENV_VAR, PortName, WebKitPort, find_checkout_root};
use crate::steps::{self, RunTests, StepError, StepOptions, StepState};
use crate::tool::{ConsoleLog, Tool};

/// Arguments of `webkit-patch run-tests`.
#[derive(Debug, Clone, Default)]
pub struct RunTestsArgs {
    pub checkout: Option<PathBuf>,
    pub port: Option<PortName>,
    pub platform: Option<String>,
    pub non_interactive: bool,
    pub quiet: bool,
    pub test: bool,
    pub capture_output: bool,
}

/// Run the checkout's test suites with real processes.
pub fn run_tests(args: RunTestsArgs) -> CliResult<ExitCode> {
    let platform = args.platform.map(HostPlatform::new).unwrap_or_else(HostPlatform::current);
    let checkout_root = resolve_checkout(args.checkout)?;
    let port = WebKitPort::new(
        args.port.unwrap_or_else(|| PortName::default_for(&platform)),
        &checkout_root,
    );

    tracing::debug!(
        checkout = %checkout_root.display(),
        port = %port.port_name(),
        platform = %platform,
        "running tests"
    );

    let executive: Box<dyn Executive> = if args.capture_output {
        Box::new(ProcessExecutive::new().with_captured_output())
    } else {
        Box::new(ProcessExecutive::new())
    };
    let tool = Tool::new(
        executive,
        Box::new(port),
        checkout_root,
        platform,
        Box::new(ConsoleLog),
    );

    let options = StepOptions::new()
        .with_test(args.test)
        .with_non_interactive(args.non_interactive)
        .with_quiet(args.quiet);
    let step = RunTests::new(&tool, options);

    steps::run_sequence(&[&step], &mut StepState::new()).map_err(step_failure)?;
    Ok(ExitCode::SUCCESS)
}

fn resolve_checkout(explicit: Option<PathBuf>) -> CliResult<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }

    let cwd = env::current_dir()
        .map_err(|e| CliError::failure(format!("Cannot determine current directory: {}", e)))?;

    find_checkout_root(&cwd).ok_or_else(|| {
        CliError::failure(format!(
            "No WebKit checkout found above '{}'. Pass --checkout or set {}.",
            cwd.display(),
            CHECKOUT_ENV_VAR
        ))
    })
}

/// Map a failed step to a CLI error carrying the sub-tool's exit code.
fn step_failure(e: StepError) -> CliError {
    let message = match &e {
        StepError::Script(script) => script.message_with_output(),
    };
    match e.exit_code() {
        Some(code) if code != 0 => CliError::with_code(message, code),
        _ => CliError::failure(message),
    }
}
