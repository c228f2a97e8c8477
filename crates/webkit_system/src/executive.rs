//! Running external commands.
//!
//! [`Executive`] is the seam workflow steps use to run sub-tools. The only contract is
//! "run this command in that directory, and fail if it does not exit cleanly".

use std::path::Path;
use std::process::{Command, Stdio};

use crate::errors::ScriptError;

/// Capability to run external commands and wait for them.
pub trait Executive {
    /// Run `command` (program followed by its arguments) with `cwd` as working directory.
    ///
    /// Blocks until the child exits. Returns [`ScriptError::CommandFailed`] on a non-zero exit.
    fn run_and_throw_if_fail(&self, command: &[String], cwd: &Path) -> Result<(), ScriptError>;
}

/// Runs commands as real child processes.
#[derive(Debug, Clone, Default)]
pub struct ProcessExecutive {
    capture_output: bool,
}

impl ProcessExecutive {
    /// Children inherit the terminal's stdin, stdout and stderr.
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture child output instead of streaming it; the output is attached to failures.
    ///
    /// Captured children get a null stdin.
    pub fn with_captured_output(mut self) -> Self {
        self.capture_output = true;
        self
    }
}

impl Executive for ProcessExecutive {
    fn run_and_throw_if_fail(&self, command: &[String], cwd: &Path) -> Result<(), ScriptError> {
        let (program, args) = command.split_first().ok_or(ScriptError::EmptyCommand)?;

        tracing::debug!(command = %format_command(command), cwd = %cwd.display(), "spawning");

        let mut child = Command::new(program);
        child.args(args).current_dir(cwd);
        if self.capture_output {
            // Nobody sees a prompt whose output is captured.
            child.stdin(Stdio::null());
        }

        let spawn_error = |source: std::io::Error| ScriptError::Spawn {
            command: command.to_vec(),
            source,
        };

        let (status, output) = if self.capture_output {
            let out = child.output().map_err(spawn_error)?;
            let text = format!(
                "{}{}",
                String::from_utf8_lossy(&out.stdout),
                String::from_utf8_lossy(&out.stderr)
            );
            (out.status, text)
        } else {
            (child.status().map_err(spawn_error)?, String::new())
        };

        if status.success() {
            tracing::debug!(command = %format_command(command), "command succeeded");
            return Ok(());
        }

        tracing::debug!(command = %format_command(command), exit_code = ?status.code(), "command failed");
        Err(ScriptError::command_failed(command, cwd, status.code(), output))
    }
}

/// Render a command as a bracketed list of single-quoted tokens, e.g. `['run-webkit-tests', '--quiet']`.
pub fn format_command(command: &[String]) -> String {
    let tokens: Vec<String> = command.iter().map(|token| format!("'{}'", token)).collect();
    format!("[{}]", tokens.join(", "))
}
