//! Errors raised while invoking external commands.

use std::path::PathBuf;

use thiserror::Error;

use crate::executive::format_command;

/// Failure of an external command run through an [`Executive`](crate::Executive).
#[derive(Debug, Error)]
pub enum ScriptError {
    /// The command ran and exited with a non-zero status (or was killed by a signal).
    #[error("Failed to run \"{}\" exit_code: {}{}", format_command(.command), exit_code_text(.exit_code), cwd_suffix(.cwd))]
    CommandFailed {
        command: Vec<String>,
        cwd: PathBuf,
        /// `None` when the process was terminated by a signal.
        exit_code: Option<i32>,
        /// Captured stdout/stderr, empty when output went straight to the terminal.
        output: String,
    },

    /// The program could not be started at all.
    #[error("Failed to start \"{}\": {source}", format_command(.command))]
    Spawn {
        command: Vec<String>,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot run an empty command")]
    EmptyCommand,
}

impl ScriptError {
    /// Build a `CommandFailed` error.
    pub fn command_failed(command: &[String], cwd: impl Into<PathBuf>, exit_code: Option<i32>, output: String) -> Self {
        ScriptError::CommandFailed {
            command: command.to_vec(),
            cwd: cwd.into(),
            exit_code,
            output,
        }
    }

    /// Exit code of the failed child, if there was one.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ScriptError::CommandFailed { exit_code, .. } => *exit_code,
            _ => None,
        }
    }

    /// The error message followed by any captured output of the child.
    pub fn message_with_output(&self) -> String {
        match self {
            ScriptError::CommandFailed { output, .. } if !output.trim().is_empty() => {
                format!("{}\n\noutput: {}", self, output.trim_end())
            }
            _ => self.to_string(),
        }
    }
}

fn exit_code_text(exit_code: &Option<i32>) -> String {
    exit_code.map_or_else(|| "signal".to_string(), |code| code.to_string())
}

fn cwd_suffix(cwd: &std::path::Path) -> String {
    if cwd.as_os_str().is_empty() {
        String::new()
    } else {
        format!(" cwd: {}", cwd.display())
    }
}
