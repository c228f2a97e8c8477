//! Workflow steps
//!
//! A command is a list of [`Step`]s run in order by [`run_sequence`]. The first step that returns an error stops
//! the sequence; the error is handed back to the caller untouched.
//!
//! ## Modules
//!
//! - `options` - Switches shared by steps
//! - `run_tests` - Run the checkout's test suites

pub mod options;

use std::collections::HashMap;

use thiserror::Error;
use webkit_system::ScriptError;

pub use options::StepOptions;
pub use run_tests::RunTests;

/// Errors that abort a workflow
#[derive(Debug, Error)]
pub enum StepError {
    #[error(transparent)]
    Script(#[from] ScriptError),
}

impl StepError {
    /// Exit code of the sub-tool that failed, if any.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            StepError::Script(e) => e.exit_code(),
        }
    }
}

/// Values steps hand to later steps in the same run.
#[derive(Debug, Clone, Default)]
pub struct StepState {
    values: HashMap<String, String>,
}

impl StepState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}

/// A single unit of work in a workflow.
pub trait Step {
    /// Short name used in diagnostics
    fn name(&self) -> &'static str;

    fn run(&self, state: &mut StepState) -> Result<(), StepError>;
}

/// Run `steps` in order, stopping at the first failure.
pub fn run_sequence(steps: &[&dyn Step], state: &mut StepState) -> Result<(), StepError> {
    for step in steps {
        tracing::debug!(step = step.name(), "starting step");
        if let Err(e) = step.run(state) {
            tracing::debug!(step = step.name(), error = %e, "step failed, aborting workflow");
            return Err(e);
        }
    }
    Ok(())
}
