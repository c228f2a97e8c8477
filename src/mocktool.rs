//! In-memory collaborators for exercising steps
//!
//! [`MockTool`] wires a [`MockExecutive`], a [`MockPort`] and a [`CaptureLog`] into a [`Tool`] rooted at
//! `/mock-checkout`. The executive never spawns anything: it writes a `MOCK run_and_throw_if_fail: ...` line
//! into the same log the step writes to, so a test can compare one transcript.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use webkit_system::{Executive, HostPlatform, ScriptError, format_command};

use crate::port::Port;
use crate::tool::{StepLog, Tool};

/// Checkout root used by every mock tool.
pub const MOCK_CHECKOUT_ROOT: &str = "/mock-checkout";

// ============================================================================
// CaptureLog
// ============================================================================

/// Log sink that keeps everything in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct CaptureLog {
    buffer: Rc<RefCell<String>>,
}

impl CaptureLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything logged so far, each line newline-terminated.
    pub fn contents(&self) -> String {
        self.buffer.borrow().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.buffer.borrow().lines().map(str::to_string).collect()
    }
}

impl StepLog for CaptureLog {
    fn log(&self, line: &str) {
        let mut buffer = self.buffer.borrow_mut();
        buffer.push_str(line);
        buffer.push('\n');
    }
}

// ============================================================================
// MockExecutive
// ============================================================================

/// When a [`MockExecutive`] reports failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MockFailure {
    #[default]
    Never,
    Always,
    /// Fail the call with this zero-based index only.
    OnCall(usize),
}

/// One recorded `run_and_throw_if_fail` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: Vec<String>,
    pub cwd: PathBuf,
}

/// Executive that records and logs invocations instead of running them. Clones share the record.
#[derive(Debug, Clone)]
pub struct MockExecutive {
    log: CaptureLog,
    calls: Rc<RefCell<Vec<Invocation>>>,
    failure: MockFailure,
}

impl MockExecutive {
    pub fn new(log: CaptureLog, failure: MockFailure) -> Self {
        Self {
            log,
            calls: Rc::default(),
            failure,
        }
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }

    fn should_fail(&self, index: usize) -> bool {
        match self.failure {
            MockFailure::Never => false,
            MockFailure::Always => true,
            MockFailure::OnCall(n) => n == index,
        }
    }
}

impl Executive for MockExecutive {
    fn run_and_throw_if_fail(&self, command: &[String], cwd: &Path) -> Result<(), ScriptError> {
        self.log.log(&format!(
            "MOCK run_and_throw_if_fail: {}, cwd={}",
            format_command(command),
            cwd.display()
        ));

        let index = {
            let mut calls = self.calls.borrow_mut();
            calls.push(Invocation {
                command: command.to_vec(),
                cwd: cwd.to_path_buf(),
            });
            calls.len() - 1
        };

        if self.should_fail(index) {
            return Err(ScriptError::command_failed(command, cwd, Some(1), "MOCK output of child process".to_string()));
        }
        Ok(())
    }
}

// ============================================================================
// MockPort
// ============================================================================

/// Port with fixed `mock-*` commands.
#[derive(Debug, Clone)]
pub struct MockPort {
    python_unittests: Option<Vec<String>>,
    perl_unittests: Option<Vec<String>>,
    javascriptcore_tests: Option<Vec<String>>,
    bindings_tests: Option<Vec<String>>,
    webkit_unit_tests: Option<Vec<String>>,
}

impl Default for MockPort {
    fn default() -> Self {
        Self {
            python_unittests: None,
            perl_unittests: None,
            javascriptcore_tests: None,
            bindings_tests: Some(vec!["mock-run-bindings-tests".to_string()]),
            webkit_unit_tests: Some(vec!["mock-run-webkit-unit-tests".to_string()]),
        }
    }
}

impl MockPort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_python_unittests(mut self, command: Vec<String>) -> Self {
        self.python_unittests = Some(command);
        self
    }

    pub fn with_perl_unittests(mut self, command: Vec<String>) -> Self {
        self.perl_unittests = Some(command);
        self
    }

    pub fn with_javascriptcore_tests(mut self, command: Vec<String>) -> Self {
        self.javascriptcore_tests = Some(command);
        self
    }

    pub fn without_bindings_tests(mut self) -> Self {
        self.bindings_tests = None;
        self
    }

    pub fn without_webkit_unit_tests(mut self) -> Self {
        self.webkit_unit_tests = None;
        self
    }
}

impl Port for MockPort {
    fn name(&self) -> &str {
        "MockPort"
    }

    fn run_python_unittests_command(&self) -> Option<Vec<String>> {
        self.python_unittests.clone()
    }

    fn run_perl_unittests_command(&self) -> Option<Vec<String>> {
        self.perl_unittests.clone()
    }

    fn run_javascriptcore_tests_command(&self) -> Option<Vec<String>> {
        self.javascriptcore_tests.clone()
    }

    fn run_bindings_tests_command(&self) -> Option<Vec<String>> {
        self.bindings_tests.clone()
    }

    fn run_webkit_unit_tests_command(&self) -> Option<Vec<String>> {
        self.webkit_unit_tests.clone()
    }

    fn run_webkit_tests_command(&self) -> Vec<String> {
        vec!["mock-run-webkit-tests".to_string()]
    }
}

// ============================================================================
// MockTool
// ============================================================================

/// A [`Tool`] built from mocks, plus handles to inspect them afterwards.
pub struct MockTool {
    pub tool: Tool,
    pub log: CaptureLog,
    pub executive: MockExecutive,
}

impl MockTool {
    /// Mock tool on `platform` whose executive always succeeds.
    pub fn new(platform: impl Into<HostPlatform>) -> Self {
        Self::builder(platform).build()
    }

    /// Mock tool whose executive fails according to `failure`.
    pub fn with_failure(platform: impl Into<HostPlatform>, failure: MockFailure) -> Self {
        Self::builder(platform).failure(failure).build()
    }

    pub fn builder(platform: impl Into<HostPlatform>) -> MockToolBuilder {
        MockToolBuilder {
            platform: platform.into(),
            port: MockPort::default(),
            failure: MockFailure::Never,
        }
    }
}

/// Builder for [`MockTool`].
pub struct MockToolBuilder {
    platform: HostPlatform,
    port: MockPort,
    failure: MockFailure,
}

impl MockToolBuilder {
    pub fn port(mut self, port: MockPort) -> Self {
        self.port = port;
        self
    }

    pub fn failure(mut self, failure: MockFailure) -> Self {
        self.failure = failure;
        self
    }

    pub fn build(self) -> MockTool {
        let log = CaptureLog::new();
        let executive = MockExecutive::new(log.clone(), self.failure);
        let tool = Tool::new(
            Box::new(executive.clone()),
            Box::new(self.port),
            MOCK_CHECKOUT_ROOT,
            self.platform,
            Box::new(log.clone()),
        );
        MockTool { tool, log, executive }
    }
}
