//! Transcript tests for the `RunTests` step against the mock tool.

use webkit_patch::mocktool::{MockFailure, MockPort, MockTool};
use webkit_patch::{RunTests, Step, StepOptions, StepState};

const EXPECTED_LOGS: &str = "\
Running bindings generation tests
MOCK run_and_throw_if_fail: ['mock-run-bindings-tests'], cwd=/mock-checkout
Running WebKit unit tests
MOCK run_and_throw_if_fail: ['mock-run-webkit-unit-tests'], cwd=/mock-checkout
Running run-webkit-tests
MOCK run_and_throw_if_fail: ['mock-run-webkit-tests', '--no-new-test-results', '--no-show-results', '--exit-after-n-failures=30', '--quiet', '--skip-failing-tests'], cwd=/mock-checkout
";

const EXPECTED_CYGWIN_LOGS: &str = "\
Running bindings generation tests
MOCK run_and_throw_if_fail: ['mock-run-bindings-tests'], cwd=/mock-checkout
Running WebKit unit tests
MOCK run_and_throw_if_fail: ['mock-run-webkit-unit-tests'], cwd=/mock-checkout
Running run-webkit-tests
MOCK run_and_throw_if_fail: ['mock-run-webkit-tests', '--no-new-test-results', '--no-show-results', '--exit-after-n-failures=30', '--no-build'], cwd=/mock-checkout
";

fn options() -> StepOptions {
    StepOptions::new().with_test(true).with_non_interactive(true).with_quiet(false)
}

fn run_on(platform: &str) -> MockTool {
    let mock = MockTool::new(platform);
    RunTests::new(&mock.tool, options())
        .run(&mut StepState::new())
        .expect("all mock commands succeed");
    mock
}

#[test]
fn test_webkit_run_unit_tests() {
    let mock = run_on("linux");
    assert_eq!(mock.log.contents(), EXPECTED_LOGS);
}

#[test]
fn test_webkit_run_unit_tests_on_cygwin() {
    let mock = run_on("cygwin");
    assert_eq!(mock.log.contents(), EXPECTED_CYGWIN_LOGS);
}

#[test]
fn test_near_cygwin_platform_uses_default_flags() {
    assert_eq!(run_on("cygwin1").log.contents(), EXPECTED_LOGS);
    assert_eq!(run_on("darwin").log.contents(), EXPECTED_LOGS);
}

#[test]
fn test_three_invocations_from_checkout_root() {
    let mock = run_on("linux");
    let calls = mock.executive.calls();

    assert_eq!(calls.len(), 3);
    assert_eq!(mock.log.lines().len(), 6);
    for call in &calls {
        assert_eq!(call.cwd.to_str(), Some("/mock-checkout"));
    }
    assert_eq!(calls[0].command, vec!["mock-run-bindings-tests"]);
    assert_eq!(calls[1].command, vec!["mock-run-webkit-unit-tests"]);
    assert_eq!(calls[2].command[0], "mock-run-webkit-tests");
}

#[test]
fn test_runs_are_independent() {
    let first = run_on("linux").log.contents();
    let second = run_on("linux").log.contents();
    assert_eq!(first, second);
}

#[test]
fn test_failure_at_each_command_stops_the_sequence() {
    let headings = [
        "Running bindings generation tests",
        "Running WebKit unit tests",
        "Running run-webkit-tests",
    ];

    for failing in 0..3 {
        let mock = MockTool::with_failure("linux", MockFailure::OnCall(failing));
        let result = RunTests::new(&mock.tool, options()).run(&mut StepState::new());

        let err = result.expect_err("failure must propagate");
        assert_eq!(err.exit_code(), Some(1));
        assert_eq!(mock.executive.calls().len(), failing + 1);

        // Lines already written stay; nothing after the failing command is logged.
        let lines = mock.log.lines();
        assert_eq!(lines.len(), 2 * (failing + 1));
        assert_eq!(lines[2 * failing], headings[failing]);
        assert!(lines.last().unwrap().starts_with("MOCK run_and_throw_if_fail: "));
    }
}

#[test]
fn test_failure_in_any_suite_stops_the_sequence() {
    let suites = [
        ("Running Python unit tests", "mock-test-webkitpy"),
        ("Running Perl unit tests", "mock-test-webkitperl"),
        ("Running JavaScriptCore tests", "mock-run-javascriptcore-tests"),
        ("Running bindings generation tests", "mock-run-bindings-tests"),
        ("Running WebKit unit tests", "mock-run-webkit-unit-tests"),
        ("Running run-webkit-tests", "mock-run-webkit-tests"),
    ];

    for (failing, (heading, program)) in suites.iter().enumerate() {
        let port = MockPort::new()
            .with_python_unittests(vec!["mock-test-webkitpy".to_string()])
            .with_perl_unittests(vec!["mock-test-webkitperl".to_string()])
            .with_javascriptcore_tests(vec!["mock-run-javascriptcore-tests".to_string()]);
        let mock = MockTool::builder("linux")
            .port(port)
            .failure(MockFailure::OnCall(failing))
            .build();

        let err = RunTests::new(&mock.tool, StepOptions::new())
            .run(&mut StepState::new())
            .expect_err("failure must propagate");

        assert_eq!(err.exit_code(), Some(1));
        assert_eq!(mock.executive.calls().len(), failing + 1);

        let lines = mock.log.lines();
        assert_eq!(lines.len(), 2 * (failing + 1));
        assert_eq!(lines[lines.len() - 2], *heading);
        assert_eq!(
            lines[lines.len() - 1],
            format!("MOCK run_and_throw_if_fail: ['{}'], cwd=/mock-checkout", program)
        );
    }
}

#[test]
fn test_failure_message_names_the_command() {
    let mock = MockTool::with_failure("linux", MockFailure::OnCall(1));
    let err = RunTests::new(&mock.tool, options())
        .run(&mut StepState::new())
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Failed to run \"['mock-run-webkit-unit-tests']\" exit_code: 1 cwd: /mock-checkout"
    );
}

#[test]
fn test_quiet_interactive_transcript() {
    let mock = MockTool::new("linux");
    let options = StepOptions::new().with_quiet(true);
    RunTests::new(&mock.tool, options).run(&mut StepState::new()).unwrap();

    insta::assert_snapshot!(mock.log.contents(), @r"
    Running bindings generation tests
    MOCK run_and_throw_if_fail: ['mock-run-bindings-tests'], cwd=/mock-checkout
    Running WebKit unit tests
    MOCK run_and_throw_if_fail: ['mock-run-webkit-unit-tests'], cwd=/mock-checkout
    Running run-webkit-tests
    MOCK run_and_throw_if_fail: ['mock-run-webkit-tests', '--quiet'], cwd=/mock-checkout
    ");
}

#[test]
fn test_state_is_left_untouched() {
    let mock = MockTool::new("linux");
    let mut state = StepState::new();
    state.insert("bug_id", "50000");

    RunTests::new(&mock.tool, options()).run(&mut state).unwrap();
    assert_eq!(state.get("bug_id"), Some("50000"));
}
