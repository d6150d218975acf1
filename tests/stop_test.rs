mod common;
use apcsp::lang::{ErrorCode, ErrorKind};
use apcsp::mach::{
    Config, InputProvider, Interpreter, Output, OutputKind, Status, StatusObserver, StopHandle,
};
use common::*;

#[test]
fn test_step_limit_stops() {
    let (outcome, console) = exec("x ← 0\nREPEAT UNTIL x < 0\nx ← x + 1\nEND REPEAT");
    assert_eq!(outcome.status, Status::Stopped);
    let error = outcome.error.unwrap();
    assert_eq!(error.kind(), ErrorKind::StepLimitExceeded);
    assert_eq!(outcome.steps, 20000);
    assert_eq!(console.of_kind(OutputKind::Error).len(), 1);
}

#[test]
fn test_step_limit_configurable() {
    let config = Config {
        step_limit: 5,
        ..Config::default()
    };
    let (outcome, console) = exec_with("REPEAT 10 TIMES\nDISPLAY(1)\nEND REPEAT", &[], config);
    assert_eq!(outcome.error.unwrap().code(), ErrorCode::StepLimitExceeded);
    assert_eq!(console.output(), vec!["1", "1"]);
}

/// Requests a stop after a number of displayed lines.
struct Impatient {
    handle: StopHandle,
    seen: usize,
    patience: usize,
    lines: Vec<(String, OutputKind)>,
}

impl Output for Impatient {
    fn emit(&mut self, line: &str, kind: OutputKind) {
        self.lines.push((line.to_string(), kind));
        if kind == OutputKind::Normal {
            self.seen += 1;
            if self.seen == self.patience {
                self.handle.stop();
            }
        }
    }
}

impl InputProvider for Impatient {
    fn request_input(&mut self, _prompt: Option<&str>) -> Option<String> {
        None
    }
}

impl StatusObserver for Impatient {}

#[test]
fn test_stop_request() {
    let mut interpreter = Interpreter::default();
    let mut host = Impatient {
        handle: interpreter.stop_handle(),
        seen: 0,
        patience: 3,
        lines: vec![],
    };
    let outcome = interpreter.run("REPEAT UNTIL false\nDISPLAY(\"tick\")\nEND REPEAT", &mut host);
    assert_eq!(outcome.status, Status::Stopped);
    assert_eq!(outcome.error, None);
    let ticks = host.lines.iter().filter(|(s, _)| s == "tick").count();
    assert_eq!(ticks, 3);
    assert_eq!(
        host.lines.last(),
        Some(&("STOPPED IN LINE 3".to_string(), OutputKind::System))
    );
}

#[test]
fn test_stale_stop_is_cleared() {
    let mut interpreter = Interpreter::default();
    interpreter.stop();
    let mut console = Console::default();
    let outcome = interpreter.run("DISPLAY(1)", &mut console);
    assert_eq!(outcome.status, Status::Finished);
    assert_eq!(console.output(), vec!["1"]);
}

#[test]
fn test_independent_interpreters() {
    let mut a = Interpreter::default();
    let mut b = Interpreter::default();
    a.stop_handle().stop();
    let mut console = Console::default();
    let outcome = b.run("x ← 1\nDISPLAY(x)", &mut console);
    assert_eq!(outcome.status, Status::Finished);
    let outcome = a.run("DISPLAY(x)", &mut Console::default());
    assert_eq!(outcome.status, Status::Crashed);
}
