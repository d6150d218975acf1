use super::{Config, Event, Program, Runtime, Status};
use crate::lang::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Normal,
    System,
    Error,
}

/// Receives every displayed line and every notice, in program order.
pub trait Output {
    fn emit(&mut self, line: &str, kind: OutputKind);
}

/// Answers `INPUT`. Returning `None` cancels the run.
pub trait InputProvider {
    fn request_input(&mut self, prompt: Option<&str>) -> Option<String>;
}

pub trait StatusObserver {
    fn status_changed(&mut self, _status: Status) {}
}

/// Everything a run talks to.
pub trait Host: Output + InputProvider + StatusObserver {}

impl<T: Output + InputProvider + StatusObserver> Host for T {}

/// Cooperative stop request, safe to trigger from another thread or a
/// signal handler. Observed before each statement.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> StopHandle {
        StopHandle::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn reset(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub status: Status,
    pub error: Option<Error>,
    pub steps: usize,
}

/// ## Interpreter
///
/// Owns no program state between runs; each `run` builds a fresh
/// `Program` and `Runtime`.
pub struct Interpreter {
    config: Config,
    stop: StopHandle,
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new(Config::default())
    }
}

impl Interpreter {
    pub fn new(config: Config) -> Interpreter {
        Interpreter {
            config,
            stop: StopHandle::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn stop(&self) {
        self.stop.stop();
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Preprocess, resolve, and execute `source` to completion. A stop
    /// requested before the run starts is discarded.
    pub fn run<H: Host>(&mut self, source: &str, host: &mut H) -> Outcome {
        self.stop.reset();
        host.status_changed(Status::Parsing);
        let program = match Program::compile(source, self.config.tab_width) {
            Ok(program) => program,
            Err(error) => {
                host.emit(&error.to_string(), OutputKind::Error);
                host.status_changed(Status::Crashed);
                return Outcome {
                    status: Status::Crashed,
                    error: Some(error),
                    steps: 0,
                };
            }
        };
        let mut runtime = Runtime::new(program, &self.config, self.stop.clone());
        host.status_changed(Status::Running);
        let mut error = None;
        loop {
            match runtime.execute(self.config.cycles) {
                Event::Running => {}
                Event::Print(s) => host.emit(&s, OutputKind::Normal),
                Event::Input(prompt) => match host.request_input(prompt.as_deref()) {
                    Some(answer) => runtime.enter(&answer),
                    None => runtime.cancel(),
                },
                Event::Error(e) => {
                    host.emit(&e.to_string(), OutputKind::Error);
                    error = Some(e);
                }
                Event::Halted(status) => {
                    if status == Status::Stopped && error.is_none() {
                        host.emit(
                            &format!("STOPPED IN LINE {}", runtime.pc() + 1),
                            OutputKind::System,
                        );
                    }
                    host.status_changed(status);
                    return Outcome {
                        status,
                        error,
                        steps: runtime.steps(),
                    };
                }
            }
        }
    }
}
