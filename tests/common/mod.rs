use apcsp::mach::{Config, InputProvider, Interpreter, Outcome, Output, OutputKind, Status, StatusObserver};
use std::collections::VecDeque;

/// Records everything a run emits and answers `INPUT` from a queue.
/// An empty queue cancels.
#[derive(Default)]
pub struct Console {
    pub lines: Vec<(String, OutputKind)>,
    pub prompts: Vec<Option<String>>,
    pub answers: VecDeque<String>,
    pub statuses: Vec<Status>,
}

impl Console {
    pub fn with_answers(answers: &[&str]) -> Console {
        Console {
            answers: answers.iter().map(|s| s.to_string()).collect(),
            ..Console::default()
        }
    }

    /// Normal output only.
    pub fn output(&self) -> Vec<&str> {
        self.of_kind(OutputKind::Normal)
    }

    pub fn of_kind(&self, kind: OutputKind) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(_, k)| *k == kind)
            .map(|(s, _)| s.as_str())
            .collect()
    }
}

impl Output for Console {
    fn emit(&mut self, line: &str, kind: OutputKind) {
        self.lines.push((line.to_string(), kind));
    }
}

impl InputProvider for Console {
    fn request_input(&mut self, prompt: Option<&str>) -> Option<String> {
        self.prompts.push(prompt.map(str::to_string));
        self.answers.pop_front()
    }
}

impl StatusObserver for Console {
    fn status_changed(&mut self, status: Status) {
        self.statuses.push(status);
    }
}

pub fn exec(source: &str) -> (Outcome, Console) {
    exec_with(source, &[], Config::default())
}

pub fn exec_with(source: &str, answers: &[&str], config: Config) -> (Outcome, Console) {
    let mut console = Console::with_answers(answers);
    let outcome = Interpreter::new(config).run(source, &mut console);
    (outcome, console)
}
