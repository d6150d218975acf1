use super::evaluate::{Evaluator, Halt};
use super::frame::{resolve, Frame, Loop, Place};
use super::{Config, Function, Operation, Program, StopHandle, Tape, Val};
use crate::error;
use crate::lang::ast::{Expression, Statement, Target};
use crate::lang::{Error, ErrorKind};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Halt>;

/// ## Events
///
/// What `Runtime::execute` hands back to the host between slices.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The slice ran out of cycles; call `execute` again.
    Running,
    Print(String),
    /// Answer with `enter` or `cancel`, then call `execute` again.
    Input(Option<String>),
    /// The run failed; `Halted` follows.
    Error(Error),
    Halted(Status),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Parsing,
    Running,
    Stopped,
    Crashed,
    Finished,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Stopped | Status::Crashed | Status::Finished)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            Status::Parsing => "Parsing",
            Status::Running => "Running",
            Status::Stopped => "Stopped",
            Status::Crashed => "Crashed",
            Status::Finished => "Finished",
        };
        write!(f, "{}", s)
    }
}

/// ## Program counter machine
pub struct Runtime {
    program: Program,
    pc: usize,
    frames: Vec<Frame>,
    tape: Tape,
    steps: usize,
    step_limit: usize,
    status: Status,
    waiting: Option<Option<String>>,
    resuming: bool,
    failure: Option<Error>,
    stop: StopHandle,
}

impl Runtime {
    pub fn new(program: Program, config: &Config, stop: StopHandle) -> Runtime {
        Runtime {
            program,
            pc: 0,
            frames: vec![Frame::global()],
            tape: Tape::new(config.seed),
            steps: 0,
            step_limit: config.step_limit,
            status: Status::Running,
            waiting: None,
            resuming: false,
            failure: None,
            stop,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Statements executed so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Index of the next line to execute.
    pub fn pc(&self) -> usize {
        self.pc
    }

    /// Global variable, for hosts and tests that inspect a finished run.
    pub fn global(&self, var_name: &str) -> Option<&Val> {
        self.frames.first()?.vars.fetch(var_name)
    }

    /// Answer the pending `INPUT`.
    pub fn enter(&mut self, answer: &str) {
        if self.waiting.take().is_some() {
            self.tape.record(Val::String(answer.into()));
        }
    }

    /// Reject the pending `INPUT`; the run ends Stopped.
    pub fn cancel(&mut self) {
        if self.waiting.take().is_some() {
            self.failure = Some(error!(InputCancelled, Some(self.pc)));
        }
    }

    pub fn interrupt(&mut self) {
        self.stop.stop();
    }

    pub fn execute(&mut self, cycles: usize) -> Event {
        if let Some(error) = self.failure.take() {
            return self.fail(error);
        }
        if self.status.is_terminal() {
            return Event::Halted(self.status);
        }
        if self.stop.is_stopped() {
            self.status = Status::Stopped;
            return Event::Halted(self.status);
        }
        if let Some(prompt) = &self.waiting {
            return Event::Input(prompt.clone());
        }
        for _ in 0..cycles {
            if self.pc >= self.program.len() {
                self.status = Status::Finished;
                return Event::Halted(self.status);
            }
            if self.stop.is_stopped() {
                self.status = Status::Stopped;
                return Event::Halted(self.status);
            }
            match self.step() {
                Ok(None) => {}
                Ok(Some(event)) => return event,
                Err(Halt::Input(prompt)) => {
                    self.waiting = Some(prompt.clone());
                    return Event::Input(prompt);
                }
                Err(Halt::Error(error)) => return self.fail(error),
            }
        }
        Event::Running
    }

    fn fail(&mut self, error: Error) -> Event {
        self.status = match error.kind() {
            ErrorKind::InputCancelled | ErrorKind::StepLimitExceeded => Status::Stopped,
            _ => Status::Crashed,
        };
        Event::Error(error)
    }

    fn step(&mut self) -> Result<Option<Event>> {
        let index = self.pc;
        if self.program.line(index).map_or(true, |line| line.is_empty()) {
            self.pc += 1;
            return Ok(None);
        }
        if !self.resuming {
            if self.steps >= self.step_limit {
                return Err(error!(StepLimitExceeded, Some(index);
                    format!("{} STATEMENTS", self.step_limit))
                .into());
            }
            self.steps += 1;
        }
        self.resuming = false;
        self.tape.rewind();
        let statement = self.program.statement(index)?;
        self.pc += 1;
        let result = self.dispatch(index, &statement);
        match result {
            Err(Halt::Input(_)) => {
                self.pc = index;
                self.resuming = true;
            }
            _ => self.tape.clear(),
        }
        result.map_err(|halt| match halt {
            Halt::Error(error) => Halt::Error(error.or_line_number(Some(index))),
            halt => halt,
        })
    }

    fn dispatch(&mut self, index: usize, statement: &Statement) -> Result<Option<Event>> {
        match statement {
            Statement::Nop | Statement::EndIf => {}
            Statement::Display(args) => {
                let mut parts = Vec::with_capacity(args.len());
                for arg in args {
                    parts.push(self.evaluate(arg)?.to_string());
                }
                return Ok(Some(Event::Print(parts.join(" "))));
            }
            Statement::Assign(target, expr) => {
                if let Expression::Call(name, args) = expr {
                    if self.program.procedures().contains(name) {
                        let place = self.place(target)?;
                        return self.call(name, args, Some(place));
                    }
                }
                let val = self.evaluate(expr)?;
                let place = self.place(target)?;
                self.store(place, val)?;
            }
            Statement::If(cond) => {
                if !self.evaluate(cond)?.is_truthy() {
                    let (else_index, end_index) = match self.program.blocks().get(index) {
                        Some(info) => (info.else_index, info.end_index),
                        None => return Err(unresolved(index)),
                    };
                    self.pc = else_index.unwrap_or(end_index) + 1;
                }
            }
            Statement::Else => {
                let end_index = self
                    .program
                    .blocks()
                    .opening(index)
                    .and_then(|opening| self.program.blocks().get(opening))
                    .map(|info| info.end_index)
                    .ok_or_else(|| unresolved(index))?;
                self.pc = end_index + 1;
            }
            Statement::RepeatTimes(count) => self.repeat_times(index, count)?,
            Statement::RepeatUntil(cond) => {
                self.frame_mut().loops.insert(index, Loop::Until(cond.clone()));
            }
            Statement::EndRepeat => {
                let opening = match self.program.blocks().opening(index) {
                    Some(opening) => opening,
                    None => return Err(unresolved(index)),
                };
                match self.frame().loops.get(&opening).cloned() {
                    Some(Loop::Times { .. }) => self.pc = opening,
                    Some(Loop::Until(cond)) => {
                        if self.evaluate(&cond)?.is_truthy() {
                            self.frame_mut().loops.remove(&opening);
                        } else {
                            self.pc = opening + 1;
                        }
                    }
                    None => return Err(unresolved(index)),
                }
            }
            Statement::Procedure => match self.program.procedures().end_of(index) {
                Some(end) => self.pc = end + 1,
                None => return Err(unresolved(index)),
            },
            Statement::EndProcedure => {
                if self.frames.len() > 1 {
                    self.return_from(None)?;
                }
            }
            Statement::Call(name, args) => return self.call(name, args, None),
            Statement::Return(expr) => {
                if self.frames.len() <= 1 {
                    return Err(error!(ReturnWithoutProcedure).into());
                }
                let val = match expr {
                    Some(expr) => Some(self.evaluate(expr)?),
                    None => None,
                };
                self.return_from(val)?;
            }
        }
        Ok(None)
    }

    fn repeat_times(&mut self, index: usize, count: &Expression) -> Result<()> {
        let end_index = match self.program.blocks().get(index) {
            Some(info) => info.end_index,
            None => return Err(unresolved(index)),
        };
        if !self.frame().loops.contains_key(&index) {
            let limit = Operation::repeat_count(self.evaluate(count)?)?;
            self.frame_mut()
                .loops
                .insert(index, Loop::Times { count: 0, limit });
        }
        let done = match self.frame_mut().loops.get_mut(&index) {
            Some(Loop::Times { count, limit }) => {
                *count += 1;
                *count > *limit
            }
            _ => true,
        };
        if done {
            self.frame_mut().loops.remove(&index);
            self.pc = end_index + 1;
        }
        Ok(())
    }

    fn call(&mut self, name: &Rc<str>, args: &[Expression], place: Option<Place>) -> Result<Option<Event>> {
        if let Some((builtin, arity)) = Function::builtin_and_arity(name) {
            if builtin.is_statement() {
                Function::check_arity(name, &arity, args.len())?;
                let mut vals = Vec::with_capacity(args.len());
                for arg in args {
                    vals.push(self.evaluate(arg)?);
                }
                Function::mutate(builtin, vals)?;
            } else {
                self.evaluator().call(name, args)?;
            }
            return Ok(None);
        }
        let def = match self.program.procedures().get(name) {
            Some(def) => def,
            None => return Err(error!(UndefinedProcedure; &**name).into()),
        };
        if args.len() != def.params.len() {
            return Err(error!(WrongNumberOfArguments; format!(
                "{} EXPECTS {}, GOT {}",
                name,
                def.params.len(),
                args.len()
            ))
            .into());
        }
        let mut frame = Frame::new(self.pc, place);
        for (param, arg) in def.params.iter().zip(args) {
            let val = self.evaluate(arg)?;
            frame.vars.store(param, val);
        }
        self.frames.push(frame);
        self.pc = def.body_start;
        Ok(None)
    }

    fn return_from(&mut self, val: Option<Val>) -> Result<()> {
        let frame = match self.frames.pop() {
            Some(frame) => frame,
            None => return Err(error!(InternalError; "NO FRAME").into()),
        };
        self.pc = frame.return_pc;
        let call_line = Some(frame.return_pc.saturating_sub(1));
        if let Some(place) = frame.place {
            match val {
                Some(val) => self
                    .store(place, val)
                    .map_err(|e| e.in_line_number(call_line))?,
                None => {
                    return Err(error!(IllegalFunctionCall, call_line;
                        "PROCEDURE RETURNED NO VALUE")
                    .into())
                }
            }
        }
        Ok(())
    }

    fn place(&mut self, target: &Target) -> Result<Place> {
        match target {
            Target::Var(name) => Ok(Place::Var(name.clone())),
            Target::Index(name, index) => {
                let index = self.evaluate(index)?;
                Ok(Place::Element(name.clone(), index))
            }
        }
    }

    /// Writes always land in the current frame; element writes go through
    /// whichever list the name resolves to.
    fn store(&mut self, place: Place, val: Val) -> std::result::Result<(), Error> {
        match place {
            Place::Var(name) => {
                self.frame_mut().vars.store(&name, val);
                Ok(())
            }
            Place::Element(name, index) => {
                let list = match resolve(&self.frames, &name) {
                    Some(list) => list.clone(),
                    None => return Err(error!(UndefinedVariable; &*name)),
                };
                Function::store_element(list, &index, val)
            }
        }
    }

    fn evaluator(&mut self) -> Evaluator {
        Evaluator::new(&self.frames, self.program.procedures(), &mut self.tape)
    }

    fn evaluate(&mut self, expr: &Expression) -> Result<Val> {
        self.evaluator().evaluate(expr)
    }

    fn frame(&self) -> &Frame {
        &self.frames[self.frames.len() - 1]
    }

    fn frame_mut(&mut self) -> &mut Frame {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }
}

fn unresolved(index: usize) -> Halt {
    error!(InternalError, Some(index); "UNRESOLVED BLOCK").into()
}
