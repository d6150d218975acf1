/*!
## Rust Machine Module

This Rust module resolves and executes AP CSP pseudocode programs.

*/

mod block;
mod config;
mod evaluate;
mod frame;
mod function;
mod interpreter;
mod operation;
mod procedure;
mod program;
mod runtime;
mod tape;
mod val;
mod var;

pub use block::{BlockInfo, BlockKind, Blocks};
pub use config::Config;
pub use evaluate::{Evaluator, Halt};
pub use frame::{Frame, Loop, Place};
pub use function::{Builtin, Function};
pub use interpreter::{
    Host, InputProvider, Interpreter, OutputKind, Output, Outcome, StatusObserver, StopHandle,
};
pub use operation::Operation;
pub use procedure::{ProcedureDef, Procedures};
pub use program::Program;
pub use runtime::{Event, Runtime, Status};
pub use tape::Tape;
pub use val::{List, Val};
pub use var::Var;

#[cfg(test)]
mod tests;
