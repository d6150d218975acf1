use super::frame::{resolve, Frame};
use super::{Builtin, Function, Operation, Procedures, Tape, Val};
use crate::error;
use crate::lang::ast::Expression;
use crate::lang::Error;

/// Why evaluation did not produce a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Halt {
    Error(Error),
    /// Waiting for an answer to `INPUT` with this prompt.
    Input(Option<String>),
}

impl From<Error> for Halt {
    fn from(error: Error) -> Self {
        Halt::Error(error)
    }
}

type Result<T> = std::result::Result<T, Halt>;

/// Evaluates expressions against a call stack. Reads see the innermost
/// frame, then the global frame.
pub struct Evaluator<'a> {
    frames: &'a [Frame],
    procedures: &'a Procedures,
    tape: &'a mut Tape,
}

impl<'a> Evaluator<'a> {
    pub fn new(frames: &'a [Frame], procedures: &'a Procedures, tape: &'a mut Tape) -> Evaluator<'a> {
        Evaluator {
            frames,
            procedures,
            tape,
        }
    }

    pub fn lookup(&self, var_name: &str) -> std::result::Result<Val, Error> {
        match resolve(self.frames, var_name) {
            Some(val) => Ok(val.clone()),
            None => Err(error!(UndefinedVariable; var_name)),
        }
    }

    pub fn evaluate(&mut self, expr: &Expression) -> Result<Val> {
        use Expression::*;
        match expr {
            Number(n) => Ok(Val::Number(*n)),
            String(s) => Ok(Val::String(s.clone())),
            Boolean(b) => Ok(Val::Boolean(*b)),
            List(items) => {
                let mut v = Vec::with_capacity(items.len());
                for item in items {
                    v.push(self.evaluate(item)?);
                }
                Ok(Val::list(v))
            }
            Var(name) => Ok(self.lookup(name)?),
            Index(base, index) => {
                let base = self.evaluate(base)?;
                let index = self.evaluate(index)?;
                Ok(Operation::index(base, index)?)
            }
            Call(name, args) => self.call(name, args),
            Negation(expr) => Ok(Operation::negate(self.evaluate(expr)?)?),
            Not(expr) => Ok(Operation::not(self.evaluate(expr)?)?),
            And(lhs, rhs) => {
                if !self.evaluate(lhs)?.is_truthy() {
                    return Ok(Val::Boolean(false));
                }
                Ok(Val::Boolean(self.evaluate(rhs)?.is_truthy()))
            }
            Or(lhs, rhs) => {
                if self.evaluate(lhs)?.is_truthy() {
                    return Ok(Val::Boolean(true));
                }
                Ok(Val::Boolean(self.evaluate(rhs)?.is_truthy()))
            }
            Multiply(lhs, rhs) => self.binary(lhs, rhs, Operation::multiply),
            Divide(lhs, rhs) => self.binary(lhs, rhs, Operation::divide),
            Modulus(lhs, rhs) => self.binary(lhs, rhs, Operation::modulus),
            Add(lhs, rhs) => self.binary(lhs, rhs, Operation::sum),
            Subtract(lhs, rhs) => self.binary(lhs, rhs, Operation::subtract),
            Equal(lhs, rhs) => self.binary(lhs, rhs, Operation::equal),
            NotEqual(lhs, rhs) => self.binary(lhs, rhs, Operation::not_equal),
            Less(lhs, rhs) => self.binary(lhs, rhs, Operation::less),
            LessEqual(lhs, rhs) => self.binary(lhs, rhs, Operation::less_equal),
            Greater(lhs, rhs) => self.binary(lhs, rhs, Operation::greater),
            GreaterEqual(lhs, rhs) => self.binary(lhs, rhs, Operation::greater_equal),
        }
    }

    fn binary(
        &mut self,
        lhs: &Expression,
        rhs: &Expression,
        op: fn(Val, Val) -> std::result::Result<Val, Error>,
    ) -> Result<Val> {
        let lhs = self.evaluate(lhs)?;
        let rhs = self.evaluate(rhs)?;
        Ok(op(lhs, rhs)?)
    }

    /// Call a built-in that yields a value.
    pub fn call(&mut self, name: &str, args: &[Expression]) -> Result<Val> {
        let (builtin, arity) = match Function::builtin_and_arity(name) {
            Some(found) => found,
            None if self.procedures.contains(name) => {
                return Err(error!(IllegalFunctionCall; format!(
                    "{} MUST BE CALLED ON ITS OWN OR ASSIGNED",
                    name
                ))
                .into())
            }
            None => return Err(error!(UndefinedProcedure; name).into()),
        };
        Function::check_arity(name, &arity, args.len())?;
        match builtin {
            Builtin::Input => {
                let prompt = match args.first() {
                    Some(expr) => Some(self.evaluate(expr)?.to_string()),
                    None => None,
                };
                match self.tape.replay() {
                    Some(answer) => Ok(answer),
                    None => Err(Halt::Input(prompt)),
                }
            }
            Builtin::Random => {
                let lo = self.evaluate(&args[0])?;
                let hi = self.evaluate(&args[1])?;
                let (lo, hi) = Function::random_range(lo, hi)?;
                Ok(self.tape.random(lo, hi))
            }
            Builtin::Length => Ok(Function::length(self.evaluate(&args[0])?)?),
            Builtin::Append | Builtin::Insert | Builtin::Remove => {
                Err(error!(IllegalFunctionCall; format!("{} IS A STATEMENT", name)).into())
            }
        }
    }
}
