use super::{Operation, Val};
use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// The whitelist of callable built-ins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Input,
    Random,
    Length,
    Append,
    Insert,
    Remove,
}

impl Builtin {
    /// List mutation is only allowed as a whole statement, which keeps
    /// expression evaluation free of side effects.
    pub fn is_statement(self) -> bool {
        matches!(self, Builtin::Append | Builtin::Insert | Builtin::Remove)
    }
}

pub struct Function {}

impl Function {
    pub fn builtin_and_arity(name: &str) -> Option<(Builtin, std::ops::RangeInclusive<usize>)> {
        match name.to_ascii_uppercase().as_str() {
            "INPUT" => Some((Builtin::Input, 0..=1)),
            "RANDOM" => Some((Builtin::Random, 2..=2)),
            "LENGTH" => Some((Builtin::Length, 1..=1)),
            "APPEND" => Some((Builtin::Append, 2..=2)),
            "INSERT" => Some((Builtin::Insert, 3..=3)),
            "REMOVE" => Some((Builtin::Remove, 2..=2)),
            _ => None,
        }
    }

    pub fn check_arity(name: &str, arity: &std::ops::RangeInclusive<usize>, len: usize) -> Result<()> {
        if arity.contains(&len) {
            return Ok(());
        }
        let expected = if arity.start() == arity.end() {
            arity.start().to_string()
        } else {
            format!("{} TO {}", arity.start(), arity.end())
        };
        Err(error!(WrongNumberOfArguments; format!(
            "{} EXPECTS {}, GOT {}",
            name, expected, len
        )))
    }

    pub fn length(val: Val) -> Result<Val> {
        match &val {
            Val::List(list) => Ok(Val::Number(list.borrow().len() as f64)),
            Val::String(s) => Ok(Val::Number(s.chars().count() as f64)),
            _ => Err(error!(TypeMismatch; format!("NO LENGTH FOR {}", val.type_name()))),
        }
    }

    /// Validate `RANDOM(a, b)` bounds as an inclusive integer range.
    pub fn random_range(lo: Val, hi: Val) -> Result<(i64, i64)> {
        let lo = f64::try_from(&lo)?;
        let hi = f64::try_from(&hi)?;
        if !lo.is_finite() || !hi.is_finite() || lo.fract() != 0.0 || hi.fract() != 0.0 {
            return Err(error!(IllegalFunctionCall; "RANDOM NEEDS WHOLE NUMBERS"));
        }
        if lo > hi {
            return Err(error!(IllegalFunctionCall; format!("RANDOM({}, {}) IS EMPTY", lo, hi)));
        }
        Ok((lo as i64, hi as i64))
    }

    /// Apply a list-mutating built-in to already evaluated arguments.
    pub fn mutate(builtin: Builtin, mut args: Vec<Val>) -> Result<()> {
        let list = match args.first() {
            Some(Val::List(list)) => list.clone(),
            Some(val) => {
                return Err(error!(TypeMismatch; format!("EXPECTED LIST, GOT {}", val.type_name())))
            }
            None => return Err(error!(InternalError; "MISSING LIST")),
        };
        let mut list = list.borrow_mut();
        match (builtin, args.len()) {
            (Builtin::Append, 2) => {
                if let Some(val) = args.pop() {
                    list.push(val);
                }
            }
            (Builtin::Insert, 3) => {
                let i = Operation::position(&args[1], list.len() + 1)?;
                if let Some(val) = args.pop() {
                    list.insert(i, val);
                }
            }
            (Builtin::Remove, 2) => {
                let i = Operation::position(&args[1], list.len())?;
                list.remove(i);
            }
            _ => return Err(error!(InternalError; format!("{:?} IS NOT A LIST STATEMENT", builtin))),
        }
        Ok(())
    }

    /// `xs[i] ← v` on an existing element.
    pub fn store_element(base: Val, index: &Val, val: Val) -> Result<()> {
        match &base {
            Val::List(list) => {
                let mut list = list.borrow_mut();
                let i = Operation::position(index, list.len())?;
                list[i] = val;
                Ok(())
            }
            _ => Err(error!(TypeMismatch; format!("CANNOT ASSIGN INTO {}", base.type_name()))),
        }
    }
}
