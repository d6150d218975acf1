use super::Val;
use crate::error;
use crate::lang::Error;
use std::cmp::Ordering;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

pub struct Operation {}

impl Operation {
    pub fn negate(val: Val) -> Result<Val> {
        Ok(Val::Number(-f64::try_from(&val)?))
    }

    pub fn not(val: Val) -> Result<Val> {
        Ok(Val::Boolean(!val.is_truthy()))
    }

    /// Concatenates when either side is a string.
    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (&lhs, &rhs) {
            (String(_), _) | (_, String(_)) => Ok(String(format!("{}{}", lhs, rhs).into())),
            (Number(l), Number(r)) => Ok(Number(l + r)),
            _ => Err(error!(TypeMismatch; format!(
                "CANNOT ADD {} AND {}",
                lhs.type_name(),
                rhs.type_name()
            ))),
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Number(f64::try_from(&lhs)? - f64::try_from(&rhs)?))
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Number(f64::try_from(&lhs)? * f64::try_from(&rhs)?))
    }

    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Number(f64::try_from(&lhs)? / f64::try_from(&rhs)?))
    }

    pub fn modulus(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Number(f64::try_from(&lhs)? % f64::try_from(&rhs)?))
    }

    pub fn equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Boolean(Operation::equal_bool(&lhs, &rhs)))
    }

    pub fn not_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Boolean(!Operation::equal_bool(&lhs, &rhs)))
    }

    pub fn less(lhs: Val, rhs: Val) -> Result<Val> {
        let ord = Operation::order(&lhs, &rhs)?;
        Ok(Val::Boolean(ord == Some(Ordering::Less)))
    }

    pub fn less_equal(lhs: Val, rhs: Val) -> Result<Val> {
        let ord = Operation::order(&lhs, &rhs)?;
        Ok(Val::Boolean(matches!(ord, Some(Ordering::Less) | Some(Ordering::Equal))))
    }

    pub fn greater(lhs: Val, rhs: Val) -> Result<Val> {
        let ord = Operation::order(&lhs, &rhs)?;
        Ok(Val::Boolean(ord == Some(Ordering::Greater)))
    }

    pub fn greater_equal(lhs: Val, rhs: Val) -> Result<Val> {
        let ord = Operation::order(&lhs, &rhs)?;
        Ok(Val::Boolean(matches!(ord, Some(Ordering::Greater) | Some(Ordering::Equal))))
    }

    fn equal_bool(lhs: &Val, rhs: &Val) -> bool {
        use Val::*;
        match (lhs, rhs) {
            (Boolean(l), Boolean(r)) => l == r,
            (Boolean(_), _) | (_, Boolean(_)) => false,
            (List(_), List(_)) => lhs == rhs,
            (Number(_), _) | (String(_), _) => {
                matches!(Operation::order(lhs, rhs), Ok(Some(Ordering::Equal)))
            }
            _ => false,
        }
    }

    /// `None` when the operands are unordered: NaN, or a number against a
    /// string that does not read as a number. Booleans order as 0 and 1,
    /// so a chain like `1 < 2 < 3` compares its first result numerically.
    fn order(lhs: &Val, rhs: &Val) -> Result<Option<Ordering>> {
        use Val::*;
        match (lhs, rhs) {
            (String(l), String(r)) => Ok(Some(l.cmp(r))),
            (List(_), _) | (_, List(_)) => Err(error!(TypeMismatch; format!(
                "CANNOT COMPARE {} WITH {}",
                lhs.type_name(),
                rhs.type_name()
            ))),
            _ => match (Operation::ordinal(lhs), Operation::ordinal(rhs)) {
                (Some(l), Some(r)) => Ok(l.partial_cmp(&r)),
                _ => Ok(None),
            },
        }
    }

    fn ordinal(val: &Val) -> Option<f64> {
        match val {
            Val::Boolean(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => val.to_number(),
        }
    }

    /// 1-based element of a list or character of a string.
    pub fn index(base: Val, index: Val) -> Result<Val> {
        match &base {
            Val::List(list) => {
                let list = list.borrow();
                let i = Operation::position(&index, list.len())?;
                Ok(list[i].clone())
            }
            Val::String(s) => {
                let i = Operation::position(&index, s.chars().count())?;
                match s.chars().nth(i) {
                    Some(ch) => Ok(Val::String(ch.to_string().into())),
                    None => Err(error!(SubscriptOutOfRange)),
                }
            }
            _ => Err(error!(TypeMismatch; format!("CANNOT INDEX {}", base.type_name()))),
        }
    }

    /// Convert a 1-based index into `0..len`.
    pub fn position(index: &Val, len: usize) -> Result<usize> {
        let n = f64::try_from(index)?;
        if n.fract() != 0.0 || n < 1.0 || n > len as f64 {
            return Err(error!(SubscriptOutOfRange; format!("{} NOT IN 1..{}", index, len)));
        }
        Ok(n as usize - 1)
    }

    /// Body count for `REPEAT n TIMES`; fractions round down, negatives
    /// and NaN run zero times.
    pub fn repeat_count(val: Val) -> Result<usize> {
        let n = f64::try_from(&val)?;
        if n.is_nan() || n <= 0.0 {
            return Ok(0);
        }
        if n >= usize::MAX as f64 {
            return Ok(usize::MAX);
        }
        Ok(n.floor() as usize)
    }
}
