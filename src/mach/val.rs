use crate::error;
use crate::lang::Error;
use std::cell::RefCell;
use std::convert::TryFrom;
use std::rc::Rc;

/// Lists are shared by reference; copies of a `Val::List` alias one sequence.
pub type List = Rc<RefCell<Vec<Val>>>;

#[derive(Debug, Clone)]
pub enum Val {
    Number(f64),
    String(Rc<str>),
    Boolean(bool),
    List(List),
}

impl Val {
    pub fn list(items: Vec<Val>) -> Val {
        Val::List(Rc::new(RefCell::new(items)))
    }

    /// false, 0, NaN and the empty string are false.
    pub fn is_truthy(&self) -> bool {
        match self {
            Val::Number(n) => *n != 0.0 && !n.is_nan(),
            Val::String(s) => !s.is_empty(),
            Val::Boolean(b) => *b,
            Val::List(_) => true,
        }
    }

    /// Numbers, and strings that read as numbers.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Val::Number(n) => Some(*n),
            Val::String(s) => parse_number(s),
            Val::Boolean(_) | Val::List(_) => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Val::Number(_) => "NUMBER",
            Val::String(_) => "STRING",
            Val::Boolean(_) => "BOOLEAN",
            Val::List(_) => "LIST",
        }
    }
}

fn parse_number(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Some(0.0);
    }
    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    match s.parse::<f64>() {
        Ok(n) if n.is_finite() => Some(n),
        _ => None,
    }
}

impl TryFrom<&Val> for f64 {
    type Error = Error;

    fn try_from(val: &Val) -> std::result::Result<Self, Self::Error> {
        match val.to_number() {
            Some(n) => Ok(n),
            None => Err(error!(TypeMismatch; format!("EXPECTED NUMBER, GOT {}", val.type_name()))),
        }
    }
}

impl From<f64> for Val {
    fn from(n: f64) -> Self {
        Val::Number(n)
    }
}

impl From<&str> for Val {
    fn from(s: &str) -> Self {
        Val::String(s.into())
    }
}

impl From<bool> for Val {
    fn from(b: bool) -> Self {
        Val::Boolean(b)
    }
}

/// Lists are equal only when they are the same list.
impl PartialEq for Val {
    fn eq(&self, other: &Val) -> bool {
        match (self, other) {
            (Val::Number(l), Val::Number(r)) => l == r,
            (Val::String(l), Val::String(r)) => l == r,
            (Val::Boolean(l), Val::Boolean(r)) => l == r,
            (Val::List(l), Val::List(r)) => Rc::ptr_eq(l, r),
            _ => false,
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Number(n) => {
                if n.is_nan() {
                    write!(f, "NaN")
                } else if n.is_infinite() {
                    write!(f, "{}", if *n > 0.0 { "Infinity" } else { "-Infinity" })
                } else if *n == 0.0 {
                    write!(f, "0")
                } else {
                    write!(f, "{}", n)
                }
            }
            Val::String(s) => write!(f, "{}", s),
            Val::Boolean(b) => write!(f, "{}", b),
            Val::List(list) => write_list(f, list),
        }
    }
}

/// Comma-join nested lists without recursion. A list already being
/// written renders as nothing, so a list that contains itself terminates.
fn write_list(f: &mut std::fmt::Formatter, list: &List) -> std::fmt::Result {
    let mut open: Vec<(List, usize)> = vec![(list.clone(), 0)];
    while let Some((current, index)) = open.last_mut() {
        let next = current.borrow().get(*index).cloned();
        let item = match next {
            Some(item) => item,
            None => {
                open.pop();
                continue;
            }
        };
        if *index > 0 {
            write!(f, ",")?;
        }
        *index += 1;
        match item {
            Val::List(inner) => {
                if !open.iter().any(|(list, _)| Rc::ptr_eq(list, &inner)) {
                    open.push((inner, 0));
                }
            }
            item => write!(f, "{}", item)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_numbers() {
        assert_eq!(Val::Number(6.0).to_string(), "6");
        assert_eq!(Val::Number(-0.0).to_string(), "0");
        assert_eq!(Val::Number(2.5).to_string(), "2.5");
        assert_eq!(Val::Number(0.1 + 0.2).to_string(), "0.30000000000000004");
        assert_eq!(Val::Number(1.0 / 0.0).to_string(), "Infinity");
        assert_eq!(Val::Number(-1.0 / 0.0).to_string(), "-Infinity");
        assert_eq!(Val::Number(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn test_display_others() {
        assert_eq!(Val::from(true).to_string(), "true");
        assert_eq!(Val::from("hi").to_string(), "hi");
        let inner = Val::list(vec![Val::from(2.0), Val::from("b")]);
        assert_eq!(Val::list(vec![Val::from(1.0), inner]).to_string(), "1,2,b");
        assert_eq!(Val::list(vec![]).to_string(), "");
        let gaps = Val::list(vec![Val::from(1.0), Val::list(vec![]), Val::from(2.0)]);
        assert_eq!(gaps.to_string(), "1,,2");
    }

    #[test]
    fn test_display_cycle() {
        let xs = Val::list(vec![Val::from(1.0)]);
        if let Val::List(list) = &xs {
            list.borrow_mut().push(xs.clone());
        }
        assert_eq!(xs.to_string(), "1,");
        let outer = Val::list(vec![xs.clone(), Val::from(3.0)]);
        assert_eq!(outer.to_string(), "1,,3");
    }

    #[test]
    fn test_truthiness() {
        assert!(!Val::from(0.0).is_truthy());
        assert!(!Val::from(f64::NAN).is_truthy());
        assert!(!Val::from("").is_truthy());
        assert!(!Val::from(false).is_truthy());
        assert!(Val::from("0").is_truthy());
        assert!(Val::list(vec![]).is_truthy());
    }

    #[test]
    fn test_to_number() {
        assert_eq!(Val::from(" 12 ").to_number(), Some(12.0));
        assert_eq!(Val::from("").to_number(), Some(0.0));
        assert_eq!(Val::from("1e3").to_number(), Some(1000.0));
        assert_eq!(Val::from("abc").to_number(), None);
        assert_eq!(Val::from("inf").to_number(), None);
        assert_eq!(Val::from(true).to_number(), None);
        assert!(f64::try_from(&Val::list(vec![])).is_err());
    }

    #[test]
    fn test_list_identity() {
        let a = Val::list(vec![Val::from(1.0)]);
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a, Val::list(vec![Val::from(1.0)]));
    }
}
