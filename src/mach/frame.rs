use super::{Val, Var};
use crate::lang::ast::Expression;
use std::collections::HashMap;
use std::rc::Rc;

/// Hidden control state of a loop, keyed by its opening line.
#[derive(Debug, Clone)]
pub enum Loop {
    Times { count: usize, limit: usize },
    Until(Rc<Expression>),
}

/// Where a procedure's result is bound in the caller. The subscript is
/// evaluated before the call so returning never evaluates caller code.
#[derive(Debug, Clone)]
pub enum Place {
    Var(Rc<str>),
    Element(Rc<str>, Val),
}

/// One scope on the call stack. The first frame is the global scope.
#[derive(Debug)]
pub struct Frame {
    pub return_pc: usize,
    pub place: Option<Place>,
    pub vars: Var,
    pub loops: HashMap<usize, Loop>,
}

impl Frame {
    pub fn global() -> Frame {
        Frame::new(0, None)
    }

    pub fn new(return_pc: usize, place: Option<Place>) -> Frame {
        Frame {
            return_pc,
            place,
            vars: Var::new(),
            loops: HashMap::new(),
        }
    }
}

/// Look a name up in the innermost frame, then the global frame.
pub fn resolve<'a>(frames: &'a [Frame], var_name: &str) -> Option<&'a Val> {
    let (current, rest) = frames.split_last()?;
    match current.vars.fetch(var_name) {
        Some(val) => Some(val),
        None => rest.first()?.vars.fetch(var_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_skips_caller_locals() {
        let mut global = Frame::global();
        global.vars.store(&"g".into(), Val::from(1.0));
        let mut caller = Frame::new(3, None);
        caller.vars.store(&"local".into(), Val::from(2.0));
        let mut callee = Frame::new(9, None);
        callee.vars.store(&"g".into(), Val::from(3.0));
        let frames = vec![global, caller, callee];
        assert_eq!(resolve(&frames, "g"), Some(&Val::from(3.0)));
        assert_eq!(resolve(&frames, "local"), None);
        assert_eq!(resolve(&frames[..2], "local"), Some(&Val::from(2.0)));
        assert_eq!(resolve(&frames[..2], "g"), Some(&Val::from(1.0)));
        assert_eq!(resolve(&frames[..1], "g"), Some(&Val::from(1.0)));
        assert_eq!(resolve(&[], "g"), None);
    }
}
