use crate::error;
use crate::lang::{is_reserved, keyword, parse_procedure_header, Error, Keyword, Line};
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq)]
pub struct ProcedureDef {
    pub name: Rc<str>,
    pub params: Vec<Rc<str>>,
    pub header: usize,
    /// First body line; the body runs `body_start..body_end`.
    pub body_start: usize,
    /// Index of the `END PROCEDURE` line.
    pub body_end: usize,
}

/// ## Procedure table
#[derive(Debug, Default)]
pub struct Procedures {
    by_name: HashMap<Rc<str>, Rc<ProcedureDef>>,
    by_header: HashMap<usize, Rc<ProcedureDef>>,
}

impl Procedures {
    pub fn build(lines: &[Line]) -> Result<Procedures> {
        let mut procedures = Procedures::default();
        let mut open: Option<(usize, Rc<str>, Vec<Rc<str>>)> = None;
        for line in lines {
            let index = line.index();
            match keyword(line.text()) {
                Some(Keyword::Procedure) => {
                    if open.is_some() {
                        return Err(error!(NestedProcedure, Some(index)));
                    }
                    let (name, params) = parse_procedure_header(line.text())
                        .map_err(|e| e.in_line_number(Some(index)))?;
                    if is_reserved(&name) {
                        return Err(error!(ReservedName, Some(index); &*name));
                    }
                    if procedures.by_name.contains_key(&name) {
                        return Err(error!(DuplicateProcedure, Some(index); &*name));
                    }
                    open = Some((index, name, params));
                }
                Some(Keyword::EndProcedure) => match open.take() {
                    Some((header, name, params)) => {
                        let def = Rc::new(ProcedureDef {
                            name: name.clone(),
                            params,
                            header,
                            body_start: header + 1,
                            body_end: index,
                        });
                        procedures.by_header.insert(header, def.clone());
                        procedures.by_name.insert(name, def);
                    }
                    None => return Err(error!(EndProcedureWithoutProcedure, Some(index))),
                },
                _ => {}
            }
        }
        if let Some((header, name, _)) = open {
            return Err(error!(UnclosedProcedure, Some(header); &*name));
        }
        Ok(procedures)
    }

    pub fn get(&self, name: &str) -> Option<Rc<ProcedureDef>> {
        self.by_name.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// The `END PROCEDURE` index for a header line.
    pub fn end_of(&self, header: usize) -> Option<usize> {
        self.by_header.get(&header).map(|def| def.body_end)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
