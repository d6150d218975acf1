use super::{Blocks, Procedures};
use crate::error;
use crate::lang::ast::Statement;
use crate::lang::{parse_statement, preprocess, Error, Line};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// A preprocessed program with its static metadata. Statements are parsed
/// the first time they execute, so a bad statement on a line that never
/// runs is never reported.
#[derive(Debug)]
pub struct Program {
    lines: Vec<Line>,
    statements: Vec<Option<Rc<Statement>>>,
    blocks: Blocks,
    procedures: Procedures,
}

impl Program {
    pub fn compile(source: &str, tab_width: usize) -> Result<Program> {
        let lines = preprocess(source, tab_width);
        let blocks = Blocks::resolve(&lines)?;
        let procedures = Procedures::build(&lines)?;
        Ok(Program {
            statements: vec![None; lines.len()],
            lines,
            blocks,
            procedures,
        })
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    pub fn blocks(&self) -> &Blocks {
        &self.blocks
    }

    pub fn procedures(&self) -> &Procedures {
        &self.procedures
    }

    pub fn statement(&mut self, index: usize) -> Result<Rc<Statement>> {
        if let Some(Some(statement)) = self.statements.get(index) {
            return Ok(statement.clone());
        }
        let line = match self.lines.get(index) {
            Some(line) => line,
            None => return Err(error!(InternalError, Some(index); "NO SUCH LINE")),
        };
        let statement =
            Rc::new(parse_statement(line.text()).map_err(|e| e.in_line_number(Some(index)))?);
        self.statements[index] = Some(statement.clone());
        Ok(statement)
    }
}
