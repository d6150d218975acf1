use crate::error;
use crate::lang::{keyword, Error, Keyword, Line};
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    If,
    RepeatTimes,
    RepeatUntil,
}

impl BlockKind {
    pub fn is_loop(self) -> bool {
        self != BlockKind::If
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockInfo {
    pub kind: BlockKind,
    pub else_index: Option<usize>,
    pub end_index: usize,
}

/// ## Block resolver
///
/// Matches every `IF` and `REPEAT` opening line with its `ELSE` and `END`.
/// `PROCEDURE` boundaries act as barriers: a block may not straddle one.
#[derive(Debug, Default)]
pub struct Blocks {
    open: HashMap<usize, BlockInfo>,
    close: HashMap<usize, usize>,
}

struct Pending {
    index: usize,
    kind: BlockKind,
    else_index: Option<usize>,
}

impl Blocks {
    pub fn resolve(lines: &[Line]) -> Result<Blocks> {
        let mut blocks = Blocks::default();
        let mut stack: Vec<Pending> = vec![];
        for line in lines {
            let index = line.index();
            let keyword = match keyword(line.text()) {
                Some(keyword) => keyword,
                None => continue,
            };
            match keyword {
                Keyword::If => stack.push(Pending {
                    index,
                    kind: BlockKind::If,
                    else_index: None,
                }),
                Keyword::RepeatTimes => stack.push(Pending {
                    index,
                    kind: BlockKind::RepeatTimes,
                    else_index: None,
                }),
                Keyword::RepeatUntil => stack.push(Pending {
                    index,
                    kind: BlockKind::RepeatUntil,
                    else_index: None,
                }),
                Keyword::Else => match stack.last_mut() {
                    Some(top) if top.kind == BlockKind::If && top.else_index.is_none() => {
                        top.else_index = Some(index);
                    }
                    _ => return Err(error!(ElseWithoutIf, Some(index))),
                },
                Keyword::EndIf => match stack.pop() {
                    Some(top) if top.kind == BlockKind::If => blocks.insert(top, index),
                    _ => return Err(error!(EndIfWithoutIf, Some(index))),
                },
                Keyword::EndRepeat => match stack.pop() {
                    Some(top) if top.kind.is_loop() => blocks.insert(top, index),
                    _ => return Err(error!(EndRepeatWithoutRepeat, Some(index))),
                },
                Keyword::Procedure | Keyword::EndProcedure => {
                    if let Some(top) = stack.last() {
                        return Err(error!(UnclosedBlock, Some(top.index)));
                    }
                }
            }
        }
        if let Some(top) = stack.last() {
            return Err(error!(UnclosedBlock, Some(top.index)));
        }
        Ok(blocks)
    }

    fn insert(&mut self, pending: Pending, end_index: usize) {
        if let Some(else_index) = pending.else_index {
            self.close.insert(else_index, pending.index);
        }
        self.close.insert(end_index, pending.index);
        self.open.insert(
            pending.index,
            BlockInfo {
                kind: pending.kind,
                else_index: pending.else_index,
                end_index,
            },
        );
    }

    pub fn get(&self, opening: usize) -> Option<&BlockInfo> {
        self.open.get(&opening)
    }

    /// Opening line of the block an `ELSE` or `END` line belongs to.
    pub fn opening(&self, closing: usize) -> Option<usize> {
        self.close.get(&closing).copied()
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{preprocess, ErrorCode};

    fn resolve(s: &str) -> Result<Blocks> {
        Blocks::resolve(&preprocess(s, 4))
    }

    fn failure(s: &str) -> (ErrorCode, Option<usize>) {
        let e = resolve(s).unwrap_err();
        (e.code(), e.line_number())
    }

    #[test]
    fn test_nested_blocks() {
        let blocks = resolve(
            "IF a\n\
             REPEAT 2 TIMES\n\
             IF b\n\
             ELSE\n\
             END IF\n\
             END REPEAT\n\
             ELSE\n\
             REPEAT UNTIL c\n\
             END REPEAT\n\
             END IF",
        )
        .unwrap();
        assert_eq!(blocks.len(), 4);
        assert_eq!(
            blocks.get(0),
            Some(&BlockInfo {
                kind: BlockKind::If,
                else_index: Some(6),
                end_index: 9
            })
        );
        assert_eq!(blocks.get(1).map(|b| b.end_index), Some(5));
        assert_eq!(blocks.get(2).map(|b| b.else_index), Some(Some(3)));
        assert_eq!(blocks.get(7).map(|b| b.kind), Some(BlockKind::RepeatUntil));
        assert_eq!(blocks.opening(9), Some(0));
        assert_eq!(blocks.opening(6), Some(0));
        assert_eq!(blocks.opening(5), Some(1));
        assert_eq!(blocks.opening(8), Some(7));
        assert_eq!(blocks.opening(4), Some(2));
    }

    #[test]
    fn test_comments_and_blanks_keep_indices() {
        let blocks = resolve("# header\n\nIF x // check\n\n   END IF").unwrap();
        assert_eq!(blocks.get(2).map(|b| b.end_index), Some(4));
    }

    #[test]
    fn test_mismatches() {
        assert_eq!(failure("ELSE"), (ErrorCode::ElseWithoutIf, Some(0)));
        assert_eq!(failure("IF a\nELSE\nELSE\nEND IF"), (ErrorCode::ElseWithoutIf, Some(2)));
        assert_eq!(failure("REPEAT 2 TIMES\nELSE\nEND REPEAT"), (ErrorCode::ElseWithoutIf, Some(1)));
        assert_eq!(failure("x ← 1\nEND IF"), (ErrorCode::EndIfWithoutIf, Some(1)));
        assert_eq!(failure("REPEAT 2 TIMES\nEND IF"), (ErrorCode::EndIfWithoutIf, Some(1)));
        assert_eq!(failure("IF a\nEND REPEAT"), (ErrorCode::EndRepeatWithoutRepeat, Some(1)));
    }

    #[test]
    fn test_unclosed_reports_innermost() {
        assert_eq!(failure("IF a\nREPEAT UNTIL b\n"), (ErrorCode::UnclosedBlock, Some(1)));
        assert_eq!(
            failure("IF a\nPROCEDURE f()\nEND PROCEDURE\nEND IF"),
            (ErrorCode::UnclosedBlock, Some(0))
        );
        assert_eq!(
            failure("PROCEDURE f()\nIF a\nEND PROCEDURE\nEND IF"),
            (ErrorCode::UnclosedBlock, Some(1))
        );
    }

    #[test]
    fn test_every_opening_resolved() {
        let source = "REPEAT 3 TIMES\nIF a\nEND IF\nEND REPEAT\nIF b\nEND IF\nREPEAT UNTIL c\nEND REPEAT";
        let lines = preprocess(source, 4);
        let openings = lines
            .iter()
            .filter(|l| matches!(keyword(l.text()), Some(Keyword::If) | Some(Keyword::RepeatTimes) | Some(Keyword::RepeatUntil)))
            .count();
        assert_eq!(Blocks::resolve(&lines).unwrap().len(), openings);
    }
}
