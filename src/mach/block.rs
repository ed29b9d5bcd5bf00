use super::Program;
use crate::error;
use crate::lang::ast::{Block, Statement, Terminator};
use crate::lang::Error;
use std::ops::Range;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Block resolution
///
/// Spans are found by scanning forward with a stack of the blocks opened
/// since the start of the scan. Only statements at the bottom of that
/// stack belong to the block being resolved, so inner blocks of any kind
/// are skipped whole.

#[derive(Debug, Default)]
struct Nesting {
    open: Vec<Block>,
}

impl Nesting {
    /// Feeds the next statement. True when it sits directly in the
    /// block being resolved rather than inside an inner one.
    fn top_level(&mut self, statement: &Statement) -> bool {
        let top = self.open.is_empty();
        if let Some(block) = statement.opens() {
            self.open.push(block);
            return top;
        }
        if let Some(block) = statement.closes() {
            if self.open.last() == Some(&block) {
                self.open.pop();
                return false;
            }
        }
        top
    }
}

fn top_level(program: &Program, open: usize, end: usize) -> impl Iterator<Item = usize> + '_ {
    let mut nesting = Nesting::default();
    (open + 1..end).filter(move |index| nesting.top_level(program.statement(*index)))
}

/// Index of the terminator closing the `block` opened at `open`,
/// searching no further than `limit`.
pub fn find_block_end(program: &Program, open: usize, block: Block, limit: usize) -> Result<usize> {
    let closer = Some(block);
    match top_level(program, open, limit).find(|index| program.statement(*index).closes() == closer)
    {
        Some(end) => Ok(end),
        None => Err(error!(UnterminatedBlock, program.line(open);
            &format!("EXPECTED {}", block.closer()))),
    }
}

/// The `ELSE` of the block spanning `open..=end`, if it has one.
pub fn find_else(program: &Program, open: usize, end: usize) -> Option<usize> {
    top_level(program, open, end)
        .find(|index| *program.statement(*index) == Statement::Terminator(Terminator::Else))
}

/// One branch of a `REVELATION_CASE`. `label` is `None` for `ELSE`.
#[derive(Debug, PartialEq, Clone)]
pub struct Arm {
    pub label: Option<Rc<str>>,
    pub body: Range<usize>,
}

/// Splits a case spanning `open..=end` at its top-level `WHEN` and `ELSE`
/// lines. Lines before the first of them belong to no arm.
pub fn case_arms(program: &Program, open: usize, end: usize) -> Vec<Arm> {
    let markers: Vec<(usize, Option<Rc<str>>)> = top_level(program, open, end)
        .filter_map(|index| match program.statement(index) {
            Statement::Terminator(Terminator::When(label)) => Some((index, Some(label.clone()))),
            Statement::Terminator(Terminator::Else) => Some((index, None)),
            _ => None,
        })
        .collect();
    markers
        .iter()
        .enumerate()
        .map(|(i, (index, label))| {
            let stop = markers.get(i + 1).map_or(end, |(next, _)| *next);
            Arm {
                label: label.clone(),
                body: index + 1..stop,
            }
        })
        .collect()
}
