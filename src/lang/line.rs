use super::ast::*;
use super::error::*;
use super::parse::*;
use std::rc::Rc;

/// A trimmed, non-empty source line and its 1-based physical line number.
#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: usize,
    text: Rc<str>,
}

impl Line {
    pub fn new(number: usize, s: &str) -> Line {
        Line {
            number,
            text: s.trim().into(),
        }
    }

    /// Splits program text into lines, dropping blank ones.
    pub fn split(source: &str) -> Vec<Line> {
        source
            .lines()
            .enumerate()
            .map(|(index, s)| Line::new(index + 1, s))
            .filter(|line| !line.is_empty())
            .collect()
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn statement(&self) -> Result<Statement, Error> {
        parse(self)
    }

    pub fn edge(&self) -> Option<Edge> {
        edge(&self.text)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.number, self.text)
    }
}
