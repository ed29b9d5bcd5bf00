use crate::lang::ast::Statement;
use crate::lang::{Error, Line};

/// ## Classified program
///
/// Lines and their statements side by side. Every line is classified
/// before any of them runs, so a malformed statement stops the program
/// before it starts.

#[derive(Debug, Default)]
pub struct Program {
    lines: Vec<Line>,
    statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    pub fn compile<'a, T: IntoIterator<Item = &'a Line>>(lines: T) -> Result<Program, Error> {
        let mut program = Program::new();
        for line in lines {
            program.statements.push(line.statement()?);
            program.lines.push(line.clone());
        }
        Ok(program)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, index: usize) -> &Line {
        &self.lines[index]
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn statement(&self, index: usize) -> &Statement {
        &self.statements[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_stops_on_first_error() {
        let lines = Line::split("x = 1\nIF x > 0\nDEFINE\n");
        let e = Program::compile(&lines).unwrap_err();
        assert_eq!(e.line_number(), Some(2));
    }

    #[test]
    fn test_compile_keeps_lines() {
        let lines = Line::split("x = 1\n\nPRINT(x)\n");
        let program = Program::compile(&lines).unwrap();
        assert_eq!(program.len(), 2);
        assert_eq!(program.line(1).number(), 3);
    }
}
