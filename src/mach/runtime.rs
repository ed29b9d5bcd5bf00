use super::block::{case_arms, find_block_end, find_else};
use super::{Config, Function, Output, Program, Val, Var};
use crate::error;
use crate::lang::ast::{Block, Condition, Expression, Statement};
use crate::lang::{Error, Line};
use std::ops::Range;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, trace, warn};

type Result<T> = std::result::Result<T, Error>;

/// ## Interpreter session
///
/// Variables and functions live as long as the `Runtime` and are shared by
/// every `compile` and every `CALL`. The output buffer starts empty on each
/// `compile`.

#[derive(Debug)]
pub struct Runtime {
    config: Config,
    vars: Var,
    functions: Function,
    output: Output,
    depth: usize,
    nesting: usize,
    steps: usize,
    interrupted: Arc<AtomicBool>,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::with_config(Config::default())
    }
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    pub fn with_config(config: Config) -> Runtime {
        Runtime {
            config,
            vars: Var::new(),
            functions: Function::new(),
            output: Output::new(),
            depth: 0,
            nesting: 0,
            steps: 0,
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Runs a program against the session and returns everything it
    /// printed, or `NO_OUTPUT` when it printed nothing. A fatal error
    /// discards the output of the failed run; session state changed before
    /// the error is kept.
    pub fn compile(&mut self, source: &str) -> Result<String> {
        self.output.clear();
        self.depth = 0;
        self.nesting = 0;
        self.steps = 0;
        self.interrupted.store(false, Ordering::SeqCst);
        let lines = Line::split(source);
        debug!(lines = lines.len(), "compile");
        let result =
            Program::compile(&lines).and_then(|program| self.run(&program, 0..program.len()));
        match result {
            Ok(()) => {
                debug!(steps = self.steps, "finished");
                Ok(self.output.take())
            }
            Err(error) => {
                debug!(%error, "aborted");
                self.output.clear();
                Err(error)
            }
        }
    }

    /// Forgets every variable and function.
    pub fn reset(&mut self) {
        self.vars.clear();
        self.functions.clear();
        self.output.clear();
    }

    pub fn var(&self, name: &str) -> Option<Val> {
        self.vars.get(name).cloned()
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains(name)
    }

    /// Stops a running program at its next statement with `BREAK`.
    pub fn interrupt(&self) {
        self.interrupted.store(true, Ordering::SeqCst);
    }

    /// A flag that interrupts the runtime when set from another thread.
    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        self.interrupted.clone()
    }

    fn run(&mut self, program: &Program, range: Range<usize>) -> Result<()> {
        let mut index = range.start;
        while index < range.end {
            index = self.execute(program, index, range.end)?;
        }
        Ok(())
    }

    /// Executes the statement at `index` and returns where to resume.
    /// Blocks may not reach past `limit`.
    fn execute(&mut self, program: &Program, index: usize, limit: usize) -> Result<usize> {
        let line = program.line(index);
        self.tick(line)?;
        trace!(line = line.number(), text = line.text(), "execute");
        match program.statement(index) {
            Statement::Assign(name, value) => self.vars.store(name, Val::parse(value)),
            Statement::Print(expr) => {
                let val = self.evaluate(expr);
                self.output.print(val.as_str());
            }
            Statement::If(condition) => return self.r#if(program, index, limit, condition),
            Statement::Case(var_name) => return self.r#case(program, index, limit, var_name),
            Statement::Define(name) => return self.r#define(program, index, limit, name),
            Statement::Call(name) => self.r#call(line, name)?,
            Statement::Terminator(_) => {}
            Statement::Unrecognized => {
                let error = error!(UnrecognizedStatement, line);
                warn!(%error, "skipped");
                self.output.diagnostic(&error);
            }
        }
        Ok(index + 1)
    }

    /// Runs a block body or function body one level deeper.
    fn nested(&mut self, line: &Line, program: &Program, range: Range<usize>) -> Result<()> {
        if self.nesting >= self.config.max_nesting {
            return Err(error!(NestingLimitExceeded, line;
                &format!("LIMIT IS {}", self.config.max_nesting)));
        }
        self.nesting += 1;
        let result = self.run(program, range);
        self.nesting -= 1;
        result
    }

    fn tick(&mut self, line: &Line) -> Result<()> {
        if self.interrupted.swap(false, Ordering::SeqCst) {
            return Err(error!(Break, line));
        }
        self.steps += 1;
        if self.steps > self.config.max_steps {
            return Err(error!(StepLimitExceeded, line;
                &format!("LIMIT IS {}", self.config.max_steps)));
        }
        Ok(())
    }

    fn evaluate(&self, expr: &Expression) -> Val {
        match expr {
            Expression::Literal(s) => Val::String(s.clone()),
            Expression::Token(token) => self.vars.resolve(token),
        }
    }

    fn condition(&self, condition: &Condition) -> bool {
        match condition {
            Condition::Compare(lhs, op, rhs) => {
                self.vars.resolve(lhs).compare(*op, &self.vars.resolve(rhs))
            }
            Condition::Invalid(s) => {
                debug!(condition = %s, "no operator, condition is false");
                false
            }
        }
    }

    fn r#if(
        &mut self,
        program: &Program,
        index: usize,
        limit: usize,
        condition: &Condition,
    ) -> Result<usize> {
        let end = find_block_end(program, index, Block::If, limit)?;
        let otherwise = find_else(program, index, end);
        let taken = self.condition(condition);
        trace!(taken, "if");
        let line = program.line(index);
        match (taken, otherwise) {
            (true, Some(else_index)) => self.nested(line, program, index + 1..else_index)?,
            (true, None) => self.nested(line, program, index + 1..end)?,
            (false, Some(else_index)) => self.nested(line, program, else_index + 1..end)?,
            (false, None) => {}
        }
        Ok(end + 1)
    }

    fn r#case(
        &mut self,
        program: &Program,
        index: usize,
        limit: usize,
        var_name: &str,
    ) -> Result<usize> {
        let end = find_block_end(program, index, Block::Case, limit)?;
        let value = self.vars.fetch(var_name);
        let arms = case_arms(program, index, end);
        let chosen = arms
            .iter()
            .find(|arm| arm.label.as_deref() == Some(value.as_str()))
            .or_else(|| arms.iter().find(|arm| arm.label.is_none()));
        if let Some(arm) = chosen {
            trace!(label = ?arm.label, "case");
            self.nested(program.line(index), program, arm.body.clone())?;
        }
        Ok(end + 1)
    }

    fn r#define(
        &mut self,
        program: &Program,
        index: usize,
        limit: usize,
        name: &Rc<str>,
    ) -> Result<usize> {
        let end = find_block_end(program, index, Block::Function, limit)?;
        let body = &program.lines()[index + 1..end];
        debug!(function = %name, lines = body.len(), "define");
        self.functions.define(name, body);
        Ok(end + 1)
    }

    fn r#call(&mut self, line: &Line, name: &str) -> Result<()> {
        let body = match self.functions.get(name) {
            Some(body) => body,
            None => {
                let error = error!(UndefinedFunction, line);
                warn!(%error, "skipped");
                self.output.diagnostic(&error);
                return Ok(());
            }
        };
        if self.depth >= self.config.max_call_depth {
            return Err(error!(RecursionLimitExceeded, line;
                &format!("LIMIT IS {}", self.config.max_call_depth)));
        }
        let program = Program::compile(body.iter())?;
        debug!(function = name, depth = self.depth + 1, "call");
        self.depth += 1;
        let result = self.nested(line, &program, 0..program.len());
        self.depth -= 1;
        result
    }
}
