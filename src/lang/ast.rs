use super::token::{Operator, Word};
use std::rc::Rc;

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Assign(Rc<str>, Rc<str>),
    Print(Expression),
    If(Condition),
    Case(Rc<str>),
    Define(Rc<str>),
    Call(Rc<str>),
    Terminator(Terminator),
    Unrecognized,
}

/// The argument of `PRINT`.
#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    /// `PRINT("text")` emits the text as written.
    Literal(Rc<str>),
    /// `PRINT(token)` resolves a variable, falling back to the token itself.
    Token(Rc<str>),
}

/// `lhs op rhs` of an `IF`. A condition without a recognizable operator
/// is kept as `Invalid` and evaluates false.
#[derive(Debug, PartialEq, Clone)]
pub enum Condition {
    Compare(Rc<str>, Operator, Rc<str>),
    Invalid(Rc<str>),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Terminator {
    Else,
    EndCase,
    EndFunction,
    EndIf,
    When(Rc<str>),
}

/// The three kinds of block a line can open or close.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Block {
    If,
    Case,
    Function,
}

impl Block {
    pub fn opener(self) -> Word {
        match self {
            Block::If => Word::If,
            Block::Case => Word::RevelationCase,
            Block::Function => Word::Define,
        }
    }

    pub fn closer(self) -> Word {
        match self {
            Block::If => Word::EndIf,
            Block::Case => Word::EndCase,
            Block::Function => Word::EndFunction,
        }
    }
}

impl Statement {
    pub fn opens(&self) -> Option<Block> {
        match self {
            Statement::If(_) => Some(Block::If),
            Statement::Case(_) => Some(Block::Case),
            Statement::Define(_) => Some(Block::Function),
            _ => None,
        }
    }

    pub fn closes(&self) -> Option<Block> {
        match self {
            Statement::Terminator(Terminator::EndIf) => Some(Block::If),
            Statement::Terminator(Terminator::EndCase) => Some(Block::Case),
            Statement::Terminator(Terminator::EndFunction) => Some(Block::Function),
            _ => None,
        }
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.opener())
    }
}
