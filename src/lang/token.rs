use std::cmp::Ordering;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Word {
    AsFunction,
    Call,
    Define,
    Else,
    EndCase,
    EndFunction,
    EndIf,
    If,
    Print,
    RevelationCase,
    Then,
    When,
}

impl Word {
    /// Words that may begin a line, longest first so that `ENDIF` is
    /// never taken for a shorter prefix.
    pub const LEADING: [Word; 10] = [
        Word::RevelationCase,
        Word::EndFunction,
        Word::EndCase,
        Word::Define,
        Word::EndIf,
        Word::Print,
        Word::Else,
        Word::When,
        Word::Call,
        Word::If,
    ];

    /// Terminators close or subdivide a block and never execute on their own.
    pub fn is_terminator(self) -> bool {
        use Word::*;
        matches!(self, Else | EndCase | EndFunction | EndIf | When)
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            AsFunction => write!(f, "AS FUNCTION"),
            Call => write!(f, "CALL"),
            Define => write!(f, "DEFINE"),
            Else => write!(f, "ELSE"),
            EndCase => write!(f, "ENDCASE"),
            EndFunction => write!(f, "ENDFUNCTION"),
            EndIf => write!(f, "ENDIF"),
            If => write!(f, "IF"),
            Print => write!(f, "PRINT"),
            RevelationCase => write!(f, "REVELATION_CASE"),
            Then => write!(f, "THEN"),
            When => write!(f, "WHEN"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    GreaterEqual,
    LessEqual,
    Equal,
    Greater,
    Less,
}

impl Operator {
    /// Search order when splitting a condition. Two-character operators
    /// come first so `>=` is not read as `>` followed by `=`.
    pub const PRIORITY: [Operator; 5] = [
        Operator::GreaterEqual,
        Operator::LessEqual,
        Operator::Equal,
        Operator::Greater,
        Operator::Less,
    ];

    pub fn holds(self, ordering: Ordering) -> bool {
        match self {
            Operator::GreaterEqual => ordering != Ordering::Less,
            Operator::LessEqual => ordering != Ordering::Greater,
            Operator::Equal => ordering == Ordering::Equal,
            Operator::Greater => ordering == Ordering::Greater,
            Operator::Less => ordering == Ordering::Less,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            GreaterEqual => write!(f, ">="),
            LessEqual => write!(f, "<="),
            Equal => write!(f, "="),
            Greater => write!(f, ">"),
            Less => write!(f, "<"),
        }
    }
}
