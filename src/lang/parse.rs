use super::ident::{is_ident, is_ident_char};
use super::{ast::*, token::*, Error, Line};

type Result<T> = std::result::Result<T, Error>;

pub fn parse(line: &Line) -> Result<Statement> {
    match Parser::parse(line.text()) {
        Err(e) => Err(e.in_line(line)),
        Ok(r) => Ok(r),
    }
}

/// Whether a line opens or closes a block, without full classification.
/// Malformed openers still count so an unfinished `IF` keeps its block open.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Edge {
    Open(Block),
    Close(Block),
}

pub fn edge(text: &str) -> Option<Edge> {
    if assignment(text).is_some() {
        return None;
    }
    match leading_word(text)?.0 {
        Word::If => Some(Edge::Open(Block::If)),
        Word::RevelationCase => Some(Edge::Open(Block::Case)),
        Word::Define => Some(Edge::Open(Block::Function)),
        Word::EndIf => Some(Edge::Close(Block::If)),
        Word::EndCase => Some(Edge::Close(Block::Case)),
        Word::EndFunction => Some(Edge::Close(Block::Function)),
        _ => None,
    }
}

/// `name = value` split on the first ` =`. The value is trimmed and may be empty.
fn assignment(text: &str) -> Option<(&str, &str)> {
    let len = text
        .find(|c: char| !is_ident_char(c))
        .unwrap_or_else(|| text.len());
    let (name, rest) = text.split_at(len);
    if name.is_empty() || !rest.starts_with(" =") {
        return None;
    }
    Some((name, rest[2..].trim()))
}

fn leading_word(text: &str) -> Option<(Word, &str)> {
    for word in Word::LEADING.iter() {
        let s = word.to_string();
        if !text.starts_with(&s) {
            continue;
        }
        let rest = &text[s.len()..];
        match rest.chars().next() {
            None => return Some((*word, rest)),
            Some(c) if c.is_whitespace() => return Some((*word, rest)),
            Some('(') if *word == Word::Print => return Some((*word, rest)),
            _ => {}
        }
    }
    None
}

/// Leftmost operator outside of double quotes. At any one position the
/// operators are tried in priority order.
fn find_operator(s: &str) -> Option<(usize, Operator)> {
    let mut quoted = false;
    for (index, ch) in s.char_indices() {
        if ch == '"' {
            quoted = !quoted;
            continue;
        }
        if quoted {
            continue;
        }
        for op in Operator::PRIORITY.iter() {
            if s[index..].starts_with(&op.to_string()) {
                return Some((index, *op));
            }
        }
    }
    None
}

fn unquote(s: &str) -> Option<&str> {
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        Some(&s[1..s.len() - 1])
    } else {
        None
    }
}

struct Parser<'a> {
    text: &'a str,
}

impl<'a> Parser<'a> {
    fn parse(text: &'a str) -> Result<Statement> {
        Parser { text }.statement()
    }

    fn statement(&mut self) -> Result<Statement> {
        if let Some((name, value)) = assignment(self.text) {
            return Ok(Statement::Assign(name.into(), value.into()));
        }
        let (word, rest) = match leading_word(self.text) {
            Some(found) => found,
            None => return Ok(Statement::Unrecognized),
        };
        Statement::for_word(word, rest.trim())
    }
}

impl Condition {
    fn for_str(s: &str) -> Condition {
        let invalid = || Condition::Invalid(s.into());
        let (index, op) = match find_operator(s) {
            Some(found) => found,
            None => return invalid(),
        };
        let lhs = s[..index].trim();
        let rhs = s[index + op.to_string().len()..].trim();
        if lhs.is_empty() || rhs.is_empty() || find_operator(rhs).is_some() {
            return invalid();
        }
        Condition::Compare(lhs.into(), op, rhs.into())
    }
}

impl Statement {
    fn for_word(word: Word, rest: &str) -> Result<Statement> {
        use Word::*;
        match word {
            Print => Self::r#print(rest),
            If => Self::r#if(rest),
            RevelationCase => Self::r#case(rest),
            Define => Self::r#define(rest),
            Call => Self::r#call(rest),
            When => Self::r#when(rest),
            Else => Self::terminator(word, rest, Terminator::Else),
            EndIf => Self::terminator(word, rest, Terminator::EndIf),
            EndCase => Self::terminator(word, rest, Terminator::EndCase),
            EndFunction => Self::terminator(word, rest, Terminator::EndFunction),
            AsFunction | Then => Ok(Statement::Unrecognized),
        }
    }

    fn r#print(rest: &str) -> Result<Statement> {
        let inner = match rest.strip_prefix('(') {
            Some(inner) => inner,
            None => return Err(error!(SyntaxError; "EXPECTED LEFT PARENTHESIS")),
        };
        let inner = match inner.strip_suffix(')') {
            Some(inner) => inner.trim(),
            None => return Err(error!(SyntaxError; "EXPECTED RIGHT PARENTHESIS")),
        };
        if inner.is_empty() {
            return Err(error!(SyntaxError; "EXPECTED EXPRESSION"));
        }
        match unquote(inner) {
            Some(text) if !text.is_empty() => Ok(Statement::Print(Expression::Literal(text.into()))),
            _ => Ok(Statement::Print(Expression::Token(inner.into()))),
        }
    }

    fn r#if(rest: &str) -> Result<Statement> {
        let condition = match rest.strip_suffix(&Word::Then.to_string()) {
            Some(condition) if condition.ends_with(char::is_whitespace) => condition.trim(),
            _ => return Err(error!(SyntaxError; "EXPECTED THEN")),
        };
        if condition.is_empty() {
            return Err(error!(SyntaxError; "EXPECTED CONDITION"));
        }
        Ok(Statement::If(Condition::for_str(condition)))
    }

    fn r#case(rest: &str) -> Result<Statement> {
        if rest.is_empty() {
            return Err(error!(SyntaxError; "EXPECTED IDENTIFIER"));
        }
        Ok(Statement::Case(rest.into()))
    }

    fn r#define(rest: &str) -> Result<Statement> {
        let name = match rest.strip_suffix(&Word::AsFunction.to_string()) {
            Some(name) => name.trim(),
            None => return Err(error!(SyntaxError; "EXPECTED AS FUNCTION")),
        };
        if !is_ident(name) {
            return Err(error!(SyntaxError; "EXPECTED IDENTIFIER"));
        }
        Ok(Statement::Define(name.into()))
    }

    fn r#call(rest: &str) -> Result<Statement> {
        if !is_ident(rest) {
            return Err(error!(SyntaxError; "EXPECTED IDENTIFIER"));
        }
        Ok(Statement::Call(rest.into()))
    }

    fn r#when(rest: &str) -> Result<Statement> {
        let label = rest
            .strip_suffix(&Word::Then.to_string())
            .map(str::trim)
            .and_then(unquote);
        match label {
            Some(label) => Ok(Statement::Terminator(Terminator::When(label.into()))),
            None => Err(error!(SyntaxError; "EXPECTED WHEN \"TEXT\" THEN")),
        }
    }

    fn terminator(word: Word, rest: &str, terminator: Terminator) -> Result<Statement> {
        debug_assert!(word.is_terminator());
        if !rest.is_empty() {
            return Err(error!(SyntaxError; &format!("UNEXPECTED TEXT AFTER {}", word)));
        }
        Ok(Statement::Terminator(terminator))
    }
}
