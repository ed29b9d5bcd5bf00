use crate::lang::Operator;
use std::cmp::Ordering;
use std::rc::Rc;

/// ## Runtime value
///
/// Quoted source text is always a `String`. A bare token that spells a
/// plain decimal number is a `Number` and keeps its spelling for display.
/// Anything else is a `String`.

#[derive(Debug, PartialEq, Clone)]
pub enum Val {
    String(Rc<str>),
    Number(Rc<str>),
}

impl Default for Val {
    fn default() -> Val {
        Val::String("".into())
    }
}

impl Val {
    /// Reads a value token: strips one pair of surrounding quotes,
    /// otherwise keeps the token unchanged.
    pub fn parse(token: &str) -> Val {
        let token = token.trim();
        if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
            return Val::String(token[1..token.len() - 1].into());
        }
        if is_numeral(token) {
            Val::Number(token.into())
        } else {
            Val::String(token.into())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Val::String(s) | Val::Number(s) => s,
        }
    }

    /// The numeric value. `None` when the integer part runs past 15
    /// digits, beyond which `f64` no longer keeps integers apart.
    pub fn number(&self) -> Option<f64> {
        let s = match self {
            Val::Number(s) => s,
            Val::String(_) => return None,
        };
        let n: f64 = s.parse().ok()?;
        let whole = s.split('.').next().unwrap_or("");
        let digits = whole.trim_start_matches(|c: char| c == '-' || c == '+' || c == '0');
        if !n.is_finite() || digits.len() > 15 {
            return None;
        }
        Some(n)
    }

    /// Two numbers compare numerically. Any other pair, or a number too
    /// large to compare exactly, compares as text.
    pub fn cmp_val(&self, other: &Val) -> Ordering {
        if let (Some(lhs), Some(rhs)) = (self.number(), other.number()) {
            if let Some(ordering) = lhs.partial_cmp(&rhs) {
                return ordering;
            }
        }
        self.as_str().cmp(other.as_str())
    }

    pub fn compare(&self, op: Operator, other: &Val) -> bool {
        op.holds(self.cmp_val(other))
    }
}

/// Optional sign, digits, optional fraction. No exponents or `inf`.
fn is_numeral(s: &str) -> bool {
    let digits = s.strip_prefix(|c: char| c == '-' || c == '+').unwrap_or(s);
    let mut parts = digits.splitn(2, '.');
    let whole = parts.next().unwrap_or("");
    let fraction = parts.next();
    let all_digits = |p: &str| p.chars().all(|c| c.is_ascii_digit());
    if !all_digits(whole) {
        return false;
    }
    match fraction {
        None => !whole.is_empty(),
        Some(f) => all_digits(f) && !(whole.is_empty() && f.is_empty()),
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
