use super::Val;
use std::collections::HashMap;
use std::rc::Rc;

/// ## Variable memory
///
/// One global namespace. Assignment overwrites, nothing is ever removed
/// except by `clear`.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, Val>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn get(&self, var_name: &str) -> Option<&Val> {
        self.vars.get(var_name)
    }

    /// Unset variables read as the empty string.
    pub fn fetch(&self, var_name: &str) -> Val {
        match self.vars.get(var_name) {
            Some(val) => val.clone(),
            None => Val::default(),
        }
    }

    /// Resolves an operand: a variable if one is set under that name,
    /// otherwise the token read as a literal.
    pub fn resolve(&self, token: &str) -> Val {
        match self.vars.get(token.trim()) {
            Some(val) => val.clone(),
            None => Val::parse(token),
        }
    }

    pub fn store(&mut self, var_name: &Rc<str>, value: Val) {
        match self.vars.get_mut(var_name) {
            Some(var) => *var = value,
            None => {
                self.vars.insert(var_name.clone(), value);
            }
        };
    }
}
