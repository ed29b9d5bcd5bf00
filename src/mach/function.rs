use crate::lang::Line;
use std::collections::HashMap;
use std::rc::Rc;

/// ## Function table
///
/// Bodies are kept as raw lines and classified again on every `CALL`.

#[derive(Debug, Default)]
pub struct Function {
    bodies: HashMap<Rc<str>, Rc<[Line]>>,
}

impl Function {
    pub fn new() -> Function {
        Function::default()
    }

    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bodies.contains_key(name)
    }

    /// Replaces any earlier definition under the same name.
    pub fn define(&mut self, name: &Rc<str>, body: &[Line]) {
        self.bodies.insert(name.clone(), body.into());
    }

    pub fn get(&self, name: &str) -> Option<Rc<[Line]>> {
        self.bodies.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_overwrites() {
        let mut functions = Function::new();
        let name: Rc<str> = "f".into();
        functions.define(&name, &[Line::new(2, "PRINT(\"a\")")]);
        functions.define(&name, &[Line::new(5, "x = 1"), Line::new(6, "y = 2")]);
        assert_eq!(functions.get("f").map(|body| body[0].number()), Some(5));
        assert_eq!(functions.get("f").map(|body| body.len()), Some(2));
        assert!(functions.get("g").is_none());
    }
}
