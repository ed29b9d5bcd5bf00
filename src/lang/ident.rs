// Used by the parser for variable and function names.

/// Letters, digits and underbars, at least one of them.
pub fn is_ident(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_ident_char)
}

pub fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ident() {
        assert!(is_ident("greet"));
        assert!(is_ident("day_2"));
        assert!(is_ident("_"));
        assert!(!is_ident(""));
        assert!(!is_ident("two words"));
        assert!(!is_ident("f()"));
    }
}
