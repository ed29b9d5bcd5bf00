use super::*;

fn parse_str(s: &str) -> Statement {
    match Line::new(1, s).statement() {
        Ok(statement) => statement,
        Err(e) => panic!("{} : {:?}", e, e),
    }
}

fn parse_err(s: &str) -> String {
    match Line::new(7, s).statement() {
        Ok(statement) => panic!("expected error, got {:?}", statement),
        Err(e) => e.to_string(),
    }
}

#[test]
fn test_assignment() {
    assert_eq!(
        parse_str(r#"name = "hello world""#),
        Statement::Assign("name".into(), r#""hello world""#.into())
    );
    assert_eq!(
        parse_str("count = 10"),
        Statement::Assign("count".into(), "10".into())
    );
    assert_eq!(parse_str("x ="), Statement::Assign("x".into(), "".into()));
    assert_eq!(
        parse_str("x = a = b"),
        Statement::Assign("x".into(), "a = b".into())
    );
}

#[test]
fn test_assignment_checked_first() {
    assert_eq!(
        parse_str("PRINT = 3"),
        Statement::Assign("PRINT".into(), "3".into())
    );
}

#[test]
fn test_print() {
    assert_eq!(
        parse_str(r#"PRINT("Hello, World")"#),
        Statement::Print(Expression::Literal("Hello, World".into()))
    );
    assert_eq!(
        parse_str("PRINT(x)"),
        Statement::Print(Expression::Token("x".into()))
    );
    assert_eq!(
        parse_str("PRINT( x )"),
        Statement::Print(Expression::Token("x".into()))
    );
    assert_eq!(
        parse_str(r#"PRINT("")"#),
        Statement::Print(Expression::Token(r#""""#.into()))
    );
}

#[test]
fn test_print_errors() {
    assert_eq!(
        parse_err("PRINT x"),
        "SYNTAX ERROR IN 7: PRINT x; EXPECTED LEFT PARENTHESIS"
    );
    assert_eq!(
        parse_err("PRINT(x"),
        "SYNTAX ERROR IN 7: PRINT(x; EXPECTED RIGHT PARENTHESIS"
    );
    assert_eq!(
        parse_err("PRINT()"),
        "SYNTAX ERROR IN 7: PRINT(); EXPECTED EXPRESSION"
    );
}

#[test]
fn test_if_operators() {
    assert_eq!(
        parse_str("IF a >= 10 THEN"),
        Statement::If(Condition::Compare("a".into(), Operator::GreaterEqual, "10".into()))
    );
    assert_eq!(
        parse_str("IF a<=b THEN"),
        Statement::If(Condition::Compare("a".into(), Operator::LessEqual, "b".into()))
    );
    assert_eq!(
        parse_str(r#"IF name = "Bob" THEN"#),
        Statement::If(Condition::Compare("name".into(), Operator::Equal, r#""Bob""#.into()))
    );
    assert_eq!(
        parse_str("IF 2 > 1 THEN"),
        Statement::If(Condition::Compare("2".into(), Operator::Greater, "1".into()))
    );
    assert_eq!(
        parse_str("IF 1 < 2 THEN"),
        Statement::If(Condition::Compare("1".into(), Operator::Less, "2".into()))
    );
}

#[test]
fn test_if_operator_inside_quotes() {
    assert_eq!(
        parse_str(r#"IF s = "a<b" THEN"#),
        Statement::If(Condition::Compare("s".into(), Operator::Equal, r#""a<b""#.into()))
    );
}

#[test]
fn test_if_invalid_condition() {
    assert_eq!(
        parse_str("IF ready THEN"),
        Statement::If(Condition::Invalid("ready".into()))
    );
    assert_eq!(
        parse_str("IF a = b = c THEN"),
        Statement::If(Condition::Invalid("a = b = c".into()))
    );
    assert_eq!(
        parse_str("IF < b THEN"),
        Statement::If(Condition::Invalid("< b".into()))
    );
}

#[test]
fn test_if_without_then() {
    assert_eq!(
        parse_err("IF a > 1"),
        "SYNTAX ERROR IN 7: IF a > 1; EXPECTED THEN"
    );
    assert_eq!(
        parse_err(r#"IF a > 1 THEN PRINT("x")"#),
        r#"SYNTAX ERROR IN 7: IF a > 1 THEN PRINT("x"); EXPECTED THEN"#
    );
}

#[test]
fn test_case_and_when() {
    assert_eq!(parse_str("REVELATION_CASE day"), Statement::Case("day".into()));
    assert_eq!(
        parse_str(r#"WHEN "monday" THEN"#),
        Statement::Terminator(Terminator::When("monday".into()))
    );
    assert_eq!(
        parse_str(r#"WHEN "" THEN"#),
        Statement::Terminator(Terminator::When("".into()))
    );
    assert_eq!(
        parse_err("WHEN monday THEN"),
        r#"SYNTAX ERROR IN 7: WHEN monday THEN; EXPECTED WHEN "TEXT" THEN"#
    );
    assert_eq!(
        parse_err("REVELATION_CASE"),
        "SYNTAX ERROR IN 7: REVELATION_CASE; EXPECTED IDENTIFIER"
    );
}

#[test]
fn test_define_and_call() {
    assert_eq!(
        parse_str("DEFINE greet AS FUNCTION"),
        Statement::Define("greet".into())
    );
    assert_eq!(parse_str("CALL greet"), Statement::Call("greet".into()));
    assert_eq!(
        parse_err("DEFINE greet"),
        "SYNTAX ERROR IN 7: DEFINE greet; EXPECTED AS FUNCTION"
    );
    assert_eq!(
        parse_err("DEFINE two words AS FUNCTION"),
        "SYNTAX ERROR IN 7: DEFINE two words AS FUNCTION; EXPECTED IDENTIFIER"
    );
    assert_eq!(
        parse_err("CALL greet()"),
        "SYNTAX ERROR IN 7: CALL greet(); EXPECTED IDENTIFIER"
    );
}

#[test]
fn test_terminators() {
    assert_eq!(parse_str("ELSE"), Statement::Terminator(Terminator::Else));
    assert_eq!(parse_str("ENDIF"), Statement::Terminator(Terminator::EndIf));
    assert_eq!(parse_str("ENDCASE"), Statement::Terminator(Terminator::EndCase));
    assert_eq!(
        parse_str("ENDFUNCTION"),
        Statement::Terminator(Terminator::EndFunction)
    );
    assert_eq!(
        parse_err("ENDIF now"),
        "SYNTAX ERROR IN 7: ENDIF now; UNEXPECTED TEXT AFTER ENDIF"
    );
}

#[test]
fn test_unrecognized() {
    assert_eq!(parse_str("GOTO 10"), Statement::Unrecognized);
    assert_eq!(parse_str("IFFY"), Statement::Unrecognized);
    assert_eq!(parse_str("print(x)"), Statement::Unrecognized);
}

#[test]
fn test_block_roles() {
    assert_eq!(parse_str("IF a = 1 THEN").opens(), Some(Block::If));
    assert_eq!(parse_str("ENDCASE").closes(), Some(Block::Case));
    assert_eq!(parse_str("ELSE").closes(), None);
    assert_eq!(parse_str("CALL f").opens(), None);
}
