mod common;
use common::*;
use kjpl::mach::{Runtime, Val, NO_OUTPUT};

#[test]
fn test_assign_and_print() {
    assert_eq!(run("x = \"v\"\nPRINT(x)"), "v\n");
}

#[test]
fn test_quotes_stripped_once_spaces_kept() {
    assert_eq!(run(r#"x = "hello world"
PRINT(x)"#), "hello world\n");
    assert_eq!(run(r#"x = "  padded  "
PRINT(x)"#), "  padded  \n");
}

#[test]
fn test_print_literal() {
    assert_eq!(run(r#"PRINT("Hello, World!")"#), "Hello, World!\n");
}

#[test]
fn test_print_literal_is_not_looked_up() {
    assert_eq!(run("x = 1\nPRINT(\"x\")"), "x\n");
}

#[test]
fn test_print_unset_name_prints_name() {
    assert_eq!(run("PRINT(nobody)"), "nobody\n");
}

#[test]
fn test_print_empty_emits_nothing() {
    assert_eq!(run("x = \"\"\nPRINT(x)\nPRINT(\"\")"), NO_OUTPUT);
}

#[test]
fn test_no_output_sentinel() {
    assert_eq!(run("x = 1"), NO_OUTPUT);
    assert_eq!(run(""), NO_OUTPUT);
    assert_eq!(run("\n   \n\t\n"), NO_OUTPUT);
}

#[test]
fn test_whitespace_and_blank_lines() {
    assert_eq!(
        run("\n    x = 5   \n\n\t  PRINT(x)\n\n"),
        "5\n"
    );
}

#[test]
fn test_assignment_overwrites() {
    let mut r = Runtime::default();
    assert_eq!(exec(&mut r, "a = 1\na = \"two\"\nPRINT(a)"), "two\n");
    assert_eq!(r.var("a"), Some(Val::String("two".into())));
}

#[test]
fn test_assignment_keeps_bare_tokens() {
    let mut r = Runtime::default();
    exec(&mut r, "n = 42\ns = some_word\nt = a = b");
    assert_eq!(r.var("n"), Some(Val::Number("42".into())));
    assert_eq!(r.var("s"), Some(Val::String("some_word".into())));
    assert_eq!(r.var("t"), Some(Val::String("a = b".into())));
}

#[test]
fn test_assignment_does_not_evaluate_variables() {
    assert_eq!(run("a = 1\nb = a\nPRINT(b)"), "a\n");
}

#[test]
fn test_unrecognized_statement_warns_and_continues() {
    assert_eq!(
        run("PRINT(\"before\")\nGOTO 10\nPRINT(\"after\")"),
        "before\n?UNRECOGNIZED STATEMENT IN 2: GOTO 10\nafter\n"
    );
}

#[test]
fn test_stray_terminators_are_skipped() {
    assert_eq!(run("ENDIF\nELSE\nENDCASE\nENDFUNCTION\nPRINT(\"ok\")"), "ok\n");
}
