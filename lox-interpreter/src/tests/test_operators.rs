//! Operator semantics: arithmetic, comparison, equality, truthiness, and
//! the typed runtime errors for operand mismatches.

use super::{eval, run};
use crate::{RuntimeError, Value};

#[test]
fn test_numeric_arithmetic() {
    assert_eq!(eval("1 + 2;"), Value::Number(3.0));
    assert_eq!(eval("5 - 3;"), Value::Number(2.0));
    assert_eq!(eval("4 * 2.5;"), Value::Number(10.0));
    assert_eq!(eval("7 / 2;"), Value::Number(3.5));
}

#[test]
fn test_division_follows_ieee_arithmetic() {
    assert_eq!(eval("1 / 0;"), Value::Number(f64::INFINITY));
}

#[test]
fn test_numeric_comparison() {
    assert_eq!(eval("2 > 1;"), Value::Boolean(true));
    assert_eq!(eval("2 >= 2;"), Value::Boolean(true));
    assert_eq!(eval("2 < 1;"), Value::Boolean(false));
    assert_eq!(eval("1 <= 0;"), Value::Boolean(false));
}

#[test]
fn test_string_concatenation() {
    assert_eq!(eval("\"x\" + \"y\";"), Value::String("xy".to_string()));
}

#[test]
fn test_mixed_addition_never_coerces() {
    assert!(matches!(
        run("1 + \"a\";"),
        Err(RuntimeError::InvalidBinaryOperands { .. })
    ));
    assert!(matches!(
        run("\"a\" + 1;"),
        Err(RuntimeError::InvalidBinaryOperands { .. })
    ));
}

#[test]
fn test_arithmetic_on_non_numbers() {
    assert!(matches!(
        run("\"a\" - 1;"),
        Err(RuntimeError::OperandsMustBeNumbers { .. })
    ));
    assert!(matches!(
        run("true * 2;"),
        Err(RuntimeError::OperandsMustBeNumbers { .. })
    ));
    assert!(matches!(
        run("nil > 1;"),
        Err(RuntimeError::OperandsMustBeNumbers { .. })
    ));
}

#[test]
fn test_unary_minus() {
    assert_eq!(eval("-1;"), Value::Number(-1.0));
    assert_eq!(eval("--1;"), Value::Number(1.0));
}

#[test]
fn test_unary_minus_requires_a_number() {
    assert!(matches!(
        run("-\"a\";"),
        Err(RuntimeError::OperandMustBeANumber { .. })
    ));
    assert!(matches!(
        run("-nil;"),
        Err(RuntimeError::OperandMustBeANumber { .. })
    ));
}

#[test]
fn test_bang_never_fails() {
    assert_eq!(eval("!nil;"), Value::Boolean(true));
    assert_eq!(eval("!false;"), Value::Boolean(true));
    assert_eq!(eval("!true;"), Value::Boolean(false));
    // zero and the empty string are truthy
    assert_eq!(eval("!0;"), Value::Boolean(false));
    assert_eq!(eval("!\"\";"), Value::Boolean(false));
}

#[test]
fn test_equality_across_kinds() {
    assert_eq!(eval("nil == nil;"), Value::Boolean(true));
    assert_eq!(eval("nil == false;"), Value::Boolean(false));
    assert_eq!(eval("1 == \"1\";"), Value::Boolean(false));
    assert_eq!(eval("1 == 1;"), Value::Boolean(true));
    assert_eq!(eval("\"a\" != \"b\";"), Value::Boolean(true));
}

#[test]
fn test_grouping_is_transparent() {
    assert_eq!(eval("(1 + 2) * 3;"), Value::Number(9.0));
    assert_eq!(eval("(nil);"), Value::Nil);
}

#[test]
fn test_runtime_error_carries_offending_expression() {
    let error = run("1 + \"a\";").unwrap_err();
    assert!(matches!(
        error.expression(),
        lox_parser::Expression::Binary { .. }
    ));
}
