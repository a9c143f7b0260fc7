//! Conditionals, loops, and short-circuit evaluation, verified through
//! observable side effects on the output sink.

use super::{eval, run_output};
use crate::Value;

#[test]
fn test_if_takes_then_branch_on_truthy_condition() {
    let output = run_output("if (true) print \"then\"; else print \"else\";");
    assert_eq!(output, vec!["then"]);
}

#[test]
fn test_if_takes_else_branch_on_falsy_condition() {
    let output = run_output("if (nil) print \"then\"; else print \"else\";");
    assert_eq!(output, vec!["else"]);
}

#[test]
fn test_if_without_else_is_a_no_op_on_falsy() {
    let output = run_output("if (false) print \"then\";");
    assert!(output.is_empty());
}

#[test]
fn test_untaken_branch_has_no_side_effects() {
    let output = run_output(
        "var x = 0; if (true) x = 1; else x = 2; print x; if (false) print \"skipped\";",
    );
    assert_eq!(output, vec!["1"]);
}

#[test]
fn test_zero_and_empty_string_are_truthy_conditions() {
    let output = run_output("if (0) print \"zero\"; if (\"\") print \"empty\";");
    assert_eq!(output, vec!["zero", "empty"]);
}

#[test]
fn test_while_loop_runs_until_falsy() {
    let output = run_output("var i = 0; while (i < 3) { print i; i = i + 1; }");
    assert_eq!(output, vec!["0", "1", "2"]);
}

#[test]
fn test_while_with_falsy_condition_never_runs_body() {
    let output = run_output("while (false) print \"never\";");
    assert!(output.is_empty());
}

#[test]
fn test_while_body_error_stops_the_loop() {
    let result = super::run("var i = 0; while (i < 3) { i = i + 1; -\"boom\"; }");
    assert!(result.is_err());
}

#[test]
fn test_or_short_circuits_on_truthy_left() {
    // the assignment on the right must never run
    let output = run_output("var x = 0; true or (x = 1); print x;");
    assert_eq!(output, vec!["0"]);
}

#[test]
fn test_and_short_circuits_on_falsy_left() {
    let output = run_output("var x = 0; false and (x = 1); print x;");
    assert_eq!(output, vec!["0"]);
}

#[test]
fn test_logical_operators_yield_operand_values() {
    assert_eq!(eval("nil or \"fallback\";"), Value::String("fallback".to_string()));
    assert_eq!(eval("1 or 2;"), Value::Number(1.0));
    assert_eq!(eval("1 and 2;"), Value::Number(2.0));
    assert_eq!(eval("false and 2;"), Value::Boolean(false));
}

#[test]
fn test_and_evaluates_right_when_left_truthy() {
    let output = run_output("var x = 0; true and (x = 5); print x;");
    assert_eq!(output, vec!["5"]);
}
