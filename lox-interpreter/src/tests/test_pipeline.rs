//! End-to-end checks on the parse-to-evaluation pipeline and on printed
//! output formatting.

use super::{eval, run, run_output};
use crate::Value;

#[test]
fn test_negative_one_round_trip() {
    // "-1;" parses to Unary(Negate, Literal(1.0)) and evaluates to -1.0
    assert_eq!(eval("-1;"), Value::Number(-1.0));
}

#[test]
fn test_print_nil_emits_the_literal_text() {
    assert_eq!(run_output("print nil;"), vec!["nil"]);
}

#[test]
fn test_print_number_formatting() {
    assert_eq!(run_output("print 2;"), vec!["2"]);
    assert_eq!(run_output("print 2.5;"), vec!["2.5"]);
    assert_eq!(run_output("print 1 / 3;"), vec![(1.0f64 / 3.0).to_string()]);
}

#[test]
fn test_print_string_and_boolean() {
    assert_eq!(run_output("print \"hi\";"), vec!["hi"]);
    assert_eq!(run_output("print true;"), vec!["true"]);
}

#[test]
fn test_interpret_yields_final_expression_value() {
    let (value, _) = run("var x = 2; x * 3;").expect("should run");
    assert_eq!(value, Some(Value::Number(6.0)));
}

#[test]
fn test_interpret_yields_none_without_final_expression() {
    let (value, _) = run("var x = 2;").expect("should run");
    assert_eq!(value, None);
}

#[test]
fn test_expression_statement_side_effects_happen() {
    // discarded result, retained side effect
    let output = run_output("var x = 0; x = x + 1; print x;");
    assert_eq!(output, vec!["1"]);
}

#[test]
fn test_larger_program() {
    let output = run_output(
        "var total = 0;\n\
         var i = 1;\n\
         while (i <= 4) {\n\
           total = total + i;\n\
           i = i + 1;\n\
         }\n\
         if (total > 5) print \"big\"; else print \"small\";\n\
         print total;",
    );
    assert_eq!(output, vec!["big", "10"]);
}
