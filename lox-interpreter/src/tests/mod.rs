//! Integration tests driving the full scan → parse → interpret pipeline.

mod test_control_flow;
mod test_operators;
mod test_pipeline;

use crate::{BufferSink, Interpreter, RuntimeError, Value};

/// Run a source program against a fresh interpreter, capturing output.
///
/// Returns the value of the final expression statement (if any) and every
/// line sent to the output sink.
pub(crate) fn run(source: &str) -> Result<(Option<Value>, Vec<String>), RuntimeError> {
    let sink = BufferSink::new();
    let mut interpreter = Interpreter::new(Box::new(sink.clone()));
    let statements = lox_parser::parse_program(source).expect("source should parse");
    let value = interpreter.interpret(&statements)?;
    Ok((value, sink.lines()))
}

/// Run a source program and return only the captured output lines
pub(crate) fn run_output(source: &str) -> Vec<String> {
    let (_, lines) = run(source).expect("program should run");
    lines
}

/// Run a source program expected to end in an expression statement
pub(crate) fn eval(source: &str) -> Value {
    let (value, _) = run(source).expect("program should run");
    value.expect("program should end in an expression statement")
}
