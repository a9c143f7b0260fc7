//! Tree-walking interpreter for the Lox core language.
//!
//! Takes the statement sequence produced by `lox-parser` and executes it:
//! runtime values, the lexical environment (scope chain), the statement and
//! expression evaluator, and the injected output sink.

pub mod environment;
pub mod error;
pub mod interpreter;
pub mod sink;
pub mod value;

#[cfg(test)]
mod tests;

pub use environment::Environment;
pub use error::{RuntimeError, UndefinedVariable};
pub use interpreter::Interpreter;
pub use sink::{BufferSink, OutputSink, StdoutSink};
pub use value::Value;
