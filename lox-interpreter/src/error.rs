//! Runtime error taxonomy for the Lox interpreter.
//!
//! Every runtime error carries the offending expression so the driver can
//! render `at expression "<sexpr>": <message>` reports. No error here is
//! retried or swallowed; all propagate to the outermost caller.

use lox_parser::{Expression, Token};
use miette::Diagnostic;
use thiserror::Error;

/// A name was looked up or assigned in a scope chain that never defines it.
///
/// Raised by [`Environment`](crate::Environment); the interpreter wraps it
/// with the referencing expression before propagating.
#[derive(Debug, Clone, Error, Diagnostic)]
#[error("undefined variable \"{name}\"")]
#[diagnostic(code(lox::runtime::undefined_variable))]
pub struct UndefinedVariable {
    pub name: String,
}

/// Errors raised while evaluating one expression
#[derive(Debug, Clone, Error, Diagnostic)]
pub enum RuntimeError {
    #[error("operands must be numbers")]
    #[diagnostic(code(lox::runtime::operands_must_be_numbers))]
    OperandsMustBeNumbers {
        expression: Expression,
        operator: Token,
    },

    #[error("operand must be a number")]
    #[diagnostic(code(lox::runtime::operand_must_be_a_number))]
    OperandMustBeANumber {
        expression: Expression,
        operator: Token,
    },

    #[error("invalid operands for binary expression")]
    #[diagnostic(code(lox::runtime::invalid_binary_operands))]
    InvalidBinaryOperands {
        expression: Expression,
        operator: Token,
    },

    #[error("{source}")]
    #[diagnostic(code(lox::runtime::undefined_variable))]
    UndefinedVariable {
        expression: Expression,
        source: UndefinedVariable,
    },
}

impl RuntimeError {
    /// The expression the error was raised from, for driver-side rendering
    pub fn expression(&self) -> &Expression {
        match self {
            RuntimeError::OperandsMustBeNumbers { expression, .. }
            | RuntimeError::OperandMustBeANumber { expression, .. }
            | RuntimeError::InvalidBinaryOperands { expression, .. }
            | RuntimeError::UndefinedVariable { expression, .. } => expression,
        }
    }
}
