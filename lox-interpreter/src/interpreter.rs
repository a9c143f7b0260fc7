//! Tree-walking interpreter for the Lox core language.
//!
//! Executes parsed statements against a current environment, evaluates
//! expressions to runtime values, and emits program output through the
//! injected sink. Evaluation is single-threaded and depth-first recursive;
//! nesting depth is bounded by the host call stack.

use crate::environment::Environment;
use crate::error::RuntimeError;
use crate::sink::OutputSink;
use crate::value::Value;
use lox_parser::{BinaryOp, Expression, LogicalOp, Statement, Token, UnaryOp};

pub struct Interpreter {
    environment: Environment,
    output: Box<dyn OutputSink>,
}

impl Interpreter {
    pub fn new(output: Box<dyn OutputSink>) -> Self {
        Self {
            environment: Environment::new(),
            output,
        }
    }

    /// Execute a program.
    ///
    /// Yields the value of the final expression statement, if the program
    /// ends in one, so interactive drivers can echo it. A runtime error
    /// aborts the remainder of the sequence.
    pub fn interpret(&mut self, statements: &[Statement]) -> Result<Option<Value>, RuntimeError> {
        let mut last = None;
        for statement in statements {
            last = self.execute(statement)?;
        }
        Ok(last)
    }

    fn execute(&mut self, statement: &Statement) -> Result<Option<Value>, RuntimeError> {
        match statement {
            Statement::Expression { expression } => Ok(Some(self.evaluate(expression)?)),
            Statement::Print { expression } => {
                let value = self.evaluate(expression)?;
                self.output.send(&value.to_string_repr());
                Ok(None)
            }
            Statement::VariableDeclaration { name, initializer } => {
                let value = match initializer {
                    Some(expression) => self.evaluate(expression)?,
                    None => Value::Nil,
                };
                self.environment.define(name.lexeme.clone(), value);
                Ok(None)
            }
            Statement::Block { statements } => {
                self.execute_block(statements)?;
                Ok(None)
            }
            Statement::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute(then_branch)?;
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)?;
                }
                Ok(None)
            }
            Statement::While { condition, body } => {
                while self.evaluate(condition)?.is_truthy() {
                    self.execute(body)?;
                }
                Ok(None)
            }
        }
    }

    fn execute_block(&mut self, statements: &[Statement]) -> Result<(), RuntimeError> {
        self.environment.push_scope();
        let result = self.execute_sequence(statements);
        // the enclosing scope comes back on every exit path, error included
        self.environment.pop_scope();
        result
    }

    fn execute_sequence(&mut self, statements: &[Statement]) -> Result<(), RuntimeError> {
        for statement in statements {
            self.execute(statement)?;
        }
        Ok(())
    }

    /// Evaluate one expression against the current environment
    pub fn evaluate(&mut self, expression: &Expression) -> Result<Value, RuntimeError> {
        match expression {
            Expression::Literal { value } => Ok(Value::from(value)),

            Expression::Grouping {
                expression: inner, ..
            } => self.evaluate(inner),

            Expression::Unary {
                operator,
                token,
                operand,
            } => {
                let value = self.evaluate(operand)?;
                match operator {
                    UnaryOp::Not => Ok(Value::Boolean(!value.is_truthy())),
                    UnaryOp::Negate => match value {
                        Value::Number(n) => Ok(Value::Number(-n)),
                        _ => Err(RuntimeError::OperandMustBeANumber {
                            expression: expression.clone(),
                            operator: token.clone(),
                        }),
                    },
                }
            }

            Expression::Binary {
                operator,
                token,
                left,
                right,
            } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                apply_binary(expression, *operator, token, left, right)
            }

            Expression::Logical {
                operator,
                left,
                right,
                ..
            } => {
                let left = self.evaluate(left)?;
                let short_circuits = match operator {
                    LogicalOp::Or => left.is_truthy(),
                    LogicalOp::And => !left.is_truthy(),
                };
                // yields an operand value, not a boolean
                if short_circuits {
                    Ok(left)
                } else {
                    self.evaluate(right)
                }
            }

            Expression::Variable { name } => {
                self.environment
                    .get(&name.lexeme)
                    .map_err(|source| RuntimeError::UndefinedVariable {
                        expression: expression.clone(),
                        source,
                    })
            }

            Expression::Assignment { name, value } => {
                let value = self.evaluate(value)?;
                self.environment
                    .assign(&name.lexeme, value.clone())
                    .map_err(|source| RuntimeError::UndefinedVariable {
                        expression: expression.clone(),
                        source,
                    })?;
                // assignment is itself an expression with a value
                Ok(value)
            }
        }
    }
}

fn apply_binary(
    expression: &Expression,
    operator: BinaryOp,
    token: &Token,
    left: Value,
    right: Value,
) -> Result<Value, RuntimeError> {
    match operator {
        BinaryOp::Add => match (left, right) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
            (Value::String(a), Value::String(b)) => Ok(Value::String(format!("{a}{b}"))),
            _ => Err(RuntimeError::InvalidBinaryOperands {
                expression: expression.clone(),
                operator: token.clone(),
            }),
        },

        // equality works on any pair of values
        BinaryOp::Equal => Ok(Value::Boolean(left.equals(&right))),
        BinaryOp::NotEqual => Ok(Value::Boolean(!left.equals(&right))),

        BinaryOp::Subtract => {
            let (a, b) = numeric_operands(expression, token, left, right)?;
            Ok(Value::Number(a - b))
        }
        BinaryOp::Multiply => {
            let (a, b) = numeric_operands(expression, token, left, right)?;
            Ok(Value::Number(a * b))
        }
        BinaryOp::Divide => {
            // IEEE semantics: division by zero yields an infinity, not an error
            let (a, b) = numeric_operands(expression, token, left, right)?;
            Ok(Value::Number(a / b))
        }
        BinaryOp::Greater => {
            let (a, b) = numeric_operands(expression, token, left, right)?;
            Ok(Value::Boolean(a > b))
        }
        BinaryOp::GreaterEqual => {
            let (a, b) = numeric_operands(expression, token, left, right)?;
            Ok(Value::Boolean(a >= b))
        }
        BinaryOp::Less => {
            let (a, b) = numeric_operands(expression, token, left, right)?;
            Ok(Value::Boolean(a < b))
        }
        BinaryOp::LessEqual => {
            let (a, b) = numeric_operands(expression, token, left, right)?;
            Ok(Value::Boolean(a <= b))
        }
    }
}

fn numeric_operands(
    expression: &Expression,
    token: &Token,
    left: Value,
    right: Value,
) -> Result<(f64, f64), RuntimeError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((a, b)),
        _ => Err(RuntimeError::OperandsMustBeNumbers {
            expression: expression.clone(),
            operator: token.clone(),
        }),
    }
}
