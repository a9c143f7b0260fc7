// Lox AST node model
// Pure data records, immutable after parse; all evaluation logic lives in
// the interpreter and dispatches by exhaustive match over these sum types.

use crate::token::Token;

/// Literal payload of a `Literal` expression
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Number(f64),
    String(String),
    Boolean(bool),
    Nil,
}

/// Operators legal in a unary expression.
///
/// The grammar only ever produces these two at a unary site, so evaluation
/// needs no "unreachable operator" fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `-`, arithmetic negation
    Negate,
    /// `!`, logical negation of truthiness
    Not,
}

/// Operators legal in a binary expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Equal,
    NotEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
}

/// Short-circuiting operators legal in a logical expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
}

/// Expression nodes.
///
/// Operator-bearing variants keep the source `Token` alongside the typed
/// operator so error reports can name the offending operator and line.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal {
        value: LiteralValue,
    },
    Grouping {
        expression: Box<Expression>,
    },
    Unary {
        operator: UnaryOp,
        token: Token,
        operand: Box<Expression>,
    },
    Binary {
        operator: BinaryOp,
        token: Token,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Logical {
        operator: LogicalOp,
        token: Token,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Variable {
        name: Token,
    },
    Assignment {
        name: Token,
        value: Box<Expression>,
    },
}

/// Statement nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Expression {
        expression: Expression,
    },
    Print {
        expression: Expression,
    },
    VariableDeclaration {
        name: Token,
        initializer: Option<Expression>,
    },
    Block {
        statements: Vec<Statement>,
    },
    If {
        condition: Expression,
        then_branch: Box<Statement>,
        else_branch: Option<Box<Statement>>,
    },
    While {
        condition: Expression,
        body: Box<Statement>,
    },
}
