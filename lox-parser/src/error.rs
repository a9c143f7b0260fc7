// Lox syntax error handling
// thiserror-derived errors with miette integration for driver-side reporting

use crate::token::{Token, TokenKind};
use miette::Diagnostic;
use thiserror::Error;

/// Lexical error raised while turning source text into tokens
#[derive(Debug, Clone, Error, Diagnostic)]
#[error("line {line}: {message}")]
#[diagnostic(code(lox::scan))]
pub struct ScanError {
    pub line: usize,
    pub message: String,
}

/// The token sequence does not match the grammar at `token`.
///
/// Always fatal to the current parse; no partial AST is produced and no
/// resynchronization is attempted.
#[derive(Debug, Clone, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(lox::parse))]
pub struct ParseError {
    pub token: Token,
    pub message: String,
}

impl ParseError {
    pub fn new(token: Token, message: impl Into<String>) -> Self {
        Self {
            token,
            message: message.into(),
        }
    }

    /// True when the parse ran out of input rather than hitting a bad token
    pub fn is_at_end(&self) -> bool {
        self.token.kind == TokenKind::Eof
    }
}

/// Either failure mode on the way from source text to a program
#[derive(Debug, Clone, Error, Diagnostic)]
pub enum SyntaxError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),
}
