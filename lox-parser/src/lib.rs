// Lox Parser Library
// Scanner, AST node model, and recursive-descent parser for the Lox core
// language.

pub mod ast;
pub mod error;
pub mod parser;
pub mod scanner;
pub mod token;

pub use ast::*;
pub use error::*;
pub use parser::Parser;
pub use scanner::Scanner;
pub use token::*;

// Main parsing functions

/// Scan source text into a token sequence terminated by an Eof token
pub fn scan(source: &str) -> Result<Vec<Token>, ScanError> {
    Scanner::new(source).scan_tokens()
}

/// Parse source text into a program (an ordered sequence of statements)
pub fn parse_program(source: &str) -> Result<Vec<Statement>, SyntaxError> {
    let tokens = scan(source)?;
    Ok(Parser::new(tokens).parse()?)
}

/// Parse an already-scanned token sequence into a program
pub fn parse_tokens(tokens: Vec<Token>) -> Result<Vec<Statement>, ParseError> {
    Parser::new(tokens).parse()
}

// Version and metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
