//! REPL (Read-Eval-Print Loop) for the Lox interpreter.
//!
//! Drives the scan → parse → interpret pipeline one line at a time against a
//! persistent interpreter, with history and line editing from rustyline.
//! User-program failures are reported in the `at token "..."` /
//! `at expression "..."` form and never end the session.

use crate::sexpr::format_expression_as_sexpr;
use lox_interpreter::{Interpreter, RuntimeError, StdoutSink, Value};
use lox_parser::{ParseError, ScanError, SyntaxError};
use miette::Diagnostic;
use rustyline::{DefaultEditor, error::ReadlineError};
use thiserror::Error;

/// Errors of the REPL machinery itself (not of user programs)
#[derive(Debug, Error, Diagnostic)]
pub enum ReplError {
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("Readline error: {source}")]
    Readline {
        #[from]
        source: ReadlineError,
    },
}

/// REPL configuration options
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Prompt string for input
    pub prompt: String,

    /// Enable history persistence
    pub persist_history: bool,

    /// History file path
    pub history_file: Option<String>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "lox> ".to_string(),
            persist_history: true,
            history_file: Some(".lox_history".to_string()),
        }
    }
}

/// REPL session statistics
#[derive(Debug, Clone, Default)]
pub struct ReplStats {
    /// Number of lines evaluated
    pub lines_evaluated: usize,

    /// Number of errors reported
    pub errors_encountered: usize,
}

/// REPL session that maintains interpreter state across lines
pub struct ReplSession {
    /// Interactive line editor with history
    editor: DefaultEditor,

    /// Persistent interpreter; variable bindings survive across lines
    interpreter: Interpreter,

    config: ReplConfig,
    stats: ReplStats,
}

impl ReplSession {
    /// Create a new REPL session with default configuration
    pub fn new() -> Result<Self, ReplError> {
        Self::with_config(ReplConfig::default())
    }

    /// Create a new REPL session with custom configuration
    pub fn with_config(config: ReplConfig) -> Result<Self, ReplError> {
        let mut editor = DefaultEditor::new()?;

        if config.persist_history {
            if let Some(ref history_file) = config.history_file {
                let _ = editor.load_history(history_file); // new sessions have none
            }
        }

        Ok(Self {
            editor,
            interpreter: Interpreter::new(Box::new(StdoutSink)),
            config,
            stats: ReplStats::default(),
        })
    }

    /// Run the session until end-of-input or interrupt
    pub fn run(&mut self) -> Result<(), ReplError> {
        loop {
            match self.editor.readline(&self.config.prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = self.editor.add_history_entry(line);

                    self.stats.lines_evaluated += 1;
                    match self.execute(line) {
                        // echo the value of a trailing expression statement
                        Ok(Some(value)) => println!("{value}"),
                        Ok(None) => {}
                        Err(message) => {
                            self.stats.errors_encountered += 1;
                            eprintln!("{message}");
                        }
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(source) => return Err(source.into()),
            }
        }

        if self.config.persist_history {
            if let Some(ref history_file) = self.config.history_file {
                let _ = self.editor.save_history(history_file);
            }
        }

        Ok(())
    }

    pub fn stats(&self) -> &ReplStats {
        &self.stats
    }

    /// Run one line; user-program failures come back as display-ready text
    fn execute(&mut self, line: &str) -> Result<Option<Value>, String> {
        let statements = lox_parser::parse_program(line).map_err(|e| syntax_error_message(&e))?;
        self.interpreter
            .interpret(&statements)
            .map_err(|e| runtime_error_message(&e))
    }
}

// User-facing error message formatting, shared with the `run` command.

pub(crate) fn syntax_error_message(error: &SyntaxError) -> String {
    match error {
        SyntaxError::Scan(scan_error) => scan_error_message(scan_error),
        SyntaxError::Parse(parse_error) => parse_error_message(parse_error),
    }
}

pub(crate) fn scan_error_message(error: &ScanError) -> String {
    format!("line {}: {}", error.line, error.message)
}

pub(crate) fn parse_error_message(error: &ParseError) -> String {
    if error.is_at_end() {
        format!("at end of file: {}", error.message)
    } else {
        format!("at token \"{}\": {}", error.token.lexeme, error.message)
    }
}

pub(crate) fn runtime_error_message(error: &RuntimeError) -> String {
    format!(
        "at expression \"{}\": {}",
        format_expression_as_sexpr(error.expression()),
        error
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lox_interpreter::{BufferSink, Interpreter};

    fn run_for_error(source: &str) -> String {
        match lox_parser::parse_program(source) {
            Err(error) => syntax_error_message(&error),
            Ok(statements) => {
                let mut interpreter = Interpreter::new(Box::new(BufferSink::new()));
                let error = interpreter
                    .interpret(&statements)
                    .expect_err("program should fail");
                runtime_error_message(&error)
            }
        }
    }

    #[test]
    fn test_parse_error_names_the_token() {
        assert_eq!(
            run_for_error("var = 1;"),
            "at token \"=\": expected variable name"
        );
    }

    #[test]
    fn test_parse_error_at_end_of_file() {
        assert_eq!(
            run_for_error("print 1"),
            "at end of file: expected ';' after value"
        );
    }

    #[test]
    fn test_scan_error_names_the_line() {
        assert_eq!(run_for_error("\n@"), "line 2: unexpected character '@'");
    }

    #[test]
    fn test_runtime_error_renders_the_expression() {
        assert_eq!(
            run_for_error("1 + \"a\";"),
            "at expression \"(+ 1 \"a\")\": invalid operands for binary expression"
        );
    }

    #[test]
    fn test_undefined_variable_message() {
        assert_eq!(
            run_for_error("ghost;"),
            "at expression \"ghost\": undefined variable \"ghost\""
        );
    }
}
