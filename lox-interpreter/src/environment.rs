//! Environment and scope management for the Lox interpreter.
//!
//! Lexical scopes form a stack: the last entry is the innermost scope and
//! index order is the parent chain. Declaration always binds in the
//! innermost scope; lookup and assignment walk outward toward the root.

use crate::error::UndefinedVariable;
use crate::value::Value;
use std::collections::HashMap;

/// Variable environment: the scope chain of the running program
#[derive(Debug, Clone)]
pub struct Environment {
    /// Stack of scopes, innermost last; the first entry is the global scope
    scopes: Vec<Scope>,
}

/// A single scope containing variable bindings
#[derive(Debug, Clone, Default)]
struct Scope {
    bindings: HashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope::default()],
        }
    }

    /// Enter a block: push a new innermost scope
    pub fn push_scope(&mut self) {
        self.scopes.push(Scope::default());
    }

    /// Leave a block: drop the innermost scope.
    ///
    /// The global scope is never popped.
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Bind `name` in the innermost scope, silently overwriting any
    /// existing binding there. Never touches enclosing scopes; this is what
    /// makes shadowing and REPL re-declaration work.
    pub fn define(&mut self, name: String, value: Value) {
        if let Some(innermost) = self.scopes.last_mut() {
            innermost.bindings.insert(name, value);
        }
    }

    /// Look up `name`, searching from the innermost scope outward
    pub fn get(&self, name: &str) -> Result<Value, UndefinedVariable> {
        for scope in self.scopes.iter().rev() {
            if let Some(value) = scope.bindings.get(name) {
                return Ok(value.clone());
            }
        }

        Err(UndefinedVariable {
            name: name.to_string(),
        })
    }

    /// Write `value` into the first scope (innermost outward) that already
    /// binds `name`. Assignment never creates a binding.
    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), UndefinedVariable> {
        for scope in self.scopes.iter_mut().rev() {
            if let Some(slot) = scope.bindings.get_mut(name) {
                *slot = value;
                return Ok(());
            }
        }

        Err(UndefinedVariable {
            name: name.to_string(),
        })
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
