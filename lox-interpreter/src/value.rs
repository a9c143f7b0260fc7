//! Runtime value representation for the Lox interpreter.
//!
//! The dynamic value domain is small and closed: number, string, boolean,
//! nil. Truthiness, equality, and textual rendering all live here so the
//! checks stay exhaustive over the variant set.

use lox_parser::LiteralValue;

/// Runtime values in the Lox interpreter
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Double-precision number, the only numeric type
    Number(f64),
    /// UTF-8 string
    String(String),
    /// Boolean value
    Boolean(bool),
    /// Absence of a value
    Nil,
}

impl Value {
    /// Get the type name of this value
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::String(_) => "String",
            Value::Boolean(_) => "Boolean",
            Value::Nil => "Nil",
        }
    }

    /// Check if this value is truthy (for if, while, logical operators, `!`).
    ///
    /// Only nil and false are falsy; `0` and `""` are truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Nil => false,
            Value::Boolean(b) => *b,
            Value::Number(_) | Value::String(_) => true,
        }
    }

    /// Equality across the whole value domain; never a type error.
    ///
    /// Values of different kinds are never equal, nil equals only nil.
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Nil, Value::Nil) => true,
            _ => false,
        }
    }

    /// Convert to the textual representation used by `print` and the REPL
    pub fn to_string_repr(&self) -> String {
        match self {
            // f64 Display is already the shortest form: 2.0 prints as "2"
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.clone(),
            Value::Boolean(b) => b.to_string(),
            Value::Nil => "nil".to_string(),
        }
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Number(n) => Value::Number(*n),
            LiteralValue::String(s) => Value::String(s.clone()),
            LiteralValue::Boolean(b) => Value::Boolean(*b),
            LiteralValue::Nil => Value::Nil,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string_repr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Number(42.0).type_name(), "Number");
        assert_eq!(Value::String("hello".to_string()).type_name(), "String");
        assert_eq!(Value::Boolean(true).type_name(), "Boolean");
        assert_eq!(Value::Nil.type_name(), "Nil");
    }

    #[test]
    fn test_truthiness() {
        assert!(!Value::Nil.is_truthy());
        assert!(!Value::Boolean(false).is_truthy());
        assert!(Value::Boolean(true).is_truthy());
        // zero and the empty string are truthy, unlike many dynamic languages
        assert!(Value::Number(0.0).is_truthy());
        assert!(Value::String(String::new()).is_truthy());
    }

    #[test]
    fn test_equality() {
        assert!(Value::Nil.equals(&Value::Nil));
        assert!(!Value::Nil.equals(&Value::Boolean(false)));
        assert!(Value::Number(1.0).equals(&Value::Number(1.0)));
        assert!(!Value::Number(1.0).equals(&Value::String("1".to_string())));
        assert!(Value::String("a".to_string()).equals(&Value::String("a".to_string())));
        assert!(!Value::Boolean(true).equals(&Value::Number(1.0)));
    }

    #[test]
    fn test_string_repr() {
        assert_eq!(Value::Number(2.0).to_string_repr(), "2");
        assert_eq!(Value::Number(2.5).to_string_repr(), "2.5");
        assert_eq!(Value::Number(-1.0).to_string_repr(), "-1");
        assert_eq!(Value::String("hi".to_string()).to_string_repr(), "hi");
        assert_eq!(Value::Boolean(true).to_string_repr(), "true");
        assert_eq!(Value::Nil.to_string_repr(), "nil");
    }

    #[test]
    fn test_from_literal() {
        assert_eq!(Value::from(&LiteralValue::Number(1.0)), Value::Number(1.0));
        assert_eq!(Value::from(&LiteralValue::Nil), Value::Nil);
    }
}
