use serde::{Deserialize, Serialize};
use std::fmt;

/// A literal operand of a SQL predicate.
///
/// Only the shapes that can appear inlined in generated SQL are modeled;
/// anything richer (timestamps, blobs, …) is passed as its textual form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Value {
    Int(i64),
    Uint(u64),
    Float(f64),
    String(String),
    Boolean(bool),
    Null,
}

/// The raw text handed to the driver's escaping primitive.
///
/// No quoting and no escaping happens here: the renderer escapes the text
/// and decides whether the result is wrapped in single quotes. Booleans
/// print as `1`/`0`, NULL prints as the empty string.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Uint(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "{v}"),
            Value::Boolean(v) => write!(f, "{}", if *v { 1 } else { 0 }),
            Value::Null => Ok(()),
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Uint(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn test_literal_text() {
        assert_eq!(Value::Int(1).to_string(), "1");
        assert_eq!(Value::Uint(42).to_string(), "42");
        assert_eq!(Value::Float(123.0).to_string(), "123");
        assert_eq!(Value::Float(1.5).to_string(), "1.5");
        assert_eq!(Value::String("a'b".to_string()).to_string(), "a'b");
        assert_eq!(Value::Boolean(true).to_string(), "1");
        assert_eq!(Value::Boolean(false).to_string(), "0");
        assert_eq!(Value::Null.to_string(), "");
    }

    #[test]
    fn test_from_native_scalars() {
        assert_eq!(Value::from(1), Value::Int(1));
        assert_eq!(Value::from(1i64), Value::Int(1));
        assert_eq!(Value::from(1u64), Value::Uint(1));
        assert_eq!(Value::from(2.5), Value::Float(2.5));
        assert_eq!(Value::from(true), Value::Boolean(true));
        assert_eq!(Value::from("x"), Value::String("x".to_string()));
        assert_eq!(Value::from("x".to_string()), Value::String("x".to_string()));
    }
}
