//! # Dynamic Values
//!
//! Most pipelines know their element kind statically and use `Seq<i64>`,
//! `Mat<String>` and so on. Tabular data with mixed columns does not, so
//! [`Value`] provides an explicit tagged union for the "any" element kind.
//!
//! Conversions out of a `Value` are pattern matches that return a [`Maybe`],
//! which makes them usable directly as `convert_to` callbacks:
//!
//! ```rust
//! use maybe_core::{Maybe, Seq, Value};
//!
//! let cells = Seq::from_items(["1", "2", "x"]).map(|t| Maybe::just(Value::infer(t)));
//! let ints = cells.convert_to(Value::into_int);
//! assert_eq!(ints.unbox().unwrap_err().to_string(), "expected int, found str");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::Maybe;

/// A dynamically typed element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    /// Classify a token: integer, then finite float, then boolean, else string.
    /// An empty (or all-whitespace) token is `Null`.
    pub fn infer(token: &str) -> Value {
        let token = token.trim();
        if token.is_empty() {
            return Value::Null;
        }
        if let Ok(n) = token.parse::<i64>() {
            return Value::Int(n);
        }
        // "nan", "inf" and overflowing literals stay text.
        if let Ok(x) = token.parse::<f64>() {
            if x.is_finite() {
                return Value::Float(x);
            }
        }
        match token {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            _ => Value::Str(token.to_string()),
        }
    }

    /// Name of the variant held.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn into_int(self) -> Maybe<i64> {
        match self {
            Value::Int(n) => Maybe::just(n),
            other => Maybe::fail(other.mismatch("int")),
        }
    }

    /// Integers widen to floats.
    pub fn into_float(self) -> Maybe<f64> {
        match self {
            Value::Float(x) => Maybe::just(x),
            Value::Int(n) => Maybe::just(n as f64),
            other => Maybe::fail(other.mismatch("float")),
        }
    }

    pub fn into_bool(self) -> Maybe<bool> {
        match self {
            Value::Bool(b) => Maybe::just(b),
            other => Maybe::fail(other.mismatch("bool")),
        }
    }

    pub fn into_str(self) -> Maybe<String> {
        match self {
            Value::Str(s) => Maybe::just(s),
            other => Maybe::fail(other.mismatch("str")),
        }
    }

    fn mismatch(&self, expected: &'static str) -> Error {
        Error::KindMismatch {
            expected,
            found: self.kind(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<Value> for Maybe<Value> {
    fn from(value: Value) -> Self {
        Maybe::just(value)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}
