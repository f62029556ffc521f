//! Primitive field values
//!
//! Every attribute of a record, fixed or custom, carries one of six shapes:
//! string, number, boolean, or a homogeneous list of one of those. The enum
//! is the single value type used by the schema, the executor, and the query
//! literals, so comparison and membership logic need only one representation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A primitive value: scalar or homogeneous list.
///
/// Serialized untagged, so the on-disk JSON is the plain value
/// (`"lib"`, `3`, `true`, `["a", "b"]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// UTF-8 string
    Str(String),
    /// 64-bit floating point (integer literals included)
    Num(f64),
    /// Boolean
    Bool(bool),
    /// Homogeneous list of strings
    StrList(Vec<String>),
    /// Homogeneous list of numbers
    NumList(Vec<f64>),
    /// Homogeneous list of booleans
    BoolList(Vec<bool>),
}

impl Value {
    /// Returns the type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Num(_) => "number",
            Value::Bool(_) => "boolean",
            Value::StrList(_) => "string[]",
            Value::NumList(_) => "number[]",
            Value::BoolList(_) => "boolean[]",
        }
    }

    /// Returns true if this value is a list shape.
    pub fn is_sequence(&self) -> bool {
        matches!(
            self,
            Value::StrList(_) | Value::NumList(_) | Value::BoolList(_)
        )
    }

    /// Returns true if this is a sequence with no elements.
    pub fn sequence_is_empty(&self) -> bool {
        match self {
            Value::StrList(items) => items.is_empty(),
            Value::NumList(items) => items.is_empty(),
            Value::BoolList(items) => items.is_empty(),
            _ => false,
        }
    }

    /// Returns the numeric value, if this is a number.
    pub fn as_num(&self) -> Option<f64> {
        match self {
            Value::Num(n) => Some(*n),
            _ => None,
        }
    }

    /// Membership test against a list value.
    ///
    /// Returns `None` if this value is not a sequence; otherwise whether
    /// `needle` is structurally equal to one of the elements. A needle of a
    /// different element type never matches.
    pub fn sequence_contains(&self, needle: &Value) -> Option<bool> {
        match self {
            Value::StrList(items) => Some(match needle {
                Value::Str(s) => items.iter().any(|item| item == s),
                _ => false,
            }),
            Value::NumList(items) => Some(match needle {
                Value::Num(n) => items.iter().any(|item| item == n),
                _ => false,
            }),
            Value::BoolList(items) => Some(match needle {
                Value::Bool(b) => items.iter().any(|item| item == b),
                _ => false,
            }),
            _ => None,
        }
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

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Num(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// Renders the value as an NXQL literal where one exists (scalars), and as a
/// bracketed list otherwise. Scalar rendering round-trips through the parser.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => {
                write!(f, "'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
            }
            Value::Num(n) => write_number(f, *n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::StrList(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "'{}'", item.replace('\\', "\\\\").replace('\'', "\\'"))?;
                }
                write!(f, "]")
            }
            Value::NumList(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write_number(f, *item)?;
                }
                write!(f, "]")
            }
            Value::BoolList(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Integral numbers print without a fractional part so literals round-trip.
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
        write!(f, "{}", n as i64)
    } else {
        write!(f, "{}", n)
    }
}
