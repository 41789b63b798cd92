//! Dynamically typed element for heterogeneous lists.
//!
//! A [`List`](crate::List) holds one element type per instance. Lists that
//! need to mix element kinds use [`Value`] as that type:
//!
//! ```
//! use nexus_sll::{SinglyLinkedList, Value};
//!
//! let mut list: SinglyLinkedList<Value> = SinglyLinkedList::new();
//! list.add_last("a".into());
//! list.add_last(2.into());
//! list.add_last(true.into());
//! assert_eq!(list.to_string(), "a->2->true");
//! ```

use core::fmt;

/// A string, integer, float, or boolean element.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Owned string; rendered without quotes.
    Str(String),
    /// Signed integer.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Boolean.
    Bool(bool),
}

impl Value {
    /// Returns the string payload, if this is a [`Value::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer payload, if this is a [`Value::Int`].
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}
