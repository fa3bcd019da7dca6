//! Runtime values for the Husk command language.
//!
//! # Heap Enforcement
//!
//! All shared payloads go through `Heap<T>`, whose constructor is private to
//! this module. Outside code builds values with the factory methods:
//!
//! ```text
//! let s = Value::string("lorem");
//! let l = Value::list(vec![Value::string("/a"), Value::string("/b")]);
//! ```
//!
//! # Thread Safety
//!
//! Values are immutable and `Heap` is `Arc`-backed, so values move freely
//! between evaluation threads.

mod heap;
mod quote;
mod structs;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::collections::BTreeMap;
use std::fmt;

pub use heap::Heap;
pub use structs::{Descriptor, StructValue};

use crate::errors::{ValueError, ValueResult};

/// Runtime value.
#[derive(Clone)]
pub enum Value {
    /// Boolean value.
    Bool(bool),
    /// String value.
    Str(Heap<String>),
    /// Ordered list of values.
    List(Heap<Vec<Value>>),
    /// Map from string keys to values, ordered by key.
    Map(Heap<BTreeMap<String, Value>>),
    /// Struct instance.
    Struct(StructValue),
}

// Factory Methods

impl Value {
    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create a list value.
    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// Create a list of strings.
    pub fn string_list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::list(items.into_iter().map(Value::string).collect())
    }

    /// Create a map value.
    #[inline]
    pub fn map(entries: BTreeMap<String, Value>) -> Self {
        Value::Map(Heap::new(entries))
    }
}

impl From<StructValue> for Value {
    fn from(s: StructValue) -> Self {
        Value::Struct(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

// Value Methods

impl Value {
    /// Try to view as a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Try to view as a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Try to view as a struct.
    pub fn as_struct(&self) -> Option<&StructValue> {
        match self {
            Value::Struct(s) => Some(s),
            _ => None,
        }
    }

    /// Iterate the elements of an iterable value.
    ///
    /// Only lists are iterable; everything else yields `None`.
    pub fn iterate(&self) -> Option<std::slice::Iter<'_, Value>> {
        self.as_list().map(<[Value]>::iter)
    }

    /// Get the type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Struct(_) => "struct",
        }
    }

    /// Whether two values are the same allocation, not just equal.
    ///
    /// Scalars are never shared and always report `false`.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Str(a), Value::Str(b)) => Heap::ptr_eq(a, b),
            (Value::List(a), Value::List(b)) => Heap::ptr_eq(a, b),
            (Value::Map(a), Value::Map(b)) => Heap::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Look up a struct field or map entry.
    pub fn index_one(&self, key: &Value) -> ValueResult<Value> {
        match self {
            Value::Struct(s) => s.index_one(key),
            Value::Map(entries) => key
                .as_str()
                .and_then(|k| entries.get(k))
                .cloned()
                .ok_or_else(|| ValueError::NoSuchKey {
                    key: key.to_text(),
                }),
            _ => Err(ValueError::NotIndexable {
                type_name: self.type_name(),
            }),
        }
    }

    /// Canonical text form, reading back as the same value.
    pub fn repr(&self) -> String {
        match self {
            Value::Bool(true) => "$true".to_string(),
            Value::Bool(false) => "$false".to_string(),
            Value::Str(s) => quote::quote(s).into_owned(),
            Value::List(items) => {
                let parts: Vec<String> = items.iter().map(Value::repr).collect();
                format!("[{}]", parts.join(" "))
            }
            Value::Map(entries) => {
                if entries.is_empty() {
                    return "[&]".to_string();
                }
                let parts: Vec<String> = entries
                    .iter()
                    .map(|(k, v)| format!("&{}={}", quote::quote(k), v.repr()))
                    .collect();
                format!("[{}]", parts.join(" "))
            }
            Value::Struct(s) => s.repr(),
        }
    }

    /// Text used where the runtime needs a plain string.
    ///
    /// Strings yield their contents; everything else yields its `repr`.
    pub fn to_text(&self) -> String {
        match self {
            Value::Str(s) => String::clone(s),
            _ => self.repr(),
        }
    }

    /// JSON encoding.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Check structural equality with another value.
    pub fn equals(&self, other: &Value) -> bool {
        self == other
    }
}

// Trait Implementations

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Struct(a), Value::Struct(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            _ => f.write_str(&self.repr()),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Str(s) => serializer.serialize_str(s),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            Value::Struct(s) => s.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests;
