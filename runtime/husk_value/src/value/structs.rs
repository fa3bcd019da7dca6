//! Struct values and the descriptors that shape them.
//!
//! A `Descriptor` is an ordered list of unique field names with an identity of
//! its own. Two descriptors built from the same names are still different
//! shapes; structs only compare equal when they share a descriptor.

// Arc carries Descriptor identity
#![expect(
    clippy::disallowed_types,
    reason = "Arc allocation is the identity of a Descriptor"
)]

use rustc_hash::FxHashMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::heap::Heap;
use super::quote::quote;
use super::Value;
use crate::errors::{ValueError, ValueResult};

static NEXT_DESCRIPTOR_ID: AtomicU64 = AtomicU64::new(0);

// Descriptor

struct DescriptorInner {
    id: u64,
    names: Vec<String>,
    /// Map from field name to index.
    indices: FxHashMap<String, usize>,
}

/// Identity-bearing, ordered field-name schema.
///
/// Cloning a `Descriptor` keeps its identity; calling [`Descriptor::new`] again
/// with the same names does not.
#[derive(Clone)]
pub struct Descriptor(Arc<DescriptorInner>);

impl Descriptor {
    /// Create a descriptor from field names in declaration order.
    ///
    /// Fails with `DuplicateField` if a name repeats.
    pub fn new<I, S>(names: I) -> ValueResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut indices = FxHashMap::default();
        indices.reserve(names.len());
        for (i, name) in names.iter().enumerate() {
            if indices.insert(name.clone(), i).is_some() {
                return Err(ValueError::DuplicateField { name: name.clone() });
            }
        }
        let id = NEXT_DESCRIPTOR_ID.fetch_add(1, Ordering::Relaxed);
        Ok(Descriptor(Arc::new(DescriptorInner { id, names, indices })))
    }

    /// Process-unique id, for diagnostics.
    pub fn id(&self) -> u64 {
        self.0.id
    }

    /// Field names in declaration order.
    pub fn names(&self) -> &[String] {
        &self.0.names
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.0.names.len()
    }

    /// Check if the descriptor has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.names.is_empty()
    }

    /// Get the index of a field by name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.0.indices.get(name).copied()
    }
}

impl PartialEq for Descriptor {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Descriptor {}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Descriptor#{}", self.0.id)?;
        f.debug_list().entries(&self.0.names).finish()
    }
}

// StructValue

/// Immutable struct instance.
///
/// Fields are stored in descriptor order. Updates go through
/// [`StructValue::assoc`], which returns a new struct and leaves the receiver
/// untouched.
#[derive(Clone)]
pub struct StructValue {
    descriptor: Descriptor,
    fields: Heap<Vec<Value>>,
}

impl StructValue {
    /// Create a struct from values in descriptor order.
    pub fn new(descriptor: Descriptor, values: Vec<Value>) -> ValueResult<Self> {
        if values.len() != descriptor.len() {
            return Err(ValueError::FieldCountMismatch {
                expected: descriptor.len(),
                got: values.len(),
            });
        }
        Ok(StructValue {
            descriptor,
            fields: Heap::new(values),
        })
    }

    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    /// Field values in descriptor order.
    pub fn fields(&self) -> &[Value] {
        &self.fields
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get a field value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        let index = self.descriptor.index_of(name)?;
        self.fields.get(index)
    }

    /// Iterate over `(name, value)` pairs in descriptor order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.descriptor
            .names()
            .iter()
            .map(String::as_str)
            .zip(self.fields.iter())
    }

    /// Look up the field named by `key`.
    ///
    /// `key` must be a string naming a declared field; anything else fails
    /// with `NoSuchField`.
    pub fn index_one(&self, key: &Value) -> ValueResult<Value> {
        let index = self.field_index(key)?;
        self.fields
            .get(index)
            .cloned()
            .ok_or_else(|| no_such_field(key))
    }

    /// Return a copy of this struct with field `key` replaced by `value`.
    ///
    /// The result shares the descriptor, so it compares equal to other structs
    /// of the same shape. Untouched fields keep their allocations.
    pub fn assoc(&self, key: &Value, value: Value) -> ValueResult<StructValue> {
        let index = self.field_index(key)?;
        let mut fields = Vec::clone(&self.fields);
        let slot = fields.get_mut(index).ok_or_else(|| no_such_field(key))?;
        *slot = value;
        Ok(StructValue {
            descriptor: self.descriptor.clone(),
            fields: Heap::new(fields),
        })
    }

    /// Structural equality: same descriptor and pairwise-equal fields.
    pub fn equals(&self, other: &StructValue) -> bool {
        self == other
    }

    /// Canonical text form, `[&name=value ...]` in descriptor order.
    pub fn repr(&self) -> String {
        let mut out = String::from("[");
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push('&');
            out.push_str(&quote(name));
            out.push('=');
            out.push_str(&value.repr());
        }
        if self.is_empty() {
            out.push('&');
        }
        out.push(']');
        out
    }

    /// JSON object with keys in descriptor order.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    fn field_index(&self, key: &Value) -> ValueResult<usize> {
        key.as_str()
            .and_then(|name| self.descriptor.index_of(name))
            .ok_or_else(|| no_such_field(key))
    }
}

#[cold]
fn no_such_field(key: &Value) -> ValueError {
    ValueError::NoSuchField {
        field: key.to_text(),
    }
}

impl PartialEq for StructValue {
    fn eq(&self, other: &Self) -> bool {
        self.descriptor == other.descriptor && self.fields == other.fields
    }
}

impl fmt::Debug for StructValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr())
    }
}

impl Serialize for StructValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Emitted field by field so key order never depends on a map type.
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
