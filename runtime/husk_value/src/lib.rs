//! Husk Value - runtime values for the Husk command language.
//!
//! This crate provides:
//! - The `Value` universe builtins produce and variables hold
//!   (strings, booleans, lists, maps, structs)
//! - `Descriptor` and `StructValue`, the immutable, field-ordered composite
//!   used for row-like builtin results
//! - The canonical text form (`Value::repr`) and JSON encoding
//! - Value errors (`ValueError`, `ValueResult`)
//!
//! # Sharing
//!
//! Heap payloads are held through `Heap<T>`, so cloning a value never copies
//! its contents. `StructValue::assoc` builds a new struct whose untouched
//! fields point at the same allocations as the original.

mod errors;
mod value;

pub use errors::{ValueError, ValueResult};
pub use value::{Descriptor, Heap, StructValue, Value};
