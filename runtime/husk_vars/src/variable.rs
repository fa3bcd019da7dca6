//! The variable capability and its in-memory implementations.
//!
//! Name bindings resolve to a `Variable`. Reading a variable calls `get`,
//! assignment calls `set`; what happens behind that is up to the
//! implementation.

// Arc is the implementation of VarRef
#![expect(clippy::disallowed_types, reason = "Arc is the implementation of VarRef")]

use parking_lot::RwLock;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use husk_value::Value;

use crate::errors::{VarError, VarResult};

/// Get/set capability behind a runtime name binding.
///
/// Implementations must tolerate concurrent calls from several evaluation
/// threads.
pub trait Variable: Send + Sync {
    fn get(&self) -> VarResult<Value>;

    fn set(&self, value: Value) -> VarResult<()>;
}

/// Ordinary in-memory variable.
#[derive(Debug)]
pub struct Cell {
    value: RwLock<Value>,
}

impl Cell {
    pub fn new(value: Value) -> Self {
        Cell {
            value: RwLock::new(value),
        }
    }
}

impl Variable for Cell {
    fn get(&self) -> VarResult<Value> {
        Ok(self.value.read().clone())
    }

    fn set(&self, value: Value) -> VarResult<()> {
        *self.value.write() = value;
        Ok(())
    }
}

/// Variable holding a fixed value.
#[derive(Debug)]
pub struct ReadOnly {
    value: Value,
}

impl ReadOnly {
    pub fn new(value: Value) -> Self {
        ReadOnly { value }
    }
}

impl Variable for ReadOnly {
    fn get(&self) -> VarResult<Value> {
        Ok(self.value.clone())
    }

    fn set(&self, _value: Value) -> VarResult<()> {
        Err(VarError::ReadOnlyAssignment)
    }
}

/// Shared handle to any variable, as stored in binding tables.
pub struct VarRef(Arc<dyn Variable>);

impl VarRef {
    pub fn new(variable: impl Variable + 'static) -> Self {
        VarRef(Arc::new(variable))
    }

    /// Whether both handles refer to the same variable.
    pub fn same(&self, other: &VarRef) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Clone for VarRef {
    fn clone(&self) -> Self {
        VarRef(Arc::clone(&self.0))
    }
}

impl Deref for VarRef {
    type Target = dyn Variable;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl fmt::Debug for VarRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("VarRef")
    }
}

#[cfg(test)]
mod tests;
