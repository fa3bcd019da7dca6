//! Connections to the persistent shared-variable store.
//!
//! The store's wire protocol lives elsewhere. This module only names the two
//! operations shared variables need and a cheap handle to pass them around.

// Arc is the implementation of StoreClient and MemoryStore handles
#![expect(
    clippy::disallowed_types,
    reason = "Arc is the implementation of StoreClient and MemoryStore"
)]

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Failure reported by a store connection.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The store holds no value under this name.
    #[error("shared variable {name} not found")]
    NotFound { name: String },

    /// The exchange with the store failed.
    #[error("{0}")]
    Transport(String),
}

/// Get-by-name and set-by-name against a remote key-value store.
///
/// Both calls may block for a full round trip.
pub trait SharedStore: Send + Sync {
    fn shared_var(&self, name: &str) -> Result<String, StoreError>;

    fn set_shared_var(&self, name: &str, value: &str) -> Result<(), StoreError>;
}

/// Shared handle to a connected store.
pub struct StoreClient(Arc<dyn SharedStore>);

impl StoreClient {
    pub fn new(store: impl SharedStore + 'static) -> Self {
        StoreClient(Arc::new(store))
    }
}

impl Clone for StoreClient {
    fn clone(&self) -> Self {
        StoreClient(Arc::clone(&self.0))
    }
}

impl Deref for StoreClient {
    type Target = dyn SharedStore;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl fmt::Debug for StoreClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StoreClient")
    }
}

/// Store kept in process memory.
///
/// Clones share contents. Used when no daemon is running and as the fake
/// connection in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    vars: Arc<RwLock<FxHashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SharedStore for MemoryStore {
    fn shared_var(&self, name: &str) -> Result<String, StoreError> {
        self.vars
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                name: name.to_string(),
            })
    }

    fn set_shared_var(&self, name: &str, value: &str) -> Result<(), StoreError> {
        self.vars.write().insert(name.to_string(), value.to_string());
        Ok(())
    }
}
