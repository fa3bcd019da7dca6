//! Environment tables: where env-backed variables read and write.
//!
//! `ProcessEnv` is the real process environment. `MemoryEnv` is a private
//! table with the same rules, for sandboxed runtimes and tests.

// Arc shares one MemoryEnv table between handles
#![expect(
    clippy::disallowed_types,
    reason = "Arc is how MemoryEnv handles share a table"
)]

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Failure reading or writing an environment variable.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EnvError {
    #[error("value of environment variable {name} is not valid Unicode")]
    NotUnicode { name: String },

    #[error("invalid environment variable name {name:?}")]
    InvalidName { name: String },

    #[error("value of environment variable {name} contains \\0")]
    NulInValue { name: String },
}

/// A table of named string variables.
///
/// An unset variable reads as the empty string. A value that is not valid
/// Unicode is refused rather than decoded lossily, so writing back what was
/// read never alters bytes the runtime could not see.
pub trait EnvTable: Send + Sync {
    fn get(&self, name: &str) -> Result<String, EnvError>;

    fn set(&self, name: &str, value: &str) -> Result<(), EnvError>;
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['=', '\0'])
}

fn check_write(name: &str, value: &str) -> Result<(), EnvError> {
    if !is_valid_name(name) {
        return Err(EnvError::InvalidName {
            name: name.to_string(),
        });
    }
    if value.contains('\0') {
        return Err(EnvError::NulInValue {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// The process environment.
///
/// The table is global to the process; anything else may change it between
/// two calls.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl EnvTable for ProcessEnv {
    fn get(&self, name: &str) -> Result<String, EnvError> {
        if !is_valid_name(name) {
            return Ok(String::new());
        }
        match std::env::var_os(name) {
            None => Ok(String::new()),
            Some(raw) => raw.into_string().map_err(|_| EnvError::NotUnicode {
                name: name.to_string(),
            }),
        }
    }

    fn set(&self, name: &str, value: &str) -> Result<(), EnvError> {
        check_write(name, value)?;
        std::env::set_var(name, value);
        Ok(())
    }
}

/// In-memory environment table.
///
/// Clones are handles to the same table.
#[derive(Clone, Debug, Default)]
pub struct MemoryEnv {
    vars: Arc<Mutex<FxHashMap<String, String>>>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style initial assignment.
    ///
    /// An entry `set` would reject panics in debug builds and is dropped in
    /// release builds.
    #[must_use]
    pub fn with(self, name: &str, value: &str) -> Self {
        let checked = check_write(name, value);
        debug_assert!(checked.is_ok(), "invalid MemoryEnv entry: {checked:?}");
        if checked.is_ok() {
            self.vars.lock().insert(name.to_string(), value.to_string());
        }
        self
    }

    /// Whether `name` has been set.
    pub fn contains(&self, name: &str) -> bool {
        self.vars.lock().contains_key(name)
    }
}

impl EnvTable for MemoryEnv {
    fn get(&self, name: &str) -> Result<String, EnvError> {
        Ok(self.vars.lock().get(name).cloned().unwrap_or_default())
    }

    fn set(&self, name: &str, value: &str) -> Result<(), EnvError> {
        check_write(name, value)?;
        self.vars.lock().insert(name.to_string(), value.to_string());
        Ok(())
    }
}
