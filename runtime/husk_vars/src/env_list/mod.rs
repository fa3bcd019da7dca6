//! List view over a separator-delimited environment variable.
//!
//! `$paths` is the canonical example: it reads `PATH`, splits it at the list
//! separator, and writes back the joined list on assignment. Elements may not
//! contain the separator or NUL.
//!
//! # Caching
//!
//! The decoded list is cached together with the raw string it came from. A
//! read that finds the same raw string returns the cached list as is. The
//! cache needs no invalidation on write: the next read sees a new raw string.
//!
//! # Concurrency
//!
//! One mutex per instance guards the cache and the write back, so reads and
//! writes through one instance never interleave. Two instances over the same
//! environment variable are not coordinated, and code outside this type can
//! change the environment at any time.

use parking_lot::Mutex;

use husk_value::Value;

use crate::config::LIST_SEPARATOR;
use crate::env::{EnvTable, ProcessEnv};
use crate::errors::{VarError, VarResult};
use crate::variable::Variable;

/// Last raw string read and the list decoded from it.
struct ListCache {
    raw: String,
    decoded: Value,
}

/// Variable backed by a list-valued environment variable.
pub struct EnvListVariable<E = ProcessEnv> {
    env_name: String,
    separator: char,
    env: E,
    cache: Mutex<Option<ListCache>>,
}

impl EnvListVariable<ProcessEnv> {
    /// Bind to `env_name` in the process environment.
    pub fn new(env_name: impl Into<String>) -> Self {
        EnvListVariable::with_env(env_name, LIST_SEPARATOR, ProcessEnv)
    }
}

impl<E: EnvTable> EnvListVariable<E> {
    /// Bind to `env_name` in `env`, splitting at `separator`.
    pub fn with_env(env_name: impl Into<String>, separator: char, env: E) -> Self {
        EnvListVariable {
            env_name: env_name.into(),
            separator,
            env,
            cache: Mutex::new(None),
        }
    }

    pub fn env_name(&self) -> &str {
        &self.env_name
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// The environment table this variable reads and writes.
    pub fn env(&self) -> &E {
        &self.env
    }

    /// Check every element of `value`, returning the strings to join.
    ///
    /// Runs to completion before anything is written.
    fn validate<'v>(&self, value: &'v Value) -> VarResult<Vec<&'v str>> {
        let items = value.iterate().ok_or(VarError::IncompatibleAssignment {
            got: value.type_name(),
        })?;
        let mut parts = Vec::with_capacity(items.len());
        for item in items {
            let s = item.as_str().ok_or(VarError::NonStringElement {
                got: item.type_name(),
            })?;
            if s.contains([self.separator, '\0']) {
                return Err(VarError::ForbiddenCharacter {
                    element: s.to_string(),
                    separator: self.separator,
                });
            }
            parts.push(s);
        }
        Ok(parts)
    }
}

impl<E: EnvTable> Variable for EnvListVariable<E> {
    fn get(&self) -> VarResult<Value> {
        let mut cache = self.cache.lock();
        let raw = self.env.get(&self.env_name)?;
        if let Some(hit) = cache.as_ref().filter(|c| c.raw == raw) {
            tracing::trace!(env = %self.env_name, "env list cache hit");
            return Ok(hit.decoded.clone());
        }
        let decoded = Value::string_list(raw.split(self.separator));
        tracing::debug!(env = %self.env_name, raw = %raw, "env list decoded");
        *cache = Some(ListCache {
            raw,
            decoded: decoded.clone(),
        });
        Ok(decoded)
    }

    fn set(&self, value: Value) -> VarResult<()> {
        let parts = self.validate(&value)?;
        let mut buf = [0u8; 4];
        let joined = parts.join(&*self.separator.encode_utf8(&mut buf));

        let _guard = self.cache.lock();
        self.env.set(&self.env_name, &joined)?;
        tracing::debug!(env = %self.env_name, count = parts.len(), "env list written");
        Ok(())
    }
}
