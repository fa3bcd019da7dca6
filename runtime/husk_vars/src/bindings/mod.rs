//! Name-binding table consulted by the host resolver.
//!
//! Ordinary names map to a bound `VarRef`. Names in the `shared:` namespace
//! are not stored: each lookup builds a `SharedVariable` over the attached
//! store connection.

use rustc_hash::FxHashMap;

use husk_value::Value;

use crate::config::{RuntimeConfig, SHARED_NAMESPACE};
use crate::env::{EnvTable, ProcessEnv};
use crate::env_list::EnvListVariable;
use crate::errors::{VarError, VarResult};
use crate::shared::SharedVariable;
use crate::store::StoreClient;
use crate::variable::{VarRef, Variable};

/// Variables visible to the runtime, by name.
#[derive(Clone, Debug, Default)]
pub struct Bindings {
    vars: FxHashMap<String, VarRef>,
    store: Option<StoreClient>,
}

impl Bindings {
    /// Bindings with the configured env lists over the process environment.
    pub fn new(config: &RuntimeConfig) -> Self {
        Self::with_env(config, &ProcessEnv)
    }

    /// Bindings with the configured env lists over `env`.
    pub fn with_env<E>(config: &RuntimeConfig, env: &E) -> Self
    where
        E: EnvTable + Clone + 'static,
    {
        let mut bindings = Bindings::default();
        for binding in &config.env_lists {
            tracing::debug!(
                var = %binding.var_name,
                env = %binding.env_name,
                "binding env list"
            );
            bindings.define(
                binding.var_name.clone(),
                EnvListVariable::with_env(
                    binding.env_name.clone(),
                    config.list_separator,
                    env.clone(),
                ),
            );
        }
        bindings
    }

    /// Attach the store connection used by `shared:` names.
    #[must_use]
    pub fn with_store(mut self, store: StoreClient) -> Self {
        self.store = Some(store);
        self
    }

    /// Bind `name` to `variable`, replacing any earlier binding.
    pub fn define(&mut self, name: impl Into<String>, variable: impl Variable + 'static) {
        self.bind(name, VarRef::new(variable));
    }

    /// Bind `name` to an existing variable handle.
    pub fn bind(&mut self, name: impl Into<String>, variable: VarRef) {
        self.vars.insert(name.into(), variable);
    }

    /// Resolve a name to its variable.
    pub fn resolve(&self, name: &str) -> Option<VarRef> {
        if let Some(shared) = name.strip_prefix(SHARED_NAMESPACE) {
            return Some(VarRef::new(SharedVariable::new(self.store.clone(), shared)));
        }
        self.vars.get(name).cloned()
    }

    /// Read the variable bound to `name`.
    pub fn get(&self, name: &str) -> VarResult<Value> {
        self.lookup(name)?.get()
    }

    /// Assign to the variable bound to `name`.
    pub fn assign(&self, name: &str, value: Value) -> VarResult<()> {
        self.lookup(name)?.set(value)
    }

    fn lookup(&self, name: &str) -> VarResult<VarRef> {
        self.resolve(name).ok_or_else(|| VarError::UndefinedVariable {
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests;
