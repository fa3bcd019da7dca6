//! Variables stored in the persistent shared-variable store.
//!
//! Every read and write is a round trip over the store connection. Nothing is
//! cached, so all clients of the store observe each other's writes. Calls
//! block for the duration of the exchange and are never retried.

use husk_value::Value;

use crate::errors::{VarError, VarResult};
use crate::store::{StoreClient, StoreError};
use crate::variable::Variable;

/// Variable forwarding `get`/`set` to a store under a fixed name.
#[derive(Clone, Debug)]
pub struct SharedVariable {
    client: Option<StoreClient>,
    name: String,
}

impl SharedVariable {
    /// Create a shared variable. With no client, every access fails with
    /// `RemoteUnavailable`.
    pub fn new(client: Option<StoreClient>, name: impl Into<String>) -> Self {
        SharedVariable {
            client,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn client(&self) -> VarResult<&StoreClient> {
        self.client.as_ref().ok_or(VarError::RemoteUnavailable)
    }

    #[cold]
    fn remote_failure(&self, source: StoreError) -> VarError {
        tracing::warn!(name = %self.name, error = %source, "shared variable operation failed");
        VarError::RemoteOperationFailed {
            name: self.name.clone(),
            source,
        }
    }
}

impl Variable for SharedVariable {
    #[tracing::instrument(level = "debug", skip(self), fields(name = %self.name))]
    fn get(&self) -> VarResult<Value> {
        let raw = self
            .client()?
            .shared_var(&self.name)
            .map_err(|e| self.remote_failure(e))?;
        Ok(Value::string(raw))
    }

    #[tracing::instrument(level = "debug", skip(self, value), fields(name = %self.name))]
    fn set(&self, value: Value) -> VarResult<()> {
        let client = self.client()?;
        client
            .set_shared_var(&self.name, &value.to_text())
            .map_err(|e| self.remote_failure(e))
    }
}
