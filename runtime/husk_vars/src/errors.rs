//! Errors raised by variable reads and writes.

use crate::env::EnvError;
use crate::store::StoreError;

/// Result of a variable operation.
pub type VarResult<T> = Result<T, VarError>;

/// Typed failure for `Variable::get` / `Variable::set`.
#[derive(Debug, thiserror::Error)]
pub enum VarError {
    /// An env list was assigned something that is not a list.
    #[error("can only assign compatible values: expected list, got {got}")]
    IncompatibleAssignment { got: &'static str },

    /// An env list element is not a string.
    #[error("path must be string, got {got}")]
    NonStringElement { got: &'static str },

    /// An env list element contains the list separator or NUL.
    #[error("path {element:?} cannot contain {separator:?} or \\0")]
    ForbiddenCharacter { element: String, separator: char },

    /// A shared variable was used with no store attached.
    #[error("store not connected")]
    RemoteUnavailable,

    /// The store transport failed during a read or write.
    #[error("shared variable {name}: {source}")]
    RemoteOperationFailed {
        name: String,
        #[source]
        source: StoreError,
    },

    /// Assignment to a read-only variable.
    #[error("cannot set read-only variable")]
    ReadOnlyAssignment,

    /// Name not bound in the binding table.
    #[error("variable ${name} not found")]
    UndefinedVariable { name: String },

    /// The environment table rejected a read or a write.
    #[error(transparent)]
    Env(#[from] EnvError),
}
