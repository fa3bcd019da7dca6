//! Husk Vars - variables whose state lives outside the runtime.
//!
//! This crate provides:
//! - The `Variable` capability trait and the in-memory `Cell` / `ReadOnly`
//!   implementations
//! - `EnvListVariable`, a list view over a separator-delimited environment
//!   variable such as `PATH`
//! - `SharedVariable`, a value read and written through a persistent store
//!   connection
//! - `Bindings`, the name table the host resolver consults
//! - Runtime configuration (`RuntimeConfig`) and errors (`VarError`)
//!
//! # Architecture
//!
//! The host depends only on `Variable` (usually through `VarRef`). External
//! state is reached through two narrow traits, `EnvTable` and `SharedStore`,
//! so the process environment and the store transport can be replaced in
//! embedding and tests.

mod bindings;
mod config;
mod env;
mod env_list;
mod errors;
mod shared;
mod store;
mod variable;

pub use bindings::Bindings;
pub use config::{EnvListBinding, RuntimeConfig, LIST_SEPARATOR, SHARED_NAMESPACE};
pub use env::{EnvError, EnvTable, MemoryEnv, ProcessEnv};
pub use env_list::EnvListVariable;
pub use errors::{VarError, VarResult};
pub use shared::SharedVariable;
pub use store::{MemoryStore, SharedStore, StoreClient, StoreError};
pub use variable::{Cell, ReadOnly, VarRef, Variable};
