//! Husk - runtime core of the Husk command language.
//!
//! Re-exports the value universe (`husk_value`) and the externally backed
//! variables (`husk_vars`), and sets up logging for embedders.
//!
//! ```text
//! let bindings = husk::Bindings::new(&husk::RuntimeConfig::default());
//! let paths = bindings.get("paths")?;   // PATH as a list
//! ```

pub use husk_value::{Descriptor, Heap, StructValue, Value, ValueError, ValueResult};
pub use husk_vars::{
    Bindings, Cell, EnvError, EnvListBinding, EnvListVariable, EnvTable, MemoryEnv, MemoryStore,
    ProcessEnv, ReadOnly, RuntimeConfig, SharedStore, SharedVariable, StoreClient, StoreError,
    VarError, VarRef, VarResult, Variable, LIST_SEPARATOR, SHARED_NAMESPACE,
};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a stderr subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset or the embedder already installed a
/// global subscriber. Later calls are no-ops.
/// Enable with `RUST_LOG=husk_vars=debug` (decoded env lists, writes) or
/// `RUST_LOG=husk_vars=trace` (cache hits too).
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Ok(directives) = std::env::var("RUST_LOG") else {
            return;
        };
        let installed = tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(EnvFilter::new(directives))
            .try_init();
        if installed.is_ok() {
            tracing::debug!(
                crate_version = env!("CARGO_PKG_VERSION"),
                "husk tracing initialized"
            );
        }
    });
}
