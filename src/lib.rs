//! restconf umbrella crate.
//!
//! Re-exports the pieces a composition root needs to load REST declarations:
//! the data model, the registry, and the reader that fills it.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use restconf::{RestConfigReader, ServiceRegistry};
//!
//! let registry = Arc::new(ServiceRegistry::new());
//! let reader = RestConfigReader::new(Arc::clone(&registry));
//! reader.read_consumer_config(b"[references.Echo]\ninterface = \"com.example.Echo\"\n")?;
//! assert!(registry.consumer_service("Echo").is_some());
//! # Ok::<(), restconf::ReadError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![doc(test(attr(warn(unused))))]

pub use pipeline::{ReadError, RestConfigReader};
pub use registry::{ServiceMap, ServiceRegistry, ServiceRegistryReader};
pub use types::{MethodDeclaration, Role, ServiceDeclaration};

/// Miscellaneous metadata about the restconf workspace.
pub mod restconf_meta {
    /// Version string for the umbrella crate, as reported by Cargo.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}
