#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Declaration Normalization
//!
//! Turns decoded REST declarations into their resolved form:
//!
//! - `params` parses `"0:id,1:name"` strings into position → name maps
//! - `cascade` picks the most specific non-empty value among overrides
//! - `method` resolves one method against its service and role defaults
//! - `service` resolves a service and builds its method-name map
//!
//! Malformed parameter strings are never fatal here. They are reported to the
//! caller's [`logging::WarningSink`] and the affected map is left empty.

use thiserror::Error;

pub mod cascade;
pub mod method;
pub mod params;
pub mod service;

/// Errors raised while normalizing a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// A parameter string did not follow the `index:name[,index:name...]` syntax.
    #[error("malformed parameter spec `{input}`: {reason}")]
    MalformedParameterSpec {
        /// The whole string that failed to parse
        input: String,
        /// What was wrong with it
        reason: String,
    },
}

/// Convenient result type for normalization operations.
pub type Result<T> = std::result::Result<T, NormalizeError>;

pub use cascade::first_non_empty;
pub use method::normalize_method;
pub use params::{format_params, parse_params};
pub use service::{normalize_service, normalize_services};
