#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! High-level pipeline that loads REST declarations into a service registry.
//!
//! ## Module Organization
//!
//! - `decoder` - Pluggable byte → declaration decoding (TOML, JSON)
//! - `reader` - Entry points (`read_consumer_config`, `read_provider_config`)

use std::path::PathBuf;

use thiserror::Error;
use types::Role;

/// Convenient result type for reader operations.
pub type Result<T> = std::result::Result<T, ReadError>;

/// Errors that abort a declaration read.
///
/// A failed read never touches the registry.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The bytes do not decode into the declaration shape for `role`.
    #[error("failed to decode {role} declaration: {source}")]
    Decode {
        /// Role that was being read
        role: Role,
        /// Underlying decoder error
        #[source]
        source: decoder::DecodeError,
    },
    /// The declaration file could not be read.
    #[error("failed to read declaration file {}: {source}", .path.display())]
    Io {
        /// File that was requested
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

// Module declarations
pub mod decoder;
pub mod reader;

// Re-export public API
pub use decoder::{decoder_for, DecodeError, DeclarationDecoder, JsonDecoder, TomlDecoder};
pub use reader::{resolve_declaration, RestConfigReader};
