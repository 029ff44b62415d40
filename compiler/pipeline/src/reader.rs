//! Declaration reader: the entry points from raw bytes to the registry.
//!
//! One read decodes a declaration, normalizes every service in it and then
//! installs the result for the declaration's role in a single swap. If
//! decoding fails nothing is installed and the previous contents stay in
//! effect. Malformed parameter strings only produce warnings.

use std::path::Path;
use std::sync::Arc;

use config::Config;
use logging::{TracingSink, WarningSink};
use normalization::normalize_services;
use registry::ServiceRegistry;
use types::{Role, ServiceDeclarations, TopLevelDeclaration};

use crate::decoder::{decoder_for, DeclarationDecoder, TomlDecoder};
use crate::{ReadError, Result};

/// Loads REST declarations into a [`ServiceRegistry`].
pub struct RestConfigReader {
    registry: Arc<ServiceRegistry>,
    decoder: Box<dyn DeclarationDecoder>,
    sink: Arc<dyn WarningSink>,
}

impl RestConfigReader {
    /// Create a reader installing into `registry`, decoding TOML and
    /// reporting warnings through `tracing`.
    pub fn new(registry: Arc<ServiceRegistry>) -> Self {
        Self { registry, decoder: Box::new(TomlDecoder), sink: Arc::new(TracingSink) }
    }

    /// Create a reader whose decoder is chosen by the loader settings.
    pub fn from_config(registry: Arc<ServiceRegistry>, config: &Config) -> Self {
        Self::new(registry).with_decoder(decoder_for(config.reader.format))
    }

    /// Replace the decoder.
    pub fn with_decoder(mut self, decoder: Box<dyn DeclarationDecoder>) -> Self {
        self.decoder = decoder;
        self
    }

    /// Replace the warning sink.
    pub fn with_sink(mut self, sink: Arc<dyn WarningSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Registry this reader installs into.
    pub fn registry(&self) -> &Arc<ServiceRegistry> { &self.registry }

    /// Decode a consumer declaration, resolve it and install it.
    pub fn read_consumer_config(&self, bytes: &[u8]) -> Result<()> {
        logging::trace("reader", &format!("decoding consumer declaration ({} bytes)", bytes.len()));
        let declaration = self
            .decoder
            .decode_consumer(bytes)
            .map_err(|source| ReadError::Decode { role: Role::Consumer, source })?;
        self.install(declaration);
        Ok(())
    }

    /// Decode a provider declaration, resolve it and install it.
    pub fn read_provider_config(&self, bytes: &[u8]) -> Result<()> {
        logging::trace("reader", &format!("decoding provider declaration ({} bytes)", bytes.len()));
        let declaration = self
            .decoder
            .decode_provider(bytes)
            .map_err(|source| ReadError::Decode { role: Role::Provider, source })?;
        self.install(declaration);
        Ok(())
    }

    /// Read a declaration for `role`.
    pub fn read_config(&self, role: Role, bytes: &[u8]) -> Result<()> {
        match role {
            Role::Consumer => self.read_consumer_config(bytes),
            Role::Provider => self.read_provider_config(bytes),
        }
    }

    /// Read a declaration for `role` from a file.
    pub fn read_file(&self, role: Role, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|source| ReadError::Io { path: path.to_path_buf(), source })?;
        self.read_config(role, &bytes)
    }

    fn install<D: TopLevelDeclaration>(&self, declaration: D) {
        let role = declaration.role();
        let services = resolve_declaration(declaration, self.sink.as_ref());
        self.registry.install(role, services);
    }
}

/// Resolve every service of a decoded declaration without installing anything.
pub fn resolve_declaration<D: TopLevelDeclaration>(
    declaration: D,
    sink: &dyn WarningSink,
) -> ServiceDeclarations {
    let (defaults, services) = declaration.into_parts();
    normalize_services(services, &defaults, sink)
}
