//! Declaration decoders.
//!
//! Decoding bytes into declaration records is pluggable: the reader only sees
//! the [`DeclarationDecoder`] trait. TOML and JSON are provided.

use config::DeclarationFormat;
use thiserror::Error;
use types::{ConsumerDeclaration, ProviderDeclaration};

/// A byte buffer that could not be decoded into a declaration.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Input is not UTF-8 text.
    #[error("declaration is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    /// TOML syntax or shape error.
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
    /// JSON syntax or shape error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Turns raw bytes into the top-level declaration for each role.
pub trait DeclarationDecoder: Send + Sync {
    /// Format handled by this decoder.
    fn format(&self) -> DeclarationFormat;

    /// Decode a consumer declaration.
    fn decode_consumer(&self, bytes: &[u8]) -> Result<ConsumerDeclaration, DecodeError>;

    /// Decode a provider declaration.
    fn decode_provider(&self, bytes: &[u8]) -> Result<ProviderDeclaration, DecodeError>;
}

/// Decodes TOML documents.
#[derive(Debug, Default, Clone, Copy)]
pub struct TomlDecoder;

impl DeclarationDecoder for TomlDecoder {
    fn format(&self) -> DeclarationFormat { DeclarationFormat::Toml }

    fn decode_consumer(&self, bytes: &[u8]) -> Result<ConsumerDeclaration, DecodeError> {
        Ok(toml::from_str(std::str::from_utf8(bytes)?)?)
    }

    fn decode_provider(&self, bytes: &[u8]) -> Result<ProviderDeclaration, DecodeError> {
        Ok(toml::from_str(std::str::from_utf8(bytes)?)?)
    }
}

/// Decodes JSON documents.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonDecoder;

impl DeclarationDecoder for JsonDecoder {
    fn format(&self) -> DeclarationFormat { DeclarationFormat::Json }

    fn decode_consumer(&self, bytes: &[u8]) -> Result<ConsumerDeclaration, DecodeError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    fn decode_provider(&self, bytes: &[u8]) -> Result<ProviderDeclaration, DecodeError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// Decoder for `format`.
pub fn decoder_for(format: DeclarationFormat) -> Box<dyn DeclarationDecoder> {
    match format {
        DeclarationFormat::Toml => Box::new(TomlDecoder),
        DeclarationFormat::Json => Box::new(JsonDecoder),
    }
}
