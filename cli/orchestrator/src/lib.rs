#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
//! Collection of utilities for the restconf CLI.
//!
//! The binary loads one declaration file into a fresh registry and prints the
//! resolved services for the requested role as JSON.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use config::{Config, ConfigError, DeclarationFormat};
use pipeline::{decoder_for, ReadError, RestConfigReader};
use registry::{ServiceRegistry, ServiceRegistryReader};
use thiserror::Error;
use types::{Role, ServiceDeclaration};

/// Errors that can occur while running the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Loader settings could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Declaration could not be read.
    #[error(transparent)]
    Read(#[from] ReadError),
    /// Log file could not be opened.
    #[error("Failed to initialize logging: {0}")]
    Logging(#[from] std::io::Error),
    /// Resolved registry could not be rendered.
    #[error("Failed to render registry: {0}")]
    Render(#[from] serde_json::Error),
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Command-line interface for the declaration loader.
#[derive(Parser, Debug)]
#[command(
    name = "restconf",
    about = "Resolve a REST service declaration and print the resulting registry",
    version
)]
pub struct Cli {
    /// Declaration file to read
    pub file: PathBuf,
    /// Role the declaration describes (consumer or provider)
    #[arg(long, default_value = "consumer")]
    pub role: Role,
    /// Declaration format; defaults to the file extension, then to the settings file
    #[arg(long)]
    pub format: Option<DeclarationFormat>,
    /// Loader settings file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Log level override (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Format to decode with: flag, then file extension, then settings.
    pub fn effective_format(&self, config: &Config) -> DeclarationFormat {
        self.format
            .or_else(|| DeclarationFormat::from_path(&self.file))
            .unwrap_or(config.reader.format)
    }
}

/// Load settings, initialize logging and render the resolved registry.
pub fn run(cli: &Cli) -> Result<String> {
    let config = Config::load_or_default(cli.config.as_deref())?;
    let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    logging::init(level, config.logging.file.as_deref())?;

    let registry = Arc::new(ServiceRegistry::new());
    let format = cli.effective_format(&config);
    logging::trace("cli", &format!("reading {} as {} {}", cli.file.display(), format, cli.role));
    RestConfigReader::new(Arc::clone(&registry))
        .with_decoder(decoder_for(format))
        .read_file(cli.role, &cli.file)?;

    render(&registry, cli.role)
}

/// Render every service installed for `role` as pretty-printed JSON.
pub fn render(registry: &ServiceRegistry, role: Role) -> Result<String> {
    let snapshot = registry.snapshot(role);
    let services: BTreeMap<&str, &ServiceDeclaration> =
        snapshot.iter().map(|(id, service)| (id.as_str(), service.as_ref())).collect();
    Ok(serde_json::to_string_pretty(&services)?)
}
