#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! restconf Configuration
//!
//! This crate provides the settings of the declaration loader itself:
//! - Which markup format declarations are written in
//! - Logging configuration
//!
//! Settings are stored in TOML format and can be loaded from files or created
//! with defaults suitable for development and testing.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    /// Failed to parse the TOML configuration file
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    /// Failed to serialize configuration to TOML format
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// Configuration file was not found at the specified path
    #[error("Config file not found at: {0}")]
    NotFound(PathBuf),
    /// Could not locate the user's configuration directory
    #[error("Could not find user config directory")]
    ConfigDirUnavailable,
}

/// Markup format REST declarations are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationFormat {
    /// TOML documents
    #[default]
    Toml,
    /// JSON documents
    Json,
}

impl DeclarationFormat {
    /// Get the string representation of the format.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationFormat::Toml => "toml",
            DeclarationFormat::Json => "json",
        }
    }

    /// Guess the format from a file extension, if it is a known one.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension().and_then(|ext| ext.to_str()).and_then(|ext| ext.parse().ok())
    }
}

impl FromStr for DeclarationFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "toml" => Ok(DeclarationFormat::Toml),
            "json" => Ok(DeclarationFormat::Json),
            _ => Err(format!("Unknown declaration format: {} (expected toml or json)", s)),
        }
    }
}

impl fmt::Display for DeclarationFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.as_str()) }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Declaration reader settings
    pub reader: ReaderConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Declaration reader configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Format declarations are decoded from
    pub format: DeclarationFormat,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log file path (optional)
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self { Self { level: "info".to_string(), file: None } }
}

impl Config {
    /// Load configuration from a TOML file at `path`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from `path` if given, else from [`Config::default_path`]
    /// when that file exists, else fall back to [`Config::default`].
    ///
    /// An explicitly requested file that does not exist is an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if !path.exists() => Err(ConfigError::NotFound(path.to_path_buf())),
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Ok(default_path) if default_path.exists() => Self::from_file(default_path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Save this configuration as a pretty-printed TOML file at `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Returns the default config file path:
    /// `{config_dir()}/restconf/config.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir =
            dirs::config_dir().ok_or(ConfigError::ConfigDirUnavailable)?.join("restconf");
        Ok(config_dir.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_from_file() {
        let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
        let toml_content = r#"
            [reader]
            format = "json"

            [logging]
            level = "debug"
            file = "restconf.log"
        "#;
        fs::write(&temp_file, toml_content)
            .expect("Failed to write TOML content to temporary file");

        let loaded_config =
            Config::from_file(&temp_file).expect("Failed to load config from temporary file");
        assert_eq!(loaded_config.reader.format, DeclarationFormat::Json);
        assert_eq!(loaded_config.logging.level, "debug");
        assert_eq!(loaded_config.logging.file, Some(PathBuf::from("restconf.log")));

        // Missing sections fall back to defaults
        let temp_file2 = NamedTempFile::new().expect("Failed to create second temporary file");
        fs::write(&temp_file2, "[logging]\nlevel = \"warn\"\n")
            .expect("Failed to write second TOML content to temporary file");
        let loaded_config2 = Config::from_file(&temp_file2)
            .expect("Failed to load second config from temporary file");
        assert_eq!(loaded_config2.reader.format, DeclarationFormat::Toml);
        assert_eq!(loaded_config2.logging.level, "warn");
        assert_eq!(loaded_config2.logging.file, None);

        // Test file not found error
        let result = Config::from_file("nonexistent_file.toml");
        match result.expect_err("Expected error for nonexistent file") {
            ConfigError::FileRead(_) => {}
            other => panic!("Expected FileRead error, got {:?}", other),
        }

        // Test parse error
        let temp_file =
            NamedTempFile::new().expect("Failed to create temporary file for parse error test");
        fs::write(&temp_file, "[reader]\nformat = \"yaml\"\n")
            .expect("Failed to write invalid TOML content");
        match Config::from_file(&temp_file).expect_err("Expected parse error for unknown format") {
            ConfigError::Parse(_) => {}
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_save() {
        let config = Config {
            reader: ReaderConfig { format: DeclarationFormat::Json },
            logging: LoggingConfig::default(),
        };
        let temp_file =
            NamedTempFile::new().expect("Failed to create temporary file for save test");

        config.save(&temp_file).expect("save should succeed");

        let contents = fs::read_to_string(&temp_file).expect("Failed to read saved config file");
        assert!(contents.contains("json"));
        assert!(contents.contains("info"));
        let reloaded = Config::from_file(&temp_file).expect("saved config should reload");
        assert_eq!(reloaded, config);

        // Test file write error - try to save to a non-existent directory
        let temp_dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let non_existent_subdir = temp_dir.path().join("nonexistent").join("config.toml");
        match config.save(&non_existent_subdir).expect_err("Expected file write error") {
            ConfigError::FileRead(_) => (),
            other => panic!("Expected FileRead error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_or_default() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let missing = temp_dir.path().join("missing.toml");
        match Config::load_or_default(Some(&missing)).expect_err("missing file is an error") {
            ConfigError::NotFound(path) => assert_eq!(path, missing),
            other => panic!("Expected NotFound error, got {:?}", other),
        }

        let present = temp_dir.path().join("present.toml");
        fs::write(&present, "[reader]\nformat = \"json\"\n").expect("Failed to write config");
        let config = Config::load_or_default(Some(&present)).expect("present file should load");
        assert_eq!(config.reader.format, DeclarationFormat::Json);
    }

    #[test]
    fn test_default_path() {
        let path = Config::default_path().expect("Failed to get default config path");
        let path_str = path.to_str().expect("Path should be valid UTF-8");
        assert!(path_str.contains("restconf"));
        assert!(path_str.ends_with("config.toml"));
    }

    #[test]
    fn test_declaration_format() {
        assert_eq!("JSON".parse::<DeclarationFormat>(), Ok(DeclarationFormat::Json));
        assert!("yaml".parse::<DeclarationFormat>().is_err());
        assert_eq!(DeclarationFormat::Toml.to_string(), "toml");
        assert_eq!(
            DeclarationFormat::from_path(Path::new("rest/consumer.json")),
            Some(DeclarationFormat::Json)
        );
        assert_eq!(DeclarationFormat::from_path(Path::new("rest/consumer.yml")), None);
    }

    #[test]
    fn test_default() {
        let config = Config::default();
        assert_eq!(config.reader.format, DeclarationFormat::Toml);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.file, None);
    }
}
