//! TOML configuration file support.
//!
//! Reader and writer settings can be kept in a file instead of being built
//! in code:
//!
//! ```toml
//! # ocb.toml
//! [writer]
//! compression_level = 9
//! compression_method = "deflated"
//!
//! [reader]
//! skip_malformed_records = false
//! ```
//!
//! Every table and key is optional; missing values keep their defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::layout::FormatVersion;
use crate::reader::{ChromatogramReader, ReaderConfig};
use crate::writer::{ChromatogramWriter, WriterConfig, WriterError};

/// Errors that can occur while loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        /// Path of the configuration file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The content is not valid TOML or has mistyped keys
    #[error("Failed to parse TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Root configuration structure for `ocb.toml` files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OcbConfig {
    /// Writer settings
    pub writer: WriterConfig,

    /// Reader settings
    pub reader: ReaderConfig,
}

impl OcbConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Reader using these settings
    pub fn reader(&self) -> ChromatogramReader {
        ChromatogramReader::with_config(self.reader)
    }

    /// Writer for `version` using these settings
    pub fn writer(&self, version: FormatVersion) -> Result<ChromatogramWriter, WriterError> {
        ChromatogramWriter::new(version, self.writer)
    }
}
