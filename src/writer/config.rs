use serde::{Deserialize, Serialize};
use zip::write::SimpleFileOptions;

use super::WriterError;

/// Highest supported deflate level
pub const MAX_COMPRESSION_LEVEL: i64 = 9;

/// How zip entries are stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionMethod {
    /// No compression (fastest write, largest files)
    Stored,
    /// Deflate (the format's usual choice)
    #[default]
    Deflated,
}

/// Configuration for the `.ocb` writer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// Deflate level, 0 (no compression) to 9 (smallest files)
    pub compression_level: i64,

    /// Entry compression method
    pub compression_method: CompressionMethod,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            compression_level: 6,
            compression_method: CompressionMethod::Deflated,
        }
    }
}

impl WriterConfig {
    /// Configuration optimized for maximum compression (slower write)
    pub fn max_compression() -> Self {
        Self {
            compression_level: MAX_COMPRESSION_LEVEL,
            compression_method: CompressionMethod::Deflated,
        }
    }

    /// Configuration optimized for fast writing (larger files)
    pub fn fast_write() -> Self {
        Self {
            compression_level: 0,
            compression_method: CompressionMethod::Stored,
        }
    }

    /// Check that the compression level is in range
    pub fn validate(&self) -> Result<(), WriterError> {
        if !(0..=MAX_COMPRESSION_LEVEL).contains(&self.compression_level) {
            return Err(WriterError::InvalidConfig(format!(
                "compression level {} is outside 0..={}",
                self.compression_level, MAX_COMPRESSION_LEVEL
            )));
        }
        Ok(())
    }

    /// Zip entry options; level 0 stores entries uncompressed
    pub(crate) fn file_options(&self) -> SimpleFileOptions {
        let options = SimpleFileOptions::default();
        match self.compression_method {
            CompressionMethod::Deflated if self.compression_level > 0 => options
                .compression_method(zip::CompressionMethod::Deflated)
                .compression_level(Some(self.compression_level)),
            _ => options.compression_method(zip::CompressionMethod::Stored),
        }
    }
}
