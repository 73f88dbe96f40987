use serde::{Deserialize, Serialize};

/// Configuration for reading `.ocb` archives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Skip records that fail validation instead of aborting the read.
    /// Broken framing is always fatal.
    pub skip_malformed_records: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            skip_malformed_records: true,
        }
    }
}

impl ReaderConfig {
    /// Configuration that rejects the whole archive on the first malformed record
    pub fn strict() -> Self {
        Self {
            skip_malformed_records: false,
        }
    }
}
