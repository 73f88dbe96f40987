use std::fmt;

use crate::layout::FormatVersion;

/// Statistics from a completed write operation
#[derive(Debug, Clone, PartialEq)]
pub struct WriterStats {
    /// Version the archive was written as
    pub version: FormatVersion,
    /// Number of zip entries written, directories included
    pub entries_written: usize,
    /// Number of scans written
    pub scans_written: usize,
    /// Number of peaks written
    pub peaks_written: usize,
    /// Number of chromatogram and peak targets written
    pub targets_written: usize,
    /// Total file size in bytes (0 when writing into a caller's archive)
    pub file_size_bytes: u64,
}

impl WriterStats {
    pub(crate) fn new(version: FormatVersion) -> Self {
        Self {
            version,
            entries_written: 0,
            scans_written: 0,
            peaks_written: 0,
            targets_written: 0,
            file_size_bytes: 0,
        }
    }
}

impl fmt::Display for WriterStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wrote {} scans ({} peaks) as {} in {} entries",
            self.scans_written, self.peaks_written, self.version, self.entries_written
        )
    }
}
