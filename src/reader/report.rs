use std::fmt;

use crate::layout::{FormatVersion, Section};
use crate::model::ModelError;

/// A record (or a value inside one) that was left out of the result
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    /// Section the record belongs to
    pub section: Section,
    /// Position of the record within its section, starting at 0
    pub index: usize,
    /// Why it was rejected
    pub reason: ModelError,
}

impl fmt::Display for SkippedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{}: {}", self.section, self.index, self.reason)
    }
}

/// What a tolerant read left out
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadReport {
    /// Version the archive was read as
    pub version: Option<FormatVersion>,
    /// Whole records that failed validation
    pub skipped: Vec<SkippedRecord>,
    /// Ions and peak targets dropped from otherwise valid records
    pub dropped_values: Vec<SkippedRecord>,
}

impl ReadReport {
    /// Whether everything stored in the archive made it into the result
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.dropped_values.is_empty()
    }

    /// Number of skipped records of one section
    pub fn skipped_in(&self, section: Section) -> usize {
        self.skipped.iter().filter(|record| record.section == section).count()
    }
}

impl fmt::Display for ReadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(version) = self.version {
            write!(f, "{version}: ")?;
        }
        write!(
            f,
            "{} records skipped, {} values dropped",
            self.skipped.len(),
            self.dropped_values.len()
        )
    }
}
