//! # Segment Writers and Readers
//!
//! One self-contained module per released format version. A version module
//! owns the exact field order of every section it stores and shares nothing
//! with its siblings except the primitive codec and the model. Changing the
//! layout of a section means adding a new version module, never editing an
//! old one.
//!
//! Records are decoded in two steps: every field of a record is read into a
//! raw value first, then the raw value is validated and converted. A record
//! that fails validation has already been consumed in full, so the stream is
//! positioned at the next record when it is skipped.

pub mod v0701;
pub mod v1007;

use std::io::{self, Read, Write};

use crate::layout::{FormatVersion, Section};
use crate::model::{ChromatogramSink, ChromatogramSource, ModelError, Peak};
use crate::reader::{ReadReport, ReaderConfig, ReaderError, SkippedRecord};
use crate::writer::WriterStats;

/// Section-level codec of one format version
pub(crate) trait SegmentFormat {
    /// Version this codec reads and writes
    const VERSION: FormatVersion;

    /// Section that feeds the (retention time, total signal) preview
    const OVERVIEW_SECTION: Section;

    /// Write the payload of one section (the version marker excluded)
    fn write_section<W: Write, C: ChromatogramSource + ?Sized>(
        section: Section,
        out: &mut W,
        chromatogram: &C,
        stats: &mut WriterStats,
    ) -> io::Result<()>;

    /// Read the payload of one section into a sink
    fn read_section<R: Read, S: ChromatogramSink>(
        section: Section,
        input: &mut R,
        sink: &mut S,
        records: &mut RecordPolicy<'_>,
    ) -> Result<(), ReaderError>;

    /// Read the peaks section on its own
    fn read_peaks<R: Read>(
        input: &mut R,
        records: &mut RecordPolicy<'_>,
    ) -> Result<Vec<Peak>, ReaderError>;

    /// Read (retention time, total signal) pairs from the overview section
    fn read_overview<R: Read>(input: &mut R) -> Result<Vec<(i32, f32)>, ReaderError>;
}

/// Applies the configured policy to records that fail validation
pub(crate) struct RecordPolicy<'a> {
    config: &'a ReaderConfig,
    report: &'a mut ReadReport,
}

impl<'a> RecordPolicy<'a> {
    pub(crate) fn new(config: &'a ReaderConfig, report: &'a mut ReadReport) -> Self {
        Self { config, report }
    }

    /// Keep a validated record, or skip a malformed one
    pub(crate) fn record<T>(
        &mut self,
        section: Section,
        index: usize,
        result: Result<T, ModelError>,
    ) -> Result<Option<T>, ReaderError> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(reason) if self.config.skip_malformed_records => {
                log::warn!("Skipping malformed {section} record #{index}: {reason}");
                self.report.skipped.push(SkippedRecord {
                    section,
                    index,
                    reason,
                });
                Ok(None)
            }
            Err(reason) => Err(ReaderError::MalformedRecord(reason)),
        }
    }

    /// Account for values dropped from inside a kept record
    pub(crate) fn dropped(
        &mut self,
        section: Section,
        index: usize,
        reasons: Vec<ModelError>,
    ) -> Result<(), ReaderError> {
        for reason in reasons {
            if !self.config.skip_malformed_records {
                return Err(ReaderError::MalformedRecord(reason));
            }
            log::warn!("Dropping value from {section} record #{index}: {reason}");
            self.report.dropped_values.push(SkippedRecord {
                section,
                index,
                reason,
            });
        }
        Ok(())
    }
}

/// Reject a section that a version does not store
pub(crate) fn unsupported_section(version: FormatVersion, section: Section) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("{version} has no {section} section"),
    )
}
