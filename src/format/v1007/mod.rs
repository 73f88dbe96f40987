//! CSD (FID) chromatogram, version 1.0.0.7.
//!
//! Scans carry a total signal but no mass spectrum. The baseline is sampled
//! on the scan grid and integration entries store only their area. There is
//! no identification, history or miscellaneous section: read chromatograms
//! keep the default date, operator and info.

mod reader;
pub mod schema;
mod writer;


use std::io::{self, Read, Write};

use crate::format::{RecordPolicy, SegmentFormat};
use crate::layout::{FormatVersion, Section};
use crate::model::{ChromatogramSink, ChromatogramSource, Peak};
use crate::reader::ReaderError;
use crate::writer::WriterStats;

/// Codec of the CSD 1.0.0.7 sections
pub(crate) struct Csd1007;

impl SegmentFormat for Csd1007 {
    const VERSION: FormatVersion = FormatVersion::Csd1007;
    const OVERVIEW_SECTION: Section = Section::Scans;

    fn write_section<W: Write, C: ChromatogramSource + ?Sized>(
        section: Section,
        out: &mut W,
        chromatogram: &C,
        stats: &mut WriterStats,
    ) -> io::Result<()> {
        writer::write_section(section, out, chromatogram, stats)
    }

    fn read_section<R: Read, S: ChromatogramSink>(
        section: Section,
        input: &mut R,
        sink: &mut S,
        records: &mut RecordPolicy<'_>,
    ) -> Result<(), ReaderError> {
        reader::read_section(section, input, sink, records)
    }

    fn read_peaks<R: Read>(
        input: &mut R,
        records: &mut RecordPolicy<'_>,
    ) -> Result<Vec<Peak>, ReaderError> {
        let mut peaks = Vec::new();
        reader::decode_peaks(input, records, |peak| {
            peaks.push(peak);
            Ok(())
        })?;
        Ok(peaks)
    }

    fn read_overview<R: Read>(input: &mut R) -> Result<Vec<(i32, f32)>, ReaderError> {
        reader::read_overview(input)
    }
}
