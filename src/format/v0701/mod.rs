//! MSD chromatogram, version 0.7.0.1.
//!
//! Every scan is a mass spectrum whose total signal is the sum of its ion
//! abundances. Whole-signal integration entries are stored under the TIC ion
//! (m/z 0). The overview entry duplicates (retention time, total signal) of
//! every scan so that previews need not decode the spectra; a full read only
//! checks its framing.
//!
//! Not stored: system settings, baseline, column retention times, typed
//! retention indices, time segments and cycle numbers, quantifier
//! descriptions and the analysis flags of peaks. Read chromatograms carry the
//! model defaults for those.

mod reader;
pub mod schema;
mod writer;

#[cfg(test)]
mod tests;

use std::io::{self, Read, Write};

use crate::format::{RecordPolicy, SegmentFormat};
use crate::layout::{FormatVersion, Section};
use crate::model::{ChromatogramSink, ChromatogramSource, Peak};
use crate::reader::ReaderError;
use crate::writer::WriterStats;

/// Codec of the MSD 0.7.0.1 sections
pub(crate) struct Msd0701;

impl SegmentFormat for Msd0701 {
    const VERSION: FormatVersion = FormatVersion::Msd0701;
    const OVERVIEW_SECTION: Section = Section::Overview;

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
