//! # .ocb Reader Module
//!
//! Reads chromatograms back from `.ocb` archives.
//!
//! ## Features
//!
//! - **Version Selection**: The `VERSION` entry is read first and picks the
//!   segment reader; any other marker is rejected before a section is touched
//! - **Random Access**: Sections are fetched by entry name, so only the
//!   entries a call needs are decompressed (see [`ChromatogramReader::read_peaks`])
//! - **Tolerant Decoding**: Records that fail validation are skipped and
//!   listed in a [`ReadReport`]; broken framing aborts the read
//! - **Nested Archives**: [`ChromatogramReader::read_archive`] reads a
//!   chromatogram stored under a directory prefix of a larger zip
//!
//! ## Example
//!
//! ```rust,no_run
//! use ocb::reader::ChromatogramReader;
//!
//! let reader = ChromatogramReader::new();
//! let (chromatogram, report) = reader.read_with_report("sample.ocb")?;
//!
//! println!("{} scans, {}", chromatogram.number_of_scans(), report);
//! # Ok::<(), ocb::reader::ReaderError>(())
//! ```

mod config;
mod error;
mod open;
mod report;


pub use config::ReaderConfig;
pub use error::ReaderError;
pub use report::{ReadReport, SkippedRecord};

use std::io::{Read, Seek};
use std::path::Path;

use zip::ZipArchive;

use crate::format::v0701::Msd0701;
use crate::format::v1007::Csd1007;
use crate::format::{RecordPolicy, SegmentFormat};
use crate::layout::{prefixed, FormatVersion, Section};
use crate::model::{Chromatogram, ChromatogramSink, Peak};
use crate::progress::{NullProgressMonitor, ProgressMonitor};

/// Reader for `.ocb` archives
#[derive(Debug, Clone, Default)]
pub struct ChromatogramReader {
    config: ReaderConfig,
}

impl ChromatogramReader {
    /// Create a reader with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with a custom configuration
    pub fn with_config(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Format version stored in a file
    pub fn detect_version<P: AsRef<Path>>(&self, path: P) -> Result<FormatVersion, ReaderError> {
        let mut archive = open::open_archive(path.as_ref())?;
        let marker = open::read_marker(&mut archive, "")?;
        open::resolve_version(&marker, None)
    }

    /// Read a chromatogram of any known version
    pub fn read<P: AsRef<Path>>(&self, path: P) -> Result<Chromatogram, ReaderError> {
        let (chromatogram, _) = self.read_with_report(path)?;
        Ok(chromatogram)
    }

    /// Read a chromatogram, rejecting every version but `version`
    pub fn read_version<P: AsRef<Path>>(
        &self,
        path: P,
        version: FormatVersion,
    ) -> Result<Chromatogram, ReaderError> {
        let (chromatogram, _) =
            self.read_with_monitor(path, Some(version), &mut NullProgressMonitor)?;
        Ok(chromatogram)
    }

    /// Read a chromatogram together with the records that were skipped
    pub fn read_with_report<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<(Chromatogram, ReadReport), ReaderError> {
        self.read_with_monitor(path, None, &mut NullProgressMonitor)
    }

    /// Read a file into any chromatogram sink, polling `monitor` between sections
    pub fn read_with_monitor<P, S>(
        &self,
        path: P,
        expected: Option<FormatVersion>,
        monitor: &mut dyn ProgressMonitor,
    ) -> Result<(S, ReadReport), ReaderError>
    where
        P: AsRef<Path>,
        S: ChromatogramSink + Default,
    {
        let path = path.as_ref();
        let mut archive = open::open_archive(path)?;
        let (mut sink, report) = self.read_archive::<_, S>(&mut archive, "", expected, monitor)?;
        sink.set_identity(path);
        log::info!("Read {} ({report})", path.display());
        Ok((sink, report))
    }

    /// Read a chromatogram stored under `prefix` inside an open archive
    ///
    /// An empty prefix reads an archive of its own. The sink is only returned
    /// when every section was read.
    pub fn read_archive<R, S>(
        &self,
        archive: &mut ZipArchive<R>,
        prefix: &str,
        expected: Option<FormatVersion>,
        monitor: &mut dyn ProgressMonitor,
    ) -> Result<(S, ReadReport), ReaderError>
    where
        R: Read + Seek,
        S: ChromatogramSink + Default,
    {
        let marker = open::read_marker(archive, prefix)?;
        let version = open::resolve_version(&marker, expected)?;
        let mut report = ReadReport {
            version: Some(version),
            ..Default::default()
        };
        let sink = match version {
            FormatVersion::Csd1007 => {
                self.read_sections::<Csd1007, R, S>(archive, prefix, monitor, &mut report)?
            }
            FormatVersion::Msd0701 => {
                self.read_sections::<Msd0701, R, S>(archive, prefix, monitor, &mut report)?
            }
        };
        Ok((sink, report))
    }

    /// Read only the peaks of a file
    pub fn read_peaks<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Peak>, ReaderError> {
        let mut archive = open::open_archive(path.as_ref())?;
        let marker = open::read_marker(&mut archive, "")?;
        let mut report = ReadReport::default();
        match open::resolve_version(&marker, None)? {
            FormatVersion::Csd1007 => {
                self.read_peaks_entry::<Csd1007, _>(&mut archive, &mut report)
            }
            FormatVersion::Msd0701 => {
                self.read_peaks_entry::<Msd0701, _>(&mut archive, &mut report)
            }
        }
    }

    /// (retention time in ms, total signal) of every scan
    ///
    /// Uses the overview entry where the version stores one, so mass spectra
    /// are not decoded.
    pub fn read_overview<P: AsRef<Path>>(&self, path: P) -> Result<Vec<(i32, f32)>, ReaderError> {
        let mut archive = open::open_archive(path.as_ref())?;
        let marker = open::read_marker(&mut archive, "")?;
        match open::resolve_version(&marker, None)? {
            FormatVersion::Csd1007 => read_overview_entry::<Csd1007, _>(&mut archive),
            FormatVersion::Msd0701 => read_overview_entry::<Msd0701, _>(&mut archive),
        }
    }

    fn read_sections<F, R, S>(
        &self,
        archive: &mut ZipArchive<R>,
        prefix: &str,
        monitor: &mut dyn ProgressMonitor,
        report: &mut ReadReport,
    ) -> Result<S, ReaderError>
    where
        F: SegmentFormat,
        R: Read + Seek,
        S: ChromatogramSink + Default,
    {
        let mut sink = S::default();
        let mut records = RecordPolicy::new(&self.config, report);
        for &(section, path) in F::VERSION.layout().sections {
            if section == Section::Version {
                continue;
            }
            if monitor.is_canceled() {
                return Err(ReaderError::Canceled);
            }
            monitor.sub_task(&format!("Reading {section}"));

            let mut entry = open::read_entry(archive, &prefixed(prefix, path))?;
            F::read_section(section, &mut entry, &mut sink, &mut records)?;
            let trailing = entry.get_ref().len() as u64 - entry.position();
            if trailing > 0 {
                log::debug!("Ignoring {trailing} trailing bytes in {path}");
            }
        }
        Ok(sink)
    }

    fn read_peaks_entry<F, R>(
        &self,
        archive: &mut ZipArchive<R>,
        report: &mut ReadReport,
    ) -> Result<Vec<Peak>, ReaderError>
    where
        F: SegmentFormat,
        R: Read + Seek,
    {
        let path = F::VERSION
            .layout()
            .path(Section::Peaks)
            .ok_or_else(|| ReaderError::MalformedStream(format!("{} has no peaks", F::VERSION)))?;
        let mut entry = open::read_entry(archive, path)?;
        let mut records = RecordPolicy::new(&self.config, report);
        F::read_peaks(&mut entry, &mut records)
    }
}

fn read_overview_entry<F, R>(archive: &mut ZipArchive<R>) -> Result<Vec<(i32, f32)>, ReaderError>
where
    F: SegmentFormat,
    R: Read + Seek,
{
    let path = F::VERSION
        .layout()
        .path(F::OVERVIEW_SECTION)
        .ok_or_else(|| ReaderError::MalformedStream(format!("{} has no overview", F::VERSION)))?;
    let mut entry = open::read_entry(archive, path)?;
    F::read_overview(&mut entry)
}

/// Read a chromatogram of any known version with the default configuration
pub fn read_chromatogram<P: AsRef<Path>>(path: P) -> Result<Chromatogram, ReaderError> {
    ChromatogramReader::new().read(path)
}
