//! # .ocb Writer Module
//!
//! Writes chromatograms as `.ocb` archives of one format version.
//!
//! ## Design Principles
//!
//! 1. **Fixed Entry Order**: The `VERSION` entry comes first, then every
//!    section of the version's layout in registry order. Directory entries
//!    are emitted before the first section inside them.
//!
//! 2. **Complete Sections**: Every section of the layout is written, empty
//!    collections as zero-count sections, so readers never miss an entry.
//!
//! 3. **Read-Only Input**: The chromatogram is only borrowed through
//!    [`ChromatogramSource`](crate::model::ChromatogramSource).
//!
//! 4. **Explicit Compression**: Level and method come from [`WriterConfig`],
//!    never from global state.
//!
//! ```rust,no_run
//! use ocb::layout::FormatVersion;
//! use ocb::model::{Chromatogram, Scan};
//! use ocb::writer::{ChromatogramWriter, WriterConfig};
//!
//! let mut chromatogram = Chromatogram::new();
//! chromatogram.add_scan(Scan::new(0, 67864.0))?;
//!
//! let writer = ChromatogramWriter::new(FormatVersion::Csd1007, WriterConfig::default())?;
//! let stats = writer.write("sample.ocb", &chromatogram)?;
//! println!("{stats}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod error;
mod stats;


pub use config::{CompressionMethod, WriterConfig, MAX_COMPRESSION_LEVEL};
pub use error::WriterError;
pub use stats::WriterStats;

use std::fs::{self, File};
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::codec::WriteFormatExt;
use crate::format::v0701::Msd0701;
use crate::format::v1007::Csd1007;
use crate::format::SegmentFormat;
use crate::layout::{prefixed, FormatVersion, Section};
use crate::model::ChromatogramSource;
use crate::progress::{NullProgressMonitor, ProgressMonitor};

/// Writer for `.ocb` archives of one format version
#[derive(Debug, Clone)]
pub struct ChromatogramWriter {
    version: FormatVersion,
    config: WriterConfig,
}

impl ChromatogramWriter {
    /// Create a writer, rejecting out-of-range compression settings
    pub fn new(version: FormatVersion, config: WriterConfig) -> Result<Self, WriterError> {
        config.validate()?;
        Ok(Self { version, config })
    }

    /// Version this writer produces
    pub fn version(&self) -> FormatVersion {
        self.version
    }

    /// Active configuration
    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Write a chromatogram to a new file
    pub fn write<P, C>(&self, path: P, chromatogram: &C) -> Result<WriterStats, WriterError>
    where
        P: AsRef<Path>,
        C: ChromatogramSource + ?Sized,
    {
        self.write_with_monitor(path, chromatogram, &mut NullProgressMonitor)
    }

    /// Write a chromatogram to a new file, polling `monitor` between sections
    ///
    /// A failed or canceled write removes the incomplete file.
    pub fn write_with_monitor<P, C>(
        &self,
        path: P,
        chromatogram: &C,
        monitor: &mut dyn ProgressMonitor,
    ) -> Result<WriterStats, WriterError>
    where
        P: AsRef<Path>,
        C: ChromatogramSource + ?Sized,
    {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| WriterError::FileIsNotWriteable {
            file: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let result = self
            .write_to(BufWriter::new(file), chromatogram, monitor)
            .and_then(|(mut writer, stats)| {
                writer.flush()?;
                Ok(stats)
            });
        match result {
            Ok(mut stats) => {
                stats.file_size_bytes = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
                log::info!("{} to {}", stats, path.display());
                Ok(stats)
            }
            Err(e) => {
                if let Err(remove) = fs::remove_file(path) {
                    log::warn!("Could not remove incomplete {}: {remove}", path.display());
                }
                Err(e.for_file(path))
            }
        }
    }

    /// Write a complete archive into any seekable stream
    ///
    /// Returns the stream after the zip directory has been written.
    pub fn write_to<W, C>(
        &self,
        writer: W,
        chromatogram: &C,
        monitor: &mut dyn ProgressMonitor,
    ) -> Result<(W, WriterStats), WriterError>
    where
        W: Write + Seek,
        C: ChromatogramSource + ?Sized,
    {
        let mut zip = ZipWriter::new(writer);
        let stats = self.write_into_archive(&mut zip, "", chromatogram, monitor)?;
        let writer = zip.finish()?;
        Ok((writer, stats))
    }

    /// Add a chromatogram to an open archive under a directory prefix
    ///
    /// The caller finishes the archive. An empty prefix produces the layout
    /// of a standalone file.
    pub fn write_into_archive<W, C>(
        &self,
        zip: &mut ZipWriter<W>,
        prefix: &str,
        chromatogram: &C,
        monitor: &mut dyn ProgressMonitor,
    ) -> Result<WriterStats, WriterError>
    where
        W: Write + Seek,
        C: ChromatogramSource + ?Sized,
    {
        let options = self.config.file_options();
        match self.version {
            FormatVersion::Csd1007 => {
                write_entries::<Csd1007, W, C>(zip, prefix, chromatogram, options, monitor)
            }
            FormatVersion::Msd0701 => {
                write_entries::<Msd0701, W, C>(zip, prefix, chromatogram, options, monitor)
            }
        }
    }
}

fn write_entries<F, W, C>(
    zip: &mut ZipWriter<W>,
    prefix: &str,
    chromatogram: &C,
    options: SimpleFileOptions,
    monitor: &mut dyn ProgressMonitor,
) -> Result<WriterStats, WriterError>
where
    F: SegmentFormat,
    W: Write + Seek,
    C: ChromatogramSource + ?Sized,
{
    let layout = F::VERSION.layout();
    let mut stats = WriterStats::new(F::VERSION);
    let mut directories: Vec<&str> = Vec::with_capacity(layout.directories.len());

    for &(section, path) in layout.sections {
        if monitor.is_canceled() {
            return Err(WriterError::Canceled);
        }
        monitor.sub_task(&format!("Writing {section}"));

        if let Some(directory) = layout.directory_of(path) {
            if !directories.contains(&directory) {
                zip.add_directory(prefixed(prefix, directory), options)?;
                directories.push(directory);
                stats.entries_written += 1;
            }
        }

        zip.start_file(prefixed(prefix, path), options)?;
        let mut entry = BufWriter::new(&mut *zip);
        if section == Section::Version {
            entry.write_string(F::VERSION.marker())?;
        } else {
            F::write_section(section, &mut entry, chromatogram, &mut stats)?;
        }
        entry.flush()?;
        drop(entry);

        stats.entries_written += 1;
        log::debug!("Wrote {section} to {path}");
    }
    Ok(stats)
}

/// Write a chromatogram with the default configuration
pub fn write_chromatogram<P, C>(
    path: P,
    chromatogram: &C,
    version: FormatVersion,
) -> Result<WriterStats, WriterError>
where
    P: AsRef<Path>,
    C: ChromatogramSource + ?Sized,
{
    ChromatogramWriter::new(version, WriterConfig::default())?.write(path, chromatogram)
}
