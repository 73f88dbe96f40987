//! # ocb - ChemClipse Chromatogram Archives
//!
//! `ocb` reads and writes the versioned `.ocb` chromatogram container: a zip
//! archive whose `VERSION` entry names the format version and whose other
//! entries hold the sections of one chromatogram as big-endian binary
//! segments.
//!
//! ## Key Features
//!
//! - **Two Format Lineages**: `1.0.0.7` for flame ionisation (CSD) data and
//!   `0.7.0.1` for mass spectrometric (MSD) data, each with its own entry
//!   layout and segment codec.
//!
//! - **Version Isolation**: A reader only accepts the markers it knows, and a
//!   writer emits exactly one version's layout.
//!
//! - **Tolerant Reads**: Records that decode but fail validation are skipped
//!   and reported; the rest of the section is still read.
//!
//! - **Explicit Schemas**: The field order of every section is available as
//!   data in [`format::v1007::schema`] and [`format::v0701::schema`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ocb::layout::FormatVersion;
//! use ocb::model::{Chromatogram, ScanBuilder};
//! use ocb::reader::ChromatogramReader;
//! use ocb::writer::{ChromatogramWriter, WriterConfig};
//!
//! let mut chromatogram = Chromatogram::new();
//! chromatogram.add_scan(ScanBuilder::new(0).add_ion(43.0, 1500.0).build())?;
//! chromatogram.add_scan(ScanBuilder::new(1000).add_ion(57.0, 900.0).build())?;
//!
//! let writer = ChromatogramWriter::new(FormatVersion::Msd0701, WriterConfig::default())?;
//! let stats = writer.write("sample.ocb", &chromatogram)?;
//! println!("{stats}");
//!
//! let (restored, report) = ChromatogramReader::new().read_with_report("sample.ocb")?;
//! assert_eq!(restored.number_of_scans(), 2);
//! assert!(report.is_clean());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - [`model`]: In-memory chromatogram, scans, peaks and targets
//! - [`layout`]: Format versions and their entry layouts
//! - [`codec`]: Big-endian primitives and UTF-16 strings
//! - [`schema`]: Field tables and a generic record decoder
//! - [`format`]: Per-version segment writers and readers
//! - [`reader`]: Archive reader with version detection
//! - [`writer`]: Archive writer with compression settings
//! - [`config`]: TOML configuration
//! - [`progress`]: Progress reporting and cancellation

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod codec;
pub mod config;
pub mod format;
pub mod layout;
pub mod model;
pub mod progress;
pub mod reader;
pub mod schema;
pub mod writer;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::config::{ConfigError, OcbConfig};
    pub use crate::layout::{FormatVersion, Section};
    pub use crate::model::{
        Chromatogram, ChromatogramSink, ChromatogramSource, IdentificationTarget, Ion, ModelError,
        Peak, PeakType, Scan, ScanBuilder,
    };
    pub use crate::progress::{NullProgressMonitor, ProgressMonitor};
    pub use crate::reader::{
        read_chromatogram, ChromatogramReader, ReadReport, ReaderConfig, ReaderError,
    };
    pub use crate::writer::{
        write_chromatogram, ChromatogramWriter, CompressionMethod, WriterConfig, WriterError,
        WriterStats,
    };
}
