//! # Chromatogram Model
//!
//! In-memory representation of everything an `.ocb` archive can hold:
//! scans (with optional mass spectra), the baseline, peaks, integration
//! results, identification targets and the edit history.
//!
//! The codec never owns a chromatogram. Writers borrow one through
//! [`ChromatogramSource`], readers populate a fresh one through
//! [`ChromatogramSink`].
//!
//! ```rust
//! use ocb::model::{Chromatogram, ScanBuilder};
//!
//! let mut chromatogram = Chromatogram::new();
//! chromatogram.add_scan(ScanBuilder::new(0).total_signal(67864.0).build())?;
//! chromatogram.add_scan(ScanBuilder::new(1000).add_ion(43.0, 1500.0).build())?;
//!
//! assert_eq!(chromatogram.scan(2).map(|s| s.total_signal), Some(1500.0));
//! # Ok::<(), ocb::model::ModelError>(())
//! ```

mod access;
mod chromatogram;
mod error;
mod identification;
mod peak;
mod scan;


pub use access::{ChromatogramSink, ChromatogramSource};
pub use chromatogram::{BaselineModel, Chromatogram, EditInformation, IntegrationEntry, Method};
pub use error::ModelError;
pub use identification::{ComparisonResult, IdentificationTarget, LibraryInformation, MAX_SCORE};
pub use peak::{Peak, PeakType};
pub use scan::{
    Ion, MassSpectrometer, MassSpectrumType, RetentionIndexType, Scan, ScanBuilder, MAX_ION,
    TIC_ION,
};
