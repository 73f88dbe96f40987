use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use super::scan::TIC_ION;
use super::{IdentificationTarget, ModelError, Peak, Scan};

/// An integrated area of a peak, the whole chromatogram or its background
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntegrationEntry {
    /// Area over the whole signal (CSD, or TIC in the MSD lineage)
    Signal {
        /// Integrated area
        area: f64,
    },
    /// Area of a single ion trace (MSD)
    Ion {
        /// m/z of the trace
        mz: f64,
        /// Integrated area
        area: f64,
    },
}

impl IntegrationEntry {
    /// Integrated area
    pub fn area(&self) -> f64 {
        match self {
            IntegrationEntry::Signal { area } | IntegrationEntry::Ion { area, .. } => *area,
        }
    }

    /// m/z of the entry; whole-signal entries report the TIC ion
    pub fn mz(&self) -> f64 {
        match self {
            IntegrationEntry::Signal { .. } => TIC_ION,
            IntegrationEntry::Ion { mz, .. } => *mz,
        }
    }

    /// Build an entry from a stored (m/z, area) pair
    pub fn from_ion(mz: f64, area: f64) -> Self {
        if mz == TIC_ION {
            IntegrationEntry::Signal { area }
        } else {
            IntegrationEntry::Ion { mz, area }
        }
    }
}

/// One entry of the edit history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditInformation {
    /// When the edit happened
    pub date: DateTime<Utc>,
    /// What was done
    pub description: String,
}

impl EditInformation {
    /// Create a history entry
    pub fn new(date: DateTime<Utc>, description: impl Into<String>) -> Self {
        Self {
            date,
            description: description.into(),
        }
    }
}

/// Instrument settings of a CSD (FID) acquisition
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Method {
    /// Instrument name
    pub instrument_name: String,
    /// Ion source
    pub ion_source: String,
    /// Sampling rate
    pub sampling_rate: f64,
    /// Solvent delay in milliseconds
    pub solvent_delay: i32,
    /// Source heater temperature
    pub source_heater: f64,
    /// Stop mode
    pub stop_mode: String,
    /// Stop time in milliseconds
    pub stop_time: i32,
    /// Time filter peak width
    pub time_filter_peak_width: i32,
}

/// Background abundance curve of a chromatogram
///
/// Points are interpolated linearly; retention times outside the covered
/// range have no background.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BaselineModel {
    points: BTreeMap<i32, f32>,
}

impl BaselineModel {
    /// Create an empty baseline
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the background abundance at a retention time
    pub fn set_point(&mut self, retention_time: i32, abundance: f32) {
        self.points.insert(retention_time, abundance);
    }

    /// Add a straight baseline segment between two retention times
    pub fn add_segment(&mut self, start: (i32, f32), stop: (i32, f32)) {
        self.set_point(start.0, start.1);
        self.set_point(stop.0, stop.1);
    }

    /// Whether no points are set
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Stored points in retention time order
    pub fn points(&self) -> impl Iterator<Item = (i32, f32)> + '_ {
        self.points.iter().map(|(rt, abundance)| (*rt, *abundance))
    }

    /// Background abundance at a retention time
    pub fn background_abundance(&self, retention_time: i32) -> f32 {
        if let Some(abundance) = self.points.get(&retention_time) {
            return *abundance;
        }
        let before = self.points.range(..retention_time).next_back();
        let after = self.points.range(retention_time..).next();
        match (before, after) {
            (Some((&t0, &a0)), Some((&t1, &a1))) => {
                let span = i64::from(t1) - i64::from(t0);
                let fraction = (i64::from(retention_time) - i64::from(t0)) as f64 / span as f64;
                (a0 as f64 + (a1 as f64 - a0 as f64) * fraction) as f32
            }
            _ => 0.0,
        }
    }
}

/// The full measurement record of one sample run
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Chromatogram {
    /// Display name (the file stem after reading)
    pub name: String,
    /// Source file, if the chromatogram was read from disk
    pub file: Option<PathBuf>,
    /// Operator
    pub operator: String,
    /// Acquisition date
    pub date: DateTime<Utc>,
    /// Miscellaneous information
    pub misc_info: String,
    /// Instrument settings (CSD lineage)
    pub method: Method,
    /// Scans in acquisition order
    pub scans: Vec<Scan>,
    /// Background curve
    pub baseline: BaselineModel,
    /// Detected peaks
    pub peaks: Vec<Peak>,
    /// Integrator of the chromatogram area
    pub chromatogram_integrator_description: String,
    /// Chromatogram areas
    pub chromatogram_integration_entries: Vec<IntegrationEntry>,
    /// Integrator of the background area
    pub background_integrator_description: String,
    /// Background areas
    pub background_integration_entries: Vec<IntegrationEntry>,
    /// Chromatogram-level identification candidates
    pub targets: Vec<IdentificationTarget>,
    /// Edit history, oldest first
    pub edit_history: Vec<EditInformation>,
}

impl Chromatogram {
    /// Create an empty chromatogram
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of scans
    pub fn number_of_scans(&self) -> usize {
        self.scans.len()
    }

    /// Scan by its 1-based scan number
    pub fn scan(&self, scan_number: usize) -> Option<&Scan> {
        scan_number.checked_sub(1).and_then(|index| self.scans.get(index))
    }

    /// Append a scan, keeping retention times non-decreasing
    pub fn add_scan(&mut self, scan: Scan) -> Result<(), ModelError> {
        if let Some(previous) = self.scans.last() {
            if scan.retention_time < previous.retention_time {
                return Err(ModelError::RetentionTimeNotMonotonic {
                    retention_time: scan.retention_time,
                    previous: previous.retention_time,
                });
            }
        }
        self.scans.push(scan);
        Ok(())
    }

    /// First and last retention time, if any scans exist
    pub fn retention_time_range(&self) -> Option<(i32, i32)> {
        match (self.scans.first(), self.scans.last()) {
            (Some(first), Some(last)) => Some((first.retention_time, last.retention_time)),
            _ => None,
        }
    }

    /// Set name and file from a source path
    pub fn set_file(&mut self, file: &Path) {
        self.name = file
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.file = Some(file.to_path_buf());
    }
}
