use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::ModelError;

/// Highest m/z value a stored ion may carry
pub const MAX_ION: f64 = 65535.0;

/// m/z used for whole-signal (TIC) integration entries in the MSD lineage
pub const TIC_ION: f64 = 0.0;

/// Calibration standard a retention index was computed against
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RetentionIndexType {
    /// Non-polar column
    Apolar,
    /// Semi-polar column
    Semipolar,
    /// Polar column
    Polar,
}

impl fmt::Display for RetentionIndexType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RetentionIndexType::Apolar => "APOLAR",
            RetentionIndexType::Semipolar => "SEMIPOLAR",
            RetentionIndexType::Polar => "POLAR",
        };
        f.write_str(name)
    }
}

impl FromStr for RetentionIndexType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "APOLAR" => Ok(RetentionIndexType::Apolar),
            "SEMIPOLAR" => Ok(RetentionIndexType::Semipolar),
            "POLAR" => Ok(RetentionIndexType::Polar),
            _ => Err(ModelError::UnknownRetentionIndexType(s.to_string())),
        }
    }
}

/// MS level of a mass spectrum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MassSpectrometer {
    /// Full scan
    #[default]
    Ms1,
    /// Tandem MS
    Ms2,
    /// MS^3
    Ms3,
}

impl fmt::Display for MassSpectrometer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MassSpectrometer::Ms1 => "MS1",
            MassSpectrometer::Ms2 => "MS2",
            MassSpectrometer::Ms3 => "MS3",
        };
        f.write_str(name)
    }
}

impl FromStr for MassSpectrometer {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MS1" => Ok(MassSpectrometer::Ms1),
            "MS2" => Ok(MassSpectrometer::Ms2),
            "MS3" => Ok(MassSpectrometer::Ms3),
            _ => Err(ModelError::UnknownMassSpectrometer(s.to_string())),
        }
    }
}

/// Acquisition mode of a mass spectrum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MassSpectrumType {
    /// Centroided peaks
    #[default]
    Centroid,
    /// Profile (continuum) data
    Profile,
}

impl fmt::Display for MassSpectrumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MassSpectrumType::Centroid => f.write_str("CENTROID"),
            MassSpectrumType::Profile => f.write_str("PROFILE"),
        }
    }
}

impl FromStr for MassSpectrumType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CENTROID" => Ok(MassSpectrumType::Centroid),
            "PROFILE" => Ok(MassSpectrumType::Profile),
            _ => Err(ModelError::UnknownMassSpectrumType(s.to_string())),
        }
    }
}

/// A single (m/z, abundance) pair of a mass spectrum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ion {
    /// Mass-to-charge ratio
    pub mz: f64,
    /// Signal abundance
    pub abundance: f32,
}

impl Ion {
    /// Create an ion, rejecting m/z or abundance values outside the supported limits
    pub fn new(mz: f64, abundance: f32) -> Result<Self, ModelError> {
        if !(0.0..=MAX_ION).contains(&mz) {
            return Err(ModelError::IonOutOfRange(mz));
        }
        if !abundance.is_finite() || abundance < 0.0 {
            return Err(ModelError::AbundanceOutOfRange(abundance));
        }
        Ok(Self { mz, abundance })
    }
}

/// One time-indexed measurement point of a chromatogram
///
/// CSD (FID) scans carry only a total signal; MSD scans additionally carry
/// the ions of their mass spectrum, whose abundances sum up to the total signal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scan {
    /// Retention time in milliseconds
    pub retention_time: i32,
    /// Total signal
    ///
    /// The MSD lineage does not store it; both its overview and a read scan
    /// take the sum of the ion abundances instead.
    pub total_signal: f32,
    /// Retention time on the first column (two-dimensional GC)
    pub retention_time_column1: i32,
    /// Retention time on the second column (two-dimensional GC)
    pub retention_time_column2: i32,
    /// Retention index
    pub retention_index: f32,
    /// Additional retention indices per calibration standard
    pub retention_indices: BTreeMap<RetentionIndexType, f32>,
    /// Time segment id
    pub time_segment_id: i32,
    /// Cycle number
    pub cycle_number: i32,
    /// MS level (MSD only)
    pub mass_spectrometer: MassSpectrometer,
    /// Acquisition mode (MSD only)
    pub mass_spectrum_type: MassSpectrumType,
    /// Ions of the mass spectrum (MSD only)
    pub ions: Vec<Ion>,
}

impl Scan {
    /// Create a CSD scan with a retention time (ms) and total signal
    pub fn new(retention_time: i32, total_signal: f32) -> Self {
        Self {
            retention_time,
            total_signal,
            time_segment_id: 1,
            cycle_number: 1,
            ..Default::default()
        }
    }

    /// Whether typed retention indices are attached
    pub fn has_additional_retention_indices(&self) -> bool {
        !self.retention_indices.is_empty()
    }

    /// Sum of all ion abundances
    pub fn ion_signal(&self) -> f32 {
        self.ions.iter().fold(0.0, |sum, ion| sum + ion.abundance)
    }
}

/// Builder for [`Scan`] values
#[derive(Debug, Clone)]
pub struct ScanBuilder {
    scan: Scan,
    explicit_signal: bool,
}

impl ScanBuilder {
    /// Start a scan at the given retention time in milliseconds
    pub fn new(retention_time: i32) -> Self {
        Self {
            scan: Scan::new(retention_time, 0.0),
            explicit_signal: false,
        }
    }

    /// Set the total signal (otherwise derived from the ions)
    pub fn total_signal(mut self, total_signal: f32) -> Self {
        self.scan.total_signal = total_signal;
        self.explicit_signal = true;
        self
    }

    /// Set the retention times on both columns
    pub fn column_retention_times(mut self, column1: i32, column2: i32) -> Self {
        self.scan.retention_time_column1 = column1;
        self.scan.retention_time_column2 = column2;
        self
    }

    /// Set the retention index
    pub fn retention_index(mut self, retention_index: f32) -> Self {
        self.scan.retention_index = retention_index;
        self
    }

    /// Attach a typed retention index
    pub fn typed_retention_index(mut self, index_type: RetentionIndexType, value: f32) -> Self {
        self.scan.retention_indices.insert(index_type, value);
        self
    }

    /// Set the time segment id and cycle number
    pub fn segment(mut self, time_segment_id: i32, cycle_number: i32) -> Self {
        self.scan.time_segment_id = time_segment_id;
        self.scan.cycle_number = cycle_number;
        self
    }

    /// Set the MS level and acquisition mode
    pub fn spectrum(mut self, spectrometer: MassSpectrometer, spectrum_type: MassSpectrumType) -> Self {
        self.scan.mass_spectrometer = spectrometer;
        self.scan.mass_spectrum_type = spectrum_type;
        self
    }

    /// Add an ion to the mass spectrum
    pub fn add_ion(mut self, mz: f64, abundance: f32) -> Self {
        self.scan.ions.push(Ion { mz, abundance });
        self
    }

    /// Build the scan
    pub fn build(mut self) -> Scan {
        if !self.explicit_signal {
            self.scan.total_signal = self.scan.ion_signal();
        }
        self.scan
    }
}
