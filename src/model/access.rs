//! Read-only and builder views of a chromatogram.
//!
//! Writers only see a [`ChromatogramSource`]; readers only populate a
//! [`ChromatogramSink`]. [`Chromatogram`] implements both, but an
//! application may plug in its own model instead.

use std::path::Path;

use chrono::{DateTime, Utc};

use super::{
    Chromatogram, EditInformation, IdentificationTarget, IntegrationEntry, Method, ModelError,
    Peak, Scan,
};

/// Read-only view consumed by the writers
pub trait ChromatogramSource {
    /// Scans in acquisition order
    fn scans(&self) -> &[Scan];

    /// Number of scans
    fn number_of_scans(&self) -> usize {
        self.scans().len()
    }

    /// Scan by its 1-based scan number
    fn scan(&self, scan_number: usize) -> Option<&Scan> {
        scan_number.checked_sub(1).and_then(|index| self.scans().get(index))
    }

    /// Detected peaks
    fn peaks(&self) -> &[Peak];

    /// Baseline abundance at a retention time
    fn background_abundance(&self, retention_time: i32) -> f32;

    /// Integrator of the chromatogram area
    fn chromatogram_integrator_description(&self) -> &str;

    /// Chromatogram areas
    fn chromatogram_integration_entries(&self) -> &[IntegrationEntry];

    /// Integrator of the background area
    fn background_integrator_description(&self) -> &str;

    /// Background areas
    fn background_integration_entries(&self) -> &[IntegrationEntry];

    /// Chromatogram-level identification candidates
    fn targets(&self) -> &[IdentificationTarget];

    /// Edit history, oldest first
    fn edit_history(&self) -> &[EditInformation];

    /// Acquisition date
    fn date(&self) -> DateTime<Utc>;

    /// Miscellaneous information
    fn misc_info(&self) -> &str;

    /// Operator
    fn operator(&self) -> &str;

    /// Instrument settings
    fn method(&self) -> &Method;
}

/// Builder populated by the readers
pub trait ChromatogramSink {
    /// Append the next scan
    fn add_scan(&mut self, scan: Scan) -> Result<(), ModelError>;

    /// Set one baseline point
    fn set_baseline_point(&mut self, retention_time: i32, abundance: f32);

    /// Append a peak
    fn add_peak(&mut self, peak: Peak) -> Result<(), ModelError>;

    /// Set the chromatogram areas
    fn set_chromatogram_integration(&mut self, description: String, entries: Vec<IntegrationEntry>);

    /// Set the background areas
    fn set_background_integration(&mut self, description: String, entries: Vec<IntegrationEntry>);

    /// Append a chromatogram-level target
    fn add_target(&mut self, target: IdentificationTarget);

    /// Append a history entry
    fn add_history_entry(&mut self, entry: EditInformation);

    /// Set scalar metadata
    fn set_metadata(&mut self, date: DateTime<Utc>, misc_info: String, operator: String);

    /// Set the instrument settings
    fn set_method(&mut self, method: Method);

    /// Record where the chromatogram was read from
    fn set_identity(&mut self, _file: &Path) {}
}

impl ChromatogramSource for Chromatogram {
    fn scans(&self) -> &[Scan] {
        &self.scans
    }

    fn peaks(&self) -> &[Peak] {
        &self.peaks
    }

    fn background_abundance(&self, retention_time: i32) -> f32 {
        self.baseline.background_abundance(retention_time)
    }

    fn chromatogram_integrator_description(&self) -> &str {
        &self.chromatogram_integrator_description
    }

    fn chromatogram_integration_entries(&self) -> &[IntegrationEntry] {
        &self.chromatogram_integration_entries
    }

    fn background_integrator_description(&self) -> &str {
        &self.background_integrator_description
    }

    fn background_integration_entries(&self) -> &[IntegrationEntry] {
        &self.background_integration_entries
    }

    fn targets(&self) -> &[IdentificationTarget] {
        &self.targets
    }

    fn edit_history(&self) -> &[EditInformation] {
        &self.edit_history
    }

    fn date(&self) -> DateTime<Utc> {
        self.date
    }

    fn misc_info(&self) -> &str {
        &self.misc_info
    }

    fn operator(&self) -> &str {
        &self.operator
    }

    fn method(&self) -> &Method {
        &self.method
    }
}

impl ChromatogramSink for Chromatogram {
    fn add_scan(&mut self, scan: Scan) -> Result<(), ModelError> {
        Chromatogram::add_scan(self, scan)
    }

    fn set_baseline_point(&mut self, retention_time: i32, abundance: f32) {
        self.baseline.set_point(retention_time, abundance);
    }

    fn add_peak(&mut self, peak: Peak) -> Result<(), ModelError> {
        self.peaks.push(peak);
        Ok(())
    }

    fn set_chromatogram_integration(&mut self, description: String, entries: Vec<IntegrationEntry>) {
        self.chromatogram_integrator_description = description;
        self.chromatogram_integration_entries = entries;
    }

    fn set_background_integration(&mut self, description: String, entries: Vec<IntegrationEntry>) {
        self.background_integrator_description = description;
        self.background_integration_entries = entries;
    }

    fn add_target(&mut self, target: IdentificationTarget) {
        self.targets.push(target);
    }

    fn add_history_entry(&mut self, entry: EditInformation) {
        self.edit_history.push(entry);
    }

    fn set_metadata(&mut self, date: DateTime<Utc>, misc_info: String, operator: String) {
        self.date = date;
        self.misc_info = misc_info;
        self.operator = operator;
    }

    fn set_method(&mut self, method: Method) {
        self.method = method;
    }

    fn set_identity(&mut self, file: &Path) {
        self.set_file(file);
    }
}
