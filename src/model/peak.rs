use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::{IdentificationTarget, IntegrationEntry, ModelError, Scan};

/// Baseline classification of a peak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PeakType {
    /// Unclassified
    #[default]
    Default,
    /// Baseline to baseline
    Bb,
    /// Baseline to valley
    Bv,
    /// Valley to baseline
    Vb,
    /// Valley to valley
    Vv,
    /// Manually modified
    Mm,
}

impl PeakType {
    /// Whether the peak was modified by hand
    pub fn is_manual(&self) -> bool {
        matches!(self, PeakType::Mm)
    }
}

impl fmt::Display for PeakType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PeakType::Default => "DEFAULT",
            PeakType::Bb => "BB",
            PeakType::Bv => "BV",
            PeakType::Vb => "VB",
            PeakType::Vv => "VV",
            PeakType::Mm => "MM",
        };
        f.write_str(name)
    }
}

impl FromStr for PeakType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEFAULT" => Ok(PeakType::Default),
            "BB" => Ok(PeakType::Bb),
            "BV" => Ok(PeakType::Bv),
            "VB" => Ok(PeakType::Vb),
            "VV" => Ok(PeakType::Vv),
            "MM" => Ok(PeakType::Mm),
            _ => Err(ModelError::UnknownPeakType(s.to_string())),
        }
    }
}

/// A detected feature spanning several scans
#[derive(Debug, Clone, PartialEq)]
pub struct Peak {
    /// Scan (or mass spectrum) at the apex
    pub maximum: Scan,
    /// Shape of the peak: retention time (ms) to intensity
    pub intensity_values: BTreeMap<i32, f32>,
    /// Background abundance at the start of the peak
    pub start_background_abundance: f32,
    /// Background abundance at the end of the peak
    pub stop_background_abundance: f32,
    /// Baseline classification
    pub peak_type: PeakType,
    /// Detector that found the peak
    pub detector_description: String,
    /// Quantifier description (CSD lineage)
    pub quantifier_description: String,
    /// Integrator that computed the areas
    pub integrator_description: String,
    /// Peak model description
    pub model_description: String,
    /// Whether the peak takes part in further analysis (CSD lineage)
    pub active_for_analysis: bool,
    /// Suggested number of overlapping components (CSD lineage)
    pub suggested_number_of_components: i32,
    /// Integrated areas
    pub integration_entries: Vec<IntegrationEntry>,
    /// Ranked identification candidates
    pub targets: Vec<IdentificationTarget>,
}

impl Peak {
    /// Create a peak from its maximum, its shape and the background abundances
    ///
    /// The shape must contain at least one point and its retention time
    /// domain must bracket the retention time of the maximum.
    pub fn new(
        maximum: Scan,
        intensity_values: BTreeMap<i32, f32>,
        start_background_abundance: f32,
        stop_background_abundance: f32,
    ) -> Result<Self, ModelError> {
        let (start, stop) = match (
            intensity_values.keys().next(),
            intensity_values.keys().next_back(),
        ) {
            (Some(start), Some(stop)) => (*start, *stop),
            _ => return Err(ModelError::EmptyPeakShape),
        };
        if maximum.retention_time < start || maximum.retention_time > stop {
            return Err(ModelError::ShapeDoesNotBracketMaximum {
                start,
                stop,
                maximum: maximum.retention_time,
            });
        }

        Ok(Self {
            maximum,
            intensity_values,
            start_background_abundance,
            stop_background_abundance,
            peak_type: PeakType::Default,
            detector_description: String::new(),
            quantifier_description: String::new(),
            integrator_description: String::new(),
            model_description: String::new(),
            active_for_analysis: true,
            suggested_number_of_components: 0,
            integration_entries: Vec::new(),
            targets: Vec::new(),
        })
    }

    /// First retention time of the shape
    pub fn start_retention_time(&self) -> i32 {
        self.intensity_values.keys().next().copied().unwrap_or(self.maximum.retention_time)
    }

    /// Last retention time of the shape
    pub fn stop_retention_time(&self) -> i32 {
        self.intensity_values
            .keys()
            .next_back()
            .copied()
            .unwrap_or(self.maximum.retention_time)
    }

    /// Sum of all integrated areas
    pub fn integrated_area(&self) -> f64 {
        self.integration_entries.iter().map(IntegrationEntry::area).sum()
    }
}
