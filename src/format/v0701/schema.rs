//! Field tables of the MSD 0.7.0.1 sections.

use crate::layout::Section;
use crate::schema::{Field, FieldType};

/// Version entry
pub const VERSION: &[Field] = &[Field::new("marker", FieldType::String)];

/// One point of the total ion chromatogram
pub const TIC_POINT: &[Field] = &[
    Field::new("retention_time", FieldType::Int32),
    Field::new("total_signal", FieldType::Float32),
];

/// Overview entry
pub const OVERVIEW: &[Field] = &[Field::new("scans", FieldType::List(TIC_POINT))];

/// One ion of a mass spectrum
pub const ION: &[Field] = &[
    Field::new("mz", FieldType::Float64),
    Field::new("abundance", FieldType::Float32),
];

/// One mass spectrum
pub const MASS_SPECTRUM: &[Field] = &[
    Field::new("mass_spectrometer", FieldType::String),
    Field::new("mass_spectrum_type", FieldType::String),
    Field::new("retention_time", FieldType::Int32),
    Field::new("retention_index", FieldType::Float32),
    Field::new("ions", FieldType::List(ION)),
];

/// Scans entry
pub const SCANS: &[Field] = &[Field::new("scans", FieldType::List(MASS_SPECTRUM))];

/// One point of a peak shape
pub const SHAPE_POINT: &[Field] = &[
    Field::new("retention_time", FieldType::Int32),
    Field::new("intensity", FieldType::Float32),
];

/// One integration result, the TIC stored as m/z 0
pub const INTEGRATION_ENTRY: &[Field] = &[
    Field::new("mz", FieldType::Float64),
    Field::new("area", FieldType::Float64),
];

/// One identification target
pub const TARGET: &[Field] = &[
    Field::new("identifier", FieldType::String),
    Field::new("cas_number", FieldType::String),
    Field::new("comments", FieldType::String),
    Field::new("miscellaneous", FieldType::String),
    Field::new("name", FieldType::String),
    Field::new("match_factor", FieldType::Float32),
    Field::new("reverse_match_factor", FieldType::Float32),
    Field::new("probability", FieldType::Float32),
];

/// One peak
pub const PEAK: &[Field] = &[
    Field::new("detector_description", FieldType::String),
    Field::new("integrator_description", FieldType::String),
    Field::new("model_description", FieldType::String),
    Field::new("peak_type", FieldType::String),
    Field::new("start_background_abundance", FieldType::Float32),
    Field::new("stop_background_abundance", FieldType::Float32),
    Field::new("mass_spectrum", FieldType::Group(MASS_SPECTRUM)),
    Field::new("intensity_values", FieldType::List(SHAPE_POINT)),
    Field::new("integration_entries", FieldType::List(INTEGRATION_ENTRY)),
    Field::new("targets", FieldType::List(TARGET)),
];

/// Peaks entry
pub const PEAKS: &[Field] = &[Field::new("peaks", FieldType::List(PEAK))];

/// Area entry
pub const AREA: &[Field] = &[
    Field::new("chromatogram_integrator_description", FieldType::String),
    Field::new("chromatogram_integration_entries", FieldType::List(INTEGRATION_ENTRY)),
    Field::new("background_integrator_description", FieldType::String),
    Field::new("background_integration_entries", FieldType::List(INTEGRATION_ENTRY)),
];

/// Identification entry
pub const IDENTIFICATION: &[Field] = &[Field::new("targets", FieldType::List(TARGET))];

/// One edit of the history
pub const HISTORY_ENTRY: &[Field] = &[
    Field::new("date", FieldType::Int64),
    Field::new("description", FieldType::String),
];

/// History entry
pub const HISTORY: &[Field] = &[Field::new("entries", FieldType::List(HISTORY_ENTRY))];

/// Miscellaneous entry
pub const MISCELLANEOUS: &[Field] = &[
    Field::new("date", FieldType::Int64),
    Field::new("misc_info", FieldType::String),
    Field::new("operator", FieldType::String),
];

/// Field table of a section, if this version stores it
pub fn section_schema(section: Section) -> Option<&'static [Field]> {
    match section {
        Section::Version => Some(VERSION),
        Section::Overview => Some(OVERVIEW),
        Section::Scans => Some(SCANS),
        Section::Peaks => Some(PEAKS),
        Section::Area => Some(AREA),
        Section::Identification => Some(IDENTIFICATION),
        Section::History => Some(HISTORY),
        Section::Miscellaneous => Some(MISCELLANEOUS),
        Section::SystemSettings | Section::Baseline => None,
    }
}
