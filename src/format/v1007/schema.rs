//! Field tables of the CSD 1.0.0.7 sections.

use crate::layout::Section;
use crate::schema::{Field, FieldType};

/// Version entry
pub const VERSION: &[Field] = &[Field::new("marker", FieldType::String)];

/// System settings entry
pub const SYSTEM_SETTINGS: &[Field] = &[
    Field::new("instrument_name", FieldType::String),
    Field::new("ion_source", FieldType::String),
    Field::new("sampling_rate", FieldType::Float64),
    Field::new("solvent_delay", FieldType::Int32),
    Field::new("source_heater", FieldType::Float64),
    Field::new("stop_mode", FieldType::String),
    Field::new("stop_time", FieldType::Int32),
    Field::new("time_filter_peak_width", FieldType::Int32),
];

/// Typed retention index
pub const RETENTION_INDEX: &[Field] = &[
    Field::new("type", FieldType::String),
    Field::new("value", FieldType::Float32),
];

const ADDITIONAL_RETENTION_INDICES: &[Field] =
    &[Field::new("indices", FieldType::List(RETENTION_INDEX))];

/// One scan
pub const SCAN: &[Field] = &[
    Field::new("retention_time", FieldType::Int32),
    Field::new("total_signal", FieldType::Float32),
    Field::new("retention_time_column1", FieldType::Int32),
    Field::new("retention_time_column2", FieldType::Int32),
    Field::new("retention_index", FieldType::Float32),
    Field::new(
        "additional_retention_indices",
        FieldType::Optional(ADDITIONAL_RETENTION_INDICES),
    ),
    Field::new("time_segment_id", FieldType::Int32),
    Field::new("cycle_number", FieldType::Int32),
];

/// Scans entry
pub const SCANS: &[Field] = &[Field::new("scans", FieldType::List(SCAN))];

/// Background abundance at one scan
pub const BASELINE_POINT: &[Field] = &[
    Field::new("retention_time", FieldType::Int32),
    Field::new("background_abundance", FieldType::Float32),
];

/// Baseline entry
pub const BASELINE: &[Field] = &[Field::new("points", FieldType::List(BASELINE_POINT))];

/// One point of a peak shape
pub const SHAPE_POINT: &[Field] = &[
    Field::new("retention_time", FieldType::Int32),
    Field::new("intensity", FieldType::Float32),
];

/// One integration result
pub const INTEGRATION_ENTRY: &[Field] = &[Field::new("area", FieldType::Float64)];

/// One peak
pub const PEAK: &[Field] = &[
    Field::new("detector_description", FieldType::String),
    Field::new("quantifier_description", FieldType::String),
    Field::new("active_for_analysis", FieldType::Boolean),
    Field::new("integrator_description", FieldType::String),
    Field::new("model_description", FieldType::String),
    Field::new("peak_type", FieldType::String),
    Field::new("suggested_number_of_components", FieldType::Int32),
    Field::new("start_background_abundance", FieldType::Float32),
    Field::new("stop_background_abundance", FieldType::Float32),
    Field::new("maximum", FieldType::Group(SCAN)),
    Field::new("intensity_values", FieldType::List(SHAPE_POINT)),
    Field::new("integration_entries", FieldType::List(INTEGRATION_ENTRY)),
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

/// Field table of a section, if this version stores it
pub fn section_schema(section: Section) -> Option<&'static [Field]> {
    match section {
        Section::Version => Some(VERSION),
        Section::SystemSettings => Some(SYSTEM_SETTINGS),
        Section::Scans => Some(SCANS),
        Section::Baseline => Some(BASELINE),
        Section::Peaks => Some(PEAKS),
        Section::Area => Some(AREA),
        Section::Overview
        | Section::Identification
        | Section::History
        | Section::Miscellaneous => None,
    }
}
