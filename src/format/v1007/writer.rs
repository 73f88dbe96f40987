use std::io::{self, Write};

use crate::codec::WriteFormatExt;
use crate::layout::{FormatVersion, Section};
use crate::model::{ChromatogramSource, IntegrationEntry, Method, Peak, Scan};
use crate::writer::WriterStats;

use crate::format::unsupported_section;

pub(super) fn write_section<W: Write, C: ChromatogramSource + ?Sized>(
    section: Section,
    out: &mut W,
    chromatogram: &C,
    stats: &mut WriterStats,
) -> io::Result<()> {
    match section {
        Section::SystemSettings => write_method(out, chromatogram.method()),
        Section::Scans => {
            out.write_list(chromatogram.scans(), |out, scan| write_scan(out, scan))?;
            stats.scans_written += chromatogram.number_of_scans();
            Ok(())
        }
        Section::Baseline => write_baseline(out, chromatogram),
        Section::Peaks => {
            out.write_list(chromatogram.peaks(), |out, peak| write_peak(out, peak))?;
            stats.peaks_written += chromatogram.peaks().len();
            Ok(())
        }
        Section::Area => {
            out.write_string(chromatogram.chromatogram_integrator_description())?;
            write_integration_entries(out, chromatogram.chromatogram_integration_entries())?;
            out.write_string(chromatogram.background_integrator_description())?;
            write_integration_entries(out, chromatogram.background_integration_entries())
        }
        other => Err(unsupported_section(FormatVersion::Csd1007, other)),
    }
}

fn write_method<W: Write>(out: &mut W, method: &Method) -> io::Result<()> {
    out.write_string(&method.instrument_name)?;
    out.write_string(&method.ion_source)?;
    out.write_double(method.sampling_rate)?;
    out.write_int(method.solvent_delay)?;
    out.write_double(method.source_heater)?;
    out.write_string(&method.stop_mode)?;
    out.write_int(method.stop_time)?;
    out.write_int(method.time_filter_peak_width)
}

fn write_scan<W: Write>(out: &mut W, scan: &Scan) -> io::Result<()> {
    out.write_int(scan.retention_time)?;
    out.write_float(scan.total_signal)?;
    out.write_int(scan.retention_time_column1)?;
    out.write_int(scan.retention_time_column2)?;
    out.write_float(scan.retention_index)?;
    out.write_boolean(scan.has_additional_retention_indices())?;
    if scan.has_additional_retention_indices() {
        out.write_count(scan.retention_indices.len())?;
        for (index_type, value) in &scan.retention_indices {
            out.write_string(&index_type.to_string())?;
            out.write_float(*value)?;
        }
    }
    out.write_int(scan.time_segment_id)?;
    out.write_int(scan.cycle_number)
}

/// Background abundance sampled on the scan grid
fn write_baseline<W: Write, C: ChromatogramSource + ?Sized>(
    out: &mut W,
    chromatogram: &C,
) -> io::Result<()> {
    out.write_list(chromatogram.scans(), |out, scan| {
        out.write_int(scan.retention_time)?;
        out.write_float(chromatogram.background_abundance(scan.retention_time))
    })
}

fn write_peak<W: Write>(out: &mut W, peak: &Peak) -> io::Result<()> {
    out.write_string(&peak.detector_description)?;
    out.write_string(&peak.quantifier_description)?;
    out.write_boolean(peak.active_for_analysis)?;
    out.write_string(&peak.integrator_description)?;
    out.write_string(&peak.model_description)?;
    out.write_string(&peak.peak_type.to_string())?;
    out.write_int(peak.suggested_number_of_components)?;
    out.write_float(peak.start_background_abundance)?;
    out.write_float(peak.stop_background_abundance)?;
    write_scan(out, &peak.maximum)?;

    out.write_count(peak.intensity_values.len())?;
    for (retention_time, intensity) in &peak.intensity_values {
        out.write_int(*retention_time)?;
        out.write_float(*intensity)?;
    }
    write_integration_entries(out, &peak.integration_entries)
}

/// Only the area is stored; ion traces lose their m/z in this lineage
fn write_integration_entries<W: Write>(out: &mut W, entries: &[IntegrationEntry]) -> io::Result<()> {
    out.write_list(entries, |out, entry| out.write_double(entry.area()))
}
