use std::io::{self, Write};

use crate::codec::WriteFormatExt;
use crate::format::unsupported_section;
use crate::layout::{FormatVersion, Section};
use crate::model::{ChromatogramSource, IdentificationTarget, IntegrationEntry, Peak, Scan};
use crate::writer::WriterStats;

pub(super) fn write_section<W: Write, C: ChromatogramSource + ?Sized>(
    section: Section,
    out: &mut W,
    chromatogram: &C,
    stats: &mut WriterStats,
) -> io::Result<()> {
    match section {
        Section::Overview => out.write_list(chromatogram.scans(), |out, scan| {
            out.write_int(scan.retention_time)?;
            out.write_float(scan.ion_signal())
        }),
        Section::Scans => {
            out.write_list(chromatogram.scans(), |out, scan| write_mass_spectrum(out, scan))?;
            stats.scans_written += chromatogram.number_of_scans();
            Ok(())
        }
        Section::Peaks => {
            out.write_list(chromatogram.peaks(), |out, peak| write_peak(out, peak))?;
            stats.peaks_written += chromatogram.peaks().len();
            stats.targets_written += chromatogram
                .peaks()
                .iter()
                .map(|peak| peak.targets.len())
                .sum::<usize>();
            Ok(())
        }
        Section::Area => {
            out.write_string(chromatogram.chromatogram_integrator_description())?;
            write_integration_entries(out, chromatogram.chromatogram_integration_entries())?;
            out.write_string(chromatogram.background_integrator_description())?;
            write_integration_entries(out, chromatogram.background_integration_entries())
        }
        Section::Identification => {
            out.write_list(chromatogram.targets(), |out, target| write_target(out, target))?;
            stats.targets_written += chromatogram.targets().len();
            Ok(())
        }
        Section::History => out.write_list(chromatogram.edit_history(), |out, entry| {
            out.write_date(&entry.date)?;
            out.write_string(&entry.description)
        }),
        Section::Miscellaneous => {
            out.write_date(&chromatogram.date())?;
            out.write_string(chromatogram.misc_info())?;
            out.write_string(chromatogram.operator())
        }
        other => Err(unsupported_section(FormatVersion::Msd0701, other)),
    }
}

fn write_mass_spectrum<W: Write>(out: &mut W, scan: &Scan) -> io::Result<()> {
    out.write_string(&scan.mass_spectrometer.to_string())?;
    out.write_string(&scan.mass_spectrum_type.to_string())?;
    out.write_int(scan.retention_time)?;
    out.write_float(scan.retention_index)?;
    out.write_list(&scan.ions, |out, ion| {
        out.write_double(ion.mz)?;
        out.write_float(ion.abundance)
    })
}

fn write_peak<W: Write>(out: &mut W, peak: &Peak) -> io::Result<()> {
    out.write_string(&peak.detector_description)?;
    out.write_string(&peak.integrator_description)?;
    out.write_string(&peak.model_description)?;
    out.write_string(&peak.peak_type.to_string())?;
    out.write_float(peak.start_background_abundance)?;
    out.write_float(peak.stop_background_abundance)?;
    write_mass_spectrum(out, &peak.maximum)?;

    out.write_count(peak.intensity_values.len())?;
    for (retention_time, intensity) in &peak.intensity_values {
        out.write_int(*retention_time)?;
        out.write_float(*intensity)?;
    }
    write_integration_entries(out, &peak.integration_entries)?;
    out.write_list(&peak.targets, |out, target| write_target(out, target))
}

fn write_integration_entries<W: Write>(out: &mut W, entries: &[IntegrationEntry]) -> io::Result<()> {
    out.write_list(entries, |out, entry| {
        out.write_double(entry.mz())?;
        out.write_double(entry.area())
    })
}

fn write_target<W: Write>(out: &mut W, target: &IdentificationTarget) -> io::Result<()> {
    out.write_string(&target.identifier)?;
    out.write_string(&target.library.cas_number)?;
    out.write_string(&target.library.comments)?;
    out.write_string(&target.library.miscellaneous)?;
    out.write_string(&target.library.name)?;
    out.write_float(target.comparison.match_factor)?;
    out.write_float(target.comparison.reverse_match_factor)?;
    out.write_float(target.comparison.probability)
}
