use std::io::Read;

use crate::codec::ReadFormatExt;
use crate::format::{unsupported_section, RecordPolicy};
use crate::layout::{FormatVersion, Section};
use crate::model::{
    ChromatogramSink, ComparisonResult, EditInformation, IdentificationTarget, IntegrationEntry,
    Ion, LibraryInformation, MassSpectrometer, MassSpectrumType, ModelError, Peak, PeakType,
    Scan, ScanBuilder,
};
use crate::reader::ReaderError;

/// A validated record together with the values dropped from it
type Salvaged<T> = (T, Vec<ModelError>);

struct RawMassSpectrum {
    mass_spectrometer: String,
    mass_spectrum_type: String,
    retention_time: i32,
    retention_index: f32,
    ions: Vec<(f64, f32)>,
}

impl RawMassSpectrum {
    fn decode<R: Read>(input: &mut R) -> Result<Self, ReaderError> {
        Ok(Self {
            mass_spectrometer: input.read_string()?,
            mass_spectrum_type: input.read_string()?,
            retention_time: input.read_int()?,
            retention_index: input.read_float()?,
            ions: input.read_list(|input| Ok((input.read_double()?, input.read_float()?)))?,
        })
    }

    /// The total signal is recomputed from the ions that pass validation
    fn into_scan(self) -> Result<Salvaged<Scan>, ModelError> {
        let spectrometer = self.mass_spectrometer.parse::<MassSpectrometer>()?;
        let spectrum_type = self.mass_spectrum_type.parse::<MassSpectrumType>()?;
        let mut builder = ScanBuilder::new(self.retention_time)
            .retention_index(self.retention_index)
            .spectrum(spectrometer, spectrum_type);
        let mut dropped = Vec::new();
        for (mz, abundance) in self.ions {
            match Ion::new(mz, abundance) {
                Ok(ion) => builder = builder.add_ion(ion.mz, ion.abundance),
                Err(reason) => dropped.push(reason),
            }
        }
        Ok((builder.build(), dropped))
    }
}

struct RawTarget {
    identifier: String,
    cas_number: String,
    comments: String,
    miscellaneous: String,
    name: String,
    match_factor: f32,
    reverse_match_factor: f32,
    probability: f32,
}

impl RawTarget {
    fn decode<R: Read>(input: &mut R) -> Result<Self, ReaderError> {
        Ok(Self {
            identifier: input.read_string()?,
            cas_number: input.read_string()?,
            comments: input.read_string()?,
            miscellaneous: input.read_string()?,
            name: input.read_string()?,
            match_factor: input.read_float()?,
            reverse_match_factor: input.read_float()?,
            probability: input.read_float()?,
        })
    }

    fn into_target(self) -> Result<IdentificationTarget, ModelError> {
        let library = LibraryInformation {
            name: self.name,
            cas_number: self.cas_number,
            comments: self.comments,
            miscellaneous: self.miscellaneous,
        };
        let comparison =
            ComparisonResult::new(self.match_factor, self.reverse_match_factor, self.probability);
        IdentificationTarget::new(self.identifier, library, comparison)
    }
}

struct RawPeak {
    detector_description: String,
    integrator_description: String,
    model_description: String,
    peak_type: String,
    start_background_abundance: f32,
    stop_background_abundance: f32,
    mass_spectrum: RawMassSpectrum,
    intensity_values: Vec<(i32, f32)>,
    integration_entries: Vec<(f64, f64)>,
    targets: Vec<RawTarget>,
}

impl RawPeak {
    fn decode<R: Read>(input: &mut R) -> Result<Self, ReaderError> {
        Ok(Self {
            detector_description: input.read_string()?,
            integrator_description: input.read_string()?,
            model_description: input.read_string()?,
            peak_type: input.read_string()?,
            start_background_abundance: input.read_float()?,
            stop_background_abundance: input.read_float()?,
            mass_spectrum: RawMassSpectrum::decode(input)?,
            intensity_values: input.read_list(|input| Ok((input.read_int()?, input.read_float()?)))?,
            integration_entries: input
                .read_list(|input| Ok((input.read_double()?, input.read_double()?)))?,
            targets: input.read_list(RawTarget::decode)?,
        })
    }

    /// Invalid ions and targets are dropped, anything else rejects the peak
    fn into_peak(self) -> Result<Salvaged<Peak>, ModelError> {
        let peak_type = self.peak_type.parse::<PeakType>()?;
        let (maximum, mut dropped) = self.mass_spectrum.into_scan()?;
        let mut peak = Peak::new(
            maximum,
            self.intensity_values.into_iter().collect(),
            self.start_background_abundance,
            self.stop_background_abundance,
        )?;
        peak.peak_type = peak_type;
        peak.detector_description = self.detector_description;
        peak.integrator_description = self.integrator_description;
        peak.model_description = self.model_description;
        peak.integration_entries = ion_entries(self.integration_entries);
        for raw in self.targets {
            match raw.into_target() {
                Ok(target) => peak.targets.push(target),
                Err(reason) => dropped.push(reason),
            }
        }
        Ok((peak, dropped))
    }
}

fn ion_entries(entries: Vec<(f64, f64)>) -> Vec<IntegrationEntry> {
    entries
        .into_iter()
        .map(|(mz, area)| IntegrationEntry::from_ion(mz, area))
        .collect()
}

pub(super) fn read_section<R: Read, S: ChromatogramSink>(
    section: Section,
    input: &mut R,
    sink: &mut S,
    records: &mut RecordPolicy<'_>,
) -> Result<(), ReaderError> {
    match section {
        Section::Overview => {
            let overview = read_overview(input)?;
            log::debug!("Skipping {} overview points, scans are authoritative", overview.len());
            Ok(())
        }
        Section::Scans => {
            let count = input.read_count()?;
            for index in 0..count {
                let raw = RawMassSpectrum::decode(input)?;
                let scan = raw.into_scan().and_then(|(scan, dropped)| {
                    sink.add_scan(scan)?;
                    Ok(dropped)
                });
                if let Some(dropped) = records.record(Section::Scans, index, scan)? {
                    records.dropped(Section::Scans, index, dropped)?;
                }
            }
            log::debug!("Read {count} mass spectra");
            Ok(())
        }
        Section::Peaks => decode_peaks(input, records, |peak| sink.add_peak(peak)),
        Section::Area => {
            let description = input.read_string()?;
            let entries = input.read_list(|input| Ok((input.read_double()?, input.read_double()?)))?;
            sink.set_chromatogram_integration(description, ion_entries(entries));

            let description = input.read_string()?;
            let entries = input.read_list(|input| Ok((input.read_double()?, input.read_double()?)))?;
            sink.set_background_integration(description, ion_entries(entries));
            Ok(())
        }
        Section::Identification => {
            let count = input.read_count()?;
            for index in 0..count {
                let target = RawTarget::decode(input)?.into_target();
                if let Some(target) = records.record(Section::Identification, index, target)? {
                    sink.add_target(target);
                }
            }
            Ok(())
        }
        Section::History => {
            let count = input.read_count()?;
            for index in 0..count {
                let date = input.read_date()?;
                let description = input.read_string()?;
                let entry = date.map(|date| EditInformation::new(date, description));
                if let Some(entry) = records.record(Section::History, index, entry)? {
                    sink.add_history_entry(entry);
                }
            }
            Ok(())
        }
        Section::Miscellaneous => {
            let date = input.read_date()?;
            let misc_info = input.read_string()?;
            let operator = input.read_string()?;
            if let Some(date) = records.record(Section::Miscellaneous, 0, date)? {
                sink.set_metadata(date, misc_info, operator);
            }
            Ok(())
        }
        other => Err(unsupported_section(FormatVersion::Msd0701, other).into()),
    }
}

/// Decode every peak record, handing valid peaks to `accept`
pub(super) fn decode_peaks<R, F>(
    input: &mut R,
    records: &mut RecordPolicy<'_>,
    mut accept: F,
) -> Result<(), ReaderError>
where
    R: Read,
    F: FnMut(Peak) -> Result<(), ModelError>,
{
    let count = input.read_count()?;
    for index in 0..count {
        let raw = RawPeak::decode(input)?;
        let peak = raw.into_peak().and_then(|(peak, dropped)| {
            accept(peak)?;
            Ok(dropped)
        });
        if let Some(dropped) = records.record(Section::Peaks, index, peak)? {
            records.dropped(Section::Peaks, index, dropped)?;
        }
    }
    log::debug!("Read {count} peaks");
    Ok(())
}

/// (retention time, total signal) pairs of the TIC entry
pub(super) fn read_overview<R: Read>(input: &mut R) -> Result<Vec<(i32, f32)>, ReaderError> {
    input.read_list(|input| Ok((input.read_int()?, input.read_float()?)))
}
