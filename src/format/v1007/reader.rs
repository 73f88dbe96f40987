use std::collections::BTreeMap;
use std::io::Read;

use crate::codec::{ReadFormatExt, MAX_PREALLOCATION};
use crate::format::{unsupported_section, RecordPolicy};
use crate::layout::{FormatVersion, Section};
use crate::model::{
    ChromatogramSink, IntegrationEntry, Method, ModelError, Peak, PeakType, RetentionIndexType,
    Scan,
};
use crate::reader::ReaderError;

/// Scan fields as stored, before validation
struct RawScan {
    retention_time: i32,
    total_signal: f32,
    retention_time_column1: i32,
    retention_time_column2: i32,
    retention_index: f32,
    retention_indices: Vec<(String, f32)>,
    time_segment_id: i32,
    cycle_number: i32,
}

impl RawScan {
    fn decode<R: Read>(input: &mut R) -> Result<Self, ReaderError> {
        let retention_time = input.read_int()?;
        let total_signal = input.read_float()?;
        let retention_time_column1 = input.read_int()?;
        let retention_time_column2 = input.read_int()?;
        let retention_index = input.read_float()?;
        let retention_indices = if input.read_boolean()? {
            input.read_list(|input| Ok((input.read_string()?, input.read_float()?)))?
        } else {
            Vec::new()
        };
        Ok(Self {
            retention_time,
            total_signal,
            retention_time_column1,
            retention_time_column2,
            retention_index,
            retention_indices,
            time_segment_id: input.read_int()?,
            cycle_number: input.read_int()?,
        })
    }

    fn into_scan(self) -> Result<Scan, ModelError> {
        let mut retention_indices = BTreeMap::new();
        for (index_type, value) in self.retention_indices {
            retention_indices.insert(index_type.parse::<RetentionIndexType>()?, value);
        }
        Ok(Scan {
            retention_time: self.retention_time,
            total_signal: self.total_signal,
            retention_time_column1: self.retention_time_column1,
            retention_time_column2: self.retention_time_column2,
            retention_index: self.retention_index,
            retention_indices,
            time_segment_id: self.time_segment_id,
            cycle_number: self.cycle_number,
            ..Default::default()
        })
    }
}

/// Peak fields as stored, before validation
struct RawPeak {
    detector_description: String,
    quantifier_description: String,
    active_for_analysis: bool,
    integrator_description: String,
    model_description: String,
    peak_type: String,
    suggested_number_of_components: i32,
    start_background_abundance: f32,
    stop_background_abundance: f32,
    maximum: RawScan,
    intensity_values: Vec<(i32, f32)>,
    areas: Vec<f64>,
}

impl RawPeak {
    fn decode<R: Read>(input: &mut R) -> Result<Self, ReaderError> {
        Ok(Self {
            detector_description: input.read_string()?,
            quantifier_description: input.read_string()?,
            active_for_analysis: input.read_boolean()?,
            integrator_description: input.read_string()?,
            model_description: input.read_string()?,
            peak_type: input.read_string()?,
            suggested_number_of_components: input.read_int()?,
            start_background_abundance: input.read_float()?,
            stop_background_abundance: input.read_float()?,
            maximum: RawScan::decode(input)?,
            intensity_values: input.read_list(|input| Ok((input.read_int()?, input.read_float()?)))?,
            areas: input.read_list(|input| input.read_double())?,
        })
    }

    fn into_peak(self) -> Result<Peak, ModelError> {
        let peak_type = self.peak_type.parse::<PeakType>()?;
        let mut peak = Peak::new(
            self.maximum.into_scan()?,
            self.intensity_values.into_iter().collect(),
            self.start_background_abundance,
            self.stop_background_abundance,
        )?;
        peak.peak_type = peak_type;
        peak.detector_description = self.detector_description;
        peak.quantifier_description = self.quantifier_description;
        peak.active_for_analysis = self.active_for_analysis;
        peak.integrator_description = self.integrator_description;
        peak.model_description = self.model_description;
        peak.suggested_number_of_components = self.suggested_number_of_components;
        peak.integration_entries = signal_entries(self.areas);
        Ok(peak)
    }
}

fn signal_entries(areas: Vec<f64>) -> Vec<IntegrationEntry> {
    areas
        .into_iter()
        .map(|area| IntegrationEntry::Signal { area })
        .collect()
}

pub(super) fn read_section<R: Read, S: ChromatogramSink>(
    section: Section,
    input: &mut R,
    sink: &mut S,
    records: &mut RecordPolicy<'_>,
) -> Result<(), ReaderError> {
    match section {
        Section::SystemSettings => {
            sink.set_method(read_method(input)?);
            Ok(())
        }
        Section::Scans => {
            let count = input.read_count()?;
            for index in 0..count {
                let raw = RawScan::decode(input)?;
                let scan = raw.into_scan().and_then(|scan| sink.add_scan(scan));
                records.record(Section::Scans, index, scan)?;
            }
            log::debug!("Read {count} scans");
            Ok(())
        }
        Section::Baseline => {
            let count = input.read_count()?;
            for _ in 0..count {
                let retention_time = input.read_int()?;
                let abundance = input.read_float()?;
                sink.set_baseline_point(retention_time, abundance);
            }
            Ok(())
        }
        Section::Peaks => decode_peaks(input, records, |peak| sink.add_peak(peak)),
        Section::Area => {
            let description = input.read_string()?;
            let areas = input.read_list(|input| input.read_double())?;
            sink.set_chromatogram_integration(description, signal_entries(areas));

            let description = input.read_string()?;
            let areas = input.read_list(|input| input.read_double())?;
            sink.set_background_integration(description, signal_entries(areas));
            Ok(())
        }
        other => Err(unsupported_section(FormatVersion::Csd1007, other).into()),
    }
}

fn read_method<R: Read>(input: &mut R) -> Result<Method, ReaderError> {
    Ok(Method {
        instrument_name: input.read_string()?,
        ion_source: input.read_string()?,
        sampling_rate: input.read_double()?,
        solvent_delay: input.read_int()?,
        source_heater: input.read_double()?,
        stop_mode: input.read_string()?,
        stop_time: input.read_int()?,
        time_filter_peak_width: input.read_int()?,
    })
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
        let peak = raw.into_peak().and_then(&mut accept);
        records.record(Section::Peaks, index, peak)?;
    }
    log::debug!("Read {count} peaks");
    Ok(())
}

/// (retention time, total signal) of every scan, derived from the scans entry
pub(super) fn read_overview<R: Read>(input: &mut R) -> Result<Vec<(i32, f32)>, ReaderError> {
    let count = input.read_count()?;
    let mut overview = Vec::with_capacity(count.min(MAX_PREALLOCATION));
    for _ in 0..count {
        let raw = RawScan::decode(input)?;
        overview.push((raw.retention_time, raw.total_signal));
    }
    Ok(overview)
}
