use super::*;
use std::collections::BTreeMap;
use std::io::Cursor;

use chrono::{TimeZone, Utc};

use crate::codec::WriteFormatExt;
use crate::model::{
    Chromatogram, ComparisonResult, EditInformation, IdentificationTarget, IntegrationEntry,
    LibraryInformation, MassSpectrometer, MassSpectrumType, ModelError, PeakType, Scan, ScanBuilder,
};
use crate::reader::{ReadReport, ReaderConfig};
use crate::schema::decode_fields;

fn target(name: &str, match_factor: f32) -> IdentificationTarget {
    IdentificationTarget {
        identifier: "NIST".to_string(),
        library: LibraryInformation {
            name: name.to_string(),
            cas_number: "108-93-0".to_string(),
            ..Default::default()
        },
        comparison: ComparisonResult::new(match_factor, 80.0, 55.5),
    }
}

fn sample_chromatogram() -> Chromatogram {
    let mut chromatogram = Chromatogram::new();
    for (retention_time, base) in [(0, 100.0), (1000, 400.0), (2000, 200.0)] {
        chromatogram
            .add_scan(
                ScanBuilder::new(retention_time)
                    .spectrum(MassSpectrometer::Ms1, MassSpectrumType::Centroid)
                    .add_ion(43.0, base)
                    .add_ion(57.0, base / 2.0)
                    .build(),
            )
            .unwrap();
    }

    let shape: BTreeMap<i32, f32> = [(0, 10.0), (1000, 600.0), (2000, 30.0)].into_iter().collect();
    let maximum = chromatogram.scan(2).unwrap().clone();
    let mut peak = Peak::new(maximum, shape, 5.0, 6.0).unwrap();
    peak.peak_type = PeakType::Mm;
    peak.integrator_description = "Trapezoid".to_string();
    peak.integration_entries = vec![
        IntegrationEntry::Signal { area: 1200.0 },
        IntegrationEntry::Ion { mz: 43.0, area: 800.0 },
    ];
    peak.targets.push(target("Cyclohexanöl", 91.0));
    chromatogram.peaks.push(peak);

    chromatogram.chromatogram_integrator_description = "SumAreas".to_string();
    chromatogram.chromatogram_integration_entries = vec![IntegrationEntry::Signal { area: 4000.0 }];
    chromatogram.background_integration_entries = vec![IntegrationEntry::Ion { mz: 18.0, area: 3.0 }];
    chromatogram.targets.push(target("Cyclohexanöl", 88.0));
    chromatogram.date = Utc.with_ymd_and_hms(2019, 5, 14, 8, 0, 0).unwrap();
    chromatogram.operator = "Jürgen".to_string();
    chromatogram.misc_info = "Säule: DB-5".to_string();
    chromatogram.edit_history.push(EditInformation::new(
        Utc.with_ymd_and_hms(2019, 5, 15, 9, 0, 0).unwrap(),
        "Baseline corrected",
    ));
    chromatogram
}

fn written(section: Section, chromatogram: &Chromatogram) -> Vec<u8> {
    let mut stats = WriterStats::new(FormatVersion::Msd0701);
    let mut bytes = Vec::new();
    Msd0701::write_section(section, &mut bytes, chromatogram, &mut stats).unwrap();
    bytes
}

fn read_back(
    section: Section,
    bytes: Vec<u8>,
    config: ReaderConfig,
) -> Result<(Chromatogram, ReadReport), ReaderError> {
    let mut chromatogram = Chromatogram::new();
    let mut report = ReadReport::default();
    let mut records = RecordPolicy::new(&config, &mut report);
    Msd0701::read_section(section, &mut Cursor::new(bytes), &mut chromatogram, &mut records)?;
    Ok((chromatogram, report))
}

#[test]
fn test_every_section_follows_schema() -> Result<(), Box<dyn std::error::Error>> {
    let chromatogram = sample_chromatogram();
    for section in FormatVersion::Msd0701.layout().ordered_sections() {
        if section == Section::Version {
            continue;
        }
        let fields = schema::section_schema(section).unwrap();
        let mut cursor = Cursor::new(written(section, &chromatogram));
        decode_fields(&mut cursor, fields)?;
        assert_eq!(
            cursor.position() as usize,
            cursor.get_ref().len(),
            "{section} has trailing bytes"
        );
    }
    Ok(())
}

#[test]
fn test_peak_fields_follow_schema() -> Result<(), Box<dyn std::error::Error>> {
    let bytes = written(Section::Peaks, &sample_chromatogram());
    let record = decode_fields(&mut Cursor::new(bytes), schema::PEAKS)?;
    let peak = &record.list("peaks").unwrap()[0];

    assert_eq!(peak.string("peak_type"), Some("MM"));
    let spectrum = peak.group("mass_spectrum").unwrap();
    assert_eq!(spectrum.string("mass_spectrometer"), Some("MS1"));
    assert_eq!(spectrum.string("mass_spectrum_type"), Some("CENTROID"));
    assert_eq!(spectrum.list("ions").map(<[_]>::len), Some(2));

    let entries = peak.list("integration_entries").unwrap();
    assert_eq!(entries[0].double("mz"), Some(0.0));
    assert_eq!(entries[0].double("area"), Some(1200.0));
    assert_eq!(entries[1].double("mz"), Some(43.0));

    let targets = peak.list("targets").unwrap();
    assert_eq!(targets[0].string("name"), Some("Cyclohexanöl"));
    assert_eq!(targets[0].string("cas_number"), Some("108-93-0"));
    assert_eq!(targets[0].float("match_factor"), Some(91.0));
    Ok(())
}

#[test]
fn test_scans_recompute_total_signal() -> Result<(), Box<dyn std::error::Error>> {
    let chromatogram = sample_chromatogram();
    let (read, report) = read_back(
        Section::Scans,
        written(Section::Scans, &chromatogram),
        ReaderConfig::default(),
    )?;
    assert!(report.is_clean());
    assert_eq!(read.number_of_scans(), 3);
    assert_eq!(read.scan(2).unwrap().total_signal, 600.0);
    assert_eq!(read.scans, chromatogram.scans);
    Ok(())
}

#[test]
fn test_non_ascii_metadata_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
    let chromatogram = sample_chromatogram();
    let (read, _) = read_back(
        Section::Miscellaneous,
        written(Section::Miscellaneous, &chromatogram),
        ReaderConfig::default(),
    )?;
    assert_eq!(read.operator, "Jürgen");
    assert_eq!(read.misc_info, "Säule: DB-5");
    assert_eq!(read.date, chromatogram.date);

    let (read, _) = read_back(
        Section::Identification,
        written(Section::Identification, &chromatogram),
        ReaderConfig::default(),
    )?;
    assert_eq!(read.targets, chromatogram.targets);
    Ok(())
}

#[test]
fn test_tic_entries_map_back_to_signal() -> Result<(), Box<dyn std::error::Error>> {
    let chromatogram = sample_chromatogram();
    let (read, _) = read_back(
        Section::Area,
        written(Section::Area, &chromatogram),
        ReaderConfig::default(),
    )?;
    assert_eq!(
        read.chromatogram_integration_entries,
        vec![IntegrationEntry::Signal { area: 4000.0 }]
    );
    assert_eq!(
        read.background_integration_entries,
        vec![IntegrationEntry::Ion { mz: 18.0, area: 3.0 }]
    );
    assert_eq!(read.chromatogram_integrator_description, "SumAreas");
    Ok(())
}

#[test]
fn test_invalid_ion_is_dropped_from_spectrum() -> Result<(), Box<dyn std::error::Error>> {
    let mut bytes = Vec::new();
    bytes.write_int(1)?;
    bytes.write_string("MS1")?;
    bytes.write_string("PROFILE")?;
    bytes.write_int(1500)?;
    bytes.write_float(0.0)?;
    bytes.write_int(3)?;
    for (mz, abundance) in [(43.0, 10.0), (70000.0, 5.0), (57.0, 20.0)] {
        bytes.write_double(mz)?;
        bytes.write_float(abundance)?;
    }

    let (read, report) = read_back(Section::Scans, bytes, ReaderConfig::default())?;
    let scan = read.scan(1).unwrap();
    assert_eq!(scan.ions.len(), 2);
    assert_eq!(scan.total_signal, 30.0);
    assert_eq!(scan.mass_spectrum_type, MassSpectrumType::Profile);
    assert!(report.skipped.is_empty());
    assert_eq!(report.dropped_values.len(), 1);
    assert_eq!(report.dropped_values[0].reason, ModelError::IonOutOfRange(70000.0));
    Ok(())
}

#[test]
fn test_malformed_peak_is_skipped_and_stream_stays_in_sync() -> Result<(), Box<dyn std::error::Error>> {
    let mut chromatogram = sample_chromatogram();
    let template = chromatogram.peaks[0].clone();
    chromatogram.peaks = vec![template.clone(), template.clone(), template];
    chromatogram.peaks[0].peak_type = PeakType::Bb;
    chromatogram.peaks[2].peak_type = PeakType::Vv;

    // "MM" only occurs as the peak type of the middle peak
    let mut bytes = written(Section::Peaks, &chromatogram);
    let needle = [0, 0, 0, 2, 0, b'M', 0, b'M'];
    let position = bytes
        .windows(needle.len())
        .position(|window| window == needle)
        .unwrap();
    bytes[position + 5] = b'Z';
    bytes[position + 7] = b'Z';

    let (read, report) = read_back(Section::Peaks, bytes, ReaderConfig::default())?;
    assert_eq!(read.peaks.len(), 2);
    assert_eq!(read.peaks[0].peak_type, PeakType::Bb);
    assert_eq!(read.peaks[1].peak_type, PeakType::Vv);
    assert_eq!(read.peaks[1].targets.len(), 1);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].index, 1);
    assert_eq!(report.skipped[0].reason, ModelError::UnknownPeakType("ZZ".to_string()));
    Ok(())
}

#[test]
fn test_out_of_range_target_is_skipped() -> Result<(), Box<dyn std::error::Error>> {
    let mut chromatogram = sample_chromatogram();
    chromatogram.targets = vec![target("Benzene", 250.0), target("Toluene", 75.0)];

    let (read, report) = read_back(
        Section::Identification,
        written(Section::Identification, &chromatogram),
        ReaderConfig::default(),
    )?;
    assert_eq!(read.targets.len(), 1);
    assert_eq!(read.targets[0].library.name, "Toluene");
    assert_eq!(report.skipped_in(Section::Identification), 1);
    Ok(())
}

#[test]
fn test_out_of_range_peak_target_is_dropped() -> Result<(), Box<dyn std::error::Error>> {
    let mut chromatogram = sample_chromatogram();
    chromatogram.peaks[0].targets.push(target("Benzene", -1.0));

    let (read, report) = read_back(
        Section::Peaks,
        written(Section::Peaks, &chromatogram),
        ReaderConfig::default(),
    )?;
    assert_eq!(read.peaks.len(), 1);
    assert_eq!(read.peaks[0].targets.len(), 1);
    assert_eq!(report.dropped_values.len(), 1);

    let err = read_back(
        Section::Peaks,
        written(Section::Peaks, &chromatogram),
        ReaderConfig::strict(),
    )
    .unwrap_err();
    assert!(matches!(err, ReaderError::MalformedRecord(ModelError::ScoreOutOfRange { .. })));
    Ok(())
}

#[test]
fn test_invalid_history_date_is_skipped() -> Result<(), Box<dyn std::error::Error>> {
    let mut bytes = Vec::new();
    bytes.write_int(2)?;
    bytes.write_long(i64::MAX)?;
    bytes.write_string("broken")?;
    bytes.write_long(0)?;
    bytes.write_string("created")?;

    let (read, report) = read_back(Section::History, bytes, ReaderConfig::default())?;
    assert_eq!(read.edit_history.len(), 1);
    assert_eq!(read.edit_history[0].description, "created");
    assert_eq!(report.skipped[0].reason, ModelError::InvalidTimestamp(i64::MAX));
    Ok(())
}

#[test]
fn test_overview_reads_tic_entry() -> Result<(), Box<dyn std::error::Error>> {
    let bytes = written(Section::Overview, &sample_chromatogram());
    let overview = Msd0701::read_overview(&mut Cursor::new(bytes))?;
    assert_eq!(overview, vec![(0, 150.0), (1000, 600.0), (2000, 300.0)]);
    Ok(())
}

#[test]
fn test_overview_sums_ions_regardless_of_total_signal() -> Result<(), Box<dyn std::error::Error>> {
    let mut chromatogram = Chromatogram::new();
    chromatogram.add_scan(Scan::new(0, 67864.0))?;
    chromatogram.add_scan(ScanBuilder::new(1000).add_ion(43.0, 40.0).total_signal(5.0).build())?;

    let bytes = written(Section::Overview, &chromatogram);
    let overview = Msd0701::read_overview(&mut Cursor::new(bytes))?;
    assert_eq!(overview, vec![(0, 0.0), (1000, 40.0)]);
    Ok(())
}

#[test]
fn test_csd_only_sections_are_rejected() {
    let chromatogram = sample_chromatogram();
    let mut stats = WriterStats::new(FormatVersion::Msd0701);
    let mut bytes = Vec::new();
    assert!(Msd0701::write_section(Section::Baseline, &mut bytes, &chromatogram, &mut stats).is_err());
}
