//! Write/read round trips through real `.ocb` files
//!
//! These tests verify:
//! 1. Every stored field survives a round trip in both format versions
//! 2. Scan numbering is 1-based and contiguous
//! 3. Empty collections come back empty
//! 4. Non-ASCII strings keep their UTF-16 length prefix intact

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{TimeZone, Utc};
use ocb::layout::FormatVersion;
use ocb::model::{
    Chromatogram, ComparisonResult, EditInformation, IdentificationTarget, IntegrationEntry,
    LibraryInformation, MassSpectrometer, MassSpectrumType, Method, Peak, PeakType,
    RetentionIndexType, Scan, ScanBuilder,
};
use ocb::reader::{read_chromatogram, ChromatogramReader};
use ocb::writer::{write_chromatogram, ChromatogramWriter, WriterConfig};
use tempfile::tempdir;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn shape(points: &[(i32, f32)]) -> BTreeMap<i32, f32> {
    points.iter().copied().collect()
}

fn target(name: &str, match_factor: f32) -> IdentificationTarget {
    let library = LibraryInformation {
        name: name.to_string(),
        cas_number: "110-82-7".to_string(),
        comments: "NIST".to_string(),
        miscellaneous: String::new(),
    };
    IdentificationTarget::new(
        "PBM",
        library,
        ComparisonResult::new(match_factor, match_factor - 2.0, 55.0),
    )
    .unwrap()
}

/// CSD chromatogram using only fields the 1.0.0.7 layout stores
fn fid_chromatogram() -> Chromatogram {
    let mut chromatogram = Chromatogram::new();
    chromatogram.method = Method {
        instrument_name: "GC-FID 7890".to_string(),
        ion_source: "FID".to_string(),
        sampling_rate: 20.0,
        solvent_delay: 180_000,
        source_heater: 250.0,
        stop_mode: "Time".to_string(),
        stop_time: 1_800_000,
        time_filter_peak_width: 5,
    };

    let scans = [
        ScanBuilder::new(0).total_signal(67864.0).column_retention_times(0, 0).build(),
        ScanBuilder::new(1000)
            .total_signal(153220.0)
            .retention_index(812.5)
            .typed_retention_index(RetentionIndexType::Apolar, 812.5)
            .typed_retention_index(RetentionIndexType::Polar, 1020.0)
            .segment(1, 2)
            .build(),
        ScanBuilder::new(2000).total_signal(94184.0).build(),
    ];
    for scan in scans {
        chromatogram.add_scan(scan).unwrap();
    }
    for (retention_time, abundance) in [(0, 5.0), (1000, 11.0), (2000, 13.0)] {
        chromatogram.baseline.set_point(retention_time, abundance);
    }

    let mut peak = Peak::new(
        chromatogram.scans[1].clone(),
        shape(&[(0, 1.0), (1000, 100.0), (2000, 3.0)]),
        10.0,
        12.0,
    )
    .unwrap();
    peak.peak_type = PeakType::Bv;
    peak.detector_description = "FirstDerivative".to_string();
    peak.quantifier_description = "ISTD".to_string();
    peak.integrator_description = "Trapezoid".to_string();
    peak.model_description = "Gaussian".to_string();
    peak.active_for_analysis = false;
    peak.suggested_number_of_components = 2;
    peak.integration_entries = vec![
        IntegrationEntry::Signal { area: 1234.5 },
        IntegrationEntry::Signal { area: 16.25 },
    ];
    chromatogram.peaks.push(peak);

    chromatogram.chromatogram_integrator_description = "Sum".to_string();
    chromatogram.chromatogram_integration_entries = vec![IntegrationEntry::Signal { area: 315268.0 }];
    chromatogram.background_integrator_description = "Baseline".to_string();
    chromatogram.background_integration_entries = vec![IntegrationEntry::Signal { area: 21000.0 }];
    chromatogram
}

/// MSD chromatogram using only fields the 0.7.0.1 layout stores
fn msd_chromatogram() -> Chromatogram {
    let mut chromatogram = Chromatogram::new();
    chromatogram.operator = "Jürgen".to_string();
    chromatogram.misc_info = "Säule: DB-5".to_string();
    chromatogram.date = Utc.timestamp_millis_opt(1_577_880_000_123).unwrap();

    let scans = [
        ScanBuilder::new(0).add_ion(43.0, 1500.0).add_ion(57.1, 320.5).build(),
        ScanBuilder::new(500)
            .spectrum(MassSpectrometer::Ms2, MassSpectrumType::Profile)
            .retention_index(700.0)
            .add_ion(55.0, 900.0)
            .add_ion(83.0, 4100.0)
            .add_ion(98.05, 2210.0)
            .build(),
        ScanBuilder::new(1000).add_ion(43.0, 60.0).build(),
    ];
    for scan in scans {
        chromatogram.add_scan(scan).unwrap();
    }

    let mut peak = Peak::new(
        chromatogram.scans[1].clone(),
        shape(&[(0, 2.0), (500, 80.0), (1000, 4.0)]),
        1.5,
        2.5,
    )
    .unwrap();
    peak.peak_type = PeakType::Vb;
    peak.detector_description = "FirstDerivative".to_string();
    peak.integrator_description = "Trapezoid".to_string();
    peak.model_description = "Gaussian".to_string();
    peak.integration_entries = vec![
        IntegrationEntry::Signal { area: 7200.0 },
        IntegrationEntry::Ion { mz: 83.0, area: 4050.0 },
    ];
    peak.targets = vec![target("Cyclohexanol", 91.0)];
    chromatogram.peaks.push(peak);

    chromatogram.chromatogram_integrator_description = "Sum".to_string();
    chromatogram.chromatogram_integration_entries = vec![IntegrationEntry::Signal { area: 9140.5 }];
    chromatogram.background_integrator_description = "Baseline".to_string();
    chromatogram.targets = vec![target("Cyclohexanone", 88.0), target("Cyclohexene", 40.0)];
    chromatogram.edit_history = vec![
        EditInformation::new(Utc.timestamp_millis_opt(1_577_880_100_000).unwrap(), "Peak detection"),
        EditInformation::new(Utc.timestamp_millis_opt(1_577_880_200_000).unwrap(), "Identification"),
    ];
    chromatogram
}

fn expected_after_read(mut chromatogram: Chromatogram, path: &Path) -> Chromatogram {
    chromatogram.set_file(path);
    chromatogram
}

#[test]
fn test_fid_roundtrip() {
    init_logging();
    let dir = tempdir().unwrap();
    let path = dir.path().join("fid.ocb");
    let chromatogram = fid_chromatogram();

    let stats = write_chromatogram(&path, &chromatogram, FormatVersion::Csd1007).unwrap();
    assert_eq!(stats.scans_written, 3);
    assert_eq!(stats.peaks_written, 1);

    let (read, report) = ChromatogramReader::new().read_with_report(&path).unwrap();
    assert!(report.is_clean());
    assert_eq!(read, expected_after_read(chromatogram, &path));
}

#[test]
fn test_msd_roundtrip() {
    init_logging();
    let dir = tempdir().unwrap();
    let path = dir.path().join("msd.ocb");
    let chromatogram = msd_chromatogram();

    let stats = write_chromatogram(&path, &chromatogram, FormatVersion::Msd0701).unwrap();
    assert_eq!(stats.targets_written, 3);

    let (read, report) = ChromatogramReader::new().read_with_report(&path).unwrap();
    assert!(report.is_clean());
    assert_eq!(read.scans, chromatogram.scans);
    assert_eq!(read.peaks, chromatogram.peaks);
    assert_eq!(read.targets, chromatogram.targets);
    assert_eq!(read.edit_history, chromatogram.edit_history);
    assert_eq!(read.date, chromatogram.date);
    assert_eq!(read.operator, "Jürgen");
    assert_eq!(read.misc_info, "Säule: DB-5");
    assert_eq!(read, expected_after_read(chromatogram, &path));
}

#[test]
fn test_roundtrip_with_every_writer_config() {
    let dir = tempdir().unwrap();
    let chromatogram = msd_chromatogram();

    for (index, config) in [
        WriterConfig::fast_write(),
        WriterConfig::default(),
        WriterConfig::max_compression(),
    ]
    .into_iter()
    .enumerate()
    {
        let path = dir.path().join(format!("config_{index}.ocb"));
        let writer = ChromatogramWriter::new(FormatVersion::Msd0701, config).unwrap();
        writer.write(&path, &chromatogram).unwrap();

        let read = read_chromatogram(&path).unwrap();
        assert_eq!(read.scans, chromatogram.scans);
        assert_eq!(read.peaks, chromatogram.peaks);
    }
}

#[test]
fn test_three_scan_scenario() {
    init_logging();
    let dir = tempdir().unwrap();
    let path = dir.path().join("scenario.ocb");

    let mut chromatogram = Chromatogram::new();
    chromatogram.add_scan(Scan::new(0, 67864.0)).unwrap();
    chromatogram.add_scan(Scan::new(1000, 153220.0)).unwrap();
    chromatogram.add_scan(Scan::new(2000, 94184.0)).unwrap();

    let mut peak = Peak::new(
        chromatogram.scans[1].clone(),
        shape(&[(0, 0.0), (1000, 153220.0), (2000, 0.0)]),
        10.0,
        12.0,
    )
    .unwrap();
    peak.integration_entries = vec![
        IntegrationEntry::Signal { area: 1000.0 },
        IntegrationEntry::Signal { area: 250.0 },
    ];
    chromatogram.peaks.push(peak);

    write_chromatogram(&path, &chromatogram, FormatVersion::Csd1007).unwrap();
    let read = read_chromatogram(&path).unwrap();

    assert_eq!(read.scan(2).map(|scan| scan.total_signal), Some(153220.0));
    assert_eq!(read.peaks.len(), 1);
    assert_eq!(read.peaks[0].start_background_abundance, 10.0);
    assert_eq!(read.peaks[0].stop_background_abundance, 12.0);
    assert_eq!(read.peaks[0].integration_entries.len(), 2);
    assert_eq!(read.peaks[0].integrated_area(), 1250.0);
}

#[test]
fn test_msd_overview_agrees_with_scans() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("overview.ocb");

    let mut chromatogram = Chromatogram::new();
    chromatogram.add_scan(Scan::new(0, 67864.0)).unwrap();
    chromatogram.add_scan(Scan::new(1000, 153220.0)).unwrap();
    chromatogram
        .add_scan(
            ScanBuilder::new(2000)
                .add_ion(43.0, 100.0)
                .add_ion(57.0, 250.0)
                .total_signal(94184.0)
                .build(),
        )
        .unwrap();

    write_chromatogram(&path, &chromatogram, FormatVersion::Msd0701).unwrap();
    let reader = ChromatogramReader::new();
    let read = reader.read(&path).unwrap();
    let overview = reader.read_overview(&path).unwrap();

    let from_scans: Vec<(i32, f32)> = read
        .scans
        .iter()
        .map(|scan| (scan.retention_time, scan.total_signal))
        .collect();
    assert_eq!(overview, from_scans);
    assert_eq!(overview, vec![(0, 0.0), (1000, 0.0), (2000, 350.0)]);
    assert!(overview.iter().all(|(_, signal)| signal.is_sign_positive()));
}

#[test]
fn test_scan_numbers_are_contiguous() {
    let dir = tempdir().unwrap();

    for version in FormatVersion::ALL {
        let path = dir.path().join(format!("scans_{}.ocb", version.marker()));
        let mut chromatogram = Chromatogram::new();
        for index in 0..250 {
            let scan = ScanBuilder::new(index * 200)
                .add_ion(43.0, index as f32 + 1.0)
                .build();
            chromatogram.add_scan(scan).unwrap();
        }

        write_chromatogram(&path, &chromatogram, version).unwrap();
        let read = read_chromatogram(&path).unwrap();

        assert_eq!(read.number_of_scans(), 250);
        assert!(read.scan(0).is_none());
        assert_eq!(read.scan(1).map(|scan| scan.retention_time), Some(0));
        assert_eq!(read.scan(250).map(|scan| scan.retention_time), Some(49_800));
        assert!(read.scan(251).is_none());
        assert_eq!(read.retention_time_range(), Some((0, 49_800)));
    }
}

#[test]
fn test_empty_sections() {
    let dir = tempdir().unwrap();

    for version in FormatVersion::ALL {
        let path = dir.path().join(format!("empty_{}.ocb", version.marker()));
        let mut chromatogram = Chromatogram::new();
        chromatogram.add_scan(ScanBuilder::new(0).add_ion(43.0, 10.0).build()).unwrap();

        write_chromatogram(&path, &chromatogram, version).unwrap();
        let (read, report) = ChromatogramReader::new().read_with_report(&path).unwrap();

        assert!(report.is_clean());
        assert_eq!(read.number_of_scans(), 1);
        assert!(read.peaks.is_empty());
        assert!(read.targets.is_empty());
        assert!(read.edit_history.is_empty());
        assert!(read.chromatogram_integration_entries.is_empty());
        assert!(read.background_integration_entries.is_empty());
    }
}

#[test]
fn test_chromatogram_without_scans() {
    let dir = tempdir().unwrap();

    for version in FormatVersion::ALL {
        let path = dir.path().join(format!("no_scans_{}.ocb", version.marker()));
        write_chromatogram(&path, &Chromatogram::new(), version).unwrap();

        let read = read_chromatogram(&path).unwrap();
        assert_eq!(read.number_of_scans(), 0);
        assert!(read.baseline.is_empty());
    }
}

#[test]
fn test_non_ascii_library_name() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("non_ascii.ocb");

    let mut chromatogram = msd_chromatogram();
    chromatogram.targets = vec![target("Cyclohexanöl", 93.0), target("β-Pinen ☕", 61.0)];
    chromatogram.peaks[0].targets = vec![target("Cyclohexanöl", 93.0)];

    write_chromatogram(&path, &chromatogram, FormatVersion::Msd0701).unwrap();
    let read = read_chromatogram(&path).unwrap();

    assert_eq!(read.targets[0].library.name, "Cyclohexanöl");
    assert_eq!(read.targets[1].library.name, "β-Pinen ☕");
    assert_eq!(read.peaks[0].targets[0].library.name, "Cyclohexanöl");
    assert_eq!(read.targets[1].library.cas_number, "110-82-7");
}
