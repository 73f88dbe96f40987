//! # Entry Layout Registry
//!
//! Every released format version owns one immutable row: the ordered list of
//! logical sections and the zip entry path each of them lives at. Adding a
//! version means adding a row; existing rows are never edited, which keeps
//! old archives readable.
//!
//! ## Csd1007 (CSD / FID lineage)
//!
//! ```text
//! VERSION
//! CHROMATOGRAM_FID/
//! ├── SYSTEM_SETTINGS_FID
//! ├── SCANS_FID
//! ├── BASELINE_FID
//! ├── PEAKS_FID
//! └── AREA_FID
//! ```
//!
//! ## Msd0701 (MSD lineage)
//!
//! ```text
//! VERSION
//! OVERVIEW/
//! └── TIC
//! CHROMATOGRAM/
//! ├── SCANS
//! ├── PEAKS
//! ├── AREA
//! ├── IDENTIFICATION
//! ├── HISTORY
//! └── MISC
//! ```

mod constants;


use std::fmt;

pub use constants::*;

/// Logical section of an archive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Version marker, always the first entry
    Version,
    /// (retention time, total signal) preview
    Overview,
    /// Instrument settings
    SystemSettings,
    /// Scans or mass spectra
    Scans,
    /// Background curve on the scan grid
    Baseline,
    /// Peaks
    Peaks,
    /// Chromatogram and background integration results
    Area,
    /// Chromatogram-level identification targets
    Identification,
    /// Edit history
    History,
    /// Date, miscellaneous info and operator
    Miscellaneous,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Version => "version",
            Section::Overview => "overview",
            Section::SystemSettings => "system settings",
            Section::Scans => "scans",
            Section::Baseline => "baseline",
            Section::Peaks => "peaks",
            Section::Area => "area",
            Section::Identification => "identification",
            Section::History => "history",
            Section::Miscellaneous => "miscellaneous",
        };
        f.write_str(name)
    }
}

/// Detector family a version belongs to; each lineage is versioned on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lineage {
    /// Current-signal detectors (FID and similar)
    Csd,
    /// Mass-selective detectors
    Msd,
}

/// One released on-disk layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatVersion {
    /// CSD (FID) chromatogram, version 1.0.0.7
    Csd1007,
    /// MSD chromatogram, version 0.7.0.1
    Msd0701,
}

impl FormatVersion {
    /// All known versions
    pub const ALL: [FormatVersion; 2] = [FormatVersion::Csd1007, FormatVersion::Msd0701];

    /// String stored in the version entry
    pub fn marker(&self) -> &'static str {
        self.layout().marker
    }

    /// Detector lineage
    pub fn lineage(&self) -> Lineage {
        self.layout().lineage
    }

    /// Registry row of this version
    pub fn layout(&self) -> &'static EntryLayout {
        match self {
            FormatVersion::Csd1007 => &CSD_1007,
            FormatVersion::Msd0701 => &MSD_0701,
        }
    }

    /// Resolve a version from its stored marker
    pub fn from_marker(marker: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|version| version.marker() == marker)
    }

    /// Newest version of a lineage, used for new files
    pub fn latest(lineage: Lineage) -> Self {
        match lineage {
            Lineage::Csd => FormatVersion::Csd1007,
            Lineage::Msd => FormatVersion::Msd0701,
        }
    }
}

impl fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lineage = match self.lineage() {
            Lineage::Csd => "CSD",
            Lineage::Msd => "MSD",
        };
        write!(f, "{} {}", lineage, self.marker())
    }
}

/// Registry row: where each section of a version lives
#[derive(Debug, PartialEq, Eq)]
pub struct EntryLayout {
    /// Version marker
    pub marker: &'static str,
    /// Detector lineage
    pub lineage: Lineage,
    /// Directory entries, created before the first section inside them
    pub directories: &'static [&'static str],
    /// Sections in required write order, the version marker first
    pub sections: &'static [(Section, &'static str)],
}

impl EntryLayout {
    /// Entry path of a section, if this version stores it
    pub fn path(&self, section: Section) -> Option<&'static str> {
        self.sections
            .iter()
            .find(|(candidate, _)| *candidate == section)
            .map(|(_, path)| *path)
    }

    /// Whether this version stores a section
    pub fn contains(&self, section: Section) -> bool {
        self.path(section).is_some()
    }

    /// Sections in required order
    pub fn ordered_sections(&self) -> impl Iterator<Item = Section> + '_ {
        self.sections.iter().map(|(section, _)| *section)
    }

    /// Directory an entry path belongs to, if it is listed in this layout
    pub fn directory_of(&self, path: &str) -> Option<&'static str> {
        self.directories
            .iter()
            .copied()
            .find(|directory| path.starts_with(directory) && path.len() > directory.len())
    }
}

/// Join a directory prefix and an entry path
///
/// An empty prefix leaves the path unchanged; a missing trailing slash is added.
pub fn prefixed(prefix: &str, path: &str) -> String {
    if prefix.is_empty() {
        path.to_string()
    } else if prefix.ends_with('/') {
        format!("{prefix}{path}")
    } else {
        format!("{prefix}/{path}")
    }
}

static CSD_1007: EntryLayout = EntryLayout {
    marker: VERSION_1007,
    lineage: Lineage::Csd,
    directories: &[DIR_CHROMATOGRAM_FID],
    sections: &[
        (Section::Version, FILE_VERSION),
        (Section::SystemSettings, FILE_SYSTEM_SETTINGS_FID),
        (Section::Scans, FILE_SCANS_FID),
        (Section::Baseline, FILE_BASELINE_FID),
        (Section::Peaks, FILE_PEAKS_FID),
        (Section::Area, FILE_AREA_FID),
    ],
};

static MSD_0701: EntryLayout = EntryLayout {
    marker: CHROMATOGRAM_VERSION_0701,
    lineage: Lineage::Msd,
    directories: &[DIR_OVERVIEW, DIR_CHROMATOGRAM],
    sections: &[
        (Section::Version, FILE_VERSION),
        (Section::Overview, FILE_TIC),
        (Section::Scans, FILE_SCANS),
        (Section::Peaks, FILE_PEAKS),
        (Section::Area, FILE_AREA),
        (Section::Identification, FILE_IDENTIFICATION),
        (Section::History, FILE_HISTORY),
        (Section::Miscellaneous, FILE_MISC),
    ],
};
