/// File extension of chromatogram archives
pub const OCB_EXTENSION: &str = ".ocb";

/// Version marker entry shared by all versions
pub const FILE_VERSION: &str = "VERSION";

/// Marker of the CSD 1.0.0.7 layout
pub const VERSION_1007: &str = "1.0.0.7";

/// Marker of the MSD 0.7.0.1 layout
pub const CHROMATOGRAM_VERSION_0701: &str = "0.7.0.1";

/// CSD chromatogram directory
pub const DIR_CHROMATOGRAM_FID: &str = "CHROMATOGRAM_FID/";

/// CSD instrument settings entry
pub const FILE_SYSTEM_SETTINGS_FID: &str = "CHROMATOGRAM_FID/SYSTEM_SETTINGS_FID";

/// CSD scans entry
pub const FILE_SCANS_FID: &str = "CHROMATOGRAM_FID/SCANS_FID";

/// CSD baseline entry
pub const FILE_BASELINE_FID: &str = "CHROMATOGRAM_FID/BASELINE_FID";

/// CSD peaks entry
pub const FILE_PEAKS_FID: &str = "CHROMATOGRAM_FID/PEAKS_FID";

/// CSD area entry
pub const FILE_AREA_FID: &str = "CHROMATOGRAM_FID/AREA_FID";

/// MSD overview directory
pub const DIR_OVERVIEW: &str = "OVERVIEW/";

/// MSD total ion chromatogram preview entry
pub const FILE_TIC: &str = "OVERVIEW/TIC";

/// MSD chromatogram directory
pub const DIR_CHROMATOGRAM: &str = "CHROMATOGRAM/";

/// MSD mass spectra entry
pub const FILE_SCANS: &str = "CHROMATOGRAM/SCANS";

/// MSD peaks entry
pub const FILE_PEAKS: &str = "CHROMATOGRAM/PEAKS";

/// MSD area entry
pub const FILE_AREA: &str = "CHROMATOGRAM/AREA";

/// MSD identification entry
pub const FILE_IDENTIFICATION: &str = "CHROMATOGRAM/IDENTIFICATION";

/// MSD edit history entry
pub const FILE_HISTORY: &str = "CHROMATOGRAM/HISTORY";

/// MSD miscellaneous entry
pub const FILE_MISC: &str = "CHROMATOGRAM/MISC";
