use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

use zip::result::ZipError;
use zip::ZipArchive;

use crate::codec::ReadFormatExt;
use crate::layout::{prefixed, FormatVersion, FILE_VERSION};

use super::ReaderError;

/// Open an `.ocb` file for random access to its entries
pub(super) fn open_archive(path: &Path) -> Result<ZipArchive<BufReader<File>>, ReaderError> {
    let name = path.display().to_string();
    let file = File::open(path).map_err(|e| ReaderError::not_readable(&name, e.to_string()))?;
    let length = file
        .metadata()
        .map_err(|e| ReaderError::not_readable(&name, e.to_string()))?
        .len();
    if length == 0 {
        return Err(ReaderError::FileIsEmpty(name));
    }
    ZipArchive::new(BufReader::new(file)).map_err(|e| ReaderError::not_readable(&name, e.to_string()))
}

/// Read a whole entry into memory
pub(super) fn read_entry<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Result<Cursor<Vec<u8>>, ReaderError> {
    let mut entry = match archive.by_name(name) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => {
            return Err(ReaderError::not_readable(name, "entry is missing"))
        }
        Err(e) => return Err(e.into()),
    };
    let mut bytes = Vec::new();
    entry.read_to_end(&mut bytes)?;
    Ok(Cursor::new(bytes))
}

/// Read the version marker stored under a prefix
pub(super) fn read_marker<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    prefix: &str,
) -> Result<String, ReaderError> {
    let mut entry = read_entry(archive, &prefixed(prefix, FILE_VERSION))?;
    entry.read_string()
}

/// Match a stored marker against the known versions, or one expected version
pub(super) fn resolve_version(
    marker: &str,
    expected: Option<FormatVersion>,
) -> Result<FormatVersion, ReaderError> {
    let unsupported = || ReaderError::UnsupportedVersion {
        expected: match expected {
            Some(version) => version.marker().to_string(),
            None => FormatVersion::ALL.map(|version| version.marker()).join(" or "),
        },
        found: marker.to_string(),
    };
    let version = FormatVersion::from_marker(marker).ok_or_else(unsupported)?;
    match expected {
        Some(expected) if expected != version => Err(unsupported()),
        _ => Ok(version),
    }
}
