use crate::model::ModelError;

/// Errors that can occur during reading
#[derive(Debug, thiserror::Error)]
pub enum ReaderError {
    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    ZipError(#[from] zip::result::ZipError),

    /// Source cannot be opened, is not a zip archive or lacks a required entry
    #[error("File is not readable: {file}: {reason}")]
    FileIsNotReadable {
        /// The offending file or archive
        file: String,
        /// What went wrong
        reason: String,
    },

    /// Source has zero length
    #[error("File is empty: {0}")]
    FileIsEmpty(String),

    /// Version marker does not match the selected reader
    #[error("Unsupported version: expected {expected:?}, found {found:?}")]
    UnsupportedVersion {
        /// Marker the reader expects (or the known markers)
        expected: String,
        /// Marker stored in the archive
        found: String,
    },

    /// A single record failed validation
    #[error("Malformed record: {0}")]
    MalformedRecord(#[from] ModelError),

    /// The binary framing is broken (truncated field, negative length)
    #[error("Malformed stream: {0}")]
    MalformedStream(String),

    /// The progress monitor requested cancellation
    #[error("Read canceled")]
    Canceled,
}

impl ReaderError {
    pub(crate) fn not_readable(file: impl Into<String>, reason: impl Into<String>) -> Self {
        ReaderError::FileIsNotReadable {
            file: file.into(),
            reason: reason.into(),
        }
    }

    /// Lift an I/O error from a primitive read, treating EOF as broken framing
    pub(crate) fn from_stream(error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::UnexpectedEof {
            ReaderError::MalformedStream("unexpected end of entry".to_string())
        } else {
            ReaderError::IoError(error)
        }
    }
}
