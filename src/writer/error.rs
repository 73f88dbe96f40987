use std::path::PathBuf;

/// Errors that can occur during writing
#[derive(Debug, thiserror::Error)]
pub enum WriterError {
    /// I/O error during file operations
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    ZipError(#[from] zip::result::ZipError),

    /// Destination cannot be created or written
    #[error("File is not writeable: {}: {reason}", file.display())]
    FileIsNotWriteable {
        /// The destination file
        file: PathBuf,
        /// What went wrong
        reason: String,
    },

    /// Writer configuration is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The progress monitor requested cancellation
    #[error("Write canceled")]
    Canceled,
}

impl WriterError {
    /// Attach the destination file to I/O and zip failures
    pub(crate) fn for_file(self, file: &std::path::Path) -> Self {
        match self {
            WriterError::IoError(e) => WriterError::FileIsNotWriteable {
                file: file.to_path_buf(),
                reason: e.to_string(),
            },
            WriterError::ZipError(e) => WriterError::FileIsNotWriteable {
                file: file.to_path_buf(),
                reason: e.to_string(),
            },
            other => other,
        }
    }
}
