/// Validation failures of individual model records
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    /// Unknown peak type string
    #[error("Unknown peak type: {0:?}")]
    UnknownPeakType(String),

    /// Unknown retention index type string
    #[error("Unknown retention index type: {0:?}")]
    UnknownRetentionIndexType(String),

    /// Unknown mass spectrometer string
    #[error("Unknown mass spectrometer: {0:?}")]
    UnknownMassSpectrometer(String),

    /// Unknown mass spectrum type string
    #[error("Unknown mass spectrum type: {0:?}")]
    UnknownMassSpectrumType(String),

    /// m/z value outside the supported ion range
    #[error("Ion m/z {0} is outside the range 0..=65535")]
    IonOutOfRange(f64),

    /// Abundance that is negative or not finite
    #[error("Abundance {0} is not a finite, non-negative value")]
    AbundanceOutOfRange(f32),

    /// Peak shape without any points
    #[error("Peak shape has no intensity values")]
    EmptyPeakShape,

    /// Peak shape that does not cover the retention time of its maximum
    #[error("Peak shape {start}..={stop} ms does not bracket the maximum at {maximum} ms")]
    ShapeDoesNotBracketMaximum {
        /// First retention time of the shape
        start: i32,
        /// Last retention time of the shape
        stop: i32,
        /// Retention time of the peak maximum
        maximum: i32,
    },

    /// Comparison score outside 0..=100
    #[error("{name} {value} is outside the range 0..=100")]
    ScoreOutOfRange {
        /// Score name
        name: &'static str,
        /// Offending value
        value: f32,
    },

    /// Scan added out of retention time order
    #[error("Scan at {retention_time} ms precedes the previous scan at {previous} ms")]
    RetentionTimeNotMonotonic {
        /// Retention time of the rejected scan
        retention_time: i32,
        /// Retention time of the last accepted scan
        previous: i32,
    },

    /// Timestamp outside the representable date range
    #[error("Timestamp {0} ms is outside the representable date range")]
    InvalidTimestamp(i64),
}
