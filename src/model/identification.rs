use super::ModelError;

/// Highest value of a comparison score
pub const MAX_SCORE: f32 = 100.0;

/// Descriptive fields of a library entry
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LibraryInformation {
    /// Compound name
    pub name: String,
    /// CAS registry number
    pub cas_number: String,
    /// Free-text comments
    pub comments: String,
    /// Miscellaneous information (formula, synonyms, ...)
    pub miscellaneous: String,
}

/// Scores of a library comparison, canonically on a 0..=100 scale
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ComparisonResult {
    /// Forward match factor
    pub match_factor: f32,
    /// Reverse match factor
    pub reverse_match_factor: f32,
    /// Probability of the match
    pub probability: f32,
}

impl ComparisonResult {
    /// Create a comparison result
    pub fn new(match_factor: f32, reverse_match_factor: f32, probability: f32) -> Self {
        Self {
            match_factor,
            reverse_match_factor,
            probability,
        }
    }

    /// Check that all scores are finite and within 0..=100
    pub fn validate(&self) -> Result<(), ModelError> {
        for (name, value) in [
            ("Match factor", self.match_factor),
            ("Reverse match factor", self.reverse_match_factor),
            ("Probability", self.probability),
        ] {
            if !(0.0..=MAX_SCORE).contains(&value) {
                return Err(ModelError::ScoreOutOfRange { name, value });
            }
        }
        Ok(())
    }
}

/// A candidate library match attached to a chromatogram or a peak
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IdentificationTarget {
    /// Name of the identifier that produced the match
    pub identifier: String,
    /// Matched library entry
    pub library: LibraryInformation,
    /// Comparison scores
    pub comparison: ComparisonResult,
}

impl IdentificationTarget {
    /// Create a target, rejecting scores outside 0..=100
    pub fn new(
        identifier: impl Into<String>,
        library: LibraryInformation,
        comparison: ComparisonResult,
    ) -> Result<Self, ModelError> {
        comparison.validate()?;
        Ok(Self {
            identifier: identifier.into(),
            library,
            comparison,
        })
    }
}
