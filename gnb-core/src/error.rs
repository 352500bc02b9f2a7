/// Failures surfaced by the normalize / fit / classify / score pipeline.
///
/// Degenerate but valid inputs (zero variance, constant columns, labels
/// without vectors) are not errors; they are handled with substitution
/// values by the stage that meets them.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BayesError {
    /// Fitting or scoring was asked to work on a dataset with no vectors.
    #[error("no training data: the dataset contains zero feature vectors")]
    EmptyInput,

    /// A normalization strategy name did not match any known strategy.
    #[error("unknown normalization strategy `{0}` (expected none, minimax or z_normalization)")]
    UnknownNormalizationStrategy(String),

    /// A feature vector's length differs from the expected dimensionality.
    #[error("dimension mismatch: expected {expected} features, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Model used before calling `fit`.
    #[error("classifier is not fitted; call fit() first")]
    NotFitted,
}

pub type Result<T> = std::result::Result<T, BayesError>;
