use std::f64::consts::PI;
use std::hash::Hash;

use gnb_core::{BayesError, ClassStats, DimensionStats, FitResult, Float, Label, Prediction, Result};

/// Gaussian probability density of `x` under `N(mean, std²)`.
///
/// # Definition
///
/// ```text
/// pdf(x) = 1 / (σ √(2π)) · exp(−(x − μ)² / (2σ²))
/// ```
///
/// # Degenerate case
///
/// When `std == 0` (every training value of the dimension was identical) the
/// density is a point mass: `1.0` if `x == mean`, `0.0` otherwise.
///
/// # Examples
///
/// ```rust
/// use gnb_models::naive_bayes::gaussian_pdf;
///
/// assert!((gaussian_pdf(0.0, 0.0, 1.0) - 0.398_942_28).abs() < 1e-8);
/// assert_eq!(gaussian_pdf(2.0, 2.0, 0.0), 1.0);
/// assert_eq!(gaussian_pdf(2.5, 2.0, 0.0), 0.0);
/// ```
pub fn gaussian_pdf(x: Float, mean: Float, std: Float) -> Float {
    if std == 0.0 {
        return if x == mean { 1.0 } else { 0.0 };
    }

    let diff = x - mean;
    let exponent = -(diff * diff) / (2.0 * std * std);
    exponent.exp() / (std * (2.0 * PI).sqrt())
}

/// Natural log of [`gaussian_pdf`], `-inf` where the density is zero.
pub fn ln_gaussian_pdf(x: Float, mean: Float, std: Float) -> Float {
    if std == 0.0 {
        return if x == mean { 0.0 } else { Float::NEG_INFINITY };
    }

    let diff = x - mean;
    -(diff * diff) / (2.0 * std * std) - (std * (2.0 * PI).sqrt()).ln()
}

/// Scores `x` against every fitted label.
///
/// For each label `L`:
///
/// ```text
/// score(L) = P(L) · Π_i pdf(x_i; μ_{L,i}, σ_{L,i})
/// P(L)     = count(L) / total
/// ```
///
/// Dimensions are treated as independent given the class (the "naive"
/// assumption); no covariance terms are involved. Scores are unnormalized
/// and only meaningful for ranking. A label fitted without vectors scores
/// `0.0`.
///
/// # Returns
///
/// Label → score for every label of `fit`, in `fit`'s iteration order.
///
/// # Errors
///
/// - [`BayesError::DimensionMismatch`] if `x.len()` differs from the fitted
///   dimensionality.
pub fn predict_proba<L>(fit: &FitResult<L>, x: &[Float]) -> Result<Prediction<L>>
where
    L: Label,
{
    check_dimensionality(fit, x)?;

    Ok(fit
        .iter()
        .map(|(label, class)| {
            let score = if class.dimensions.is_empty() {
                0.0
            } else {
                fit.prior(class) * likelihood(&class.dimensions, x)
            };
            (label.clone(), score)
        })
        .collect())
}

/// Log-space counterpart of [`predict_proba`]:
///
/// ```text
/// ln score(L) = ln P(L) + Σ_i ln pdf(x_i; μ_{L,i}, σ_{L,i})
/// ```
///
/// Useful for high-dimensional queries where the product of densities
/// underflows to `0.0` for every label. Labels that [`predict_proba`] scores
/// `0.0` because of a zero prior, missing statistics or a point-mass miss get
/// `-inf` here.
///
/// # Errors
///
/// Same as [`predict_proba`].
pub fn log_likelihoods<L>(fit: &FitResult<L>, x: &[Float]) -> Result<Prediction<L>>
where
    L: Label,
{
    check_dimensionality(fit, x)?;

    Ok(fit
        .iter()
        .map(|(label, class)| (label.clone(), log_score(fit, class, x)))
        .collect())
}

/// Returns the label with the highest [`predict_proba`] score, and that score.
///
/// # Tie-break
///
/// Among labels with equal maximum scores, the one that comes **last** in
/// `fit`'s iteration order wins. This is the same outcome as stably sorting
/// the scores ascending and taking the final entry.
///
/// # Errors
///
/// - [`BayesError::EmptyInput`] if `fit` holds no labels.
/// - [`BayesError::DimensionMismatch`] as for [`predict_proba`].
pub fn predict<L>(fit: &FitResult<L>, x: &[Float]) -> Result<(L, Float)>
where
    L: Label,
{
    let scores = predict_proba(fit, x)?;
    best(scores).ok_or(BayesError::EmptyInput)
}

/// Highest-scoring entry, later entries winning ties.
fn best<L>(scores: Prediction<L>) -> Option<(L, Float)> {
    scores.into_iter().fold(None, |acc, (label, score)| match acc {
        Some((_, top)) if score.total_cmp(&top).is_lt() => acc,
        _ => Some((label, score)),
    })
}

fn check_dimensionality<L: Hash + Eq>(fit: &FitResult<L>, x: &[Float]) -> Result<()> {
    match fit.dimensionality() {
        Some(d) if d != x.len() => Err(BayesError::DimensionMismatch {
            expected: d,
            got: x.len(),
        }),
        _ => Ok(()),
    }
}

fn likelihood(dimensions: &[DimensionStats], x: &[Float]) -> Float {
    dimensions
        .iter()
        .zip(x)
        .map(|(s, &xi)| gaussian_pdf(xi, s.mean, s.standard_deviation))
        .product()
}

fn log_score<L: Hash + Eq>(fit: &FitResult<L>, class: &ClassStats, x: &[Float]) -> Float {
    if class.dimensions.is_empty() {
        return Float::NEG_INFINITY;
    }

    let ln_prior = fit.prior(class).ln();
    class
        .dimensions
        .iter()
        .zip(x)
        .fold(ln_prior, |acc, (s, &xi)| {
            acc + ln_gaussian_pdf(xi, s.mean, s.standard_deviation)
        })
}
