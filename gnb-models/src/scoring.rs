use indexmap::IndexMap;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use gnb_core::{BayesError, Dataset, FeatureVector, FitResult, Float, Label, Result};

use crate::naive_bayes::predict;

/// Replay counts keyed by `(actual, predicted)` label, in first-seen order.
pub type Confusion<L> = IndexMap<(L, L), usize>;

/// Replays every training vector of `dataset` through `fit` and tallies
/// which label each one was classified as.
///
/// Vectors are visited label by label, in dataset order. With the `parallel`
/// feature the predictions run on rayon's pool; results are gathered back
/// in visiting order, so the tally is the same either way.
///
/// # Errors
///
/// - [`BayesError::EmptyInput`] if `dataset` holds no vectors.
/// - Any error of [`predict`] (e.g. [`BayesError::DimensionMismatch`] when
///   `dataset` does not match the dimensionality `fit` was built with).
pub fn confusion<L: Label>(dataset: &Dataset<L>, fit: &FitResult<L>) -> Result<Confusion<L>> {
    let samples: Vec<(&L, &FeatureVector)> = dataset
        .iter()
        .flat_map(|(label, vectors)| vectors.iter().map(move |v| (label, v)))
        .collect();

    if samples.is_empty() {
        return Err(BayesError::EmptyInput);
    }

    #[cfg(feature = "parallel")]
    let predicted: Vec<L> = samples
        .par_iter()
        .map(|(_, v)| predict(fit, v).map(|(label, _)| label))
        .collect::<Result<_>>()?;

    #[cfg(not(feature = "parallel"))]
    let predicted: Vec<L> = samples
        .iter()
        .map(|(_, v)| predict(fit, v).map(|(label, _)| label))
        .collect::<Result<_>>()?;

    let mut counts = Confusion::new();
    for ((actual, _), predicted) in samples.into_iter().zip(predicted) {
        *counts.entry((actual.clone(), predicted)).or_insert(0) += 1;
    }

    Ok(counts)
}

/// Fraction of training vectors that `fit` classifies as their own label.
///
/// ```text
/// accuracy = (# vectors v under L with predict(v) == L) / (# vectors)
/// ```
///
/// Always within `[0, 1]`.
///
/// # Errors
///
/// Same as [`confusion`].
pub fn score<L: Label>(dataset: &Dataset<L>, fit: &FitResult<L>) -> Result<Float> {
    let counts = confusion(dataset, fit)?;
    let accuracy = accuracy(&counts);

    debug!(samples = counts.values().sum::<usize>(), accuracy, "scored training data");

    Ok(accuracy)
}

fn accuracy<L: Label>(counts: &Confusion<L>) -> Float {
    let (correct, total) = counts
        .iter()
        .fold((0usize, 0usize), |(correct, total), ((actual, predicted), &n)| {
            let hit = if actual == predicted { n } else { 0 };
            (correct + hit, total + n)
        });

    if total == 0 {
        return 0.0;
    }
    correct as Float / total as Float
}
