use tracing::{debug, trace};

use gnb_core::stats::summarize;
use gnb_core::utils::{column, common_dimensionality};
use gnb_core::{BayesError, ClassStats, Dataset, FeatureVector, FitResult, Label, Matrix, Result};

/// Fits per-label, per-dimension Gaussian parameters to `dataset`.
///
/// # Algorithm
///
/// For each label (in dataset order):
/// 1. Lay the label's vectors out as the rows of an `(n_label × d)` matrix,
///    so that every feature dimension becomes one column.
/// 2. Summarize each column into a [`DimensionStats`](gnb_core::DimensionStats)
///    (mean, population variance, standard deviation).
/// 3. Record the label's vector count for the class prior.
///
/// A label with no vectors yields an empty dimension list and a count of
/// zero; it is kept so that it still shows up (with score `0`) in
/// predictions.
///
/// The result depends only on `dataset`, so fitting the same dataset twice
/// yields equal results.
///
/// # Errors
///
/// - [`BayesError::EmptyInput`] if the dataset contains no vectors at all.
/// - [`BayesError::DimensionMismatch`] if the vectors do not all share one
///   dimensionality (checked across labels, not just within one).
///
/// # Complexity
///
/// `O(n d)` time for `n` vectors of dimension `d`; one `(n_label × d)`
/// matrix is allocated per label.
pub fn fit<L: Label>(dataset: &Dataset<L>) -> Result<FitResult<L>> {
    let Some(d) = common_dimensionality(dataset.values().flatten())? else {
        return Err(BayesError::EmptyInput);
    };

    let classes = dataset
        .iter()
        .map(|(label, vectors)| {
            let dimensions = if vectors.is_empty() {
                Vec::new()
            } else {
                let x = label_matrix(vectors, d);
                (0..d).map(|j| summarize(column(&x, j))).collect()
            };

            trace!(?label, samples = vectors.len(), ?dimensions, "fitted label");

            (
                label.clone(),
                ClassStats {
                    count: vectors.len(),
                    dimensions,
                },
            )
        })
        .collect();

    let fit = FitResult::new(classes);

    debug!(
        labels = fit.len(),
        samples = fit.total(),
        dimensions = d,
        "fitted gaussian naive bayes"
    );

    Ok(fit)
}

fn label_matrix(vectors: &[FeatureVector], d: usize) -> Matrix {
    Matrix::from_fn(vectors.len(), d, |i, j| vectors[i][j])
}
