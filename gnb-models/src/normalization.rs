use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use gnb_core::stats::{min_max, summarize};
use gnb_core::utils::{stack_rows, unstack_rows};
use gnb_core::{BayesError, Dataset, Float, Label, Matrix, Result};

/// How feature columns are rescaled before fitting.
///
/// Every strategy works **column-wise across all labels jointly**: the
/// statistics of dimension `d` are taken over every vector of every label,
/// and the output dataset has exactly the input's shape.
///
/// The canonical names accepted by [`FromStr`] (and printed by `Display`) are
/// `"none"`, `"minimax"` and `"z_normalization"`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalizationStrategy {
    /// Identity transform.
    #[default]
    None,

    /// Linear rescale to `[0, 1]`:
    ///
    /// ```text
    /// v' = (v − min_d) / (max_d − min_d)
    /// ```
    ///
    /// A constant column (`max_d == min_d`) maps to `0.0`.
    #[cfg_attr(feature = "serde", serde(rename = "minimax"))]
    MinMax,

    /// Standard score using the population standard deviation:
    ///
    /// ```text
    /// v' = (v − μ_d) / σ_d
    /// ```
    ///
    /// A column with `σ_d == 0` maps to `0.0`.
    #[cfg_attr(feature = "serde", serde(rename = "z_normalization"))]
    ZScore,
}

impl NormalizationStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            NormalizationStrategy::None => "none",
            NormalizationStrategy::MinMax => "minimax",
            NormalizationStrategy::ZScore => "z_normalization",
        }
    }
}

impl fmt::Display for NormalizationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NormalizationStrategy {
    type Err = BayesError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Ok(NormalizationStrategy::None),
            "minimax" => Ok(NormalizationStrategy::MinMax),
            "z_normalization" => Ok(NormalizationStrategy::ZScore),
            other => Err(BayesError::UnknownNormalizationStrategy(other.to_string())),
        }
    }
}

/// Rescales every feature column of `dataset` with `strategy`.
///
/// # Returns
///
/// A new dataset with the same labels, the same number of vectors per label
/// and the same vector order. A dataset without vectors is returned as is,
/// and so is any dataset under [`NormalizationStrategy::None`].
///
/// # Errors
///
/// - [`BayesError::DimensionMismatch`] if the vectors do not all share one
///   dimensionality. Never raised for [`NormalizationStrategy::None`].
pub fn normalize<L: Label>(dataset: &Dataset<L>, strategy: NormalizationStrategy) -> Result<Dataset<L>> {
    let rescale: fn(&mut [Float]) = match strategy {
        NormalizationStrategy::None => return Ok(dataset.clone()),
        NormalizationStrategy::MinMax => minimax_column,
        NormalizationStrategy::ZScore => z_score_column,
    };

    let Some(mut x) = stack_rows(dataset)? else {
        return Ok(dataset.clone());
    };

    debug!(
        %strategy,
        labels = dataset.len(),
        samples = x.nrows(),
        dimensions = x.ncols(),
        "normalizing training data"
    );

    rescale_columns(&mut x, rescale);

    Ok(unstack_rows(dataset, &x))
}

/// Applies `f` to each column of `x` in place.
fn rescale_columns(x: &mut Matrix, f: fn(&mut [Float])) {
    let n = x.nrows();
    if n == 0 {
        return;
    }

    // Column-major storage: each chunk of `n` values is one column.
    for column in x.as_mut_slice().chunks_exact_mut(n) {
        f(column);
    }
}

fn minimax_column(column: &mut [Float]) {
    let Some((lo, hi)) = min_max(column) else {
        return;
    };
    let range = hi - lo;

    for v in column.iter_mut() {
        *v = if range == 0.0 { 0.0 } else { (*v - lo) / range };
    }
}

fn z_score_column(column: &mut [Float]) {
    let stats = summarize(column);
    let std = stats.standard_deviation;

    for v in column.iter_mut() {
        *v = if std == 0.0 { 0.0 } else { (*v - stats.mean) / std };
    }
}
