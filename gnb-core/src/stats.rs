use crate::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Gaussian parameters of one feature dimension of one label.
///
/// Produced by [`summarize`] during fitting; `standard_deviation` is always
/// `variance.sqrt()`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionStats {
    pub mean: Float,
    pub standard_deviation: Float,
    pub variance: Float,
}

/// Computes the **arithmetic mean** of a sequence of values.
///
/// # Returns
///
/// - `Σ xs / n`
/// - `0.0` if `xs` is empty. Callers that must distinguish "no data" from a
///   zero mean check emptiness themselves (the fitter and scorer do).
///
/// # Examples
///
/// ```rust
/// use gnb_core::stats::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert_eq!(mean(&[]), 0.0);
/// ```
pub fn mean(xs: &[Float]) -> Float {
    if xs.is_empty() {
        return 0.0;
    }

    xs.iter().sum::<Float>() / xs.len() as Float
}

/// Computes the **population variance** of a sequence of values.
///
/// # Definition
///
/// ```text
/// σ² = (1/n) Σ_i (x_i − μ)²
/// ```
///
/// The divisor is `n`, not `n − 1`: the fitted Gaussian describes exactly
/// the observed training vectors. A single value therefore has variance `0`.
///
/// # Returns
///
/// - The variance, always `>= 0`.
/// - `0.0` if `xs` is empty.
///
/// # Examples
///
/// ```rust
/// use gnb_core::stats::variance;
///
/// assert!((variance(&[1.0, 2.0, 3.0, 4.0]) - 1.25).abs() < 1e-12);
/// assert_eq!(variance(&[7.0]), 0.0);
/// ```
pub fn variance(xs: &[Float]) -> Float {
    if constant(xs).is_some() {
        return 0.0;
    }

    variance_around(xs, mean(xs))
}

/// Square root of [`variance`]. `0.0` for empty or constant input.
pub fn standard_deviation(xs: &[Float]) -> Float {
    variance(xs).sqrt()
}

/// Computes mean, variance and standard deviation in one pass over the mean.
///
/// Equivalent to calling [`mean`], [`variance`] and [`standard_deviation`]
/// separately, but the mean is only computed once.
///
/// A column whose values are all identical summarizes to exactly that value
/// with zero spread, where [`mean`] may round: three copies of `0.1` average
/// to `0.10000000000000002`.
pub fn summarize(xs: &[Float]) -> DimensionStats {
    if let Some(value) = constant(xs) {
        return DimensionStats {
            mean: value,
            standard_deviation: 0.0,
            variance: 0.0,
        };
    }

    let mean = mean(xs);
    let variance = variance_around(xs, mean);

    DimensionStats {
        mean,
        standard_deviation: variance.sqrt(),
        variance,
    }
}

/// Smallest and largest value of `xs`, or `None` when empty.
///
/// Comparison uses [`Float::total_cmp`], so the result is well defined even
/// if the column contains special float values.
pub fn min_max(xs: &[Float]) -> Option<(Float, Float)> {
    let first = *xs.first()?;

    Some(xs.iter().fold((first, first), |(lo, hi), &x| {
        let lo = if x.total_cmp(&lo).is_lt() { x } else { lo };
        let hi = if x.total_cmp(&hi).is_gt() { x } else { hi };
        (lo, hi)
    }))
}

/// The shared value of `xs` if every element is equal, `None` when empty or
/// when two elements differ.
fn constant(xs: &[Float]) -> Option<Float> {
    let (&first, rest) = xs.split_first()?;
    rest.iter().all(|&x| x == first).then_some(first)
}

fn variance_around(xs: &[Float], mean: Float) -> Float {
    if xs.is_empty() {
        return 0.0;
    }

    let sum_sq: Float = xs
        .iter()
        .map(|&x| {
            let diff = x - mean;
            diff * diff
        })
        .sum();

    sum_sq / xs.len() as Float
}
