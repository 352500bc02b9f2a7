use std::hash::Hash;

use crate::{BayesError, Dataset, FeatureVector, Float, Matrix, Result};

/// Checks that every vector in `vectors` has the same length.
///
/// # Returns
///
/// - `Ok(Some(d))` with the shared dimensionality `d`.
/// - `Ok(None)` if there are no vectors at all.
///
/// # Errors
///
/// - [`BayesError::DimensionMismatch`] naming the first offending vector's
///   length against the length of the first vector seen.
pub fn common_dimensionality<'a, I>(vectors: I) -> Result<Option<usize>>
where
    I: IntoIterator<Item = &'a FeatureVector>,
{
    let mut expected: Option<usize> = None;

    for v in vectors {
        match expected {
            None => expected = Some(v.len()),
            Some(d) if d != v.len() => {
                return Err(BayesError::DimensionMismatch {
                    expected: d,
                    got: v.len(),
                });
            }
            Some(_) => {}
        }
    }

    Ok(expected)
}

/// Lays every vector of `dataset` out as one row of an `(n × d)` matrix.
///
/// Rows follow label order, then the order of vectors within each label.
/// Returns `Ok(None)` when the dataset holds no vectors.
pub fn stack_rows<L: Hash + Eq>(dataset: &Dataset<L>) -> Result<Option<Matrix>> {
    let rows: Vec<&FeatureVector> = dataset.values().flatten().collect();

    let Some(d) = common_dimensionality(rows.iter().copied())? else {
        return Ok(None);
    };

    Ok(Some(Matrix::from_fn(rows.len(), d, |i, j| rows[i][j])))
}

/// Inverse of [`stack_rows`]: splits `x` back into a dataset shaped like
/// `template` (same labels, same vector count per label, same order).
///
/// `x` must have been produced from `template` by a shape-preserving
/// transform.
pub fn unstack_rows<L: Hash + Eq + Clone>(template: &Dataset<L>, x: &Matrix) -> Dataset<L> {
    let mut row = 0;

    template
        .iter()
        .map(|(label, vectors)| {
            let rebuilt = (0..vectors.len())
                .map(|_| {
                    let v: FeatureVector = x.row(row).iter().copied().collect();
                    row += 1;
                    v
                })
                .collect();
            (label.clone(), rebuilt)
        })
        .collect()
}

/// Borrow column `j` of `x` as a contiguous slice.
///
/// `DMatrix` stores its data column-major, so each column is one
/// contiguous run of `nrows` values.
pub fn column(x: &Matrix, j: usize) -> &[Float] {
    let n = x.nrows();
    &x.as_slice()[j * n..(j + 1) * n]
}
