#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use gnb_core::utils::common_dimensionality;
use gnb_core::{BayesError, Dataset, FeatureVector, FitResult, Float, Label, Prediction, Result};

use crate::normalization::{normalize, NormalizationStrategy};
use crate::{fitting, naive_bayes, scoring};

/// A **Gaussian Naive Bayes** classifier held as an immutable value.
///
/// The classifier pairs the current training [`Dataset`] with the
/// [`FitResult`] derived from it. Every operation returns a *new* classifier
/// (or a plain result); nothing is edited in place, so a
/// fitted classifier can be shared between threads and queried concurrently
/// without locking.
///
/// # Lifecycle
///
/// 1. [`new`](Classifier::new) or [`from_dataset`](Classifier::from_dataset)
/// 2. [`add_train_data`](Classifier::add_train_data), any number of times
/// 3. optionally [`normalize`](Classifier::normalize)
/// 4. [`fit`](Classifier::fit)
/// 5. [`predict_proba`](Classifier::predict_proba),
///    [`predict`](Classifier::predict), [`score`](Classifier::score)
///
/// Any step that changes the dataset (2, 3) returns an **unfitted**
/// classifier: the dataset and its fit are never out of sync.
///
/// # Example
///
/// ```rust
/// use gnb_models::Classifier;
///
/// let model = Classifier::new()
///     .add_train_data("small", vec![1.0, 1.0])
///     .add_train_data("small", vec![1.5, 2.0])
///     .add_train_data("large", vec![9.0, 8.0])
///     .add_train_data("large", vec![8.5, 9.5])
///     .normalize_train_data("minimax")?
///     .fit()?;
///
/// assert_eq!(model.score()?, 1.0);
/// # Ok::<(), gnb_core::BayesError>(())
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "L: Label + Serialize",
        deserialize = "L: Label + Deserialize<'de>"
    ))
)]
#[derive(Debug, Clone, PartialEq)]
pub struct Classifier<L: Label> {
    dataset: Dataset<L>,
    fit: Option<FitResult<L>>,
}

impl<L: Label> Default for Classifier<L> {
    fn default() -> Self {
        Self {
            dataset: Dataset::new(),
            fit: None,
        }
    }
}

impl<L: Label> From<Dataset<L>> for Classifier<L> {
    fn from(dataset: Dataset<L>) -> Self {
        Self::from_dataset(dataset)
    }
}

impl<L: Label> Classifier<L> {
    /// Creates an empty, unfitted classifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an unfitted classifier over an existing dataset.
    ///
    /// The dataset is taken as is; dimensionality is checked when it is
    /// normalized, fitted or scored.
    pub fn from_dataset(dataset: Dataset<L>) -> Self {
        Self { dataset, fit: None }
    }

    /// Returns a classifier with `vector` added under `label`.
    ///
    /// The vector is placed **first** in the label's list, and the label is
    /// created if it did not exist. The returned classifier is unfitted.
    ///
    /// Consumes `self` so chained calls reuse one dataset; clone first to
    /// keep the original.
    pub fn add_train_data(self, label: L, vector: FeatureVector) -> Self {
        let mut dataset = self.dataset;
        dataset.entry(label).or_default().insert(0, vector);
        Self::from_dataset(dataset)
    }

    /// Returns a classifier whose dataset was rescaled with `strategy`.
    ///
    /// Any previous fit is discarded.
    ///
    /// # Errors
    ///
    /// - [`BayesError::DimensionMismatch`] if the dataset is ragged.
    pub fn normalize(&self, strategy: NormalizationStrategy) -> Result<Self> {
        normalize(&self.dataset, strategy).map(Self::from_dataset)
    }

    /// Like [`normalize`](Classifier::normalize), with the strategy given by
    /// name: `"none"`, `"minimax"` or `"z_normalization"`.
    ///
    /// # Errors
    ///
    /// - [`BayesError::UnknownNormalizationStrategy`] for any other name.
    /// - [`BayesError::DimensionMismatch`] if the dataset is ragged.
    pub fn normalize_train_data(&self, strategy: &str) -> Result<Self> {
        self.normalize(strategy.parse()?)
    }

    /// Returns a fitted copy of this classifier.
    ///
    /// # Errors
    ///
    /// - [`BayesError::EmptyInput`] if the dataset holds no vectors.
    /// - [`BayesError::DimensionMismatch`] if the dataset is ragged.
    pub fn fit(&self) -> Result<Self> {
        let fit = fitting::fit(&self.dataset)?;
        Ok(Self {
            dataset: self.dataset.clone(),
            fit: Some(fit),
        })
    }

    /// Unnormalized posterior score of `x` for every label.
    ///
    /// # Errors
    ///
    /// - [`BayesError::NotFitted`] before [`fit`](Classifier::fit).
    /// - [`BayesError::DimensionMismatch`] if `x` has the wrong length.
    pub fn predict_proba(&self, x: &[Float]) -> Result<Prediction<L>> {
        naive_bayes::predict_proba(self.fitted()?, x)
    }

    /// Log-space scores of `x`; see [`naive_bayes::log_likelihoods`].
    pub fn log_likelihoods(&self, x: &[Float]) -> Result<Prediction<L>> {
        naive_bayes::log_likelihoods(self.fitted()?, x)
    }

    /// Most likely label for `x`, with its score.
    ///
    /// Ties go to the label inserted last; see [`naive_bayes::predict`].
    ///
    /// # Errors
    ///
    /// - [`BayesError::NotFitted`] before [`fit`](Classifier::fit).
    /// - [`BayesError::DimensionMismatch`] if `x` has the wrong length.
    pub fn predict(&self, x: &[Float]) -> Result<(L, Float)> {
        naive_bayes::predict(self.fitted()?, x)
    }

    /// [`predict`](Classifier::predict) for many queries, in input order.
    ///
    /// Runs on rayon's pool with the `parallel` feature. Fails on the first
    /// query that fails.
    pub fn predict_batch(&self, queries: &[FeatureVector]) -> Result<Vec<(L, Float)>> {
        let fit = self.fitted()?;

        #[cfg(feature = "parallel")]
        let predictions = queries.par_iter().map(|x| naive_bayes::predict(fit, x)).collect();

        #[cfg(not(feature = "parallel"))]
        let predictions = queries.iter().map(|x| naive_bayes::predict(fit, x)).collect();

        predictions
    }

    /// Accuracy of the fitted model on its own training data.
    ///
    /// # Errors
    ///
    /// - [`BayesError::NotFitted`] before [`fit`](Classifier::fit).
    /// - [`BayesError::EmptyInput`] if the dataset holds no vectors.
    pub fn score(&self) -> Result<Float> {
        scoring::score(&self.dataset, self.fitted()?)
    }

    /// Per-`(actual, predicted)` replay counts behind [`score`](Classifier::score).
    pub fn confusion(&self) -> Result<scoring::Confusion<L>> {
        scoring::confusion(&self.dataset, self.fitted()?)
    }

    pub fn dataset(&self) -> &Dataset<L> {
        &self.dataset
    }

    /// The current fit, `None` until [`fit`](Classifier::fit) is called.
    pub fn fit_result(&self) -> Option<&FitResult<L>> {
        self.fit.as_ref()
    }

    pub fn is_fitted(&self) -> bool {
        self.fit.is_some()
    }

    pub fn labels(&self) -> impl Iterator<Item = &L> {
        self.dataset.keys()
    }

    /// Total number of training vectors across all labels.
    pub fn len(&self) -> usize {
        self.dataset.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Shared length of the training vectors, `None` with no vectors.
    ///
    /// # Errors
    ///
    /// - [`BayesError::DimensionMismatch`] if the dataset is ragged.
    pub fn dimensionality(&self) -> Result<Option<usize>> {
        common_dimensionality(self.dataset.values().flatten())
    }

    fn fitted(&self) -> Result<&FitResult<L>> {
        self.fit.as_ref().ok_or(BayesError::NotFitted)
    }
}
