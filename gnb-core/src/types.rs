use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::stats::DimensionStats;

/// Class identifier.
///
/// Any cloneable, hashable value works (`&str`, `String`, integers, enums).
/// `Send + Sync` lets fitted classifiers be shared across threads.
pub trait Label: Clone + Eq + Hash + Debug + Send + Sync {}

impl<T: Clone + Eq + Hash + Debug + Send + Sync> Label for T {}

pub type Float = f64;
pub type Matrix = nalgebra::DMatrix<Float>;

/// One observation: a fixed-length sequence of real-valued features.
pub type FeatureVector = Vec<Float>;

/// Training vectors grouped by label.
///
/// Labels iterate in first-insertion order. Within a label, the most
/// recently added vector comes first.
pub type Dataset<L> = IndexMap<L, Vec<FeatureVector>>;

/// Unnormalized posterior score per label, in fit iteration order.
pub type Prediction<L> = IndexMap<L, Float>;

/// Fitted Gaussian parameters for a single label.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ClassStats {
    /// Number of training vectors the label had when fitted.
    pub count: usize,
    /// One entry per feature dimension, in input order. Empty for a label
    /// that had no vectors.
    pub dimensions: Vec<DimensionStats>,
}

/// Per-label, per-dimension Gaussian parameters derived from a [`Dataset`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "L: Serialize + Eq + Hash",
        deserialize = "L: Deserialize<'de> + Eq + Hash"
    ))
)]
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult<L: Eq + Hash> {
    classes: IndexMap<L, ClassStats>,
    total: usize,
}

impl<L: Eq + Hash> FitResult<L> {
    pub fn new(classes: IndexMap<L, ClassStats>) -> Self {
        let total = classes.values().map(|c| c.count).sum();
        Self { classes, total }
    }

    /// Sum of training vectors across all labels.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn get(&self, label: &L) -> Option<&ClassStats> {
        self.classes.get(label)
    }

    /// The per-dimension statistics of `label`, if it was fitted.
    pub fn dimensions(&self, label: &L) -> Option<&[DimensionStats]> {
        self.classes.get(label).map(|c| c.dimensions.as_slice())
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, L, ClassStats> {
        self.classes.iter()
    }

    pub fn labels(&self) -> indexmap::map::Keys<'_, L, ClassStats> {
        self.classes.keys()
    }

    /// Fitted dimensionality, taken from the first label with statistics.
    ///
    /// `None` when no label had any vectors.
    pub fn dimensionality(&self) -> Option<usize> {
        self.classes
            .values()
            .find(|c| !c.dimensions.is_empty())
            .map(|c| c.dimensions.len())
    }

    /// Class prior `count(label) / total`, `0.0` when nothing was fitted.
    pub fn prior(&self, stats: &ClassStats) -> Float {
        if self.total == 0 {
            return 0.0;
        }
        stats.count as Float / self.total as Float
    }
}

impl<'a, L: Eq + Hash> IntoIterator for &'a FitResult<L> {
    type Item = (&'a L, &'a ClassStats);
    type IntoIter = indexmap::map::Iter<'a, L, ClassStats>;

    fn into_iter(self) -> Self::IntoIter {
        self.classes.iter()
    }
}
