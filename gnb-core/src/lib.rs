//! Shared building blocks for the `gnb` workspace: scalar and container
//! types, the error type, and the descriptive statistics every stage is
//! built on.

pub mod error;
pub mod stats;
pub mod types;
pub mod utils;

pub use types::{ClassStats, Dataset, FeatureVector, FitResult, Float, Label, Matrix, Prediction};

pub use error::{BayesError, Result};

pub use stats::{mean, standard_deviation, variance, DimensionStats};
