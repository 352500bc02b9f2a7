//! The Gaussian Naive Bayes pipeline, one module per stage:
//!
//! - [`normalization`]: optional column rescaling of the training data
//! - [`fitting`]: per-label, per-dimension Gaussian parameters
//! - [`naive_bayes`]: density evaluation, scoring and prediction
//! - [`scoring`]: accuracy of a fit replayed over its training data
//! - [`classifier`]: the immutable [`Classifier`] value composing them

pub mod classifier;
pub mod fitting;
pub mod naive_bayes;
pub mod normalization;
pub mod scoring;

pub use classifier::Classifier;
pub use normalization::NormalizationStrategy;
pub use scoring::Confusion;
