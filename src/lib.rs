//! Gaussian Naive Bayes as an immutable pipeline.
//!
//! ```rust
//! use gnb::{Classifier, NormalizationStrategy};
//!
//! let model = Classifier::new()
//!     .add_train_data("a1", vec![1.0, 2.0])
//!     .add_train_data("a1", vec![2.0, 3.0])
//!     .add_train_data("a2", vec![7.0, 8.0])
//!     .add_train_data("a2", vec![8.0, 7.5])
//!     .normalize(NormalizationStrategy::None)?
//!     .fit()?;
//!
//! let (label, _score) = model.predict(&[1.5, 2.5])?;
//! assert_eq!(label, "a1");
//! # Ok::<(), gnb::BayesError>(())
//! ```

// Re-export public API
pub use gnb_core::*;
pub use gnb_models::*;
