//! End-to-end scenarios through the public `Classifier` API.

use gnb_core::{BayesError, Dataset, DimensionStats};
use gnb_models::{Classifier, NormalizationStrategy};

/// Seven points, one of which ("short" at 185/80) sits inside "tall".
fn heights() -> Classifier<&'static str> {
    Classifier::new()
        .add_train_data("short", vec![150.0, 50.0])
        .add_train_data("short", vec![155.0, 55.0])
        .add_train_data("short", vec![160.0, 52.0])
        .add_train_data("short", vec![185.0, 80.0])
        .add_train_data("tall", vec![180.0, 78.0])
        .add_train_data("tall", vec![185.0, 82.0])
        .add_train_data("tall", vec![190.0, 85.0])
}

#[test]
fn minimax_scenario() {
    let mut ds = Dataset::new();
    ds.insert("a1", vec![vec![1.0, 2.0], vec![2.0, 3.0]]);
    ds.insert("b1", vec![vec![-1.0, -2.0]]);

    let c = Classifier::from_dataset(ds).normalize_train_data("minimax").unwrap();
    let a1 = &c.dataset()["a1"];

    assert!((a1[0][0] - 2.0 / 3.0).abs() < 1e-12);
    assert!((a1[0][1] - 0.8).abs() < 1e-12);
    assert_eq!(a1[1], vec![1.0, 1.0]);
    assert_eq!(c.dataset()["b1"], vec![vec![0.0, 0.0]]);
}

#[test]
fn single_vector_fit_scenario() {
    let c = Classifier::new().add_train_data("a1", vec![-1.0, -1.0]).fit().unwrap();

    let degenerate = DimensionStats {
        mean: -1.0,
        standard_deviation: 0.0,
        variance: 0.0,
    };
    let fit = c.fit_result().unwrap();
    assert_eq!(fit.dimensions(&"a1").unwrap(), &[degenerate, degenerate]);
}

#[test]
fn predict_proba_scenario() {
    let c = Classifier::new()
        .add_train_data("a1", vec![1.0, 2.0])
        .add_train_data("a1", vec![2.0, 2.5])
        .add_train_data("a2", vec![4.0, 1.0])
        .add_train_data("a2", vec![5.0, 0.0])
        .fit()
        .unwrap();

    let scores = c.predict_proba(&[1.0, 2.0]).unwrap();
    assert_eq!(scores.len(), 2);
    assert!(scores["a1"] >= 0.0);
    assert!(scores["a2"] >= 0.0);
    assert!(scores["a1"] > scores["a2"]);
}

#[test]
fn score_six_of_seven() {
    let c = heights().fit().unwrap();

    let accuracy = c.score().unwrap();
    assert!((accuracy - 6.0 / 7.0).abs() < 1e-12);
    assert!((accuracy - 0.857143).abs() < 1e-6);

    let confusion = c.confusion().unwrap();
    assert_eq!(confusion[&("short", "tall")], 1);
    assert_eq!(confusion[&("tall", "tall")], 3);
}

#[test]
fn score_survives_rescaling() {
    // Per-column affine rescaling scales every label's density by the same
    // factor, so rankings (and accuracy) do not change.
    for strategy in ["none", "minimax", "z_normalization"] {
        let c = heights().normalize_train_data(strategy).unwrap().fit().unwrap();
        assert!((c.score().unwrap() - 6.0 / 7.0).abs() < 1e-12, "{strategy}");
    }
}

#[test]
fn normalization_keeps_shape_and_order() {
    let raw = heights();
    let scaled = raw.normalize(NormalizationStrategy::ZScore).unwrap();

    assert_eq!(
        raw.labels().collect::<Vec<_>>(),
        scaled.labels().collect::<Vec<_>>()
    );
    for (label, vectors) in raw.dataset() {
        assert_eq!(scaled.dataset()[label].len(), vectors.len());
    }
    // Most recently added first: the 185 outlier leads, the first-added 150
    // comes last.
    let short = &scaled.dataset()["short"];
    assert!(short[0][0] > short[3][0]);
}

#[test]
fn unfitted_classifier_fails_cleanly() {
    let c = heights();
    assert_eq!(c.predict(&[170.0, 60.0]), Err(BayesError::NotFitted));
    assert_eq!(c.score(), Err(BayesError::NotFitted));
}

#[test]
fn query_of_wrong_length() {
    let c = heights().fit().unwrap();
    assert_eq!(
        c.predict(&[170.0]),
        Err(BayesError::DimensionMismatch { expected: 2, got: 1 })
    );
    assert_eq!(
        c.predict_proba(&[170.0, 60.0, 1.0]),
        Err(BayesError::DimensionMismatch { expected: 2, got: 3 })
    );
}

#[test]
fn ragged_training_data_is_rejected_at_fit() {
    let c = heights().add_train_data("tall", vec![200.0]);
    assert!(matches!(c.fit(), Err(BayesError::DimensionMismatch { .. })));
    assert!(matches!(
        c.normalize_train_data("minimax"),
        Err(BayesError::DimensionMismatch { .. })
    ));
}

#[test]
fn constant_dimension_scores_as_point_mass() {
    let c = Classifier::new()
        .add_train_data("a", vec![0.1])
        .add_train_data("a", vec![0.1])
        .add_train_data("a", vec![0.1])
        .add_train_data("b", vec![0.0])
        .add_train_data("b", vec![0.4])
        .fit()
        .unwrap();

    let scores = c.predict_proba(&[0.1]).unwrap();
    assert_eq!(scores["a"], 0.6);
    assert!(scores["b"] < 1.0);
    assert_eq!(c.predict_proba(&[0.2]).unwrap()["a"], 0.0);
}

#[test]
fn ragged_training_data_passes_through_identity_normalization() {
    let c = heights().add_train_data("tall", vec![200.0]);
    let same = c.normalize_train_data("none").unwrap();
    assert_eq!(same.dataset(), c.dataset());
}

#[test]
fn label_without_vectors_never_wins() {
    let mut ds = heights().dataset().clone();
    ds.insert("ghost", Vec::new());

    let c = Classifier::from_dataset(ds).fit().unwrap();
    let scores = c.predict_proba(&[170.0, 60.0]).unwrap();

    assert_eq!(scores["ghost"], 0.0);
    assert_ne!(c.predict(&[150.0, 50.0]).unwrap().0, "ghost");
    assert!((c.score().unwrap() - 6.0 / 7.0).abs() < 1e-12);
}

#[test]
fn fitted_classifier_is_shareable_across_threads() {
    let c = std::sync::Arc::new(heights().fit().unwrap());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let c = std::sync::Arc::clone(&c);
            std::thread::spawn(move || c.predict(&[150.0 + i as f64, 50.0]).unwrap().0)
        })
        .collect();

    for h in handles {
        assert_eq!(h.join().unwrap(), "short");
    }
}
